//! Student dashboard: greeting, essay submission entry point, logout.

#[cfg(test)]
#[path = "student_home_test.rs"]
mod student_home_test;

use leptos::prelude::*;

use crate::components::route_guard::RouteGuard;
use crate::net::types::{Role, User};
use crate::state::auth::AuthState;

fn greeting_line(user: Option<&User>) -> String {
    user.map_or_else(
        || "Welcome!".to_owned(),
        |u| format!("Welcome, {}!", u.first_name),
    )
}

#[component]
pub fn StudentHomePage() -> impl IntoView {
    view! {
        <RouteGuard allowed_roles=vec![Role::Student]>
            <StudentHome/>
        </RouteGuard>
    }
}

#[component]
fn StudentHome() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let greeting = move || greeting_line(auth.get().user.as_ref());

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::net::api::logout(&crate::state::session::BrowserSessions).await;
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/");
            }
        });
    };

    view! {
        <div class="home-page home-page--student">
            <header class="home-header">
                <h1>{greeting}</h1>
                <button class="home-logout" on:click=on_logout>"Sign out"</button>
            </header>
            <section class="home-actions">
                <h2>"Your essays"</h2>
                <p>"Submit a new essay and a teacher will correct it."</p>
                <a class="home-cta" href="/student/essays/new">"Submit an essay"</a>
            </section>
        </div>
    }
}
