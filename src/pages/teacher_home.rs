//! Teacher dashboard: greeting and the correction queue.

use leptos::prelude::*;

use crate::components::route_guard::RouteGuard;
use crate::net::types::Role;
use crate::state::auth::AuthState;

#[component]
pub fn TeacherHomePage() -> impl IntoView {
    view! {
        <RouteGuard allowed_roles=vec![Role::Teacher]>
            <TeacherHome/>
        </RouteGuard>
    }
}

#[component]
fn TeacherHome() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let greeting = move || {
        auth.get().user.as_ref().map_or_else(
            || "Welcome back!".to_owned(),
            |u| format!("Welcome back, {}!", u.first_name),
        )
    };

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
        <div class="home-page home-page--teacher">
            <header class="home-header">
                <h1>{greeting}</h1>
                <button class="home-logout" on:click=on_logout>"Sign out"</button>
            </header>
            <section class="home-queue">
                <h2>"Essays awaiting correction"</h2>
                <p class="home-queue__empty">
                    "New submissions from your students will appear here."
                </p>
            </section>
        </div>
    }
}
