//! Essay submission form for students.

#[cfg(test)]
#[path = "submit_essay_test.rs"]
mod submit_essay_test;

use leptos::prelude::*;

use crate::components::route_guard::RouteGuard;
use crate::net::types::Role;

/// Trim and require both essay fields before anything leaves the browser.
fn validate_essay_input(theme: &str, body: &str) -> Result<(String, String), &'static str> {
    let theme = theme.trim();
    let body = body.trim();
    if theme.is_empty() {
        return Err("Give your essay a theme.");
    }
    if body.is_empty() {
        return Err("Write your essay before submitting.");
    }
    Ok((theme.to_owned(), body.to_owned()))
}

#[component]
pub fn SubmitEssayPage() -> impl IntoView {
    view! {
        <RouteGuard allowed_roles=vec![Role::Student]>
            <SubmitEssayForm/>
        </RouteGuard>
    }
}

#[component]
fn SubmitEssayForm() -> impl IntoView {
    let theme = RwSignal::new(String::new());
    let body = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        message.set(String::new());
        let (theme_value, body_value) = match validate_essay_input(&theme.get(), &body.get()) {
            Ok(values) => values,
            Err(e) => {
                error.set(e.to_owned());
                return;
            }
        };
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::state::session::BrowserSessions;
            match crate::net::api::submit_essay(&BrowserSessions, &theme_value, &body_value).await {
                Ok(confirmation) => {
                    message.set(confirmation);
                    theme.set(String::new());
                    body.set(String::new());
                }
                Err(e) => error.set(e.to_string()),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (theme_value, body_value);
            busy.set(false);
        }
    };

    view! {
        <div class="essay-page">
            <header class="home-header">
                <h1>"Submit an essay"</h1>
                <a class="home-back" href="/student/home">"Back to dashboard"</a>
            </header>
            <form class="essay-form" on:submit=on_submit>
                <input
                    class="auth-input"
                    type="text"
                    placeholder="Theme"
                    prop:value=move || theme.get()
                    on:input=move |ev| theme.set(event_target_value(&ev))
                />
                <textarea
                    class="essay-body"
                    placeholder="Write your essay here..."
                    prop:value=move || body.get()
                    on:input=move |ev| body.set(event_target_value(&ev))
                ></textarea>
                <button class="auth-button" type="submit" disabled=move || busy.get()>
                    "Submit for correction"
                </button>
            </form>
            <Show when=move || !message.get().is_empty()>
                <p class="auth-message">{move || message.get()}</p>
            </Show>
            <Show when=move || !error.get().is_empty()>
                <p class="auth-message auth-message--error">{move || error.get()}</p>
            </Show>
        </div>
    }
}
