//! Unauthenticated landing page with the sign-in form.

use leptos::prelude::*;

use crate::state::auth::AuthState;

/// Landing page. Already-authenticated visitors are forwarded straight to
/// their role's home; everyone else gets the sign-in form.
#[component]
pub fn LoginPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let auth = expect_context::<RwSignal<AuthState>>();

    #[cfg(feature = "hydrate")]
    {
        use crate::state::session::{BrowserSessions, SessionRepository, now_epoch_secs};
        let repo = BrowserSessions;
        if repo.is_authenticated(now_epoch_secs()) {
            let path = crate::net::types::redirect_path(repo.current_role());
            let navigate = leptos_router::hooks::use_navigate();
            Effect::new(move || {
                navigate(path, leptos_router::NavigateOptions::default());
            });
        }
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = email.get();
        let password_value = password.get();
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::state::session::BrowserSessions;
            match crate::net::api::login(&BrowserSessions, &email_value, &password_value).await {
                Ok(user) => {
                    let target = crate::net::types::redirect_path(Some(user.role));
                    auth.set(AuthState::logged_in(user));
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href(target);
                    }
                }
                Err(e) => {
                    error.set(e.to_string());
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value, auth);
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Escreva+"</h1>
                <p class="auth-card__subtitle">"Sign in to your account"</p>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !error.get().is_empty()>
                    <p class="auth-message auth-message--error">{move || error.get()}</p>
                </Show>
                <div class="auth-links">
                    <a href="/recover">"Forgot your password?"</a>
                    <a href="/register">"Create an account"</a>
                </div>
            </div>
        </div>
    }
}
