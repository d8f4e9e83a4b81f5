//! Password recovery page.
//!
//! A malformed address is rejected client-side by the auth client, so no
//! request leaves the browser until the email at least looks like one.

use leptos::prelude::*;

#[component]
pub fn RecoverPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = email.get();
        busy.set(true);
        message.set(String::new());
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::recover_password(&email_value).await {
                Ok(confirmation) => message.set(confirmation),
                Err(e) => error.set(e.to_string()),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = email_value;
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Recover your password"</h1>
                <p class="auth-card__subtitle">
                    "Enter your email and we will send you a recovery link."
                </p>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        "Send Recovery Link"
                    </button>
                </form>
                <Show when=move || !message.get().is_empty()>
                    <p class="auth-message">{move || message.get()}</p>
                </Show>
                <Show when=move || !error.get().is_empty()>
                    <p class="auth-message auth-message--error">{move || error.get()}</p>
                </Show>
                <div class="auth-links">
                    <a href="/">"Back to sign in"</a>
                </div>
            </div>
        </div>
    }
}
