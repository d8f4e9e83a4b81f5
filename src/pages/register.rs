//! Account registration page for students and teachers.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;

use crate::net::api::RegisterForm;
use crate::net::types::{AuthError, Role};

/// Message to attach to the email field, if the failure belongs there.
fn email_field_error(err: &AuthError) -> Option<String> {
    match err {
        AuthError::EmailExists => Some(err.to_string()),
        _ => None,
    }
}

/// Normalize the role `<select>` value. The options only ever contain the
/// two known roles, so anything else falls back to student.
fn role_from_select(value: &str) -> Role {
    Role::parse(value).unwrap_or(Role::Student)
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(Role::Student);

    let email_error = RwSignal::new(String::new());
    let form_error = RwSignal::new(String::new());
    let success = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let form = RegisterForm {
            first_name: first_name.get(),
            last_name: last_name.get(),
            email: email.get(),
            password: password.get(),
            role: role.get(),
        };
        busy.set(true);
        email_error.set(String::new());
        form_error.set(String::new());
        success.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::register(&form).await {
                Ok(message) => success.set(message),
                Err(e) => {
                    if let Some(message) = email_field_error(&e) {
                        email_error.set(message);
                    } else {
                        form_error.set(e.to_string());
                    }
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = form;
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create your Escreva+ account"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="First name"
                        prop:value=move || first_name.get()
                        on:input=move |ev| first_name.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Last name"
                        prop:value=move || last_name.get()
                        on:input=move |ev| last_name.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <Show when=move || !email_error.get().is_empty()>
                        <p class="auth-field-error">{move || email_error.get()}</p>
                    </Show>
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password (8+ characters)"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <select
                        class="auth-input"
                        on:change=move |ev| role.set(role_from_select(&event_target_value(&ev)))
                    >
                        <option value="student" selected=move || role.get() == Role::Student>
                            "I am a student"
                        </option>
                        <option value="teacher" selected=move || role.get() == Role::Teacher>
                            "I am a teacher"
                        </option>
                    </select>
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        "Create Account"
                    </button>
                </form>
                <Show when=move || !form_error.get().is_empty()>
                    <p class="auth-message auth-message--error">{move || form_error.get()}</p>
                </Show>
                <Show when=move || !success.get().is_empty()>
                    <p class="auth-message">
                        {move || success.get()}
                        " "
                        <a href="/">"Sign in"</a>
                    </p>
                </Show>
                <div class="auth-links">
                    <a href="/">"Back to sign in"</a>
                </div>
            </div>
        </div>
    }
}
