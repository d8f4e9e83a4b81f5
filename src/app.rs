//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    login::LoginPage, recover::RecoverPage, register::RegisterPage,
    student_home::StudentHomePage, submit_essay::SubmitEssayPage, teacher_home::TeacherHomePage,
};
use crate::state::auth::AuthState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared auth context, restored from the persisted session on
/// hydration, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);

    // Restore the reactive auth state from the persisted session.
    #[cfg(feature = "hydrate")]
    {
        use crate::state::session::{BrowserSessions, SessionRepository, now_epoch_secs};
        let repo = BrowserSessions;
        if repo.is_authenticated(now_epoch_secs()) {
            if let Some(user) = repo.current_user() {
                auth.set(AuthState::logged_in(user));
            }
        }
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/escreva.css"/>
        <Title text="Escreva+"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("recover") view=RecoverPage/>
                <Route path=(StaticSegment("student"), StaticSegment("home")) view=StudentHomePage/>
                <Route
                    path=(StaticSegment("student"), StaticSegment("essays"), StaticSegment("new"))
                    view=SubmitEssayPage
                />
                <Route path=(StaticSegment("teacher"), StaticSegment("home")) view=TeacherHomePage/>
            </Routes>
        </Router>
    }
}
