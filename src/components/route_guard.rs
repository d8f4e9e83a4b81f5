//! Route guard enforcing authentication and role checks.
//!
//! DESIGN
//! ======
//! The decision is a pure function over (configuration, session state) so
//! it can be unit-tested without a rendering environment; the component is
//! glue that reads the session store and performs the navigation. The store
//! is read fresh on every mount — another tab may have logged out — and the
//! read is synchronous localStorage, so the decision lands before any child
//! renders. Protected content can never flash while unauthorized.

#[cfg(test)]
#[path = "route_guard_test.rs"]
mod route_guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::{Role, redirect_path};
#[cfg(feature = "hydrate")]
use crate::state::session::{BrowserSessions, SessionRepository, now_epoch_secs};

/// Guard lifecycle for one mount. `Redirecting` is terminal: no content is
/// rendered and exactly one navigation is issued.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardState {
    Checking,
    Authorized,
    Redirecting,
}

/// Outcome of the authorization check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Authorized,
    Redirect(&'static str),
}

/// Decide whether the current visitor may see the wrapped content.
///
/// Unauthenticated visitors go to the landing page; authenticated visitors
/// outside the allowed roles go to their own role's home.
pub fn evaluate(
    require_auth: bool,
    allowed_roles: Option<&[Role]>,
    authenticated: bool,
    role: Option<Role>,
) -> GuardDecision {
    if !require_auth {
        return GuardDecision::Authorized;
    }
    if !authenticated {
        return GuardDecision::Redirect(redirect_path(None));
    }
    match allowed_roles {
        Some(allowed) if !role.is_some_and(|r| allowed.contains(&r)) => {
            GuardDecision::Redirect(redirect_path(role))
        }
        _ => GuardDecision::Authorized,
    }
}

/// Wrapper for protected routes. Children render only once the check
/// passes; until then a neutral loading indicator is shown, and denied
/// visitors are redirected client-side.
#[component]
pub fn RouteGuard(
    /// Whether a session is required at all. Defaults to true.
    #[prop(default = true)]
    require_auth: bool,
    /// When present, the session's role must be in this set.
    #[prop(optional, into)]
    allowed_roles: Option<Vec<Role>>,
    children: ChildrenFn,
) -> impl IntoView {
    let state = RwSignal::new(GuardState::Checking);
    let target = RwSignal::new(None::<&'static str>);

    #[cfg(feature = "hydrate")]
    {
        let repo = BrowserSessions;
        let decision = evaluate(
            require_auth,
            allowed_roles.as_deref(),
            repo.is_authenticated(now_epoch_secs()),
            repo.current_role(),
        );
        match decision {
            GuardDecision::Authorized => state.set(GuardState::Authorized),
            GuardDecision::Redirect(path) => {
                log::debug!("route guard redirecting to {path}");
                target.set(Some(path));
                state.set(GuardState::Redirecting);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        // SSR renders the loading state; the check re-runs on hydration.
        let _ = (require_auth, allowed_roles.as_deref());
    }

    // Navigation needs router context, hence the effect; the state only
    // transitions once per mount so the redirect fires once.
    let navigate = use_navigate();
    Effect::new(move || {
        if state.get() == GuardState::Redirecting {
            if let Some(path) = target.get() {
                navigate(path, NavigateOptions::default());
            }
        }
    });

    view! {
        {move || match state.get() {
            GuardState::Checking => {
                view! { <div class="guard-loading">"Loading..."</div> }.into_any()
            }
            GuardState::Authorized => children().into_any(),
            GuardState::Redirecting => ().into_any(),
        }}
    }
}
