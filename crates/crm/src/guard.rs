//! Route guarding decisions.
//!
//! A pure function of (route class, session phase). The host owns actual
//! navigation; this module only says what the host should do, so the
//! policy is trivially testable without any UI.

use crate::session::SessionPhase;

/// How a route is protected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteClass {
    /// Requires a signed-in user (dashboard, leads, pipeline, ...).
    Protected,
    /// The sign-in screen itself.
    Login,
}

/// What the host should do with a navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// The session is still settling; show a waiting indicator and render
    /// nothing else yet.
    Pending,
    /// Render the requested route.
    Allow,
    /// Send the user to the sign-in screen. The originally requested path
    /// is discarded; after signing in the user lands on the dashboard.
    RedirectToLogin,
    /// Already signed in, so the sign-in screen yields to the dashboard.
    RedirectToDashboard,
}

/// Decide what to do with a navigation given the session phase.
///
/// Protected routes wait out initialization rather than flashing a
/// redirect; the sign-in screen renders immediately even while the
/// session is settling.
#[must_use]
pub const fn route_decision(route: RouteClass, phase: SessionPhase) -> GuardDecision {
    match (route, phase) {
        (RouteClass::Protected, SessionPhase::Uninitialized | SessionPhase::Resolving) => {
            GuardDecision::Pending
        }
        (RouteClass::Protected, SessionPhase::Active) => GuardDecision::Allow,
        (RouteClass::Protected, SessionPhase::Empty) => GuardDecision::RedirectToLogin,
        (RouteClass::Login, SessionPhase::Active) => GuardDecision::RedirectToDashboard,
        (RouteClass::Login, _) => GuardDecision::Allow,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protected_route_matrix() {
        assert_eq!(
            route_decision(RouteClass::Protected, SessionPhase::Uninitialized),
            GuardDecision::Pending
        );
        assert_eq!(
            route_decision(RouteClass::Protected, SessionPhase::Resolving),
            GuardDecision::Pending
        );
        assert_eq!(
            route_decision(RouteClass::Protected, SessionPhase::Empty),
            GuardDecision::RedirectToLogin
        );
        assert_eq!(
            route_decision(RouteClass::Protected, SessionPhase::Active),
            GuardDecision::Allow
        );
    }

    #[test]
    fn test_login_route_matrix() {
        assert_eq!(
            route_decision(RouteClass::Login, SessionPhase::Uninitialized),
            GuardDecision::Allow
        );
        assert_eq!(
            route_decision(RouteClass::Login, SessionPhase::Resolving),
            GuardDecision::Allow
        );
        assert_eq!(
            route_decision(RouteClass::Login, SessionPhase::Empty),
            GuardDecision::Allow
        );
        assert_eq!(
            route_decision(RouteClass::Login, SessionPhase::Active),
            GuardDecision::RedirectToDashboard
        );
    }
}
