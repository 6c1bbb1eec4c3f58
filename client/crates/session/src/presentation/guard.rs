//! Route Guard
//!
//! Pure decision function over (current session, required role).
//! Stateless between calls; the routing layer re-evaluates it on every
//! navigation attempt and on every session transition. Every input maps
//! to a decision; there is no error channel.

use crate::domain::entity::session::Session;
use crate::domain::value_object::role::Role;

/// Login entry point for unauthenticated navigation.
pub const LOGIN_ROUTE: &str = "/login";
/// Teacher landing route.
pub const TEACHER_HOME: &str = "/teacher";
/// TA landing route.
pub const TA_HOME: &str = "/ta";
/// Student landing route.
pub const STUDENT_HOME: &str = "/student";

/// Role required to enter a route, declared statically by the
/// surrounding routing table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRequirement {
    /// Any authenticated role may enter.
    AnyAuthenticated,
    /// Exactly this role may enter.
    Role(Role),
}

/// Outcome of a guard evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(&'static str),
}

/// Landing route for a role; also backs the root entry redirect.
pub const fn home_route(role: Role) -> &'static str {
    match role {
        Role::Teacher => TEACHER_HOME,
        Role::Ta => TA_HOME,
        Role::Student => STUDENT_HOME,
    }
}

/// Decide whether the current session may enter a route.
pub fn evaluate(session: &Session, required: RouteRequirement) -> GuardDecision {
    // Unauthenticated navigation lands on the login screen regardless
    // of what the route demanded.
    let Some(role) = session.role() else {
        return GuardDecision::Redirect(LOGIN_ROUTE);
    };

    match required {
        RouteRequirement::AnyAuthenticated => GuardDecision::Allow,
        RouteRequirement::Role(required) if required == role => GuardDecision::Allow,
        // Authenticated but misrouted: send the user to their own
        // landing route, never back to login and never to an error.
        RouteRequirement::Role(_) => GuardDecision::Redirect(home_route(role)),
    }
}
