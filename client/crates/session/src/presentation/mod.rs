//! Presentation Layer
//!
//! Read-side surface of the session core: the context handed to
//! arbitrary consumers and the route guard.

pub mod context;
pub mod guard;

// Re-exports
pub use context::SessionContext;
pub use guard::{GuardDecision, RouteRequirement, evaluate, home_route};
