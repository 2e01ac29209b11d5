//! Client-side state models.
//!
//! DESIGN
//! ======
//! State is split by domain so views can depend on small focused
//! models: `session` owns the authentication lifecycle, `entries`
//! owns the dashboard list. Both keep their transitions as plain
//! methods so the state machines stay natively unit-testable.

pub mod entries;
pub mod session;
