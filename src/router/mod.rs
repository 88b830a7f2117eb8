//! Route table and navigation guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! `routes` declares the named routes and which of them need a session.
//! `guard` decides, per navigation, whether to proceed or send the user to
//! the login page. `guarded` applies that decision inside the Leptos router.

pub mod guard;
pub mod guarded;
pub mod routes;
