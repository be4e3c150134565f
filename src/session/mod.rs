//! Session context: the one place the token pair and user claims live.
//!
//! A [`Session`] is hydrated from a [`SessionStore`] at start-up, established
//! on login, and torn down on logout or whenever the service answers 401/403.

mod claims;
mod context;
mod store;

pub use claims::decode_claims;
pub use context::Session;
pub use store::{FileSessionStore, MemorySessionStore, SessionStore, StoredSession};
