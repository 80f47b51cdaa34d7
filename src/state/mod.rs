//! State types split into domain-focused modules.
//!
//! - `session` — Session and Screen, the state the controller owns
//! - `form` — field focus, cursors and text editing helpers
//! - `notice` — blocking notices shown over the form
//! - `runtime` — State struct (the main runtime state)

pub mod form;
pub mod notice;
pub mod runtime;
pub mod session;

pub use form::Field;
pub use notice::Notice;
pub use runtime::State;
pub use session::{Screen, Session};
