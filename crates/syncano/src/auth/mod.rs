//! Authentication types and session management.
//!
//! All authenticated operations flow through a [`Session`] obtained from a
//! set of [`Credentials`] via [`Session::connect`].

mod credentials;
mod session;

pub use credentials::Credentials;
pub use session::Session;
