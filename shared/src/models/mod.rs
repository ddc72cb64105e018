//! Data models
//!
//! Decoded from (and, for requests, encoded to) the server's JSON payloads.
//! Field names on the wire are PascalCase; unknown fields are ignored.

pub mod interruption;
pub mod submit;
pub mod user;

// Re-exports
pub use interruption::*;
pub use submit::*;
pub use user::*;
