//! Shared types for the Octopus client
//!
//! Wire-level data model of the deployment server's REST API: resources,
//! their embedded link maps and the pagination envelope.

pub mod links;
pub mod models;
pub mod response;

// Re-exports
pub use links::{LinkName, Links, Resource};
pub use models::{
    Button, Control, Form, FormElement, Interruption, InterruptionState,
    InterruptionSubmitRequest, Paragraph, ResolutionKind, SubmitButtonGroup, TextArea, User,
};
pub use response::ListResponse;
