//! Octopus Client - REST client for the deployment server's Interruptions API
//!
//! Interruptions are manual gates in a deployment that wait for someone to
//! take responsibility and submit a result. `InterruptionService` lists and
//! fetches them and performs both actions through the links the server
//! embeds in each interruption.

pub mod client;
pub mod codec;
pub mod config;
pub mod error;
pub mod interruptions;
pub mod links;

pub use client::{HttpClient, NetworkHttpClient, OneshotHttpClient};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use interruptions::{InterruptionQuery, InterruptionService};

// Re-export shared types for convenience
pub use octopus_shared::{
    Interruption, InterruptionState, InterruptionSubmitRequest, LinkName, Links, ListResponse,
    ResolutionKind, Resource, User,
};
