//! User Model

use serde::{Deserialize, Serialize};

use crate::links::{Links, Resource};

/// User account as returned by the responsibility endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct User {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub email_address: String,
    #[serde(default)]
    pub is_active: bool,
    /// Service accounts authenticate with API keys only
    #[serde(default)]
    pub is_service: bool,
    #[serde(default)]
    pub can_password_be_edited: bool,
    /// Whether this is the user making the request
    #[serde(default)]
    pub is_requestor: bool,
    #[serde(default)]
    pub links: Links,
}

impl Resource for User {
    fn id(&self) -> &str {
        &self.id
    }

    fn links(&self) -> &Links {
        &self.links
    }
}
