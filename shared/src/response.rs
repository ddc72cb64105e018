//! List response envelope
//!
//! Collection endpoints wrap their items in a paging envelope:
//! ```json
//! {
//!     "ItemType": "Interruption",
//!     "TotalResults": 1,
//!     "ItemsPerPage": 30,
//!     "NumberOfPages": 1,
//!     "LastPageNumber": 0,
//!     "Items": [ ... ],
//!     "Links": { "Self": "...", "Page.Next": "..." }
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::links::{LinkName, Links, Resource};

/// One page of a server collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListResponse<T> {
    pub item_type: String,
    pub total_results: u64,
    pub items_per_page: u64,
    pub number_of_pages: u64,
    pub last_page_number: u64,
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    #[serde(default)]
    pub links: Links,
}

impl<T> ListResponse<T> {
    /// Path of the following page, if the server advertised one.
    pub fn next_page(&self) -> Option<&str> {
        self.links.get(LinkName::PageNext)
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

impl<T> Resource for ListResponse<T> {
    fn id(&self) -> &str {
        &self.item_type
    }

    fn links(&self) -> &Links {
        &self.links
    }
}
