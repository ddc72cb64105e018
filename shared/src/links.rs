//! Resource link maps
//!
//! Every resource returned by the server embeds a `Links` object that maps a
//! link name to the path of an operation applicable to that resource.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Link names the client navigates by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkName {
    /// Canonical location of the resource itself (wire name `Self`).
    SelfLink,
    /// Resolution endpoint of an interruption.
    Submit,
    /// Responsibility (lock) endpoint of an interruption.
    Responsible,
    /// Next page of a list envelope (wire name `Page.Next`).
    PageNext,
}

impl LinkName {
    /// Wire name of the link as it appears in the `Links` object.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SelfLink => "Self",
            Self::Submit => "Submit",
            Self::Responsible => "Responsible",
            Self::PageNext => "Page.Next",
        }
    }
}

impl fmt::Display for LinkName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mapping from link name to request path.
///
/// Links are plain paths relative to the server base URL. They are not
/// references to other resources; following one means issuing a request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Links(BTreeMap<String, String>);

impl Links {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the path for `name`, treating an empty path as absent.
    pub fn get(&self, name: LinkName) -> Option<&str> {
        self.get_raw(name.as_str())
    }

    /// Looks up a link by its wire name (e.g. `Page.All`, `Template`).
    pub fn get_raw(&self, name: &str) -> Option<&str> {
        self.0
            .get(name)
            .map(String::as_str)
            .filter(|path| !path.is_empty())
    }

    pub fn insert(&mut self, name: impl Into<String>, path: impl Into<String>) -> Option<String> {
        self.0.insert(name.into(), path.into())
    }

    pub fn contains(&self, name: LinkName) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Links {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// A server resource that can be navigated through its links.
pub trait Resource {
    /// Identifier used in diagnostics (e.g. `Interruptions-1`).
    fn id(&self) -> &str;

    fn links(&self) -> &Links;
}
