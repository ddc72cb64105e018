//! Interruption Model
//!
//! An interruption is a gate in a deployment (typically a manual
//! intervention step) that blocks the task until someone resolves it.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, FixedOffset};
use serde::de::{Deserializer, Error as _};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::links::{LinkName, Links, Resource};
use crate::models::ResolutionKind;

/// Interruption entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Interruption {
    pub id: String,
    pub title: String,
    #[serde(rename = "Created")]
    pub created_at: DateTime<FixedOffset>,
    /// True until the interruption has been submitted
    pub is_pending: bool,
    #[serde(default)]
    pub form: Form,
    /// Deployments, tasks, projects and environments this interruption belongs to
    #[serde(default)]
    pub related_document_ids: BTreeSet<String>,
    #[serde(default)]
    pub responsible_team_ids: BTreeSet<String>,
    /// Holder of the responsibility lock, if any
    #[serde(default)]
    pub responsible_user_id: Option<String>,
    #[serde(default)]
    pub can_take_responsibility: bool,
    /// Whether the calling user holds the lock
    #[serde(default)]
    pub has_responsibility: bool,
    #[serde(default)]
    pub task_id: Option<String>,
    #[serde(default)]
    pub correlation_id: Option<String>,
    #[serde(default)]
    pub is_linked_to_other_interruption: bool,
    #[serde(default)]
    pub links: Links,
}

/// Client-observed lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterruptionState {
    /// Awaiting resolution, nobody holds the lock
    Pending,
    /// Awaiting resolution, a user holds the lock
    Held,
    /// Submitted; terminal
    Resolved,
}

impl Interruption {
    pub fn state(&self) -> InterruptionState {
        match (self.is_pending, &self.responsible_user_id) {
            (false, _) => InterruptionState::Resolved,
            (true, Some(_)) => InterruptionState::Held,
            (true, None) => InterruptionState::Pending,
        }
    }

    /// Whether the `Self`, `Submit` and `Responsible` links are all present.
    pub fn has_action_links(&self) -> bool {
        [LinkName::SelfLink, LinkName::Submit, LinkName::Responsible]
            .into_iter()
            .all(|name| self.links.contains(name))
    }
}

impl Resource for Interruption {
    fn id(&self) -> &str {
        &self.id
    }

    fn links(&self) -> &Links {
        &self.links
    }
}

/// Resolution form rendered for the interruption
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Form {
    /// Current field values; null entries are kept
    #[serde(default)]
    pub values: BTreeMap<String, Value>,
    #[serde(default)]
    pub elements: Vec<FormElement>,
}

impl Form {
    pub fn element(&self, name: &str) -> Option<&FormElement> {
        self.elements.iter().find(|e| e.name == name)
    }

    /// Buttons of the first submit group, i.e. the resolutions on offer.
    pub fn resolutions(&self) -> impl Iterator<Item = &Button> {
        self.elements
            .iter()
            .find_map(|e| match &e.control {
                Control::SubmitButtonGroup(group) => Some(group.buttons.iter()),
                _ => None,
            })
            .into_iter()
            .flatten()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FormElement {
    pub name: String,
    pub control: Control,
    #[serde(default)]
    pub is_value_required: bool,
}

/// Form control, keyed on its `Type` field.
///
/// Control types this crate does not model decode to `Unknown` and encode
/// back to the same JSON object.
#[derive(Debug, Clone, PartialEq)]
pub enum Control {
    Paragraph(Paragraph),
    TextArea(TextArea),
    SubmitButtonGroup(SubmitButtonGroup),
    Unknown(Value),
}

impl Control {
    pub fn type_name(&self) -> Option<&str> {
        match self {
            Self::Paragraph(_) => Some("Paragraph"),
            Self::TextArea(_) => Some("TextArea"),
            Self::SubmitButtonGroup(_) => Some("SubmitButtonGroup"),
            Self::Unknown(value) => value.get("Type").and_then(Value::as_str),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Paragraph {
    pub text: String,
    #[serde(default)]
    pub resolve_links: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TextArea {
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SubmitButtonGroup {
    pub buttons: Vec<Button>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Button {
    pub text: String,
    pub value: ResolutionKind,
    #[serde(default)]
    pub requires_confirmation: bool,
}

#[derive(Serialize)]
#[serde(tag = "Type")]
enum TaggedControl<'a> {
    Paragraph(&'a Paragraph),
    TextArea(&'a TextArea),
    SubmitButtonGroup(&'a SubmitButtonGroup),
}

impl Serialize for Control {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Paragraph(c) => TaggedControl::Paragraph(c).serialize(serializer),
            Self::TextArea(c) => TaggedControl::TextArea(c).serialize(serializer),
            Self::SubmitButtonGroup(c) => TaggedControl::SubmitButtonGroup(c).serialize(serializer),
            Self::Unknown(value) => value.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Control {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let kind = value.get("Type").and_then(Value::as_str).map(str::to_owned);

        let control = match kind.as_deref() {
            Some("Paragraph") => {
                Self::Paragraph(serde_json::from_value(value).map_err(D::Error::custom)?)
            }
            Some("TextArea") => {
                Self::TextArea(serde_json::from_value(value).map_err(D::Error::custom)?)
            }
            Some("SubmitButtonGroup") => {
                Self::SubmitButtonGroup(serde_json::from_value(value).map_err(D::Error::custom)?)
            }
            _ => Self::Unknown(value),
        };
        Ok(control)
    }
}
