// octopus-client/tests/common/mod.rs
// Shared fixtures and transport stubs

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::extract::Request;
use http::{HeaderMap, Method, StatusCode};
use octopus_client::{ClientError, ClientResult, HttpClient, Interruption};

pub const INTERRUPTION_ID: &str = "Interruptions-1";

pub const INTERRUPTION_JSON: &str = r#"
{
    "Id": "Interruptions-1",
    "Title": "InterruptionTitle",
    "Created": "2018-12-31T13:38:39.440+00:00",
    "IsPending": true,
    "Form": {
        "Values": {
            "Instructions": null,
            "Notes": null,
            "Result": null
        },
        "Elements": [
            {
                "Name": "Instructions",
                "Control": {
                    "Type": "Paragraph",
                    "Text": "Manual Approval",
                    "ResolveLinks": false
                },
                "IsValueRequired": false
            },
            {
                "Name": "Notes",
                "Control": {
                    "Type": "TextArea",
                    "Label": "Notes"
                },
                "IsValueRequired": false
            },
            {
                "Name": "Result",
                "Control": {
                    "Type": "SubmitButtonGroup",
                    "Buttons": [
                        { "Text": "Proceed", "Value": "Proceed", "RequiresConfirmation": false },
                        { "Text": "Abort", "Value": "Abort", "RequiresConfirmation": true }
                    ]
                },
                "IsValueRequired": false
            }
        ]
    },
    "RelatedDocumentIds": ["Deployments-1", "ServerTasks-1", "Projects-1", "Environments-1"],
    "ResponsibleTeamIds": ["Teams-1"],
    "ResponsibleUserId": null,
    "CanTakeResponsibility": true,
    "HasResponsibility": false,
    "TaskId": "ServerTasks-1",
    "CorrelationId": "ServerTasks-1_CNMPMXUEE6/24921723bcb741409134629931dd6b97/dbfadf8e4aaa4acbb45d45c4c39d0f12",
    "IsLinkedToOtherInterruption": false,
    "Links": {
        "Self": "/api/interruptions/Interruptions-1",
        "Submit": "/api/interruptions/Interruptions-1/submit",
        "Responsible": "/api/interruptions/Interruptions-1/responsible"
    }
}
"#;

pub const USER_JSON: &str = r#"
{
    "Id": "Users-1",
    "Username": "user@example.com",
    "DisplayName": "User Name",
    "IsActive": true,
    "IsService": false,
    "EmailAddress": "user@example.com",
    "CanPasswordBeEdited": true,
    "IsRequestor": true,
    "Links": {
        "Self": "/api/users/Users-1",
        "Permissions": "/api/users/Users-1/permissions",
        "ApiKeys": "/api/users/Users-1/apikeys{/id}{?skip,take}",
        "Avatar": "https://www.gravatar.com/avatar/ae0e3d90eeddb248c041469b38cc64fd?d=blank"
    }
}
"#;

/// Interruption payload as returned after a successful submit.
pub fn submitted_json() -> String {
    let mut value: serde_json::Value = serde_json::from_str(INTERRUPTION_JSON).unwrap();
    value["IsPending"] = serde_json::Value::Bool(false);
    value.to_string()
}

/// List envelope wrapping `items`, with an optional `Page.Next` link.
pub fn list_json(items: &[&str], number_of_pages: u64, next: Option<&str>) -> String {
    let items: Vec<serde_json::Value> = items
        .iter()
        .map(|item| serde_json::from_str(item).unwrap())
        .collect();
    let mut links = serde_json::json!({
        "Self": "/api/interruptions?regarding=&pendingOnly=False",
        "Template": "/api/interruptions{?skip,take,regarding,pendingOnly,ids}",
        "Page.All": "/api/interruptions?skip=0&take=2147483647",
        "Page.Current": "/api/interruptions?skip=0&take=30",
        "Page.Last": "/api/interruptions?skip=0&take=30"
    });
    if let Some(next) = next {
        links["Page.Next"] = serde_json::Value::String(next.to_string());
    }
    serde_json::json!({
        "ItemType": "Interruption",
        "TotalResults": items.len(),
        "ItemsPerPage": 30,
        "NumberOfPages": number_of_pages,
        "LastPageNumber": number_of_pages.saturating_sub(1),
        "Items": items,
        "Links": links
    })
    .to_string()
}

/// Interruption JSON with a different id (and matching links).
pub fn interruption_json_with_id(id: &str) -> String {
    INTERRUPTION_JSON.replace(INTERRUPTION_ID, id)
}

pub fn decoded_interruption() -> Interruption {
    serde_json::from_str(INTERRUPTION_JSON).unwrap()
}

// ============================================================================
// In-process server stub
// ============================================================================

/// A request as seen by the stub server.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub headers: HeaderMap,
    pub body: String,
}

#[derive(Debug, Clone, Default)]
pub struct Recorder(Arc<Mutex<Vec<RecordedRequest>>>);

impl Recorder {
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.0.lock().unwrap().clone()
    }

    fn push(&self, request: RecordedRequest) {
        self.0.lock().unwrap().push(request);
    }
}

/// Router that records every request and answers via `respond(method, path_and_query)`.
pub fn stub_router<F>(recorder: Recorder, respond: F) -> Router
where
    F: Fn(&Method, &str) -> (StatusCode, String) + Clone + Send + Sync + 'static,
{
    Router::new().fallback(move |request: Request| {
        let recorder = recorder.clone();
        let respond = respond.clone();
        async move {
            let (parts, body) = request.into_parts();
            let body = axum::body::to_bytes(body, usize::MAX).await.unwrap();
            let path_and_query = parts
                .uri
                .path_and_query()
                .map(|pq| pq.as_str().to_string())
                .unwrap_or_default();

            recorder.push(RecordedRequest {
                method: parts.method.clone(),
                path: parts.uri.path().to_string(),
                query: parts.uri.query().map(str::to_string),
                headers: parts.headers.clone(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });

            respond(&parts.method, &path_and_query)
        }
    })
}

// ============================================================================
// Counting client
// ============================================================================

/// Transport that fails every call and counts how many were attempted.
#[derive(Debug, Clone, Default)]
pub struct CountingClient {
    calls: Arc<AtomicUsize>,
}

impl CountingClient {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HttpClient for CountingClient {
    async fn get(&self, path: &str) -> ClientResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(ClientError::Transport(format!("unexpected GET {path}")))
    }

    async fn post(&self, path: &str, _body: Option<String>) -> ClientResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(ClientError::Transport(format!("unexpected POST {path}")))
    }

    fn base_url(&self) -> &str {
        "http://counting.invalid"
    }
}
