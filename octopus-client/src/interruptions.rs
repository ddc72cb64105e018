//! Interruptions API
//!
//! Lists and fetches interruptions by well-known paths, and performs the
//! responsibility and submit actions through the links embedded in an
//! interruption the caller already holds.
//!
//! ```text
//!   PENDING ──take_responsibility──▶ HELD ──submit──▶ RESOLVED
//!      └──────────────────── submit ─────────────────────▲
//! ```
//!
//! Nothing here retries: `take_responsibility` and `submit` may already have
//! been applied when a request times out, so the caller decides.

use std::fmt;
use std::sync::Arc;

use octopus_shared::{
    Interruption, InterruptionSubmitRequest, LinkName, ListResponse, ResolutionKind, User,
};
use reqwest::Url;

use crate::client::HttpClient;
use crate::codec::{decode, encode};
use crate::links::resolve;
use crate::{ClientError, ClientResult};

/// Collection path of the interruptions resource
pub const INTERRUPTIONS_PATH: &str = "/api/interruptions";

/// Filters accepted by `GET /api/interruptions`
///
/// Mirrors the server's template `/api/interruptions{?skip,take,regarding,pendingOnly,ids}`.
/// Unset fields are left out of the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterruptionQuery {
    pub skip: Option<u64>,
    pub take: Option<u64>,
    /// Only interruptions related to this document (deployment, task, ...)
    pub regarding: Option<String>,
    pub pending_only: Option<bool>,
    pub ids: Vec<String>,
}

impl InterruptionQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn skip(mut self, skip: u64) -> Self {
        self.skip = Some(skip);
        self
    }

    pub fn take(mut self, take: u64) -> Self {
        self.take = Some(take);
        self
    }

    pub fn regarding(mut self, document_id: impl Into<String>) -> Self {
        self.regarding = Some(document_id.into());
        self
    }

    pub fn pending_only(mut self, pending_only: bool) -> Self {
        self.pending_only = Some(pending_only);
        self
    }

    pub fn ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ids = ids.into_iter().map(Into::into).collect();
        self
    }

    /// Request path including the encoded query string.
    pub fn to_path(&self) -> ClientResult<String> {
        let mut params: Vec<(&str, String)> = Vec::new();
        if let Some(skip) = self.skip {
            params.push(("skip", skip.to_string()));
        }
        if let Some(take) = self.take {
            params.push(("take", take.to_string()));
        }
        if let Some(regarding) = &self.regarding {
            params.push(("regarding", regarding.clone()));
        }
        if let Some(pending_only) = self.pending_only {
            params.push(("pendingOnly", pending_only.to_string()));
        }
        if !self.ids.is_empty() {
            params.push(("ids", self.ids.join(",")));
        }

        if params.is_empty() {
            return Ok(INTERRUPTIONS_PATH.to_string());
        }

        // Only used to percent-encode the query; the origin is discarded.
        let url = Url::parse_with_params(&format!("http://localhost{}", INTERRUPTIONS_PATH), &params)
            .map_err(|e| ClientError::InvalidArgument(format!("Invalid query: {}", e)))?;
        Ok(match url.query() {
            Some(query) => format!("{}?{}", INTERRUPTIONS_PATH, query),
            None => INTERRUPTIONS_PATH.to_string(),
        })
    }
}

/// Interruption operations over a generic resource client.
///
/// Holds no mutable state; clones share the underlying client and may be used
/// from multiple tasks at once.
#[derive(Clone)]
pub struct InterruptionService {
    client: Arc<dyn HttpClient>,
}

impl fmt::Debug for InterruptionService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InterruptionService")
            .field("base_url", &self.client.base_url())
            .finish()
    }
}

impl InterruptionService {
    pub fn new<C: HttpClient + 'static>(client: C) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// Build on a client shared with other services.
    pub fn from_shared(client: Arc<dyn HttpClient>) -> Self {
        Self { client }
    }

    /// First page of interruptions, in server order.
    pub async fn get_all(&self) -> ClientResult<Vec<Interruption>> {
        Ok(self.list(&InterruptionQuery::default()).await?.into_items())
    }

    /// One page of interruptions matching `query`.
    pub async fn list(&self, query: &InterruptionQuery) -> ClientResult<ListResponse<Interruption>> {
        let path = query.to_path()?;
        let body = self.client.get(&path).await?;
        decode(&body)
    }

    /// Every interruption, following `Page.Next` links.
    ///
    /// Stops after as many requests as the first page reports in
    /// `NumberOfPages`, even if the server keeps advertising a next page.
    pub async fn get_all_pages(&self) -> ClientResult<Vec<Interruption>> {
        let mut page = self.list(&InterruptionQuery::default()).await?;
        let max_pages = page.number_of_pages.max(1);
        let mut fetched = 1;
        let mut items = Vec::new();

        loop {
            let next = page.next_page().map(str::to_owned);
            items.append(&mut page.items);
            match next {
                Some(path) if fetched < max_pages => {
                    tracing::debug!(path = %path, page = fetched + 1, "Fetching next interruptions page");
                    page = decode(&self.client.get(&path).await?)?;
                    fetched += 1;
                }
                _ => break,
            }
        }

        Ok(items)
    }

    /// Fetch one interruption by id.
    pub async fn get(&self, id: &str) -> ClientResult<Interruption> {
        let path = item_path(id)?;
        let body = self.client.get(&path).await?;
        decode(&body)
    }

    /// Claim the responsibility lock for the calling user.
    ///
    /// GETs the interruption's `Responsible` link and returns the user now
    /// holding the lock. A refused claim (e.g. someone else holds it) surfaces
    /// as `ClientError::Status`.
    ///
    /// This is the same request `get_responsibility` issues; the server decides
    /// from the caller's identity whether the lock changes hands. Whether it
    /// also accepts a dedicated verb for claiming is unconfirmed.
    pub async fn take_responsibility(&self, interruption: &Interruption) -> ClientResult<User> {
        let path = resolve(interruption, LinkName::Responsible)?;
        let body = self.client.get(path).await?;
        let user: User = decode(&body)?;
        tracing::info!(
            interruption = %interruption.id,
            user = %user.id,
            "Took responsibility for interruption"
        );
        Ok(user)
    }

    /// Read who currently holds the responsibility lock, without changing it.
    pub async fn get_responsibility(&self, interruption: &Interruption) -> ClientResult<User> {
        let path = resolve(interruption, LinkName::Responsible)?;
        let body = self.client.get(path).await?;
        decode(&body)
    }

    /// Resolve the interruption.
    ///
    /// Returns the interruption as updated by the server. Submitting one that
    /// is already resolved is rejected by the server and surfaces as
    /// `ClientError::Status`.
    pub async fn submit(
        &self,
        interruption: &Interruption,
        request: &InterruptionSubmitRequest,
    ) -> ClientResult<Interruption> {
        validate_request(request)?;
        let path = resolve(interruption, LinkName::Submit)?;
        let body = self.client.post(path, Some(encode(request)?)).await?;
        let updated: Interruption = decode(&body)?;

        if updated.is_pending {
            tracing::warn!(
                interruption = %updated.id,
                "Server accepted submission but interruption is still pending"
            );
        } else {
            tracing::info!(
                interruption = %updated.id,
                result = %request.result,
                "Submitted interruption"
            );
        }
        Ok(updated)
    }
}

fn validate_id(id: &str) -> ClientResult<()> {
    if id.trim().is_empty() {
        return Err(ClientError::InvalidArgument(
            "interruption id must not be empty".into(),
        ));
    }
    if id == "." || id == ".." {
        return Err(ClientError::InvalidArgument(format!(
            "interruption id '{}' is a dot segment",
            id
        )));
    }
    if id.contains(['/', '?', '#']) {
        return Err(ClientError::InvalidArgument(format!(
            "interruption id '{}' contains reserved characters",
            id
        )));
    }
    Ok(())
}

/// `/api/interruptions/{id}` with `id` percent-encoded as a single segment.
fn item_path(id: &str) -> ClientResult<String> {
    validate_id(id)?;
    let mut url = Url::parse(&format!("http://localhost{}", INTERRUPTIONS_PATH))
        .map_err(|e| ClientError::InvalidArgument(format!("Invalid path: {}", e)))?;
    url.path_segments_mut()
        .map_err(|_| ClientError::InvalidArgument("Path cannot take segments".into()))?
        .push(id);
    Ok(url.path().to_string())
}

fn validate_request(request: &InterruptionSubmitRequest) -> ClientResult<()> {
    match &request.result {
        ResolutionKind::Other(value) if value.trim().is_empty() => Err(
            ClientError::InvalidArgument("submission result must not be empty".into()),
        ),
        _ => Ok(()),
    }
}
