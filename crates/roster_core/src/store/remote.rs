//! REST-backed person store.
//!
//! # Responsibility
//! - Map the `PersonStore` contract onto the remote `/users` endpoints.
//! - Unwrap the server's `{ "data": ... }` response envelope.
//!
//! # Invariants
//! - Non-success status codes never surface as decoded payloads; they map
//!   to `NotFound` (404 on update) or `Transport`.
//! - No retry, auth, or timeout policy beyond the client default.

use crate::model::person::{Person, PersonDraft, PersonId, PersonPatch};
use crate::store::{PageQuery, PageResult, PersonStore, StoreError, StoreResult};
use log::warn;
use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;
use serde::Deserialize;

/// Response envelope used by every remote endpoint.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

/// Person store talking to a remote REST service.
pub struct RemotePersonStore {
    client: Client,
    base_url: String,
}

impl RemotePersonStore {
    /// Creates a store for `base_url` (trailing slashes are ignored).
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            client: Client::new(),
            base_url,
        }
    }

    fn users_url(&self) -> String {
        format!("{}/users", self.base_url)
    }

    fn decode<T: serde::de::DeserializeOwned>(response: Response) -> StoreResult<T> {
        let envelope: Envelope<T> = response
            .json()
            .map_err(|err| StoreError::InvalidData(err.to_string()))?;
        Ok(envelope.data)
    }
}

impl PersonStore for RemotePersonStore {
    fn list(&self, query: &PageQuery) -> StoreResult<PageResult> {
        let response = self
            .client
            .get(self.users_url())
            .query(&[
                ("page", query.page.to_string()),
                ("pageSize", query.page_size.to_string()),
                ("search", query.search.clone()),
            ])
            .send()
            .map_err(transport)?;

        check_status(response.status(), "list")?;
        Self::decode(response)
    }

    fn create(&self, draft: &PersonDraft) -> StoreResult<Person> {
        let response = self
            .client
            .post(self.users_url())
            .json(draft)
            .send()
            .map_err(transport)?;

        check_status(response.status(), "create")?;
        Self::decode(response)
    }

    fn update(&self, id: PersonId, patch: &PersonPatch) -> StoreResult<Person> {
        let response = self
            .client
            .put(format!("{}/{id}", self.users_url()))
            .json(patch)
            .send()
            .map_err(transport)?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(StoreError::NotFound(id));
        }
        check_status(response.status(), "update")?;
        Self::decode(response)
    }
}

fn transport(err: reqwest::Error) -> StoreError {
    StoreError::Transport(err.to_string())
}

fn check_status(status: StatusCode, operation: &str) -> StoreResult<()> {
    if status.is_success() {
        return Ok(());
    }
    warn!("event=remote_request module=store status=error operation={operation} http_status={status}");
    Err(StoreError::Transport(format!(
        "{operation} failed with HTTP status {status}"
    )))
}

#[cfg(test)]
mod tests {
    use super::RemotePersonStore;

    #[test]
    fn trailing_slashes_do_not_double_up_in_urls() {
        let store = RemotePersonStore::new("http://localhost:5001/api//");
        assert_eq!(store.users_url(), "http://localhost:5001/api/users");
    }
}
