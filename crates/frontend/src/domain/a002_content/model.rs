use std::rc::Rc;

use contracts::domain::a002_content::{ContentDraft, ContentField, ContentRecord, CONTENT_SCHEMA};
use contracts::domain::common::{FieldErrors, ListPage};
use thiserror::Error;

use crate::config::{protected_path, ApiConfig};
use crate::shared::http::{decode_json, ApiRequest, HttpClient, TransportError};

/// Why a content save/update never reached the server, or failed there.
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("content validation failed")]
    Validation(FieldErrors<ContentField>),
    #[error("content update requires an id")]
    MissingId,
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Persistence gateway for content items.
#[derive(Clone)]
pub struct ContentGateway {
    client: Rc<dyn HttpClient>,
    path: String,
}

impl ContentGateway {
    pub fn new(client: Rc<dyn HttpClient>, config: &ApiConfig) -> Self {
        Self {
            client,
            path: protected_path(&config.contents_resource),
        }
    }

    /// Validate, then POST the draft as a new record. A draft that fails
    /// validation issues no request.
    pub async fn create(&self, draft: &ContentDraft) -> Result<ContentRecord, SaveError> {
        CONTENT_SCHEMA.validate(draft).map_err(SaveError::Validation)?;

        let mut record = draft.to_record();
        record.id = None;
        let body = serde_json::to_value(record)
            .map_err(|e| TransportError::Decode(e.to_string()))?;

        let value = self.client.send(ApiRequest::post(&self.path, body)).await?;
        Ok(decode_json(value)?)
    }

    /// Validate, then PUT the draft over its existing record.
    pub async fn update(&self, draft: &ContentDraft) -> Result<ContentRecord, SaveError> {
        if draft.id.is_none() {
            return Err(SaveError::MissingId);
        }
        CONTENT_SCHEMA.validate(draft).map_err(SaveError::Validation)?;

        let body = serde_json::to_value(draft.to_record())
            .map_err(|e| TransportError::Decode(e.to_string()))?;

        let value = self.client.send(ApiRequest::put(&self.path, body)).await?;
        Ok(decode_json(value)?)
    }

    pub async fn fetch_by_id(&self, id: &str) -> Result<ContentRecord, TransportError> {
        let value = self
            .client
            .send(ApiRequest::get(&self.path).with_query("id", id))
            .await?;
        decode_json(value)
    }

    pub async fn remove(&self, id: &str) -> Result<(), TransportError> {
        let ack = self
            .client
            .send(ApiRequest::delete(&self.path).with_query("id", id))
            .await?;
        log::debug!("content delete acknowledged: {}", ack);
        Ok(())
    }

    pub async fn list(
        &self,
        start: u64,
        limit: u64,
    ) -> Result<ListPage<ContentRecord>, TransportError> {
        let value = self
            .client
            .send(
                ApiRequest::get(&self.path)
                    .with_query("start", start.to_string())
                    .with_query("limit", limit.to_string()),
            )
            .await?;
        decode_json(value)
    }
}
