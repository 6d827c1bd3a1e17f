use std::rc::Rc;

use contracts::domain::a001_page_config::{
    PageConfigDraft, PageConfigField, PageConfigRecord, PAGE_CONFIG_SCHEMA,
};
use contracts::domain::common::{FieldErrors, ListPage};
use thiserror::Error;

use crate::config::{protected_path, ApiConfig};
use crate::shared::http::{decode_json, ApiRequest, HttpClient, TransportError};

/// Why a page-config save/update never reached the server, or failed there.
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("page config validation failed")]
    Validation(FieldErrors<PageConfigField>),
    #[error("page config update requires an id")]
    MissingId,
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Persistence gateway for page configurations.
#[derive(Clone)]
pub struct PageConfigGateway {
    client: Rc<dyn HttpClient>,
    path: String,
}

impl PageConfigGateway {
    pub fn new(client: Rc<dyn HttpClient>, config: &ApiConfig) -> Self {
        Self {
            client,
            path: protected_path(&config.page_config_resource),
        }
    }

    /// Validate, then POST the draft as a new record. A draft that fails
    /// validation issues no request.
    pub async fn create(&self, draft: &PageConfigDraft) -> Result<PageConfigRecord, SaveError> {
        PAGE_CONFIG_SCHEMA
            .validate(draft)
            .map_err(SaveError::Validation)?;

        let mut record = draft.to_record();
        record.id = None; // the server assigns identifiers on create
        let body = serde_json::to_value(record)
            .map_err(|e| TransportError::Decode(e.to_string()))?;

        let value = self.client.send(ApiRequest::post(&self.path, body)).await?;
        Ok(decode_json(value)?)
    }

    /// Validate, then PUT the draft over its existing record. Refuses
    /// drafts without an identifier.
    pub async fn update(&self, draft: &PageConfigDraft) -> Result<PageConfigRecord, SaveError> {
        if draft.id.is_none() {
            return Err(SaveError::MissingId);
        }
        PAGE_CONFIG_SCHEMA
            .validate(draft)
            .map_err(SaveError::Validation)?;

        let body = serde_json::to_value(draft.to_record())
            .map_err(|e| TransportError::Decode(e.to_string()))?;

        let value = self.client.send(ApiRequest::put(&self.path, body)).await?;
        Ok(decode_json(value)?)
    }

    pub async fn fetch_by_id(&self, id: &str) -> Result<PageConfigRecord, TransportError> {
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
        log::debug!("page config delete acknowledged: {}", ack);
        Ok(())
    }

    /// Fetch one page of records for the table view.
    pub async fn list(
        &self,
        start: u64,
        limit: u64,
    ) -> Result<ListPage<PageConfigRecord>, TransportError> {
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
