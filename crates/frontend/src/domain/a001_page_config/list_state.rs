use contracts::domain::a001_page_config::PageConfigRecord;
use leptos::prelude::*;

use super::model::PageConfigGateway;

/// Signal-backed paging state for the page-config table.
#[derive(Clone, Copy)]
pub struct PageConfigListState {
    pub rows: RwSignal<Vec<PageConfigRecord>>,
    pub total_rows: RwSignal<u64>,
    pub loading: RwSignal<bool>,
}

impl PageConfigListState {
    pub fn new() -> Self {
        Self {
            rows: RwSignal::new(Vec::new()),
            total_rows: RwSignal::new(0),
            loading: RwSignal::new(true),
        }
    }

    /// Fetch one page of rows. Failures are logged and the previous rows
    /// stay; the loading flag always clears.
    pub async fn load(&self, gateway: &PageConfigGateway, start: u64, limit: u64) {
        self.loading.set(true);
        match gateway.list(start, limit).await {
            Ok(page) => {
                self.rows.set(page.data);
                self.total_rows.set(page.total_rows);
            }
            Err(error) => log::error!("failed to load page configs: {}", error),
        }
        self.loading.set(false);
    }
}

impl Default for PageConfigListState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::config::ApiConfig;
    use crate::shared::http::testing::MockClient;
    use crate::shared::http::{HttpClient, TransportError};
    use serde_json::json;

    fn gateway(mock: &Rc<MockClient>) -> PageConfigGateway {
        let client: Rc<dyn HttpClient> = mock.clone();
        PageConfigGateway::new(client, &ApiConfig::production())
    }

    #[tokio::test]
    async fn load_stores_the_page_and_clears_loading() {
        let mock = MockClient::new();
        mock.push_ok(json!({"data": [{"id": "1"}], "totalRows": 7}));
        let state = PageConfigListState::new();
        assert!(state.loading.get_untracked());

        state.load(&gateway(&mock), 0, 10).await;

        assert_eq!(state.rows.get_untracked().len(), 1);
        assert_eq!(state.total_rows.get_untracked(), 7);
        assert!(!state.loading.get_untracked());
    }

    #[tokio::test]
    async fn a_failed_load_keeps_the_previous_rows()  {
        let mock = MockClient::new();
        mock.push_ok(json!({"data": [{"id": "1"}], "totalRows": 1}));
        mock.push_err(TransportError::Status(500));
        let state = PageConfigListState::new();
        let gateway = gateway(&mock);

        state.load(&gateway, 0, 10).await;
        state.load(&gateway, 10, 10).await;

        assert_eq!(state.rows.get_untracked().len(), 1);
        assert!(!state.loading.get_untracked());
    }
}
