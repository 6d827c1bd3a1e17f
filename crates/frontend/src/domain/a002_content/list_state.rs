use contracts::domain::a002_content::ContentRecord;
use leptos::prelude::*;

use super::model::ContentGateway;

/// Signal-backed paging state for the content table.
#[derive(Clone, Copy)]
pub struct ContentListState {
    pub rows: RwSignal<Vec<ContentRecord>>,
    pub total_rows: RwSignal<u64>,
    pub loading: RwSignal<bool>,
}

impl ContentListState {
    pub fn new() -> Self {
        Self {
            rows: RwSignal::new(Vec::new()),
            total_rows: RwSignal::new(0),
            loading: RwSignal::new(true),
        }
    }

    /// Fetch one page of rows. Failures are logged and the previous rows
    /// stay; the loading flag always clears.
    pub async fn load(&self, gateway: &ContentGateway, start: u64, limit: u64) {
        self.loading.set(true);
        match gateway.list(start, limit).await {
            Ok(page) => {
                self.rows.set(page.data);
                self.total_rows.set(page.total_rows);
            }
            Err(error) => log::error!("failed to load contents: {}", error),
        }
        self.loading.set(false);
    }
}

impl Default for ContentListState {
    fn default() -> Self {
        Self::new()
    }
}
