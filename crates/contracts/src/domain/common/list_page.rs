use serde::{Deserialize, Serialize};

/// Paginated envelope returned by the protected list endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListPage<T> {
    pub data: Vec<T>,
    #[serde(rename = "totalRows")]
    pub total_rows: u64,
}
