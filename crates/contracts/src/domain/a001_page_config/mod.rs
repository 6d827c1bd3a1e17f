pub mod aggregate;
pub mod schema;

pub use aggregate::{PageConfigDraft, PageConfigField, PageConfigRecord};
pub use schema::PAGE_CONFIG_SCHEMA;
