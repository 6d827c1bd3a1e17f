pub mod aggregate;
pub mod schema;

pub use aggregate::{ContentDraft, ContentField, ContentRecord};
pub use schema::CONTENT_SCHEMA;
