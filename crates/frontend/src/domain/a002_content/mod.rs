//! Content item state module

pub mod list_state;
pub mod model;
pub mod view_model;

pub use list_state::ContentListState;
pub use model::ContentGateway;
pub use view_model::ContentForm;
