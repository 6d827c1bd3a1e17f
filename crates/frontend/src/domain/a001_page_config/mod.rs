//! Page Configuration state module
//!
//! - model.rs: persistence gateway against the protected API
//! - view_model.rs: dialog form state (draft + field errors)
//! - list_state.rs: table paging state

pub mod list_state;
pub mod model;
pub mod view_model;

pub use list_state::PageConfigListState;
pub use model::PageConfigGateway;
pub use view_model::PageConfigForm;
