use std::rc::Rc;

use contracts::domain::a001_page_config::PageConfigDraft;
use contracts::domain::common::FieldErrors;
use leptos::prelude::*;

use crate::config::ApiConfig;
use crate::domain::a001_page_config::model::SaveError as PageConfigSaveError;
use crate::domain::a001_page_config::{PageConfigForm, PageConfigGateway};
use crate::domain::a002_content::model::SaveError as ContentSaveError;
use crate::domain::a002_content::{ContentForm, ContentGateway};
use crate::shared::http::HttpClient;

use super::dialog::{ActionOutcome, DialogAction, DialogDescriptor, DialogForm, ManagedTab};

/// State-layer controller behind the content-management screen: both entity
/// forms, their gateways, the active tab and the shared add/update modal.
#[derive(Clone)]
pub struct ContentManager {
    pub active_tab: RwSignal<ManagedTab>,
    pub modal_open: RwSignal<bool>,
    pub dialog_title: RwSignal<String>,
    pub page_config: PageConfigForm,
    pub content: ContentForm,
    pub page_config_api: PageConfigGateway,
    pub content_api: ContentGateway,
}

impl ContentManager {
    pub fn new(config: &ApiConfig, client: Rc<dyn HttpClient>) -> Self {
        Self {
            active_tab: RwSignal::new(ManagedTab::default()),
            modal_open: RwSignal::new(false),
            dialog_title: RwSignal::new(String::new()),
            page_config: PageConfigForm::new(),
            content: ContentForm::new(),
            page_config_api: PageConfigGateway::new(Rc::clone(&client), config),
            content_api: ContentGateway::new(client, config),
        }
    }

    // ------------------------------------------------------------------
    // Tabs and modal
    // ------------------------------------------------------------------

    pub fn change_tab(&self, tab: ManagedTab) {
        self.active_tab.set(tab);
    }

    /// Open the shared dialog under the given title.
    pub fn open_modal(&self, title: &str) {
        self.dialog_title.set(title.to_string());
        self.modal_open.set(true);
    }

    /// Close the dialog. The page-config form is cleared; the content form
    /// stays as-is (see DESIGN.md).
    pub fn close_modal(&self) {
        self.modal_open.set(false);
        self.page_config.reset();
    }

    // ------------------------------------------------------------------
    // Dialog selection
    // ------------------------------------------------------------------

    /// Derive the dialog descriptor for the active tab. Update actions are
    /// chosen whenever the relevant draft already has an identifier.
    pub fn current_dialog(&self) -> DialogDescriptor {
        match self.active_tab.get() {
            ManagedTab::PageConfig => {
                let header = self.dialog_title.get();
                DialogDescriptor {
                    form: DialogForm::PageConfig(self.page_config),
                    action: if self.page_config.has_id() {
                        DialogAction::UpdatePageConfig
                    } else {
                        DialogAction::CreatePageConfig
                    },
                    action_label: if header.starts_with("Add") { "Add" } else { "Save" },
                    header,
                }
            }
            ManagedTab::Content => DialogDescriptor {
                form: DialogForm::Content(self.content),
                action: if self.content.has_id() {
                    DialogAction::UpdateContent
                } else {
                    DialogAction::CreateContent
                },
                header: " Add Content".to_string(),
                action_label: "Post",
            },
            ManagedTab::Document => DialogDescriptor {
                form: DialogForm::Document,
                action: DialogAction::NotImplemented,
                header: " Add Document".to_string(),
                action_label: "Save",
            },
        }
    }

    /// Run the dialog's primary action to completion.
    pub async fn run_action(&self, action: DialogAction) -> ActionOutcome {
        match action {
            DialogAction::CreatePageConfig => self.save_page_config().await,
            DialogAction::UpdatePageConfig => self.update_page_config().await,
            DialogAction::CreateContent => self.save_content().await,
            DialogAction::UpdateContent => self.update_content().await,
            DialogAction::NotImplemented => {
                log::warn!("document dialog has no save action yet");
                ActionOutcome::NotImplemented
            }
        }
    }

    // ------------------------------------------------------------------
    // Page config persistence
    // ------------------------------------------------------------------

    pub async fn save_page_config(&self) -> ActionOutcome {
        let draft = self.page_config.draft.get_untracked();
        match self.page_config_api.create(&draft).await {
            Ok(record) => {
                self.page_config.errors.set(FieldErrors::new());
                log::info!("page config saved: id={:?}", record.id);
                ActionOutcome::Success
            }
            Err(error) => self.page_config_failure(error),
        }
    }

    pub async fn update_page_config(&self) -> ActionOutcome {
        let draft = self.page_config.draft.get_untracked();
        // The dialog hands the form back to the user right away: the draft
        // clears when the update is issued, not when the server answers.
        self.page_config.draft.set(PageConfigDraft::default());
        match self.page_config_api.update(&draft).await {
            Ok(record) => {
                self.page_config.errors.set(FieldErrors::new());
                log::info!("page config updated: id={:?}", record.id);
                ActionOutcome::Success
            }
            Err(error) => self.page_config_failure(error),
        }
    }

    fn page_config_failure(&self, error: PageConfigSaveError) -> ActionOutcome {
        match error {
            PageConfigSaveError::Validation(errors) => {
                self.page_config.errors.set(errors);
                ActionOutcome::ValidationFailed
            }
            PageConfigSaveError::MissingId => {
                log::error!("page config update issued without an id");
                ActionOutcome::ValidationFailed
            }
            PageConfigSaveError::Transport(error) => {
                log::error!("page config request failed: {}", error);
                ActionOutcome::TransportFailed
            }
        }
    }

    pub async fn populate_page_config_form(&self, id: &str) -> ActionOutcome {
        match self.page_config_api.fetch_by_id(id).await {
            Ok(record) => {
                self.page_config.populate(&record);
                self.open_modal("Update Page Config");
                ActionOutcome::Success
            }
            Err(error) => {
                log::error!("failed to fetch page config {}: {}", id, error);
                ActionOutcome::TransportFailed
            }
        }
    }

    pub async fn delete_page_config(&self, id: &str) -> ActionOutcome {
        match self.page_config_api.remove(id).await {
            Ok(()) => {
                log::info!("page config deleted: {}", id);
                ActionOutcome::Success
            }
            Err(error) => {
                log::error!("failed to delete page config {}: {}", id, error);
                ActionOutcome::TransportFailed
            }
        }
    }

    // ------------------------------------------------------------------
    // Content persistence
    // ------------------------------------------------------------------

    pub async fn save_content(&self) -> ActionOutcome {
        let draft = self.content.draft.get_untracked();
        match self.content_api.create(&draft).await {
            Ok(record) => {
                self.content.errors.set(FieldErrors::new());
                log::info!("content saved: id={:?}", record.id);
                ActionOutcome::Success
            }
            Err(error) => self.content_failure(error),
        }
    }

    pub async fn update_content(&self) -> ActionOutcome {
        let draft = self.content.draft.get_untracked();
        // Issuing a content update clears the page-config draft, not the
        // content draft (see DESIGN.md).
        self.page_config.draft.set(PageConfigDraft::default());
        match self.content_api.update(&draft).await {
            Ok(record) => {
                self.content.errors.set(FieldErrors::new());
                log::info!("content updated: id={:?}", record.id);
                ActionOutcome::Success
            }
            Err(error) => self.content_failure(error),
        }
    }

    fn content_failure(&self, error: ContentSaveError) -> ActionOutcome {
        match error {
            ContentSaveError::Validation(errors) => {
                self.content.errors.set(errors);
                ActionOutcome::ValidationFailed
            }
            ContentSaveError::MissingId => {
                log::error!("content update issued without an id");
                ActionOutcome::ValidationFailed
            }
            ContentSaveError::Transport(error) => {
                log::error!("content request failed: {}", error);
                ActionOutcome::TransportFailed
            }
        }
    }

    pub async fn populate_content_form(&self, id: &str) -> ActionOutcome {
        match self.content_api.fetch_by_id(id).await {
            Ok(record) => {
                self.content.populate(&record);
                // both populate paths share this dialog title (see DESIGN.md)
                self.open_modal("Update Page Config");
                ActionOutcome::Success
            }
            Err(error) => {
                log::error!("failed to fetch content {}: {}", id, error);
                ActionOutcome::TransportFailed
            }
        }
    }

    pub async fn delete_content(&self, id: &str) -> ActionOutcome {
        match self.content_api.remove(id).await {
            Ok(()) => {
                log::info!("content deleted: {}", id);
                ActionOutcome::Success
            }
            Err(error) => {
                log::error!("failed to delete content {}: {}", id, error);
                ActionOutcome::TransportFailed
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl ContentManager {
    /// Fire a dialog action from a UI event handler; the outcome is logged
    /// and reflected in the error signals.
    pub fn dispatch_action(&self, action: DialogAction) {
        let manager = self.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = manager.run_action(action).await;
            log::debug!("dialog action finished: {:?}", outcome);
        });
    }
}
