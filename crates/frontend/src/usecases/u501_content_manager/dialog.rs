use crate::domain::a001_page_config::PageConfigForm;
use crate::domain::a002_content::ContentForm;

/// The three management tabs the console knows about.
///
/// `Document` is a declared-but-unbuilt slot: its tab and dialog exist in
/// the UI, but its save action is not implemented yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManagedTab {
    PageConfig,
    Content,
    Document,
}

impl ManagedTab {
    /// Map the UI's numeric tab index; anything outside the three known
    /// slots is no tab at all.
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(ManagedTab::PageConfig),
            1 => Some(ManagedTab::Content),
            2 => Some(ManagedTab::Document),
            _ => None,
        }
    }

    pub fn index(self) -> usize {
        match self {
            ManagedTab::PageConfig => 0,
            ManagedTab::Content => 1,
            ManagedTab::Document => 2,
        }
    }
}

impl Default for ManagedTab {
    /// The console opens on the content tab.
    fn default() -> Self {
        ManagedTab::Content
    }
}

/// Which persistence action the current dialog's primary button fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogAction {
    CreatePageConfig,
    UpdatePageConfig,
    CreateContent,
    UpdateContent,
    /// The document dialog has no save action yet.
    NotImplemented,
}

/// Form handles for whichever entity the current dialog edits.
#[derive(Clone, Copy)]
pub enum DialogForm {
    PageConfig(PageConfigForm),
    Content(ContentForm),
    Document,
}

/// Everything the shared dialog needs to render the active tab's editor.
#[derive(Clone)]
pub struct DialogDescriptor {
    pub form: DialogForm,
    pub action: DialogAction,
    pub header: String,
    pub action_label: &'static str,
}

/// How a dialog or row action ended, for the caller to surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    Success,
    ValidationFailed,
    TransportFailed,
    NotImplemented,
}
