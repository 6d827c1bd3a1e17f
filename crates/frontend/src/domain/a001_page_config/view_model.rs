use contracts::domain::a001_page_config::{
    PageConfigDraft, PageConfigField, PageConfigRecord, PAGE_CONFIG_SCHEMA,
};
use contracts::domain::common::{FieldErrors, FieldTypeMismatch, FieldValue, FormDraft};
use leptos::prelude::*;

/// Form state for the page-config dialog: the editable draft plus its
/// per-field validation messages.
#[derive(Clone, Copy)]
pub struct PageConfigForm {
    pub draft: RwSignal<PageConfigDraft>,
    pub errors: RwSignal<FieldErrors<PageConfigField>>,
}

impl PageConfigForm {
    pub fn new() -> Self {
        Self {
            draft: RwSignal::new(PageConfigDraft::default()),
            errors: RwSignal::new(FieldErrors::new()),
        }
    }

    /// Merge one field edit into the draft, then re-validate that field
    /// only. A value of the wrong kind is rejected and nothing changes.
    pub fn set_field(
        &self,
        field: PageConfigField,
        value: FieldValue,
    ) -> Result<(), FieldTypeMismatch> {
        let mut outcome = Ok(());
        let applied = value.clone();
        self.draft.update(|draft| outcome = draft.apply(field, applied));
        if let Err(mismatch) = &outcome {
            log::warn!("rejected page config edit: {}", mismatch);
            return outcome;
        }

        match PAGE_CONFIG_SCHEMA.validate_value(field, &value) {
            Ok(()) => self.errors.update(|errors| errors.clear(field)),
            Err(message) => self.errors.update(|errors| errors.set(field, message)),
        }
        Ok(())
    }

    /// Replace an image-selection field. Selections are not validated.
    pub fn set_image_selection(
        &self,
        field: PageConfigField,
        images: Vec<String>,
    ) -> Result<(), FieldTypeMismatch> {
        let mut outcome = Ok(());
        self.draft
            .update(|draft| outcome = draft.apply(field, FieldValue::Images(images)));
        if let Err(mismatch) = &outcome {
            log::warn!("rejected page config image selection: {}", mismatch);
        }
        outcome
    }

    /// Restore the empty initial draft and clear every error.
    pub fn reset(&self) {
        self.draft.set(PageConfigDraft::default());
        self.errors.set(FieldErrors::new());
    }

    /// Merge a fetched record into the draft; fields the record omits keep
    /// their current value.
    pub fn populate(&self, record: &PageConfigRecord) {
        self.draft.update(|draft| draft.merge_record(record));
    }

    /// Whether the draft carries a persisted identifier (update mode).
    pub fn has_id(&self) -> bool {
        self.draft.with(|draft| draft.id.is_some())
    }

    pub fn error_message(&self, field: PageConfigField) -> Option<String> {
        self.errors
            .with(|errors| errors.message(field).map(str::to_string))
    }
}

impl Default for PageConfigForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_field_edits_one_field_and_its_error_slot_only() {
        let form = PageConfigForm::new();

        form.set_field(PageConfigField::Name, FieldValue::text("Home"))
            .unwrap();

        let draft = form.draft.get_untracked();
        assert_eq!(draft.name, "Home");
        assert_eq!(
            PageConfigDraft {
                name: String::new(),
                ..draft
            },
            PageConfigDraft::default()
        );
        // the untouched fields have not been validated yet
        assert_eq!(form.error_message(PageConfigField::Name), None);
        assert_eq!(form.error_message(PageConfigField::PageType), None);
    }

    #[test]
    fn clearing_a_required_field_records_its_message() {
        let form = PageConfigForm::new();
        form.set_field(PageConfigField::Name, FieldValue::text("Home"))
            .unwrap();

        form.set_field(PageConfigField::Name, FieldValue::text(""))
            .unwrap();

        assert_eq!(
            form.error_message(PageConfigField::Name),
            Some("name is required".to_string())
        );

        form.set_field(PageConfigField::Name, FieldValue::text("Home"))
            .unwrap();
        assert_eq!(form.error_message(PageConfigField::Name), None);
    }

    #[test]
    fn a_mismatched_value_changes_nothing() {
        let form = PageConfigForm::new();
        form.set_field(PageConfigField::Name, FieldValue::text("Home"))
            .unwrap();
        let before = form.draft.get_untracked();

        assert!(form
            .set_field(PageConfigField::Name, FieldValue::Toggle(true))
            .is_err());

        assert_eq!(form.draft.get_untracked(), before);
        assert_eq!(form.error_message(PageConfigField::Name), None);
    }

    #[test]
    fn image_selection_skips_validation() {
        let form = PageConfigForm::new();

        form.set_image_selection(PageConfigField::HeaderImage, vec!["img-1".to_string()])
            .unwrap();
        assert_eq!(
            form.draft.get_untracked().header_image,
            vec!["img-1".to_string()]
        );

        // an empty selection is accepted without recording an error
        form.set_image_selection(PageConfigField::HeaderImage, vec![])
            .unwrap();
        assert!(!form.errors.get_untracked().has_errors());
    }

    #[test]
    fn reset_restores_the_initial_shape() {
        let form = PageConfigForm::new();
        form.set_field(PageConfigField::Name, FieldValue::text(""))
            .unwrap();
        form.populate(&PageConfigRecord {
            id: Some("7".to_string()),
            ..PageConfigRecord::default()
        });

        form.reset();

        assert_eq!(form.draft.get_untracked(), PageConfigDraft::default());
        assert!(!form.errors.get_untracked().has_errors());
        assert!(!form.has_id());
    }

    #[test]
    fn populate_merges_and_flips_into_update_mode() {
        let form = PageConfigForm::new();
        form.set_field(PageConfigField::Language, FieldValue::text("en"))
            .unwrap();

        form.populate(&PageConfigRecord {
            id: Some("42".to_string()),
            name: Some("News".to_string()),
            ..PageConfigRecord::default()
        });

        let draft = form.draft.get_untracked();
        assert_eq!(draft.id.as_deref(), Some("42"));
        assert_eq!(draft.name, "News");
        assert_eq!(draft.language, "en"); // preserved
        assert!(form.has_id());
    }
}
