use contracts::domain::a002_content::{ContentDraft, ContentField, ContentRecord, CONTENT_SCHEMA};
use contracts::domain::common::{FieldErrors, FieldTypeMismatch, FieldValue, FormDraft};
use leptos::prelude::*;

/// Form state for the content dialog.
#[derive(Clone, Copy)]
pub struct ContentForm {
    pub draft: RwSignal<ContentDraft>,
    pub errors: RwSignal<FieldErrors<ContentField>>,
}

impl ContentForm {
    pub fn new() -> Self {
        Self {
            draft: RwSignal::new(ContentDraft::default()),
            errors: RwSignal::new(FieldErrors::new()),
        }
    }

    /// Merge one field edit into the draft, then re-validate that field only.
    pub fn set_field(&self, field: ContentField, value: FieldValue) -> Result<(), FieldTypeMismatch> {
        let mut outcome = Ok(());
        let applied = value.clone();
        self.draft.update(|draft| outcome = draft.apply(field, applied));
        if let Err(mismatch) = &outcome {
            log::warn!("rejected content edit: {}", mismatch);
            return outcome;
        }

        match CONTENT_SCHEMA.validate_value(field, &value) {
            Ok(()) => self.errors.update(|errors| errors.clear(field)),
            Err(message) => self.errors.update(|errors| errors.set(field, message)),
        }
        Ok(())
    }

    /// Replace an image-selection field. Selections are not validated.
    pub fn set_image_selection(
        &self,
        field: ContentField,
        images: Vec<String>,
    ) -> Result<(), FieldTypeMismatch> {
        let mut outcome = Ok(());
        self.draft
            .update(|draft| outcome = draft.apply(field, FieldValue::Images(images)));
        if let Err(mismatch) = &outcome {
            log::warn!("rejected content image selection: {}", mismatch);
        }
        outcome
    }

    pub fn reset(&self) {
        self.draft.set(ContentDraft::default());
        self.errors.set(FieldErrors::new());
    }

    pub fn populate(&self, record: &ContentRecord) {
        self.draft.update(|draft| draft.merge_record(record));
    }

    pub fn has_id(&self) -> bool {
        self.draft.with(|draft| draft.id.is_some())
    }

    pub fn error_message(&self, field: ContentField) -> Option<String> {
        self.errors
            .with(|errors| errors.message(field).map(str::to_string))
    }
}

impl Default for ContentForm {
    fn default() -> Self {
        Self::new()
    }
}
