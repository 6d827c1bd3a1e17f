use crate::domain::common::{FieldRule, ObjectSchema};

use super::aggregate::ContentField;

/// Validation rules for the content dialog.
pub static CONTENT_SCHEMA: ObjectSchema<ContentField> = ObjectSchema::new(&[
    FieldRule::required(ContentField::Type, "Type is required"),
    FieldRule::required(ContentField::Title, "Title is required"),
    FieldRule::required(ContentField::Language, "Language is required"),
    FieldRule::required(ContentField::ContentCategory, "Content Category is required"),
    FieldRule::optional(ContentField::BackgroundImage),
    FieldRule::optional(ContentField::MediaContent),
    FieldRule::optional(ContentField::ContentIsOriginal),
    FieldRule::optional(ContentField::AutoTranslate),
    FieldRule::optional(ContentField::Description),
    FieldRule::optional(ContentField::ContentText),
]);
