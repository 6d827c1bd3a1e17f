use serde::{Deserialize, Serialize};

use crate::domain::common::{FieldTypeMismatch, FieldValue, FormDraft, FormField};

// ============================================================================
// Draft
// ============================================================================

/// Editable content item as held by the admin console dialog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentDraft {
    pub id: Option<String>,
    pub content_type: String,
    pub title: String,
    pub language: String,
    pub content_category: String,
    pub background_image: Vec<String>,
    pub media_content: String,
    pub content_is_original: bool,
    pub auto_translate: bool,
    pub description: String,
    pub content_text: String,
}

/// Closed set of editable content fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentField {
    Type,
    Title,
    Language,
    ContentCategory,
    BackgroundImage,
    MediaContent,
    ContentIsOriginal,
    AutoTranslate,
    Description,
    ContentText,
}

impl ContentField {
    pub const ALL: [ContentField; 10] = [
        ContentField::Type,
        ContentField::Title,
        ContentField::Language,
        ContentField::ContentCategory,
        ContentField::BackgroundImage,
        ContentField::MediaContent,
        ContentField::ContentIsOriginal,
        ContentField::AutoTranslate,
        ContentField::Description,
        ContentField::ContentText,
    ];
}

impl FormField for ContentField {
    fn name(&self) -> &'static str {
        match self {
            ContentField::Type => "content_type",
            ContentField::Title => "title",
            ContentField::Language => "language",
            ContentField::ContentCategory => "content_category",
            ContentField::BackgroundImage => "background_image",
            ContentField::MediaContent => "media_content",
            ContentField::ContentIsOriginal => "content_is_original",
            ContentField::AutoTranslate => "auto_translate",
            ContentField::Description => "description",
            ContentField::ContentText => "content_text",
        }
    }
}

impl FormDraft for ContentDraft {
    type Field = ContentField;

    fn field_value(&self, field: ContentField) -> FieldValue {
        match field {
            ContentField::Type => FieldValue::Text(self.content_type.clone()),
            ContentField::Title => FieldValue::Text(self.title.clone()),
            ContentField::Language => FieldValue::Text(self.language.clone()),
            ContentField::ContentCategory => FieldValue::Text(self.content_category.clone()),
            ContentField::BackgroundImage => FieldValue::Images(self.background_image.clone()),
            ContentField::MediaContent => FieldValue::Text(self.media_content.clone()),
            ContentField::ContentIsOriginal => FieldValue::Toggle(self.content_is_original),
            ContentField::AutoTranslate => FieldValue::Toggle(self.auto_translate),
            ContentField::Description => FieldValue::Text(self.description.clone()),
            ContentField::ContentText => FieldValue::Text(self.content_text.clone()),
        }
    }

    fn apply(&mut self, field: ContentField, value: FieldValue) -> Result<(), FieldTypeMismatch> {
        match (field, value) {
            (ContentField::Type, FieldValue::Text(v)) => self.content_type = v,
            (ContentField::Title, FieldValue::Text(v)) => self.title = v,
            (ContentField::Language, FieldValue::Text(v)) => self.language = v,
            (ContentField::ContentCategory, FieldValue::Text(v)) => self.content_category = v,
            (ContentField::BackgroundImage, FieldValue::Images(v)) => self.background_image = v,
            (ContentField::MediaContent, FieldValue::Text(v)) => self.media_content = v,
            (ContentField::ContentIsOriginal, FieldValue::Toggle(v)) => self.content_is_original = v,
            (ContentField::AutoTranslate, FieldValue::Toggle(v)) => self.auto_translate = v,
            (ContentField::Description, FieldValue::Text(v)) => self.description = v,
            (ContentField::ContentText, FieldValue::Text(v)) => self.content_text = v,
            (_, other) => {
                return Err(FieldTypeMismatch {
                    field: field.name(),
                    given: other.kind(),
                })
            }
        }
        Ok(())
    }
}

// ============================================================================
// Wire record
// ============================================================================

/// Wire shape exchanged with the protected contents endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_image: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_is_original: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_translate: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_text: Option<String>,
}

impl ContentDraft {
    /// Map the draft to its wire representation; every field is present.
    pub fn to_record(&self) -> ContentRecord {
        ContentRecord {
            id: self.id.clone(),
            content_type: Some(self.content_type.clone()),
            title: Some(self.title.clone()),
            language: Some(self.language.clone()),
            content_category: Some(self.content_category.clone()),
            background_image: Some(self.background_image.clone()),
            media_content: Some(self.media_content.clone()),
            content_is_original: Some(self.content_is_original),
            auto_translate: Some(self.auto_translate),
            description: Some(self.description.clone()),
            content_text: Some(self.content_text.clone()),
        }
    }

    /// Merge a wire record into the draft. Fields absent in the record keep
    /// their current value.
    pub fn merge_record(&mut self, record: &ContentRecord) {
        if let Some(v) = &record.id {
            self.id = Some(v.clone());
        }
        if let Some(v) = &record.content_type {
            self.content_type = v.clone();
        }
        if let Some(v) = &record.title {
            self.title = v.clone();
        }
        if let Some(v) = &record.language {
            self.language = v.clone();
        }
        if let Some(v) = &record.content_category {
            self.content_category = v.clone();
        }
        if let Some(v) = &record.background_image {
            self.background_image = v.clone();
        }
        if let Some(v) = &record.media_content {
            self.media_content = v.clone();
        }
        if let Some(v) = record.content_is_original {
            self.content_is_original = v;
        }
        if let Some(v) = record.auto_translate {
            self.auto_translate = v;
        }
        if let Some(v) = &record.description {
            self.description = v.clone();
        }
        if let Some(v) = &record.content_text {
            self.content_text = v.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_record_uses_the_wire_field_names() {
        let draft = ContentDraft {
            id: Some("42".to_string()),
            content_type: "article".to_string(),
            title: "T".to_string(),
            language: "en".to_string(),
            content_category: "news".to_string(),
            background_image: vec!["bg-1".to_string()],
            media_content: "video.mp4".to_string(),
            content_is_original: true,
            auto_translate: false,
            description: "d".to_string(),
            content_text: "body".to_string(),
        };

        let body = serde_json::to_value(draft.to_record()).unwrap();

        assert_eq!(body["type"], "article");
        assert_eq!(body["title"], "T");
        assert_eq!(body["language"], "en");
        assert_eq!(body["content_category"], "news");
        assert_eq!(body["background_image"][0], "bg-1");
        assert_eq!(body["media_content"], "video.mp4");
        assert_eq!(body["content_is_original"], true);
        assert_eq!(body["auto_translate"], false);
        assert_eq!(body["description"], "d");
        assert_eq!(body["content_text"], "body");
        assert_eq!(body["id"], "42");
    }

    #[test]
    fn merge_record_maps_wire_names_into_the_draft() {
        let record: ContentRecord = serde_json::from_str(
            r#"{"id":"42","type":"article","title":"T","content_category":"news"}"#,
        )
        .unwrap();

        let mut draft = ContentDraft {
            media_content: "keep-me".to_string(),
            ..ContentDraft::default()
        };
        draft.merge_record(&record);

        assert_eq!(draft.id.as_deref(), Some("42"));
        assert_eq!(draft.content_type, "article");
        assert_eq!(draft.title, "T");
        assert_eq!(draft.content_category, "news");
        // absent in the record, preserved
        assert_eq!(draft.media_content, "keep-me");
        assert!(!draft.content_is_original);
    }

    #[test]
    fn toggles_accept_only_toggle_values() {
        let mut draft = ContentDraft::default();

        draft
            .apply(ContentField::AutoTranslate, FieldValue::Toggle(true))
            .unwrap();
        assert!(draft.auto_translate);

        let err = draft
            .apply(ContentField::AutoTranslate, FieldValue::text("yes"))
            .unwrap_err();
        assert_eq!(err.field, "auto_translate");
        assert!(draft.auto_translate);
    }
}
