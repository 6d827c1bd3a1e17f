use serde::{Deserialize, Serialize};

use crate::domain::common::{FieldTypeMismatch, FieldValue, FormDraft, FormField};

// ============================================================================
// Draft
// ============================================================================

/// Editable page configuration as held by the admin console dialog.
///
/// `Default` is the empty initial shape the form starts from and is reset to.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageConfigDraft {
    pub id: Option<String>,
    pub page_type: String,
    pub name: String,
    pub header_text: String,
    pub page_url: String,
    pub parent: String,
    pub description: String,
    pub language: String,
    pub header_image: Vec<String>,
    pub order_number: i64,
}

/// Closed set of editable page-config fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageConfigField {
    PageType,
    Name,
    HeaderText,
    PageUrl,
    Parent,
    Description,
    Language,
    HeaderImage,
    OrderNumber,
}

impl PageConfigField {
    pub const ALL: [PageConfigField; 9] = [
        PageConfigField::PageType,
        PageConfigField::Name,
        PageConfigField::HeaderText,
        PageConfigField::PageUrl,
        PageConfigField::Parent,
        PageConfigField::Description,
        PageConfigField::Language,
        PageConfigField::HeaderImage,
        PageConfigField::OrderNumber,
    ];
}

impl FormField for PageConfigField {
    fn name(&self) -> &'static str {
        match self {
            PageConfigField::PageType => "page_type",
            PageConfigField::Name => "name",
            PageConfigField::HeaderText => "header_text",
            PageConfigField::PageUrl => "page_url",
            PageConfigField::Parent => "parent",
            PageConfigField::Description => "description",
            PageConfigField::Language => "language",
            PageConfigField::HeaderImage => "header_image",
            PageConfigField::OrderNumber => "order_number",
        }
    }
}

impl FormDraft for PageConfigDraft {
    type Field = PageConfigField;

    fn field_value(&self, field: PageConfigField) -> FieldValue {
        match field {
            PageConfigField::PageType => FieldValue::Text(self.page_type.clone()),
            PageConfigField::Name => FieldValue::Text(self.name.clone()),
            PageConfigField::HeaderText => FieldValue::Text(self.header_text.clone()),
            PageConfigField::PageUrl => FieldValue::Text(self.page_url.clone()),
            PageConfigField::Parent => FieldValue::Text(self.parent.clone()),
            PageConfigField::Description => FieldValue::Text(self.description.clone()),
            PageConfigField::Language => FieldValue::Text(self.language.clone()),
            PageConfigField::HeaderImage => FieldValue::Images(self.header_image.clone()),
            PageConfigField::OrderNumber => FieldValue::Number(self.order_number),
        }
    }

    fn apply(&mut self, field: PageConfigField, value: FieldValue) -> Result<(), FieldTypeMismatch> {
        match (field, value) {
            (PageConfigField::PageType, FieldValue::Text(v)) => self.page_type = v,
            (PageConfigField::Name, FieldValue::Text(v)) => self.name = v,
            (PageConfigField::HeaderText, FieldValue::Text(v)) => self.header_text = v,
            (PageConfigField::PageUrl, FieldValue::Text(v)) => self.page_url = v,
            (PageConfigField::Parent, FieldValue::Text(v)) => self.parent = v,
            (PageConfigField::Description, FieldValue::Text(v)) => self.description = v,
            (PageConfigField::Language, FieldValue::Text(v)) => self.language = v,
            (PageConfigField::HeaderImage, FieldValue::Images(v)) => self.header_image = v,
            (PageConfigField::OrderNumber, FieldValue::Number(v)) => self.order_number = v,
            // The order field arrives as text from plain inputs; empty means
            // "back to the default ordering".
            (PageConfigField::OrderNumber, FieldValue::Text(v)) => {
                self.order_number = if v.is_empty() {
                    0
                } else {
                    v.parse().map_err(|_| FieldTypeMismatch {
                        field: field.name(),
                        given: "text",
                    })?
                };
            }
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

/// Wire shape exchanged with the protected page-config endpoints.
///
/// Every field is optional so the same shape serves request bodies (all
/// fields present) and fetch responses (the server may omit fields); absent
/// fields are skipped on serialize and preserved on merge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfigRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_image: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seq_no: Option<i64>,
}

impl PageConfigDraft {
    /// Map the draft to its wire representation; every field is present.
    pub fn to_record(&self) -> PageConfigRecord {
        PageConfigRecord {
            id: self.id.clone(),
            page_type: Some(self.page_type.clone()),
            name: Some(self.name.clone()),
            header_text: Some(self.header_text.clone()),
            page_url: Some(self.page_url.clone()),
            parent: Some(self.parent.clone()),
            description: Some(self.description.clone()),
            language: Some(self.language.clone()),
            header_image: Some(self.header_image.clone()),
            seq_no: Some(self.order_number),
        }
    }

    /// Merge a wire record into the draft. Fields absent in the record keep
    /// their current value.
    pub fn merge_record(&mut self, record: &PageConfigRecord) {
        if let Some(v) = &record.id {
            self.id = Some(v.clone());
        }
        if let Some(v) = &record.page_type {
            self.page_type = v.clone();
        }
        if let Some(v) = &record.name {
            self.name = v.clone();
        }
        if let Some(v) = &record.header_text {
            self.header_text = v.clone();
        }
        if let Some(v) = &record.page_url {
            self.page_url = v.clone();
        }
        if let Some(v) = &record.parent {
            self.parent = v.clone();
        }
        if let Some(v) = &record.description {
            self.description = v.clone();
        }
        if let Some(v) = &record.language {
            self.language = v.clone();
        }
        if let Some(v) = &record.header_image {
            self.header_image = v.clone();
        }
        if let Some(v) = record.seq_no {
            self.order_number = v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_draft() -> PageConfigDraft {
        PageConfigDraft {
            id: Some("17".to_string()),
            page_type: "landing".to_string(),
            name: "Home".to_string(),
            header_text: "Welcome".to_string(),
            page_url: "/home".to_string(),
            parent: "root".to_string(),
            description: "Landing page".to_string(),
            language: "en".to_string(),
            header_image: vec!["img-1".to_string()],
            order_number: 3,
        }
    }

    #[test]
    fn apply_replaces_exactly_one_field() {
        let mut draft = filled_draft();
        let before = draft.clone();

        draft
            .apply(PageConfigField::Name, FieldValue::text("About"))
            .unwrap();

        assert_eq!(draft.name, "About");
        assert_eq!(
            PageConfigDraft {
                name: before.name.clone(),
                ..draft.clone()
            },
            before
        );
    }

    #[test]
    fn apply_rejects_a_mismatched_kind_and_leaves_the_draft_untouched() {
        let mut draft = filled_draft();
        let before = draft.clone();

        let err = draft
            .apply(PageConfigField::Name, FieldValue::Toggle(true))
            .unwrap_err();

        assert_eq!(err.field, "name");
        assert_eq!(err.given, "toggle");
        assert_eq!(draft, before);
    }

    #[test]
    fn order_number_coerces_numeric_text() {
        let mut draft = PageConfigDraft::default();

        draft
            .apply(PageConfigField::OrderNumber, FieldValue::text("7"))
            .unwrap();
        assert_eq!(draft.order_number, 7);

        draft
            .apply(PageConfigField::OrderNumber, FieldValue::text(""))
            .unwrap();
        assert_eq!(draft.order_number, 0);

        assert!(draft
            .apply(PageConfigField::OrderNumber, FieldValue::text("seven"))
            .is_err());
        assert_eq!(draft.order_number, 0);
    }

    #[test]
    fn to_record_uses_the_wire_field_names() {
        let body = serde_json::to_value(filled_draft().to_record()).unwrap();

        assert_eq!(body["page_type"], "landing");
        assert_eq!(body["name"], "Home");
        assert_eq!(body["header_text"], "Welcome");
        assert_eq!(body["page_url"], "/home");
        assert_eq!(body["parent"], "root");
        assert_eq!(body["description"], "Landing page");
        assert_eq!(body["language"], "en");
        assert_eq!(body["header_image"][0], "img-1");
        assert_eq!(body["seq_no"], 3);
        assert_eq!(body["id"], "17");
    }

    #[test]
    fn merge_record_preserves_fields_the_record_omits() {
        let mut draft = filled_draft();
        let record: PageConfigRecord =
            serde_json::from_str(r#"{"id":"42","name":"News","seq_no":9}"#).unwrap();

        draft.merge_record(&record);

        assert_eq!(draft.id.as_deref(), Some("42"));
        assert_eq!(draft.name, "News");
        assert_eq!(draft.order_number, 9);
        // untouched by the sparse record
        assert_eq!(draft.page_type, "landing");
        assert_eq!(draft.header_image, vec!["img-1".to_string()]);
    }

    #[test]
    fn default_is_the_empty_initial_shape() {
        let draft = PageConfigDraft::default();
        assert_eq!(draft.id, None);
        assert_eq!(draft.page_type, "");
        assert_eq!(draft.header_image, Vec::<String>::new());
        assert_eq!(draft.order_number, 0);
    }
}
