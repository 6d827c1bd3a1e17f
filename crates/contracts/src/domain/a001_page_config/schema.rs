use crate::domain::common::{FieldRule, ObjectSchema};

use super::aggregate::PageConfigField;

/// Validation rules for the page-config dialog, one rule per editable field.
pub static PAGE_CONFIG_SCHEMA: ObjectSchema<PageConfigField> = ObjectSchema::new(&[
    FieldRule::required(PageConfigField::PageType, "Page Type is required"),
    FieldRule::required(PageConfigField::Name, "name is required"),
    FieldRule::required(PageConfigField::HeaderText, "Header text is required"),
    FieldRule::required(PageConfigField::Parent, "parent is required"),
    FieldRule::required(PageConfigField::Description, "description is required"),
    FieldRule::required(PageConfigField::Language, "language is required"),
    FieldRule::optional(PageConfigField::PageUrl),
    FieldRule::optional(PageConfigField::HeaderImage),
    FieldRule::optional(PageConfigField::OrderNumber),
]);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::{FieldValue, FormDraft};
    use crate::domain::a001_page_config::aggregate::PageConfigDraft;

    const REQUIRED: [PageConfigField; 6] = [
        PageConfigField::PageType,
        PageConfigField::Name,
        PageConfigField::HeaderText,
        PageConfigField::Parent,
        PageConfigField::Description,
        PageConfigField::Language,
    ];

    #[test]
    fn an_empty_required_field_reports_its_fixed_message() {
        let err = PAGE_CONFIG_SCHEMA
            .validate_value(PageConfigField::PageType, &FieldValue::text(""))
            .unwrap_err();
        assert_eq!(err, "Page Type is required");

        assert!(PAGE_CONFIG_SCHEMA
            .validate_value(PageConfigField::PageType, &FieldValue::text("landing"))
            .is_ok());
    }

    #[test]
    fn optional_fields_accept_blank_values() {
        assert!(PAGE_CONFIG_SCHEMA
            .validate_value(PageConfigField::PageUrl, &FieldValue::text(""))
            .is_ok());
        assert!(PAGE_CONFIG_SCHEMA
            .validate_value(PageConfigField::HeaderImage, &FieldValue::Images(vec![]))
            .is_ok());
    }

    #[test]
    fn whole_object_validation_collects_every_required_field() {
        let errors = PAGE_CONFIG_SCHEMA
            .validate(&PageConfigDraft::default())
            .unwrap_err();

        assert_eq!(errors.error_count(), REQUIRED.len());
        for field in REQUIRED {
            assert!(errors.message(field).is_some(), "missing {:?}", field);
        }
        assert_eq!(errors.message(PageConfigField::PageUrl), None);
        assert_eq!(errors.message(PageConfigField::OrderNumber), None);
    }

    #[test]
    fn a_filled_field_drops_out_of_the_aggregate_errors() {
        let mut draft = PageConfigDraft::default();
        draft
            .apply(PageConfigField::Name, FieldValue::text("Home"))
            .unwrap();

        let errors = PAGE_CONFIG_SCHEMA.validate(&draft).unwrap_err();

        assert_eq!(errors.message(PageConfigField::Name), None);
        for field in REQUIRED.into_iter().filter(|f| *f != PageConfigField::Name) {
            assert!(errors.message(field).is_some(), "missing {:?}", field);
        }
    }

    #[test]
    fn a_fully_filled_draft_validates_clean() {
        let mut draft = PageConfigDraft::default();
        for (field, value) in [
            (PageConfigField::PageType, "landing"),
            (PageConfigField::Name, "Home"),
            (PageConfigField::HeaderText, "Welcome"),
            (PageConfigField::Parent, "root"),
            (PageConfigField::Description, "Landing page"),
            (PageConfigField::Language, "en"),
        ] {
            draft.apply(field, FieldValue::text(value)).unwrap();
        }

        assert!(PAGE_CONFIG_SCHEMA.validate(&draft).is_ok());
    }
}
