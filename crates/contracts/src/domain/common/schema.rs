use std::hash::Hash;

use super::errors::{FieldErrors, FieldTypeMismatch};
use super::field_value::FieldValue;

/// Identifier type for the closed field set of one entity kind.
pub trait FormField: Copy + Eq + Hash + std::fmt::Debug + 'static {
    /// Field name in the draft's naming convention.
    fn name(&self) -> &'static str;
}

/// An editable draft with a closed, enumerated field set.
pub trait FormDraft {
    type Field: FormField;

    fn field_value(&self, field: Self::Field) -> FieldValue;

    /// Merge one field value into the draft. A value of the wrong kind is
    /// rejected and the draft is left untouched.
    fn apply(&mut self, field: Self::Field, value: FieldValue) -> Result<(), FieldTypeMismatch>;
}

/// One declarative rule: the field, whether it is required, and the fixed
/// message reported when the requirement fails.
pub struct FieldRule<F: 'static> {
    pub field: F,
    pub required: bool,
    pub message: &'static str,
}

impl<F> FieldRule<F> {
    pub const fn required(field: F, message: &'static str) -> Self {
        Self {
            field,
            required: true,
            message,
        }
    }

    pub const fn optional(field: F) -> Self {
        Self {
            field,
            required: false,
            message: "",
        }
    }
}

/// Declarative validation schema for one entity kind.
pub struct ObjectSchema<F: 'static> {
    rules: &'static [FieldRule<F>],
}

impl<F: FormField> ObjectSchema<F> {
    pub const fn new(rules: &'static [FieldRule<F>]) -> Self {
        Self { rules }
    }

    pub fn rule(&self, field: F) -> Option<&FieldRule<F>> {
        self.rules.iter().find(|rule| rule.field == field)
    }

    /// Validate a single value in isolation. Never touches other fields.
    pub fn validate_value(&self, field: F, value: &FieldValue) -> Result<(), &'static str> {
        match self.rule(field) {
            Some(rule) if rule.required && value.is_blank() => Err(rule.message),
            _ => Ok(()),
        }
    }

    /// Validate one field of a draft in isolation.
    pub fn validate_field<D>(&self, draft: &D, field: F) -> Result<(), &'static str>
    where
        D: FormDraft<Field = F>,
    {
        self.validate_value(field, &draft.field_value(field))
    }

    /// Validate the whole draft, collecting every failing field rather than
    /// stopping at the first.
    pub fn validate<D>(&self, draft: &D) -> Result<(), FieldErrors<F>>
    where
        D: FormDraft<Field = F>,
    {
        let mut errors = FieldErrors::new();
        for rule in self.rules {
            if let Err(message) = self.validate_value(rule.field, &draft.field_value(rule.field)) {
                errors.set(rule.field, message);
            }
        }
        if errors.has_errors() {
            Err(errors)
        } else {
            Ok(())
        }
    }
}
