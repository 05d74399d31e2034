// src/domain/text.rs
use crate::domain::errors::{DomainError, DomainResult};

/// Length rule for a required free-text field, counted in characters.
pub(crate) struct TextRule {
    pub field: &'static str,
    pub label: &'static str,
    pub min: usize,
    pub max: Option<usize>,
}

impl TextRule {
    pub(crate) fn check(&self, value: &str) -> DomainResult<()> {
        if value.trim().is_empty() {
            return Err(DomainError::invalid_field(
                self.field,
                format!("{} cannot be empty", self.label),
            ));
        }

        if value.contains('\0') {
            return Err(DomainError::invalid_field(
                self.field,
                format!("{} must not contain NUL characters", self.label),
            ));
        }

        let len = value.chars().count();
        match self.max {
            Some(max) if len < self.min || len > max => Err(DomainError::invalid_field(
                self.field,
                format!(
                    "{} must be between {} and {} characters",
                    self.label, self.min, max
                ),
            )),
            None if len < self.min => Err(DomainError::invalid_field(
                self.field,
                format!("{} must have at least {} characters", self.label, self.min),
            )),
            _ => Ok(()),
        }
    }
}
