use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::text::TextRule;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentId(pub i64);

impl DocumentId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("document id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<DocumentId> for i64 {
    fn from(value: DocumentId) -> Self {
        value.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

const TITLE: TextRule = TextRule {
    field: "title",
    label: "Title",
    min: 3,
    max: Some(100),
};

const BODY: TextRule = TextRule {
    field: "body",
    label: "Body",
    min: 10,
    max: None,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentTitle(String);

impl DocumentTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        TITLE.check(&value)?;
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for DocumentTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentBody(String);

impl DocumentBody {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        BODY.check(&value)?;
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for DocumentBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_bounds() {
        assert!(DocumentTitle::new("abc").is_ok());
        assert!(DocumentTitle::new("ab").is_err());
        assert!(DocumentTitle::new("t".repeat(100)).is_ok());
        assert!(DocumentTitle::new("t".repeat(101)).is_err());
    }

    #[test]
    fn body_requires_ten_characters() {
        assert!(DocumentBody::new("0123456789").is_ok());
        match DocumentBody::new("012345678") {
            Err(DomainError::InvalidField { field, message }) => {
                assert_eq!(field, "body");
                assert_eq!(message, "Body must have at least 10 characters");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn whitespace_body_is_blank() {
        match DocumentBody::new("           ") {
            Err(DomainError::InvalidField { message, .. }) => {
                assert_eq!(message, "Body cannot be empty");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
