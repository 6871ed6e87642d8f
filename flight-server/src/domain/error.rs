//! Domain error types.
//!
//! These errors represent validation failures and data inconsistencies
//! in the domain layer. They are distinct from API/IO errors.

use super::CategoryId;

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DomainError {
    /// A category table must define at least one category
    #[error("category table must have at least one category")]
    EmptyCategoryTable,

    /// Two profiles share the same id
    #[error("duplicate category id: {0}")]
    DuplicateCategory(CategoryId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DomainError::EmptyCategoryTable;
        assert_eq!(
            err.to_string(),
            "category table must have at least one category"
        );

        let err = DomainError::DuplicateCategory(CategoryId::parse("first").unwrap());
        assert_eq!(err.to_string(), "duplicate category id: first");
    }
}
