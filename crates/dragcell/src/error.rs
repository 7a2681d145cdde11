use crate::slot::Slot;

/// Errors returned when a move addresses a slot the collection does not have.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReorderError {
    /// The section does not exist.
    SectionOutOfBounds { section: usize, section_count: usize },

    /// The index is past the end of its section.
    IndexOutOfBounds { slot: Slot, len: usize },
}

impl std::fmt::Display for ReorderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReorderError::SectionOutOfBounds {
                section,
                section_count,
            } => write!(
                f,
                "Section {} is out of bounds (collection has {} sections)",
                section, section_count
            ),
            ReorderError::IndexOutOfBounds { slot, len } => {
                write!(f, "Slot {} is out of bounds (section length: {})", slot, len)
            }
        }
    }
}

impl std::error::Error for ReorderError {}

/// Result type for reorder operations.
pub type ReorderResult<T> = Result<T, ReorderError>;
