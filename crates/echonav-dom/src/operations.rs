//! DOM Node Operations errors

/// Result type for DOM operations
pub type DomResult<T> = Result<T, DomError>;

/// DOM operation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    #[error("Node not found")]
    NotFound,

    #[error("Hierarchy request error")]
    HierarchyRequest,

    #[error("Invalid node type")]
    InvalidNodeType,

    #[error("Node already has a parent")]
    AlreadyAttached,

    #[error("Unsupported selector: {0}")]
    InvalidSelector(String),
}
