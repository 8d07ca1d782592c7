//! Error types raised while assembling behavior trees.
//!
//! Every error here is a construction mistake made by the caller. Errors are
//! detected synchronously by the attaching call and the tree being built is
//! left exactly as it was before the rejected call.

use thiserror::Error;

/// The structural rule a rejected attachment would have broken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum StructureViolation {
    #[error("composite cannot contain a root")]
    RootInComposite,

    #[error("task cannot have children")]
    ChildOfTask,

    #[error("root holds a single child, use set_child")]
    ChildOfRoot,

    #[error("root cannot contain another root")]
    RootInRoot,
}

/// Errors surfaced by tree construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("invalid structure: {0}")]
    InvalidStructure(#[from] StructureViolation),

    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}

impl TreeError {
    /// Returns the violated rule if this is a structural error.
    pub const fn violation(&self) -> Option<StructureViolation> {
        match self {
            Self::InvalidStructure(violation) => Some(*violation),
            Self::InvalidArgument(_) => None,
        }
    }

    /// Returns true for [`TreeError::InvalidStructure`].
    pub const fn is_invalid_structure(&self) -> bool {
        matches!(self, Self::InvalidStructure(_))
    }

    /// Returns true for [`TreeError::InvalidArgument`].
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

pub type Result<T> = std::result::Result<T, TreeError>;
