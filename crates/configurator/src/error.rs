//! Error types for the configurator crate.

use std::fmt;

use crate::name::Name;

/// Result type for configurator operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while editing configurator state.
///
/// Every error is recoverable: a rejected action leaves the state untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A required name was empty or only whitespace.
    EmptyName {
        /// What the name was for (e.g. "group", "variant").
        what: &'static str,
    },
    /// A group was committed without any parts.
    EmptyGroup,
    /// A group with the same name already exists.
    DuplicateGroup {
        /// The conflicting group name.
        name: Name,
    },
    /// A color string could not be parsed.
    InvalidColor {
        /// The rejected input.
        input: String,
    },
    /// A color variant was saved for a part with no color assigned.
    NoColorAssigned {
        /// The part without a color.
        part: Name,
    },
    /// The part is not in the registry.
    UnknownPart {
        /// The missing part name.
        name: String,
    },
    /// No group with this name exists.
    GroupNotFound {
        /// The missing group name.
        name: Name,
    },
    /// The group has no variant at this index.
    UnknownVariant {
        /// The group that was searched.
        group: Name,
        /// The requested index.
        index: usize,
    },
    /// The part has no saved color at this index.
    UnknownColorVariant {
        /// The part whose history was searched.
        part: Name,
        /// The requested index.
        index: usize,
    },
    /// The model failed to load.
    Load {
        /// The asset path that failed.
        path: String,
        /// The error message.
        message: String,
    },
}

impl Error {
    /// Whether this error came from model loading (and a retry makes sense).
    #[must_use]
    pub fn is_load(&self) -> bool {
        matches!(self, Error::Load { .. })
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyName { what } => write!(f, "{what} name must not be empty"),
            Error::EmptyGroup => write!(f, "a group needs at least one part"),
            Error::DuplicateGroup { name } => {
                write!(f, "a group named '{name}' already exists")
            }
            Error::InvalidColor { input } => {
                write!(f, "invalid color '{input}': expected #rrggbb")
            }
            Error::NoColorAssigned { part } => {
                write!(f, "part '{part}' has no color to save")
            }
            Error::UnknownPart { name } => write!(f, "unknown part '{name}'"),
            Error::GroupNotFound { name } => write!(f, "no group named '{name}'"),
            Error::UnknownVariant { group, index } => {
                write!(f, "group '{group}' has no variant #{index}")
            }
            Error::UnknownColorVariant { part, index } => {
                write!(f, "part '{part}' has no saved color #{index}")
            }
            Error::Load { path, message } => {
                write!(f, "failed to load model {path}: {message}")
            }
        }
    }
}

impl std::error::Error for Error {}
