//! Validated names for parts, groups and variants.

use std::{borrow::Borrow, fmt};

use crate::error::{Error, Result};

/// A non-empty, whitespace-trimmed identifier.
///
/// Part names come from the scene graph; group and variant names come from
/// user input. Both go through [`Name::new`], so an empty name can never be
/// stored in the state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    /// Create a name, trimming surrounding whitespace.
    ///
    /// Fails with [`Error::EmptyName`] if nothing is left after trimming.
    pub fn new(value: impl AsRef<str>) -> Result<Self> {
        Self::for_kind(value, "part")
    }

    /// Like [`Name::new`], but reports `what` in the error.
    pub fn for_kind(value: impl AsRef<str>, what: &'static str) -> Result<Self> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(Error::EmptyName { what });
        }
        Ok(Self(trimmed.to_string()))
    }

    /// The name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Label shown in the UI: underscores and dashes become spaces.
    #[must_use]
    pub fn display_label(&self) -> String {
        self.0.replace(['_', '-'], " ")
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Name {
    fn borrow(&self) -> &str {
        &self.0
    }
}
