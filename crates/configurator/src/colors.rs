//! Per-part history of saved colors.

use std::collections::HashMap;

use crate::{
    color::PartColor,
    error::{Error, Result},
    name::Name,
};

/// Append-only color history, keyed by part.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColorHistory {
    saved: HashMap<Name, Vec<PartColor>>,
}

impl ColorHistory {
    /// Saved colors for a part, oldest first.
    #[must_use]
    pub fn get(&self, part: &str) -> &[PartColor] {
        self.saved.get(part).map(Vec::as_slice).unwrap_or_default()
    }

    /// Append the part's current color to its history.
    ///
    /// Nothing is recorded when the part has no color.
    pub fn save(&mut self, part: &Name, current: Option<PartColor>) -> Result<()> {
        let Some(color) = current else {
            return Err(Error::NoColorAssigned { part: part.clone() });
        };
        self.saved.entry(part.clone()).or_default().push(color);
        Ok(())
    }

    /// A saved color by index.
    pub fn entry(&self, part: &Name, index: usize) -> Result<PartColor> {
        self.get(part.as_str())
            .get(index)
            .copied()
            .ok_or_else(|| Error::UnknownColorVariant {
                part: part.clone(),
                index,
            })
    }
}
