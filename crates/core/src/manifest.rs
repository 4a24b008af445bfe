//! Load manifests: ordered article/quantity lists.

use crate::catalog::Catalog;
use crate::geometry::ItemSpec;
use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One manifest line.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LoadEntry {
    /// The resolved article.
    pub item: ItemSpec,
    /// Number of instances to load.
    pub quantity: usize,
}

impl LoadEntry {
    /// Creates a new entry.
    pub fn new(item: ItemSpec, quantity: usize) -> Self {
        Self { item, quantity }
    }

    /// Validates quantity and item geometry.
    pub fn validate(&self) -> Result<()> {
        if self.quantity == 0 {
            return Err(Error::invalid_entry(
                self.item.id(),
                "quantity must be at least 1",
            ));
        }
        self.item.validate()
    }
}

/// Ordered list of entries to load. Duplicated articles stay separate lines.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LoadManifest {
    entries: Vec<LoadEntry>,
}

impl LoadManifest {
    /// Creates an empty manifest.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves `id` in the catalog and appends it with the given quantity.
    ///
    /// Fails for unknown identifiers, pallet bases and zero quantities; the
    /// manifest is left unchanged on error.
    pub fn add(&mut self, catalog: &impl Catalog, id: &str, quantity: usize) -> Result<()> {
        let item = catalog.lookup(id)?;

        if item.is_pallet() {
            return Err(Error::invalid_entry(id, "pallet bases cannot be loaded"));
        }

        self.push(LoadEntry::new(item.clone(), quantity))
    }

    /// Appends an already resolved entry after validating it.
    pub fn push(&mut self, entry: LoadEntry) -> Result<()> {
        entry.validate()?;
        self.entries.push(entry);
        Ok(())
    }

    /// Removes and returns the entry at `index`.
    pub fn remove(&mut self, index: usize) -> Option<LoadEntry> {
        if index < self.entries.len() {
            Some(self.entries.remove(index))
        } else {
            None
        }
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns the entries in load order.
    pub fn entries(&self) -> &[LoadEntry] {
        &self.entries
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there is nothing to load.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the total number of item instances.
    pub fn total_quantity(&self) -> usize {
        self.entries.iter().map(|e| e.quantity).sum()
    }

    /// Validates every entry.
    pub fn validate(&self) -> Result<()> {
        self.entries.iter().try_for_each(LoadEntry::validate)
    }
}

impl From<Vec<LoadEntry>> for LoadManifest {
    /// Wraps entries without validating them; packing validates defensively.
    fn from(entries: Vec<LoadEntry>) -> Self {
        Self { entries }
    }
}
