//! Article catalog lookup.

use crate::geometry::{ItemSpec, PalletBase};
use crate::{Error, Result};
use std::collections::HashMap;

/// Read access to a set of catalog articles.
pub trait Catalog {
    /// Returns the article with the given identifier, if present.
    fn get(&self, id: &str) -> Option<&ItemSpec>;

    /// Returns the article or [`Error::CatalogEntryMissing`].
    fn lookup(&self, id: &str) -> Result<&ItemSpec> {
        self.get(id)
            .ok_or_else(|| Error::CatalogEntryMissing(id.to_string()))
    }

    /// Resolves the article designated as pallet base.
    fn pallet_base(&self, id: &str) -> Result<PalletBase> {
        self.lookup(id).map(|spec| PalletBase::new(spec.clone()))
    }
}

/// In-memory catalog that keeps articles in insertion order.
#[derive(Debug, Clone, Default)]
pub struct ItemCatalog {
    items: Vec<ItemSpec>,
    index: HashMap<String, usize>,
}

impl ItemCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an article, replacing any previous article with the same id.
    pub fn insert(&mut self, item: ItemSpec) {
        match self.index.get(item.id()) {
            Some(&idx) => self.items[idx] = item,
            None => {
                self.index.insert(item.id().clone(), self.items.len());
                self.items.push(item);
            }
        }
    }

    /// Returns the number of articles.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the catalog has no articles.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over all articles in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ItemSpec> {
        self.items.iter()
    }

    /// Iterates over loadable articles (pallet bases excluded).
    pub fn loadable(&self) -> impl Iterator<Item = &ItemSpec> {
        self.items.iter().filter(|item| !item.is_pallet())
    }
}

impl Catalog for ItemCatalog {
    fn get(&self, id: &str) -> Option<&ItemSpec> {
        self.index.get(id).map(|&idx| &self.items[idx])
    }
}

impl FromIterator<ItemSpec> for ItemCatalog {
    fn from_iter<T: IntoIterator<Item = ItemSpec>>(iter: T) -> Self {
        let mut catalog = Self::new();
        for item in iter {
            catalog.insert(item);
        }
        catalog
    }
}
