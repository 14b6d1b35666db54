//! The site catalog.
//!
//! A `Catalog` is the immutable, ordered collection of heritage sites the
//! whole application works against. It is built once at startup from the
//! embedded dataset and never mutated afterwards; every consumer shares
//! the same `Arc<Site>` records.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::{InvalidCoordinates, InvalidSiteKey, Site, SiteKey};

mod karnataka;

pub use karnataka::karnataka_catalog;

/// Error raised while building a catalog.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CatalogError {
    /// Two sites share the same key.
    #[error("duplicate site key: {0}")]
    DuplicateKey(SiteKey),

    /// A site key failed validation.
    #[error(transparent)]
    InvalidKey(#[from] InvalidSiteKey),

    /// A coordinate pair failed validation.
    #[error(transparent)]
    InvalidCoordinates(#[from] InvalidCoordinates),
}

/// An ordered, key-unique collection of sites.
#[derive(Debug, Clone)]
pub struct Catalog {
    sites: Vec<Arc<Site>>,
    by_key: HashMap<SiteKey, usize>,
}

impl Catalog {
    /// Build a catalog from a list of sites, preserving order.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateKey` if two sites share a key.
    pub fn new(sites: Vec<Site>) -> Result<Self, CatalogError> {
        let mut by_key = HashMap::with_capacity(sites.len());
        let sites: Vec<Arc<Site>> = sites.into_iter().map(Arc::new).collect();

        for (idx, site) in sites.iter().enumerate() {
            if by_key.insert(site.key.clone(), idx).is_some() {
                return Err(CatalogError::DuplicateKey(site.key.clone()));
            }
        }

        Ok(Catalog { sites, by_key })
    }

    /// Look up a site by key.
    pub fn get(&self, key: &SiteKey) -> Option<&Arc<Site>> {
        self.by_key.get(key).map(|&idx| &self.sites[idx])
    }

    /// All sites in catalog order.
    pub fn sites(&self) -> &[Arc<Site>] {
        &self.sites
    }

    /// Iterate over sites in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Site>> {
        self.sites.iter()
    }

    /// Number of sites in the catalog.
    pub fn len(&self) -> usize {
        self.sites.len()
    }

    /// Returns true if the catalog has no sites.
    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }
}
