//! Bookmarked sites, kept as one JSON array under a fixed store key.
//!
//! The list is re-read from the store on every call and rewritten wholesale
//! after each mutation, so the store is the only source of truth.

use std::cell::Cell;

use tracing::{debug, warn};

use crate::model::{Site, SiteError, is_site_url};
use crate::store::KeyValueStore;

pub const SITES_KEY: &str = "kabutor_sites";

pub struct SiteRegistry<S> {
    store: S,
    /// Set once a bad read has been logged; cleared by the next good read.
    read_warned: Cell<bool>,
}

impl<S: KeyValueStore> SiteRegistry<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            read_warned: Cell::new(false),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Absent, unreadable, or malformed data all read as an empty list.
    pub fn list(&self) -> Vec<Site> {
        let raw = match self.store.get(SITES_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                self.read_warned.set(false);
                return Vec::new();
            }
            Err(err) => {
                if !self.read_warned.replace(true) {
                    warn!(error = %format!("{:#}", err), "read sites failed");
                }
                return Vec::new();
            }
        };
        match serde_json::from_str::<Vec<Site>>(&raw) {
            Ok(sites) => {
                self.read_warned.set(false);
                sites
            }
            Err(err) => {
                if !self.read_warned.replace(true) {
                    warn!(error = %err, "stored sites are malformed; treating as empty");
                }
                Vec::new()
            }
        }
    }

    pub fn add(&self, url: &str, name: &str) -> Result<Site, SiteError> {
        if !is_site_url(url) {
            return Err(SiteError::InvalidUrl {
                url: url.to_string(),
            });
        }

        let mut sites = self.list();
        if sites.iter().any(|s| s.name_matches(name)) {
            return Err(SiteError::DuplicateName {
                name: name.to_string(),
            });
        }

        let site = Site::new(name, url);
        sites.push(site.clone());
        self.save(&sites)?;
        debug!(name = %site.name, url = %site.url, count = sites.len(), "site added");
        Ok(site)
    }

    pub fn remove(&self, name: &str) -> Result<Site, SiteError> {
        let mut sites = self.list();
        let Some(idx) = sites.iter().position(|s| s.name_matches(name)) else {
            return Err(SiteError::NotFound {
                name: name.to_string(),
            });
        };

        let site = sites.remove(idx);
        self.save(&sites)?;
        debug!(name = %site.name, count = sites.len(), "site removed");
        Ok(site)
    }

    fn save(&self, sites: &[Site]) -> Result<(), SiteError> {
        let raw = serde_json::to_string(sites)
            .map_err(|err| SiteError::Storage(format!("serialize sites: {}", err)))?;
        self.store.set(SITES_KEY, &raw).map_err(|err| {
            warn!(error = %format!("{:#}", err), "write sites failed");
            SiteError::Storage(format!("{:#}", err))
        })
    }
}

#[cfg(test)]
#[path = "tests/registry_tests.rs"]
mod tests;
