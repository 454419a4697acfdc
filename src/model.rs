use std::fmt;

use serde::{Deserialize, Serialize};

/// One bookmarked site, as persisted in the store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
    pub name: String,
    pub url: String,
}

impl Site {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }

    pub fn name_matches(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

/// True when `url` looks like `http://...` or `https://...` with a non-empty rest.
pub fn is_site_url(url: &str) -> bool {
    url.strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .is_some_and(|rest| !rest.is_empty())
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SiteError {
    InvalidUrl { url: String },
    DuplicateName { name: String },
    NotFound { name: String },
    Storage(String),
}

impl fmt::Display for SiteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteError::InvalidUrl { .. } => {
                write!(f, "mkdir: invalid URL format. Use: mkdir https://site.com sitename")
            }
            SiteError::DuplicateName { name } => write!(f, "mkdir: site '{}' already exists", name),
            SiteError::NotFound { name } => {
                write!(f, "rm: cannot remove '{}': No such site", name)
            }
            SiteError::Storage(msg) => write!(f, "storage error: {}", msg),
        }
    }
}

impl std::error::Error for SiteError {}

#[cfg(test)]
#[path = "tests/model_tests.rs"]
mod tests;
