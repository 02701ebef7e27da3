//! Region profile catalog and keyword matching.
//!
//! Profiles are scanned in declaration order and the first one with a
//! keyword hit wins. There is no scoring across multiple hits, so a note
//! mentioning both "low back" and "neck" is treated as lumbar.

mod builtin;

use std::collections::HashSet;
use std::path::Path;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::RegionProfile;

/// Catalog loading errors.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Catalog has no region profiles")]
    EmptyCatalog,

    #[error("Profile '{region}' has an empty keyword")]
    EmptyKeyword { region: String },

    #[error("Profile '{0}' has no keywords and could never match")]
    MissingKeywords(String),

    #[error("Duplicate region: {0}")]
    DuplicateRegion(String),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

static BUILTIN: OnceLock<ProfileCatalog> = OnceLock::new();

/// The built-in catalog, constructed once per process.
pub fn builtin() -> &'static ProfileCatalog {
    BUILTIN.get_or_init(|| ProfileCatalog {
        profiles: builtin::region_profiles(),
        default: builtin::default_profile(),
    })
}

/// Ordered set of region profiles plus the fallback profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileCatalog {
    profiles: Vec<RegionProfile>,
    default: RegionProfile,
}

impl Default for ProfileCatalog {
    fn default() -> Self {
        builtin().clone()
    }
}

impl ProfileCatalog {
    /// Build a catalog from profiles in priority order.
    pub fn new(profiles: Vec<RegionProfile>, default: RegionProfile) -> CatalogResult<Self> {
        Self { profiles, default }.validated()
    }

    /// Parse a catalog from JSON.
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        let catalog: ProfileCatalog = serde_json::from_str(json)?;
        catalog.validated()
    }

    /// Load a catalog from a JSON file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> CatalogResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Profiles in match order.
    pub fn profiles(&self) -> &[RegionProfile] {
        &self.profiles
    }

    /// Fallback profile.
    pub fn default_profile(&self) -> &RegionProfile {
        &self.default
    }

    /// Select the first profile with a keyword hit, or the fallback.
    pub fn match_profile(&self, text: &str) -> &RegionProfile {
        let lower = text.to_lowercase();
        match self.profiles.iter().find(|profile| profile.matches(&lower)) {
            Some(profile) => {
                debug!(region = %profile.region, "matched region profile");
                profile
            }
            None => {
                debug!(region = %self.default.region, "no keyword hit, using default profile");
                &self.default
            }
        }
    }

    /// Lower-case keywords and reject catalogs that could never match sensibly.
    fn validated(mut self) -> CatalogResult<Self> {
        if self.profiles.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }

        let mut seen = HashSet::new();
        for profile in &mut self.profiles {
            if !seen.insert(profile.region.clone()) {
                return Err(CatalogError::DuplicateRegion(profile.region.clone()));
            }
            if profile.keywords.is_empty() {
                return Err(CatalogError::MissingKeywords(profile.region.clone()));
            }
            for keyword in &mut profile.keywords {
                let normalized = keyword.trim().to_lowercase();
                if normalized.is_empty() {
                    return Err(CatalogError::EmptyKeyword {
                        region: profile.region.clone(),
                    });
                }
                *keyword = normalized;
            }
        }

        if seen.contains(&self.default.region) {
            return Err(CatalogError::DuplicateRegion(self.default.region.clone()));
        }
        if !self.default.keywords.is_empty() {
            warn!(region = %self.default.region, "ignoring keywords on default profile");
            self.default.keywords.clear();
        }

        Ok(self)
    }
}
