//! Shared types used across appicons.
//! Includes `Platform`, the resolved `IconSpec` rows, and the per-file and
//! per-platform reports produced by a generation run.
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Android,
    Ios,
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Platform::Android => write!(f, "Android"),
            Platform::Ios => write!(f, "iOS"),
        }
    }
}

/// One icon to produce: output path relative to the project root and its edge length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IconSpec {
    pub platform: Platform,
    pub path: PathBuf,
    pub size: u32,
}

/// Result of writing a single icon
#[derive(Debug, Clone, Serialize)]
pub struct IconOutcome {
    pub path: PathBuf,
    pub size: u32,
    pub error: Option<String>, // None on success
}

impl IconOutcome {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PlatformReport {
    pub platform: Platform,
    pub outcomes: Vec<IconOutcome>,
}

impl PlatformReport {
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            outcomes: Vec::new(),
        }
    }

    pub fn generated(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_ok()).count()
    }

    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    /// True when every icon of the platform was written.
    pub fn is_complete(&self) -> bool {
        self.generated() == self.total()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    pub android: PlatformReport,
    pub ios: PlatformReport,
}

impl GenerationReport {
    pub fn is_complete(&self) -> bool {
        self.android.is_complete() && self.ios.is_complete()
    }
}
