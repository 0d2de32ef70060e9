//! Application configuration

use crate::slip::SlipTemplate;
use std::path::PathBuf;

/// Configuration for the extraction and rendering pipeline.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory holding generated summaries between render and download
    /// (default: `./tmp`)
    pub staging_dir: PathBuf,
    /// Maximum accepted upload size in bytes (default: 5MB). Enforced by
    /// the collaborator handling uploads; recorded here so callers share
    /// one limit. The core does not re-validate it.
    pub max_upload_bytes: u64,
    /// Active capture-region table
    pub template: SlipTemplate,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            staging_dir: PathBuf::from("./tmp"),
            max_upload_bytes: 5_000_000, // 5MB
            template: SlipTemplate::bukti_potong_v1(),
        }
    }
}
