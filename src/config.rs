//! Configuration for model construction and the sorting rig
//!
//! Configuration can be loaded from JSON files or constructed
//! programmatically:
//!
//! ```no_run
//! use cube_sorter::SorterConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = SorterConfig::from_json_file(Path::new("sorter.json"))?;
//!
//! // Or use the defaults for the physical rig
//! let config = SorterConfig::default_rig();
//! # Ok::<(), cube_sorter::SortError>(())
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::constants::{sensing, sources};
use crate::error::{Result, SortError};

/// Complete configuration for one sorting session.
///
/// Can be serialized to/from JSON for reproducible calibration runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SorterConfig {
    /// Training sample source file, one per color
    pub sample_sources: BTreeMap<Color, PathBuf>,

    /// Sensor polling window per classification attempt, in milliseconds
    pub measurement_window_ms: u64,
}

impl SorterConfig {
    /// Default configuration for the physical rig: bundled sample data and
    /// the standard 1.5 s measurement window.
    pub fn default_rig() -> Self {
        Self::with_sample_dir(sources::DEFAULT_SAMPLE_DIR)
    }

    /// Configuration reading `<color>_data.csv` sample files from `dir`
    pub fn with_sample_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        let sample_sources = Color::ALL
            .into_iter()
            .map(|color| {
                let file = format!("{}{}", color, sources::SAMPLE_FILE_SUFFIX);
                (color, dir.join(file))
            })
            .collect();

        Self {
            sample_sources,
            measurement_window_ms: sensing::MEASUREMENT_WINDOW.as_millis() as u64,
        }
    }

    /// The sensor polling window as a [`Duration`]
    pub fn measurement_window(&self) -> Duration {
        Duration::from_millis(self.measurement_window_ms)
    }

    /// Load configuration from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| SortError::data_with(format!("cannot read config {}", path.display()), e))?;
        serde_json::from_str(&content)
            .map_err(|e| SortError::data_with(format!("cannot parse config {}", path.display()), e))
    }

    /// Save configuration to a JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| SortError::data_with("cannot serialize config", e))?;
        fs::write(path, json)
            .map_err(|e| SortError::data_with(format!("cannot write config {}", path.display()), e))
    }
}
