//! Region store backed by a small JSON document on disk.

use super::RegionStore;
use crate::domain::Region;
use crate::error::{StoreError, StoreResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// On-disk layout of the preference file.
#[derive(Debug, Default, Serialize, Deserialize)]
struct Preferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    last_region: Option<String>,
}

/// Stores the last region in a JSON file such as `{"last_region":"DE"}`.
///
/// A missing file reads as "no region". A stored value that is not a valid
/// region is ignored with a warning rather than failing startup.
#[derive(Debug, Clone)]
pub struct JsonFileRegionStore {
    path: PathBuf,
}

impl JsonFileRegionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> StoreResult<Preferences> {
        match fs::read_to_string(&self.path) {
            Ok(contents) if contents.trim().is_empty() => Ok(Preferences::default()),
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No preference file yet");
                Ok(Preferences::default())
            }
            Err(e) => Err(e.into()),
        }
    }
}

impl RegionStore for JsonFileRegionStore {
    fn get_last_region(&self) -> StoreResult<Option<Region>> {
        let prefs = self.read()?;
        Ok(prefs.last_region.and_then(|code| match Region::new(code) {
            Ok(region) => Some(region),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Ignoring stored region");
                None
            }
        }))
    }

    fn set_last_region(&mut self, region: &Region) -> StoreResult<()> {
        // A corrupt file is replaced; any other read failure is reported.
        let mut prefs = match self.read() {
            Ok(prefs) => prefs,
            Err(StoreError::Json(e)) => {
                warn!(path = %self.path.display(), error = %e, "Overwriting corrupt preference file");
                Preferences::default()
            }
            Err(e) => return Err(e),
        };
        prefs.last_region = Some(region.as_str().to_string());

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&prefs)?)?;
        Ok(())
    }
}
