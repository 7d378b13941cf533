//! Persisted preferences.
//!
//! The only preference is the last region a number validated for. It becomes
//! the default region the next time a national number is entered.

mod json_file;

pub use json_file::JsonFileRegionStore;

use crate::domain::Region;
use crate::error::StoreResult;

/// Storage for the sticky default region.
pub trait RegionStore {
    /// The last stored region, or `None` if nothing was stored yet.
    fn get_last_region(&self) -> StoreResult<Option<Region>>;

    /// Replace the stored region.
    fn set_last_region(&mut self, region: &Region) -> StoreResult<()>;
}

impl<S: RegionStore + ?Sized> RegionStore for Box<S> {
    fn get_last_region(&self) -> StoreResult<Option<Region>> {
        (**self).get_last_region()
    }

    fn set_last_region(&mut self, region: &Region) -> StoreResult<()> {
        (**self).set_last_region(region)
    }
}

/// A store that lives only as long as the process.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRegionStore {
    region: Option<Region>,
}

impl InMemoryRegionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_region(region: Region) -> Self {
        Self {
            region: Some(region),
        }
    }
}

impl RegionStore for InMemoryRegionStore {
    fn get_last_region(&self) -> StoreResult<Option<Region>> {
        Ok(self.region.clone())
    }

    fn set_last_region(&mut self, region: &Region) -> StoreResult<()> {
        self.region = Some(region.clone());
        Ok(())
    }
}
