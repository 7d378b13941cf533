use numroute::{Region, RegionStore, StoreError};
use std::io;
use std::sync::{Arc, Mutex};

/// Mock region store whose contents stay visible to the test after the
/// router takes ownership of a clone.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockRegionStore {
    region: Arc<Mutex<Option<Region>>>,
    writes: Arc<Mutex<Vec<Region>>>,
    fail_writes: Arc<Mutex<bool>>,
}

#[allow(dead_code)]
impl MockRegionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_region(code: &str) -> Self {
        let store = Self::new();
        *store.region.lock().unwrap() = Some(Region::new(code).unwrap());
        store
    }

    pub fn region(&self) -> Option<Region> {
        self.region.lock().unwrap().clone()
    }

    pub fn writes(&self) -> Vec<Region> {
        self.writes.lock().unwrap().clone()
    }

    pub fn fail_writes(&self) {
        *self.fail_writes.lock().unwrap() = true;
    }
}

impl RegionStore for MockRegionStore {
    fn get_last_region(&self) -> Result<Option<Region>, StoreError> {
        Ok(self.region())
    }

    fn set_last_region(&mut self, region: &Region) -> Result<(), StoreError> {
        if *self.fail_writes.lock().unwrap() {
            return Err(StoreError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "read-only preferences",
            )));
        }
        self.writes.lock().unwrap().push(region.clone());
        *self.region.lock().unwrap() = Some(region.clone());
        Ok(())
    }
}
