use numroute::{LaunchError, TargetApp, UriLauncher};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

/// Mock launcher recording every link it is handed.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockLauncher {
    launched: Arc<Mutex<Vec<(TargetApp, String)>>>,
    shared: Arc<Mutex<Vec<String>>>,
    missing: Arc<Mutex<HashSet<TargetApp>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `app` behave as if it were not installed.
    pub fn uninstall(&self, app: TargetApp) {
        self.missing.lock().unwrap().insert(app);
    }

    pub fn launched(&self) -> Vec<(TargetApp, String)> {
        self.launched.lock().unwrap().clone()
    }

    pub fn shared(&self) -> Vec<String> {
        self.shared.lock().unwrap().clone()
    }

    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl UriLauncher for MockLauncher {
    fn launch(&mut self, app: TargetApp, uri: &str) -> Result<(), LaunchError> {
        self.track_call("launch");
        if self.missing.lock().unwrap().contains(&app) {
            return Err(LaunchError::NotFound);
        }
        self.launched.lock().unwrap().push((app, uri.to_string()));
        Ok(())
    }

    fn share_text(&mut self, text: &str) -> Result<(), LaunchError> {
        self.track_call("share_text");
        self.shared.lock().unwrap().push(text.to_string());
        Ok(())
    }
}
