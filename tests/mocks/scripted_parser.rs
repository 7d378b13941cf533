use numroute::validation::ParsedNumber;
use numroute::{NumberParser, Region};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Parser answering from a script keyed by the prepared input.
///
/// Inputs missing from the script are unparseable. Every call records the
/// default region it was given.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct ScriptedParser {
    script: HashMap<String, ParsedNumber>,
    seen_regions: Arc<Mutex<Vec<String>>>,
}

#[allow(dead_code)]
impl ScriptedParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn valid(mut self, input: &str, e164: &str, region: &str) -> Self {
        self.script.insert(
            input.to_string(),
            ParsedNumber {
                e164: e164.to_string(),
                is_valid: true,
                region: Some(Region::new(region).unwrap()),
            },
        );
        self
    }

    pub fn invalid(mut self, input: &str, e164: &str) -> Self {
        self.script.insert(
            input.to_string(),
            ParsedNumber {
                e164: e164.to_string(),
                is_valid: false,
                region: None,
            },
        );
        self
    }

    pub fn seen_regions(&self) -> Vec<String> {
        self.seen_regions.lock().unwrap().clone()
    }
}

impl NumberParser for ScriptedParser {
    fn parse(&self, input: &str, default_region: &Region) -> Option<ParsedNumber> {
        self.seen_regions
            .lock()
            .unwrap()
            .push(default_region.as_str().to_string());
        self.script.get(input).cloned()
    }
}
