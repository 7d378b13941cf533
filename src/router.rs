//! The number routing pipeline.
//!
//! `NumberRouter` chains acquisition, validation and link building around a
//! single "current number". Each user action overwrites that number wholesale;
//! nothing is merged and no state survives a failed step except the number
//! itself, so every action can simply be retried.

use crate::acquisition::AcquisitionEvent;
use crate::domain::{CanonicalNumber, Region, ShareMessage, TargetApp};
use crate::error::{RouterError, RouterResult};
use crate::launcher::{LaunchError, UriLauncher};
use crate::links::{build_link, LinkKind};
use crate::store::RegionStore;
use crate::validation::{NumberParser, Validation, Validator};
use tracing::{debug, info, warn};

/// Result of an open or share action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// The link that was handed to the launcher.
    pub uri: String,

    /// Validation of the number the link was built from. An invalid number
    /// does not stop the link; callers show the error alongside it.
    pub validation: Validation,
}

/// Routes phone numbers into messaging apps.
pub struct NumberRouter<S, P> {
    store: S,
    validator: Validator<P>,
    default_region: Region,
    current: CanonicalNumber,
}

impl<S: RegionStore, P: NumberParser> NumberRouter<S, P> {
    /// Create a router, reading the default region from `store` once.
    ///
    /// `fallback_region` is used when the store holds no region yet.
    ///
    /// # Errors
    ///
    /// Returns `RouterError::Store` if the store cannot be read.
    pub fn new(store: S, parser: P, fallback_region: Region) -> RouterResult<Self> {
        let default_region = store.get_last_region()?.unwrap_or(fallback_region);
        debug!(region = %default_region, "Router default region");

        Ok(Self {
            store,
            validator: Validator::new(parser),
            default_region,
            current: CanonicalNumber::empty(),
        })
    }

    /// The number the next action will use.
    pub fn current_number(&self) -> &CanonicalNumber {
        &self.current
    }

    /// The region national numbers are read as.
    pub fn default_region(&self) -> &Region {
        &self.default_region
    }

    /// The injected region store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Replace the current number with the one carried by `event`.
    ///
    /// # Errors
    ///
    /// Returns `RouterError::EmptyClipboard` for a paste without text; the
    /// current number is left unchanged in that case.
    pub fn acquire(&mut self, event: &AcquisitionEvent) -> RouterResult<&CanonicalNumber> {
        self.current = event.extract()?;
        Ok(&self.current)
    }

    /// Validate the current number against the default region.
    ///
    /// A valid number makes its region the new default and persists it. The
    /// current number is replaced by the validation value either way, so a
    /// failed validation leaves the best-effort formatting in place.
    pub fn submit(&mut self) -> Validation {
        let validation = self
            .validator
            .validate(self.current.as_str(), &self.default_region);

        if let Some(region) = validation.region.as_ref().filter(|_| validation.is_valid) {
            self.remember_region(region);
        }

        self.current = validation.value.clone();
        validation
    }

    fn remember_region(&mut self, region: &Region) {
        if let Err(e) = self.store.set_last_region(region) {
            warn!(region = %region, error = %e, "Failed to persist region");
        }
        if *region != self.default_region {
            info!(from = %self.default_region, to = %region, "Default region changed");
            self.default_region = region.clone();
        }
    }

    /// Validate the current number and build a link without launching it.
    pub fn link(
        &mut self,
        app: TargetApp,
        message: Option<&ShareMessage>,
        kind: LinkKind,
    ) -> RouterResult<Outcome> {
        let validation = self.submit();
        let uri = build_link(app, &self.current, message, kind)?;
        Ok(Outcome { uri, validation })
    }

    /// Open a chat with the current number in `app`.
    ///
    /// # Errors
    ///
    /// - `RouterError::AppNotFound(app)` when the app is not installed
    /// - link building errors from [`build_link`]
    pub fn open<L: UriLauncher>(
        &mut self,
        app: TargetApp,
        message: Option<&ShareMessage>,
        launcher: &mut L,
    ) -> RouterResult<Outcome> {
        let outcome = self.link(app, message, LinkKind::Open)?;

        launcher
            .launch(app, &outcome.uri)
            .map_err(|e| match e {
                LaunchError::NotFound => RouterError::AppNotFound(app),
                LaunchError::Failed(reason) => RouterError::Launch(reason),
            })?;

        info!(%app, valid = outcome.validation.is_valid, "Opened chat link");
        Ok(outcome)
    }

    /// Share a WhatsApp web link for the current number through the host's
    /// share sheet.
    pub fn share<L: UriLauncher>(
        &mut self,
        message: Option<&ShareMessage>,
        launcher: &mut L,
    ) -> RouterResult<Outcome> {
        let outcome = self.link(TargetApp::WhatsApp, message, LinkKind::Share)?;

        launcher.share_text(&outcome.uri).map_err(|e| match e {
            LaunchError::NotFound => RouterError::Launch("no share target available".to_string()),
            LaunchError::Failed(reason) => RouterError::Launch(reason),
        })?;

        info!(valid = outcome.validation.is_valid, "Shared chat link");
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryRegionStore;
    use crate::validation::ParsedNumber;

    /// Treats `+49...` as valid German numbers and everything else as invalid.
    struct GermanOnly;

    impl NumberParser for GermanOnly {
        fn parse(&self, input: &str, _default_region: &Region) -> Option<ParsedNumber> {
            let digits = CanonicalNumber::normalize(input);
            if digits.is_empty() {
                return None;
            }
            let is_valid = digits.as_str().starts_with("+49");
            Some(ParsedNumber {
                e164: digits.into_inner(),
                is_valid,
                region: is_valid.then(|| Region::new("DE").unwrap()),
            })
        }
    }

    struct Recorder {
        launched: Vec<(TargetApp, String)>,
        missing: Option<TargetApp>,
    }

    impl UriLauncher for Recorder {
        fn launch(&mut self, app: TargetApp, uri: &str) -> Result<(), LaunchError> {
            if self.missing == Some(app) {
                return Err(LaunchError::NotFound);
            }
            self.launched.push((app, uri.to_string()));
            Ok(())
        }

        fn share_text(&mut self, text: &str) -> Result<(), LaunchError> {
            self.launched.push((TargetApp::WhatsApp, text.to_string()));
            Ok(())
        }
    }

    fn router() -> NumberRouter<InMemoryRegionStore, GermanOnly> {
        NumberRouter::new(
            InMemoryRegionStore::new(),
            GermanOnly,
            Region::new("US").unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_new_prefers_stored_region() {
        let store = InMemoryRegionStore::with_region(Region::new("IN").unwrap());
        let router = NumberRouter::new(store, GermanOnly, Region::new("US").unwrap()).unwrap();
        assert_eq!(router.default_region().as_str(), "IN");
    }

    #[test]
    fn test_acquire_overwrites_number() {
        let mut router = router();
        router
            .acquire(&AcquisitionEvent::ManualEntry("+49 30 1".into()))
            .unwrap();
        router
            .acquire(&AcquisitionEvent::Dial("tel:+4940".into()))
            .unwrap();
        assert_eq!(router.current_number().as_str(), "+4940");
    }

    #[test]
    fn test_empty_clipboard_keeps_number() {
        let mut router = router();
        router
            .acquire(&AcquisitionEvent::ManualEntry("+4930".into()))
            .unwrap();
        let result = router.acquire(&AcquisitionEvent::Clipboard(None));
        assert!(matches!(result, Err(RouterError::EmptyClipboard)));
        assert_eq!(router.current_number().as_str(), "+4930");
    }

    #[test]
    fn test_submit_valid_number_makes_region_sticky() {
        let mut router = router();
        router
            .acquire(&AcquisitionEvent::ManualEntry("+49 30 1234".into()))
            .unwrap();
        let validation = router.submit();
        assert!(validation.is_valid);
        assert_eq!(router.default_region().as_str(), "DE");
        assert_eq!(
            router.store().get_last_region().unwrap().unwrap().as_str(),
            "DE"
        );
    }

    #[test]
    fn test_submit_invalid_number_keeps_value_and_region() {
        let mut router = router();
        router
            .acquire(&AcquisitionEvent::ManualEntry("+1 555".into()))
            .unwrap();
        let validation = router.submit();
        assert!(!validation.is_valid);
        assert_eq!(validation.value.as_str(), "+1555");
        assert_eq!(router.current_number().as_str(), "+1555");
        assert_eq!(router.default_region().as_str(), "US");
        assert_eq!(router.store().get_last_region().unwrap(), None);
    }

    #[test]
    fn test_open_launches_link() {
        let mut router = router();
        let mut launcher = Recorder {
            launched: Vec::new(),
            missing: None,
        };
        router
            .acquire(&AcquisitionEvent::ManualEntry("+49 151 1234".into()))
            .unwrap();
        let outcome = router
            .open(TargetApp::WhatsApp, None, &mut launcher)
            .unwrap();
        assert_eq!(outcome.uri, "whatsapp://send/?phone=491511234");
        assert_eq!(
            launcher.launched,
            vec![(TargetApp::WhatsApp, outcome.uri.clone())]
        );
    }

    #[test]
    fn test_open_invalid_number_still_launches() {
        let mut router = router();
        let mut launcher = Recorder {
            launched: Vec::new(),
            missing: None,
        };
        router
            .acquire(&AcquisitionEvent::ManualEntry("0171 555".into()))
            .unwrap();
        let outcome = router
            .open(TargetApp::WhatsApp, None, &mut launcher)
            .unwrap();
        assert!(!outcome.validation.is_valid);
        assert_eq!(outcome.uri, "whatsapp://send/?phone=171555");
    }

    #[test]
    fn test_open_missing_app_maps_to_app_not_found() {
        let mut router = router();
        let mut launcher = Recorder {
            launched: Vec::new(),
            missing: Some(TargetApp::Telegram),
        };
        router
            .acquire(&AcquisitionEvent::ManualEntry("+4930".into()))
            .unwrap();
        let err = router
            .open(TargetApp::Telegram, None, &mut launcher)
            .unwrap_err();
        assert!(matches!(err, RouterError::AppNotFound(TargetApp::Telegram)));
        assert!(err.user_message().contains("Telegram"));
    }

    #[test]
    fn test_share_uses_web_link() {
        let mut router = router();
        let mut launcher = Recorder {
            launched: Vec::new(),
            missing: None,
        };
        let msg = ShareMessage::new("hi");
        let outcome = router.share(Some(&msg), &mut launcher).unwrap();
        assert_eq!(outcome.uri, "https://api.whatsapp.com/send?text=hi");
        assert!(!outcome.validation.is_valid);
    }
}
