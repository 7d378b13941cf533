//! Hand-written collaborator mocks shared by the integration tests.

pub mod mock_launcher;
pub mod mock_region_store;
pub mod scripted_parser;

#[allow(unused_imports)]
pub use mock_launcher::MockLauncher;
#[allow(unused_imports)]
pub use mock_region_store::MockRegionStore;
#[allow(unused_imports)]
pub use scripted_parser::ScriptedParser;
