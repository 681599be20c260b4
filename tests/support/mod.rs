// Shared test doubles used by multiple integration test binaries. Individual
// binaries only use a subset, so silence dead_code noise at the module level.
#[allow(dead_code, unused_imports)]
pub mod mocks;

#[allow(unused_imports)]
pub use mocks::*;
