//! Named registry of owned type descriptors.
//!
//! A [`TypeRegistry`] maps exact, case-sensitive names to boxed
//! [`TypeDescriptor`] instances that it owns outright. Registering a taken
//! name is refused without touching the existing entry, and the rejected
//! descriptor is handed back through [`DuplicateType`]. Unregistering a name
//! destroys its descriptor.
//!
//! [`TypeRegistry`] does no locking of its own. The [`global`] module hosts
//! one process-wide instance behind a mutex with an explicit
//! [`install`](global::install) / [`teardown`](global::teardown) lifecycle.

// Dev-dependencies of the integration tests under tests/.
#[cfg(test)]
#[allow(unused_imports, reason = "silences unused_crate_dependencies for the unit test target")]
use serial_test as _;
#[cfg(test)]
#[allow(unused_imports, reason = "silences unused_crate_dependencies for the unit test target")]
use tracing_subscriber as _;

pub mod descriptor;
pub mod error;
pub mod global;
pub mod types;

pub use descriptor::TypeDescriptor;
pub use error::{DuplicateType, RegistryError};
pub use types::TypeRegistry;
