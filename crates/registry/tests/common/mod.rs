//! Shared fixtures for registry integration tests.

use std::any::Any;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use sextant_registry::{TypeDescriptor, global};

/// Descriptor that records how many of its kind have been dropped.
pub struct CountedType {
	pub name: &'static str,
	pub tag: u32,
	drops: Arc<AtomicUsize>,
}

impl TypeDescriptor for CountedType {
	fn type_name(&self) -> &str {
		self.name
	}

	fn describes(&self, value: &dyn Any) -> bool {
		value.downcast_ref::<String>().is_some_and(|value| value.as_str() == self.name)
	}

	fn as_any(&self) -> &dyn Any {
		self
	}
}

impl Drop for CountedType {
	fn drop(&mut self) {
		self.drops.fetch_add(1, Ordering::SeqCst);
	}
}

/// Hands out [`CountedType`]s sharing one drop counter.
#[derive(Default)]
pub struct Factory {
	drops: Arc<AtomicUsize>,
}

impl Factory {
	pub fn make(&self, name: &'static str, tag: u32) -> Box<dyn TypeDescriptor> {
		Box::new(CountedType {
			name,
			tag,
			drops: Arc::clone(&self.drops),
		})
	}

	pub fn drops(&self) -> usize {
		self.drops.load(Ordering::SeqCst)
	}
}

pub fn tag_of(instance: &dyn TypeDescriptor) -> u32 {
	instance.as_any().downcast_ref::<CountedType>().expect("fixture descriptor").tag
}

/// Starts each test from a clean process-wide state with logging enabled.
pub fn fresh_global() {
	let _ = tracing_subscriber::fmt::try_init();
	let _ = global::teardown();
	global::install().expect("no registry should be installed");
}
