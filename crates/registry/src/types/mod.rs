//! Name-keyed ownership table for type descriptors.
//!
//! # Invariants
//!
//! - At most one descriptor per name; names match exactly and case-sensitively.
//! - A registered descriptor is dropped only by [`TypeRegistry::remove_type`],
//!   [`TypeRegistry::teardown`], or dropping the registry. Ownership leaves
//!   the registry only through [`TypeRegistry::take_type`].
//! - A refused registration leaves the table unchanged and returns the
//!   offered descriptor inside [`DuplicateType`].

use std::collections::hash_map::Entry;

use rustc_hash::FxHashMap;

use crate::descriptor::TypeDescriptor;
use crate::error::DuplicateType;

#[cfg(test)]
mod tests;

const DEFAULT_LABEL: &str = "types";

/// Registry of owned type descriptors keyed by name.
///
/// Performs no locking; share it across threads behind an external lock
/// (see [`global`](crate::global)).
pub struct TypeRegistry {
	/// Name reported in log events.
	label: &'static str,
	entries: FxHashMap<String, Box<dyn TypeDescriptor>>,
}

impl Default for TypeRegistry {
	fn default() -> Self {
		Self::with_label(DEFAULT_LABEL)
	}
}

impl TypeRegistry {
	/// Creates an empty registry labelled `"types"`.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates an empty registry whose log events carry `label`.
	pub fn with_label(label: &'static str) -> Self {
		Self {
			label,
			entries: FxHashMap::default(),
		}
	}

	pub fn label(&self) -> &'static str {
		self.label
	}

	/// Registers `instance` under `name`, taking ownership of it.
	///
	/// If `name` is already registered nothing changes: the existing
	/// descriptor stays in place and `instance` comes back inside the error.
	pub fn add_type(&mut self, name: impl Into<String>, instance: Box<dyn TypeDescriptor>) -> Result<(), DuplicateType> {
		match self.entries.entry(name.into()) {
			Entry::Occupied(entry) => {
				tracing::warn!(registry = self.label, name = %entry.key(), "type_registry.add.rejected");
				Err(DuplicateType::new(entry.key().clone(), instance))
			}
			Entry::Vacant(entry) => {
				tracing::debug!(
					registry = self.label,
					name = %entry.key(),
					type_name = instance.type_name(),
					"type_registry.add"
				);
				entry.insert(instance);
				Ok(())
			}
		}
	}

	/// Returns `true` if `name` is registered.
	pub fn has_name(&self, name: &str) -> bool {
		self.entries.contains_key(name)
	}

	/// Borrows the descriptor registered under `name`.
	pub fn type_instance(&self, name: &str) -> Option<&dyn TypeDescriptor> {
		self.entries.get(name).map(|instance| &**instance)
	}

	/// Unregisters `name` and drops its descriptor.
	///
	/// Returns `false`, changing nothing, if `name` is not registered.
	pub fn remove_type(&mut self, name: &str) -> bool {
		self.detach_for_removal(name).is_some()
	}

	/// Removal without the drop, so callers holding a lock can release it
	/// before the descriptor's destructor runs.
	pub(crate) fn detach_for_removal(&mut self, name: &str) -> Option<Box<dyn TypeDescriptor>> {
		let instance = self.entries.remove(name)?;
		tracing::debug!(registry = self.label, name, "type_registry.remove");
		Some(instance)
	}

	/// Unregisters `name` and hands its descriptor back instead of dropping it.
	pub fn take_type(&mut self, name: &str) -> Option<Box<dyn TypeDescriptor>> {
		let instance = self.entries.remove(name)?;
		tracing::debug!(registry = self.label, name, "type_registry.take");
		Some(instance)
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Registered names in ascending order.
	pub fn names(&self) -> Vec<&str> {
		let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
		names.sort_unstable();
		names
	}

	/// Drops every registered descriptor and returns how many there were.
	pub fn teardown(&mut self) -> usize {
		let destroyed = self.entries.len();
		self.entries.clear();
		tracing::debug!(registry = self.label, destroyed, "type_registry.teardown");
		destroyed
	}
}

impl std::fmt::Debug for TypeRegistry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("TypeRegistry")
			.field("label", &self.label)
			.field("names", &self.names())
			.finish()
	}
}
