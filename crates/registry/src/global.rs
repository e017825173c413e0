//! Process-wide type registry with an explicit lifecycle.
//!
//! # Role
//!
//! Hosts one [`TypeRegistry`] for the whole process. It exists only between
//! [`install`] and [`teardown`]; every operation in between goes through a
//! single mutex held alongside the registry.
//!
//! # Caller obligations
//!
//! - The lock is not re-entrant. Calling any function in this module from
//!   inside a [`with`], [`with_mut`] or [`with_type_instance`] closure
//!   deadlocks.
//! - Descriptors are dropped only after the lock is released, so a
//!   descriptor's `Drop` may call back into this module.
//! - Borrowed descriptors are only reachable inside a closure, so they cannot
//!   outlive the lock.

use parking_lot::Mutex;

use crate::descriptor::TypeDescriptor;
use crate::error::RegistryError;
use crate::types::TypeRegistry;

static REGISTRY: Mutex<Option<TypeRegistry>> = Mutex::new(None);

/// Installs an empty process-wide registry.
pub fn install() -> Result<(), RegistryError> {
	install_with(TypeRegistry::new())
}

/// Installs `registry` as the process-wide registry.
///
/// Fails with [`RegistryError::AlreadyInstalled`] if one is live; `registry`
/// is then dropped along with its descriptors.
pub fn install_with(registry: TypeRegistry) -> Result<(), RegistryError> {
	let mut slot = REGISTRY.lock();
	if slot.is_some() {
		tracing::warn!(registry = registry.label(), "type_registry.global.install.rejected");
		return Err(RegistryError::AlreadyInstalled);
	}
	tracing::info!(registry = registry.label(), types = registry.len(), "type_registry.global.install");
	*slot = Some(registry);
	Ok(())
}

/// Tears down the process-wide registry, dropping every descriptor it owns.
///
/// Returns the number of descriptors destroyed. The lock is released before
/// any descriptor is dropped.
pub fn teardown() -> Result<usize, RegistryError> {
	let mut registry = REGISTRY.lock().take().ok_or_else(RegistryError::not_installed)?;
	let destroyed = registry.teardown();
	tracing::info!(registry = registry.label(), destroyed, "type_registry.global.teardown");
	Ok(destroyed)
}

pub fn is_installed() -> bool {
	REGISTRY.lock().is_some()
}

/// Runs `f` with shared access to the installed registry.
pub fn with<R>(f: impl FnOnce(&TypeRegistry) -> R) -> Result<R, RegistryError> {
	let slot = REGISTRY.lock();
	let registry = slot.as_ref().ok_or_else(RegistryError::not_installed)?;
	Ok(f(registry))
}

/// Runs `f` with exclusive access to the installed registry.
pub fn with_mut<R>(f: impl FnOnce(&mut TypeRegistry) -> R) -> Result<R, RegistryError> {
	let mut slot = REGISTRY.lock();
	let registry = slot.as_mut().ok_or_else(RegistryError::not_installed)?;
	Ok(f(registry))
}

/// See [`TypeRegistry::add_type`].
///
/// If no registry is installed the descriptor comes back inside
/// [`RegistryError::NotInstalled`].
pub fn add_type(name: impl Into<String>, instance: Box<dyn TypeDescriptor>) -> Result<(), RegistryError> {
	let mut slot = REGISTRY.lock();
	let Some(registry) = slot.as_mut() else {
		return Err(RegistryError::NotInstalled { rejected: Some(instance) });
	};
	registry.add_type(name, instance)?;
	Ok(())
}

/// See [`TypeRegistry::has_name`]. `false` when nothing is installed.
pub fn has_name(name: &str) -> bool {
	REGISTRY.lock().as_ref().is_some_and(|registry| registry.has_name(name))
}

/// Runs `f` with the descriptor registered under `name`, if any.
pub fn with_type_instance<R>(name: &str, f: impl FnOnce(Option<&dyn TypeDescriptor>) -> R) -> Result<R, RegistryError> {
	with(|registry| f(registry.type_instance(name)))
}

/// See [`TypeRegistry::remove_type`]. `false` when nothing is installed.
///
/// The descriptor is dropped after the lock is released, as in [`teardown`].
pub fn remove_type(name: &str) -> bool {
	let detached = REGISTRY.lock().as_mut().and_then(|registry| registry.detach_for_removal(name));
	let removed = detached.is_some();
	drop(detached);
	removed
}

/// See [`TypeRegistry::take_type`].
pub fn take_type(name: &str) -> Option<Box<dyn TypeDescriptor>> {
	REGISTRY.lock().as_mut().and_then(|registry| registry.take_type(name))
}
