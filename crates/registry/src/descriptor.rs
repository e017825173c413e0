use std::any::Any;

/// Capability shared by every descriptor stored in a [`TypeRegistry`](crate::TypeRegistry).
///
/// A descriptor is a singleton that identifies one runtime type. The registry
/// only relies on this trait; concrete descriptors live with whoever
/// registers them.
pub trait TypeDescriptor: Send + Sync + 'static {
	/// Name of the described type.
	fn type_name(&self) -> &str;

	/// Returns `true` if `value` is an instance of the described type.
	fn describes(&self, value: &dyn Any) -> bool;

	/// Exposes the concrete descriptor for downcasting.
	fn as_any(&self) -> &dyn Any;
}

impl std::fmt::Debug for dyn TypeDescriptor {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_tuple("TypeDescriptor").field(&self.type_name()).finish()
	}
}
