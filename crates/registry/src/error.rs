use crate::TypeDescriptor;

/// Registration refused because the name is already taken.
///
/// The registry is left untouched. The descriptor that was offered is
/// carried back so the caller decides its fate.
#[derive(Debug, thiserror::Error)]
#[error("type name {name:?} is already registered")]
pub struct DuplicateType {
	name: String,
	instance: Box<dyn TypeDescriptor>,
}

impl DuplicateType {
	pub(crate) fn new(name: String, instance: Box<dyn TypeDescriptor>) -> Self {
		Self { name, instance }
	}

	/// The contested name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// The rejected descriptor.
	pub fn instance(&self) -> &dyn TypeDescriptor {
		&*self.instance
	}

	/// Returns ownership of the rejected descriptor.
	pub fn into_instance(self) -> Box<dyn TypeDescriptor> {
		self.instance
	}
}

/// Errors from the process-wide registry in [`global`](crate::global).
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
	#[error(transparent)]
	Duplicate(#[from] DuplicateType),

	#[error("type registry is already installed")]
	AlreadyInstalled,

	/// No registry is installed. Carries the descriptor of a refused
	/// registration, if there was one.
	#[error("type registry is not installed")]
	NotInstalled { rejected: Option<Box<dyn TypeDescriptor>> },
}

impl RegistryError {
	/// Returns ownership of the descriptor a failed registration refused, if any.
	pub fn into_rejected(self) -> Option<Box<dyn TypeDescriptor>> {
		match self {
			Self::Duplicate(duplicate) => Some(duplicate.into_instance()),
			Self::NotInstalled { rejected } => rejected,
			Self::AlreadyInstalled => None,
		}
	}

	pub(crate) fn not_installed() -> Self {
		Self::NotInstalled { rejected: None }
	}
}
