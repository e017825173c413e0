use std::any::Any;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use rstest::rstest;

use super::*;

/// Descriptor for `T` that counts its own drops.
struct Marker {
	name: &'static str,
	tag: u32,
	drops: Arc<AtomicUsize>,
	check: fn(&dyn Any) -> bool,
}

impl Marker {
	fn boxed<T: 'static>(name: &'static str, tag: u32, drops: &Arc<AtomicUsize>) -> Box<dyn TypeDescriptor> {
		Box::new(Self {
			name,
			tag,
			drops: Arc::clone(drops),
			check: |value| value.is::<T>(),
		})
	}
}

impl TypeDescriptor for Marker {
	fn type_name(&self) -> &str {
		self.name
	}

	fn describes(&self, value: &dyn Any) -> bool {
		(self.check)(value)
	}

	fn as_any(&self) -> &dyn Any {
		self
	}
}

impl Drop for Marker {
	fn drop(&mut self) {
		self.drops.fetch_add(1, Ordering::SeqCst);
	}
}

fn tag_of(instance: &dyn TypeDescriptor) -> u32 {
	instance.as_any().downcast_ref::<Marker>().expect("registered descriptor is a Marker").tag
}

#[test]
fn add_then_lookup() {
	let drops = Arc::new(AtomicUsize::new(0));
	let mut registry = TypeRegistry::new();

	assert!(registry.add_type("int", Marker::boxed::<i32>("int", 1, &drops)).is_ok());
	assert!(registry.has_name("int"));

	let instance = registry.type_instance("int").expect("int should be registered");
	assert_eq!(instance.type_name(), "int");
	assert!(instance.describes(&7i32));
	assert!(!instance.describes(&"seven"));
	assert_eq!(registry.len(), 1);
	assert_eq!(drops.load(Ordering::SeqCst), 0);
}

/// A second registration under a taken name is refused, hands the new
/// descriptor back, and leaves the original in place.
#[test]
fn duplicate_name_keeps_original() {
	let drops = Arc::new(AtomicUsize::new(0));
	let mut registry = TypeRegistry::new();

	assert!(registry.add_type("Foo", Marker::boxed::<u8>("Foo", 1, &drops)).is_ok());
	let err = registry
		.add_type("Foo", Marker::boxed::<u8>("Foo", 2, &drops))
		.expect_err("duplicate should be rejected");

	assert_eq!(err.name(), "Foo");
	assert_eq!(err.to_string(), r#"type name "Foo" is already registered"#);
	assert_eq!(tag_of(err.instance()), 2);
	assert_eq!(tag_of(registry.type_instance("Foo").unwrap()), 1);
	assert_eq!(registry.len(), 1);
	assert_eq!(drops.load(Ordering::SeqCst), 0, "nothing is dropped on rejection");

	let returned = err.into_instance();
	assert_eq!(tag_of(&*returned), 2);
	drop(returned);
	assert_eq!(drops.load(Ordering::SeqCst), 1);
}

#[test]
fn remove_destroys_instance() {
	let drops = Arc::new(AtomicUsize::new(0));
	let mut registry = TypeRegistry::new();
	registry.add_type("Foo", Marker::boxed::<u8>("Foo", 1, &drops)).unwrap();

	assert!(registry.remove_type("Foo"));
	assert_eq!(drops.load(Ordering::SeqCst), 1);
	assert!(!registry.has_name("Foo"));
	assert!(registry.type_instance("Foo").is_none());
	assert!(registry.is_empty());
}

#[test]
fn remove_unknown_name_is_noop() {
	let drops = Arc::new(AtomicUsize::new(0));
	let mut registry = TypeRegistry::new();
	registry.add_type("Foo", Marker::boxed::<u8>("Foo", 1, &drops)).unwrap();

	assert!(!registry.remove_type("Bar"));
	assert!(!registry.has_name("Bar"));
	assert!(registry.has_name("Foo"));
	assert_eq!(drops.load(Ordering::SeqCst), 0);
}

#[test]
fn name_can_be_reused_after_removal() {
	let drops = Arc::new(AtomicUsize::new(0));
	let mut registry = TypeRegistry::new();
	registry.add_type("Foo", Marker::boxed::<u8>("Foo", 1, &drops)).unwrap();
	registry.remove_type("Foo");

	assert!(registry.add_type("Foo", Marker::boxed::<u8>("Foo", 2, &drops)).is_ok());
	assert_eq!(tag_of(registry.type_instance("Foo").unwrap()), 2);
}

#[test]
fn take_returns_ownership() {
	let drops = Arc::new(AtomicUsize::new(0));
	let mut registry = TypeRegistry::new();
	registry.add_type("Foo", Marker::boxed::<u8>("Foo", 9, &drops)).unwrap();

	let taken = registry.take_type("Foo").expect("Foo should be registered");
	assert!(!registry.has_name("Foo"));
	assert_eq!(drops.load(Ordering::SeqCst), 0);
	assert!(taken.as_any().is::<Marker>());
	assert_eq!(tag_of(&*taken), 9);
	assert!(registry.take_type("Foo").is_none());
}

#[rstest]
#[case("Foo", true)]
#[case("foo", false)]
#[case("FOO", false)]
#[case("Fo", false)]
#[case("Foo ", false)]
#[case("", false)]
fn lookups_are_exact(#[case] name: &str, #[case] found: bool) {
	let drops = Arc::new(AtomicUsize::new(0));
	let mut registry = TypeRegistry::new();
	registry.add_type("Foo", Marker::boxed::<u8>("Foo", 1, &drops)).unwrap();

	assert_eq!(registry.has_name(name), found);
	assert_eq!(registry.type_instance(name).is_some(), found);
}

#[test]
fn names_are_sorted() {
	let drops = Arc::new(AtomicUsize::new(0));
	let mut registry = TypeRegistry::with_label("test");
	for name in ["string", "int", "float"] {
		registry.add_type(name, Marker::boxed::<()>(name, 0, &drops)).unwrap();
	}

	assert_eq!(registry.names(), vec!["float", "int", "string"]);
	assert_eq!(registry.label(), "test");
	assert_eq!(
		format!("{registry:?}"),
		r#"TypeRegistry { label: "test", names: ["float", "int", "string"] }"#
	);
}

#[test]
fn teardown_destroys_everything() {
	let drops = Arc::new(AtomicUsize::new(0));
	let mut registry = TypeRegistry::new();
	for name in ["a", "b", "c"] {
		registry.add_type(name, Marker::boxed::<()>(name, 0, &drops)).unwrap();
	}

	assert_eq!(registry.teardown(), 3);
	assert_eq!(drops.load(Ordering::SeqCst), 3);
	assert!(registry.is_empty());
	assert_eq!(registry.teardown(), 0);
}

#[test]
fn dropping_registry_destroys_instances() {
	let drops = Arc::new(AtomicUsize::new(0));
	{
		let mut registry = TypeRegistry::new();
		registry.add_type("a", Marker::boxed::<()>("a", 0, &drops)).unwrap();
		registry.add_type("b", Marker::boxed::<()>("b", 0, &drops)).unwrap();
	}
	assert_eq!(drops.load(Ordering::SeqCst), 2);
}
