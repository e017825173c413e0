use std::borrow::Borrow;
use std::collections::BTreeSet;
use std::collections::btree_set;

use crate::cursor::Cursor;


/// An ordered set of distinct values.
///
/// Iteration order is the ascending order defined by `T: Ord`. Elements are
/// owned by value; cursors obtained from [`first`](Self::first) and
/// [`find`](Self::find) borrow the set, so it cannot change underneath them.
#[derive(Clone)]
pub struct OrderedSet<T> {
	elements: BTreeSet<T>,
	/// Bumped once per successful `add`/`remove`.
	generation: u64,
}

impl<T> Default for OrderedSet<T> {
	fn default() -> Self {
		Self {
			elements: BTreeSet::new(),
			generation: 0,
		}
	}
}

impl<T: Ord> OrderedSet<T> {
	/// Creates an empty set.
	pub fn new() -> Self {
		Self::default()
	}

	/// Inserts `value` unless an equal element is already present.
	///
	/// Returns `true` if the value was inserted. A duplicate leaves the set
	/// untouched and returns `false`.
	pub fn add(&mut self, value: T) -> bool {
		let inserted = self.elements.insert(value);
		if inserted {
			self.generation += 1;
		}
		inserted
	}

	/// Removes the element equal to `value`, returning whether one was present.
	pub fn remove<Q>(&mut self, value: &Q) -> bool
	where
		T: Borrow<Q>,
		Q: Ord + ?Sized,
	{
		let removed = self.elements.remove(value);
		if removed {
			self.generation += 1;
		}
		removed
	}

	/// Returns `true` if an element equal to `value` is present.
	pub fn contains<Q>(&self, value: &Q) -> bool
	where
		T: Borrow<Q>,
		Q: Ord + ?Sized,
	{
		self.elements.contains(value)
	}

	/// Returns a cursor at the smallest element, or at the end if the set is empty.
	pub fn first(&self) -> Cursor<'_, T> {
		Cursor::new(self, self.elements.first())
	}

	/// Returns a cursor at the element equal to `value`, or at the end if absent.
	pub fn find<Q>(&self, value: &Q) -> Cursor<'_, T>
	where
		T: Borrow<Q>,
		Q: Ord + ?Sized,
	{
		Cursor::new(self, self.elements.get(value))
	}

	/// Smallest element strictly greater than `current`.
	pub(crate) fn successor(&self, current: &T) -> Option<&T> {
		use std::ops::Bound::{Excluded, Unbounded};

		self.elements.range::<T, _>((Excluded(current), Unbounded)).next()
	}

	pub(crate) fn first_element(&self) -> Option<&T> {
		self.elements.first()
	}
}

impl<T> OrderedSet<T> {
	/// Number of distinct elements.
	pub fn count(&self) -> usize {
		self.elements.len()
	}

	/// Alias for [`count`](Self::count).
	pub fn len(&self) -> usize {
		self.count()
	}

	pub fn is_empty(&self) -> bool {
		self.elements.is_empty()
	}

	/// Mutation counter; increases by one on every successful `add` or `remove`.
	pub fn generation(&self) -> u64 {
		self.generation
	}

	/// Iterates over the elements in ascending order.
	pub fn iter(&self) -> btree_set::Iter<'_, T> {
		self.elements.iter()
	}
}

/// Equality compares elements only; two sets with different mutation
/// histories are equal when they hold the same values.
impl<T: PartialEq> PartialEq for OrderedSet<T> {
	fn eq(&self, other: &Self) -> bool {
		self.elements == other.elements
	}
}

impl<T: Eq> Eq for OrderedSet<T> {}

impl<T: std::fmt::Debug> std::fmt::Debug for OrderedSet<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_set().entries(self.elements.iter()).finish()
	}
}

impl<T: Ord> FromIterator<T> for OrderedSet<T> {
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		let mut set = Self::new();
		set.extend(iter);
		set
	}
}

impl<T: Ord> Extend<T> for OrderedSet<T> {
	fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
		for value in iter {
			self.add(value);
		}
	}
}

impl<'a, T> IntoIterator for &'a OrderedSet<T> {
	type Item = &'a T;
	type IntoIter = btree_set::Iter<'a, T>;

	fn into_iter(self) -> Self::IntoIter {
		self.elements.iter()
	}
}
