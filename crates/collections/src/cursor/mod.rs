use crate::ordered_set::OrderedSet;


/// A stateful cursor over an [`OrderedSet`].
///
/// A cursor is either positioned at an element of its set or at the end
/// sentinel. [`advance`](Self::advance) steps to the next element in
/// ascending order and parks at the end once the last element is passed.
/// The end is not final: [`reset`](Self::reset) moves the cursor back to
/// the current first element so the set can be walked again.
///
/// The cursor holds a shared borrow of its set. The set outlives the
/// cursor and cannot be mutated while the cursor exists.
///
/// ```
/// use sextant_collections::OrderedSet;
///
/// let set: OrderedSet<&str> = ["B", "A", "C"].into_iter().collect();
/// let mut it = set.first();
/// assert_eq!(it.value(), Some(&"A"));
/// assert!(it.advance());
/// assert!(it.advance());
/// assert!(!it.advance());
/// assert!(it.is_end());
/// it.reset();
/// assert_eq!(it.value(), Some(&"A"));
/// ```
pub struct Cursor<'a, T> {
	set: &'a OrderedSet<T>,
	/// `None` is the end sentinel.
	position: Option<&'a T>,
}

impl<'a, T> Cursor<'a, T> {
	pub(crate) fn new(set: &'a OrderedSet<T>, position: Option<&'a T>) -> Self {
		Self { set, position }
	}

	/// Returns `true` if the cursor is at the end sentinel.
	pub fn is_end(&self) -> bool {
		self.position.is_none()
	}

	/// Returns the element under the cursor, or `None` at the end.
	pub fn value(&self) -> Option<&'a T> {
		self.position
	}

	/// The set this cursor walks.
	pub fn container(&self) -> &'a OrderedSet<T> {
		self.set
	}
}

impl<'a, T: Ord> Cursor<'a, T> {
	/// Moves to the next element in ascending order.
	///
	/// Returns `true` if the cursor landed on an element. Stepping past the
	/// last element moves to the end and returns `false`; at the end this is
	/// a no-op that keeps returning `false`.
	pub fn advance(&mut self) -> bool {
		let Some(current) = self.position else {
			return false;
		};
		self.position = self.set.successor(current);
		self.position.is_some()
	}

	/// Repositions at the set's first element, or at the end if it is empty.
	pub fn reset(&mut self) {
		self.position = self.set.first_element();
	}
}

impl<T> Clone for Cursor<'_, T> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<T> Copy for Cursor<'_, T> {}

impl<T: std::fmt::Debug> std::fmt::Debug for Cursor<'_, T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self.position {
			Some(value) => f.debug_tuple("Cursor").field(value).finish(),
			None => f.write_str("Cursor(End)"),
		}
	}
}
