//! Lock-backed set handle whose cursors survive independently of any borrow.
//!
//! # Role
//!
//! [`SharedSet`] is for callers that mutate a set while cursors over it are
//! alive, possibly from other threads. Cursors hold only a weak reference
//! and the generation they last observed. Any mutation after that point makes
//! [`DetachedCursor::advance`] and [`DetachedCursor::value`] fail with
//! [`CursorError::Stale`] rather than walk a changed set.
//!
//! # Invariants
//!
//! - A cursor never keeps the set alive; once every [`SharedSet`] handle is
//!   dropped, cursor operations fail with [`CursorError::Detached`].
//! - [`DetachedCursor::reset`] re-reads the current contents and clears staleness.

use std::borrow::Borrow;
use std::sync::{Arc, Weak};

use parking_lot::RwLock;

use crate::ordered_set::OrderedSet;

mod error;

pub use error::CursorError;

/// A cloneable, thread-safe handle to an [`OrderedSet`].
pub struct SharedSet<T> {
	inner: Arc<RwLock<OrderedSet<T>>>,
}

impl<T> Clone for SharedSet<T> {
	fn clone(&self) -> Self {
		Self {
			inner: Arc::clone(&self.inner),
		}
	}
}

impl<T> Default for SharedSet<T> {
	fn default() -> Self {
		Self::from(OrderedSet::default())
	}
}

impl<T> From<OrderedSet<T>> for SharedSet<T> {
	fn from(set: OrderedSet<T>) -> Self {
		Self {
			inner: Arc::new(RwLock::new(set)),
		}
	}
}

impl<T: Ord> SharedSet<T> {
	/// Creates an empty shared set.
	pub fn new() -> Self {
		Self::default()
	}

	/// See [`OrderedSet::add`].
	pub fn add(&self, value: T) -> bool {
		self.inner.write().add(value)
	}

	/// See [`OrderedSet::remove`].
	pub fn remove<Q>(&self, value: &Q) -> bool
	where
		T: Borrow<Q>,
		Q: Ord + ?Sized,
	{
		self.inner.write().remove(value)
	}

	pub fn contains<Q>(&self, value: &Q) -> bool
	where
		T: Borrow<Q>,
		Q: Ord + ?Sized,
	{
		self.inner.read().contains(value)
	}
}

impl<T> SharedSet<T> {
	pub fn count(&self) -> usize {
		self.inner.read().count()
	}

	pub fn generation(&self) -> u64 {
		self.inner.read().generation()
	}

	/// Runs `f` with shared access to the underlying set.
	///
	/// The read lock is held for the duration of `f`. Inside `f`, use only the
	/// `&OrderedSet` it receives: mutating this set deadlocks, and any other
	/// call through a handle or [`DetachedCursor`] of this set takes the read
	/// lock recursively, which can deadlock once a writer is waiting.
	pub fn read<R>(&self, f: impl FnOnce(&OrderedSet<T>) -> R) -> R {
		f(&*self.inner.read())
	}
}

impl<T: Ord + Clone> SharedSet<T> {
	/// Returns a detached cursor at the smallest element, or at the end if empty.
	pub fn first(&self) -> DetachedCursor<T> {
		let set = self.inner.read();
		DetachedCursor {
			set: Arc::downgrade(&self.inner),
			observed: set.generation(),
			position: set.first().value().cloned(),
		}
	}

	/// Returns a detached cursor at the element equal to `value`, or at the end.
	pub fn find<Q>(&self, value: &Q) -> DetachedCursor<T>
	where
		T: Borrow<Q>,
		Q: Ord + ?Sized,
	{
		let set = self.inner.read();
		DetachedCursor {
			set: Arc::downgrade(&self.inner),
			observed: set.generation(),
			position: set.find(value).value().cloned(),
		}
	}
}

impl<T: std::fmt::Debug> std::fmt::Debug for SharedSet<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_tuple("SharedSet").field(&*self.inner.read()).finish()
	}
}

/// A cursor over a [`SharedSet`] that does not borrow it.
///
/// Same state machine as [`Cursor`](crate::Cursor): positioned or at the end,
/// with [`advance`](Self::advance) idempotent at the end and
/// [`reset`](Self::reset) restarting from the current first element. The
/// element under the cursor is held as a clone.
#[derive(Debug, Clone)]
pub struct DetachedCursor<T> {
	set: Weak<RwLock<OrderedSet<T>>>,
	/// Set generation at the time the cursor was last positioned.
	observed: u64,
	position: Option<T>,
}

impl<T: Ord + Clone> DetachedCursor<T> {
	/// Returns `true` if the cursor is at the end sentinel.
	///
	/// Reads only local state, so it never fails.
	pub fn is_end(&self) -> bool {
		self.position.is_none()
	}

	/// Moves to the next element; see [`Cursor::advance`](crate::Cursor::advance).
	pub fn advance(&mut self) -> Result<bool, CursorError> {
		let set = self.upgrade()?;
		let set = set.read();
		self.check_generation(&set)?;

		let Some(current) = self.position.as_ref() else {
			return Ok(false);
		};
		self.position = set.successor(current).cloned();
		Ok(self.position.is_some())
	}

	/// Returns a clone of the element under the cursor, or `None` at the end.
	pub fn value(&self) -> Result<Option<T>, CursorError> {
		let set = self.upgrade()?;
		let set = set.read();
		self.check_generation(&set)?;
		Ok(self.position.clone())
	}

	/// Repositions at the set's current first element and adopts its
	/// current generation.
	pub fn reset(&mut self) -> Result<(), CursorError> {
		let set = self.upgrade()?;
		let set = set.read();
		self.observed = set.generation();
		self.position = set.first_element().cloned();
		Ok(())
	}

	fn upgrade(&self) -> Result<Arc<RwLock<OrderedSet<T>>>, CursorError> {
		self.set.upgrade().ok_or_else(|| {
			tracing::debug!("ordered_set.cursor.detached");
			CursorError::Detached
		})
	}

	fn check_generation(&self, set: &OrderedSet<T>) -> Result<(), CursorError> {
		let current = set.generation();
		if current == self.observed {
			return Ok(());
		}
		tracing::debug!(observed = self.observed, current, "ordered_set.cursor.stale");
		Err(CursorError::Stale {
			observed: self.observed,
			current,
		})
	}
}
