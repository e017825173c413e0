//! Ordered, duplicate-free containers with stateful external cursors.
//!
//! [`OrderedSet`] keeps its elements in ascending order and hands out
//! [`Cursor`]s that walk that order one step at a time. A cursor has an
//! explicit end sentinel and can be reset to restart a traversal against the
//! container's current contents.
//!
//! [`SharedSet`] wraps a set behind a lock for callers that need to mutate
//! while cursors are outstanding. Its [`DetachedCursor`] detects those
//! mutations and reports [`CursorError::Stale`] instead of reading stale state.

/// Borrowing cursor over an [`OrderedSet`].
pub mod cursor;
/// The ordered, duplicate-free container.
pub mod ordered_set;
/// Lock-backed container handle and generation-checked cursors.
pub mod shared;

pub use cursor::Cursor;
pub use ordered_set::OrderedSet;
pub use shared::{CursorError, DetachedCursor, SharedSet};
