/// Failure of a [`DetachedCursor`](super::DetachedCursor) operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CursorError {
	/// Every handle to the container has been dropped.
	#[error("container was dropped")]
	Detached,
	/// The container was mutated after the cursor was positioned.
	#[error("container changed under the cursor: generation {observed} -> {current}")]
	Stale { observed: u64, current: u64 },
}
