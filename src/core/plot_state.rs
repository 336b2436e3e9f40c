use std::sync::Arc;

use parking_lot::Mutex;
use tracing::trace;

use crate::core::scalar::Scalar;
use crate::core::types::Sample;

/// Immutable copy of a series at one revision.
///
/// Cloning only bumps a reference count, so handing a snapshot from the
/// producer side to the render thread never copies samples under a lock.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesSnapshot<S> {
    samples: Arc<[Sample<S>]>,
    revision: u64,
}

impl<S> SeriesSnapshot<S> {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            samples: Arc::from(Vec::new()),
            revision: 0,
        }
    }

    #[must_use]
    pub fn samples(&self) -> &[Sample<S>] {
        &self.samples
    }

    /// Number of `replace` calls that produced this snapshot.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

impl<S> Default for SeriesSnapshot<S> {
    fn default() -> Self {
        Self::empty()
    }
}

#[derive(Debug)]
struct SeriesSlot<S> {
    snapshot: SeriesSnapshot<S>,
    dirty: bool,
}

/// Series storage shared between producers and the render thread.
///
/// Series, dirty flag and revision live behind one mutex. `replace` and
/// `consume_if_dirty` are the only critical sections and both are O(1).
/// Policy is latest-wins: a replace that lands before the render thread
/// consumes simply supersedes the previous one.
#[derive(Debug)]
pub struct SeriesState<S> {
    slot: Mutex<SeriesSlot<S>>,
}

impl<S: Scalar> SeriesState<S> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            slot: Mutex::new(SeriesSlot {
                snapshot: SeriesSnapshot::empty(),
                dirty: false,
            }),
        }
    }

    /// Replaces the stored series and marks it dirty. Callable from any thread.
    ///
    /// The caller's samples are collected before the lock is taken and the
    /// previous series is released after it is dropped.
    pub fn replace<I>(&self, series: I) -> u64
    where
        I: IntoIterator<Item = Sample<S>>,
    {
        let samples: Arc<[Sample<S>]> = series.into_iter().collect();
        let len = samples.len();

        let (previous, revision) = {
            let mut slot = self.slot.lock();
            let revision = slot.snapshot.revision.wrapping_add(1);
            let previous = std::mem::replace(
                &mut slot.snapshot,
                SeriesSnapshot { samples, revision },
            );
            slot.dirty = true;
            (previous, revision)
        };
        drop(previous);

        trace!(len, revision, "replace series snapshot");
        revision
    }

    /// Returns the current snapshot when it changed since the last call and
    /// clears the dirty flag. Render thread only.
    #[must_use]
    pub fn consume_if_dirty(&self) -> Option<SeriesSnapshot<S>> {
        let mut slot = self.slot.lock();
        if !slot.dirty {
            return None;
        }
        slot.dirty = false;
        Some(slot.snapshot.clone())
    }

    /// Current snapshot, leaving the dirty flag untouched.
    #[must_use]
    pub fn latest(&self) -> SeriesSnapshot<S> {
        self.slot.lock().snapshot.clone()
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.slot.lock().dirty
    }

    #[must_use]
    pub fn revision(&self) -> u64 {
        self.slot.lock().snapshot.revision
    }
}

impl<S: Scalar> Default for SeriesState<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::SeriesState;
    use crate::core::Sample;

    #[test]
    fn fresh_state_is_clean_and_empty() {
        let state = SeriesState::<i32>::new();
        assert!(!state.is_dirty());
        assert_eq!(state.revision(), 0);
        assert!(state.consume_if_dirty().is_none());
        assert!(state.latest().is_empty());
    }

    #[test]
    fn replace_marks_dirty_and_consume_clears_it() {
        let state = SeriesState::new();
        let revision = state.replace(vec![Sample::new(1, 2), Sample::new(3, 4)]);
        assert_eq!(revision, 1);
        assert!(state.is_dirty());

        let snapshot = state.consume_if_dirty().expect("dirty snapshot");
        assert_eq!(snapshot.samples(), &[Sample::new(1, 2), Sample::new(3, 4)]);
        assert_eq!(snapshot.revision(), 1);
        assert!(!state.is_dirty());
        assert!(state.consume_if_dirty().is_none());
    }

    #[test]
    fn latest_replace_wins_without_queueing() {
        let state = SeriesState::new();
        state.replace([Sample::new(1.0, 1.0)]);
        state.replace([Sample::new(2.0, 2.0), Sample::new(3.0, 3.0)]);

        let snapshot = state.consume_if_dirty().expect("dirty snapshot");
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.revision(), 2);
        assert!(state.consume_if_dirty().is_none());
    }

    #[test]
    fn empty_replace_is_legal() {
        let state = SeriesState::<u32>::new();
        state.replace(Vec::new());
        let snapshot = state.consume_if_dirty().expect("dirty snapshot");
        assert!(snapshot.is_empty());
    }

    #[test]
    fn consumed_snapshot_is_unaffected_by_later_replace() {
        let state = SeriesState::new();
        state.replace([Sample::new(1, 1)]);
        let snapshot = state.consume_if_dirty().expect("dirty snapshot");
        state.replace([Sample::new(9, 9), Sample::new(8, 8)]);
        assert_eq!(snapshot.samples(), &[Sample::new(1, 1)]);
        assert_eq!(state.latest().len(), 2);
    }
}
