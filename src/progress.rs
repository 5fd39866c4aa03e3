/*!
 * Progress reporting and cancellation contracts
 *
 * The pipeline is a synchronous, cancellable call. Responsiveness is the
 * caller's concern: run it on a worker thread and communicate through a
 * [`ProgressSink`] and a shared [`CancelToken`].
 */

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::types::RunStatistics;

/// Per-file and per-run events emitted while a run is in flight
#[derive(Debug, Clone, Copy)]
pub enum ProgressEvent<'a> {
    /// A directory passed the emission policy and its heading was written
    DirectoryEntered(&'a Path),
    /// A file block was written (relative path)
    FileProcessed(&'a Path),
    /// A path was rejected by the exclusion policy
    EntrySkipped(&'a Path),
    /// A non-fatal per-file fault was recovered as an inline placeholder
    FileIssue { path: &'a Path, reason: &'a str },
    /// The run finished; final counters attached
    RunFinished(&'a RunStatistics),
}

/// Callback surface the pipeline reports through
pub trait ProgressSink: Send + Sync {
    fn notify(&self, event: ProgressEvent<'_>);
}

/// Sink that discards every event
#[derive(Debug, Default)]
pub struct NullSink;

impl ProgressSink for NullSink {
    fn notify(&self, _event: ProgressEvent<'_>) {}
}

/// Cloneable cancellation flag checked at each directory boundary.
///
/// Cancellation is honored between directories, never mid-file, so the
/// document is always left well-formed for what was written.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation; the walk stops at the next directory boundary
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}
