//! Paced playback of a search for visualization.
//!
//! All waiting happens here. The engine stays synchronous, and the driver
//! only decides when to call `step` and when to emit path edges.

use crate::config::{MAX_STEP_MS, MIN_STEP_MS};
use crate::error::{DriverError, SearchError};
use crate::events::SearchEvent;
use crate::graph::Graph;
use crate::search::{BidirectionalSearch, Path, SearchPhase};
use crate::stats::SearchStats;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::sync::Notify;
use tokio::task::JoinHandle;

/// Delay between search steps and between path edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    pub step_interval: Duration,
    pub path_interval: Duration,
}

impl Pacing {
    /// Clamps `ms` into the supported range; the path replays at double speed.
    pub fn from_millis(ms: u64) -> Self {
        let ms = ms.clamp(MIN_STEP_MS, MAX_STEP_MS);
        Self {
            step_interval: Duration::from_millis(ms),
            path_interval: Duration::from_millis(ms / 2),
        }
    }

    /// No waiting at all, only cooperative yields.
    pub fn instant() -> Self {
        Self {
            step_interval: Duration::ZERO,
            path_interval: Duration::ZERO,
        }
    }
}

/// Shared stop flag checked before every step and every path edge.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
    wake: Arc<Notify>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
        self.wake.notify_waiters();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    async fn pause(&self, interval: Duration) {
        if interval.is_zero() {
            tokio::task::yield_now().await;
            return;
        }
        // Register for the wakeup before re-checking the flag, so a cancel
        // landing in between still ends the sleep.
        let notified = self.wake.notified();
        tokio::pin!(notified);
        notified.as_mut().enable();
        if self.is_cancelled() {
            return;
        }
        tokio::select! {
            _ = tokio::time::sleep(interval) => {}
            _ = notified => {}
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome<N> {
    Found { path: Path<N>, stats: SearchStats },
    NoPath { stats: SearchStats },
    /// Stopped early; the engine state is left exactly where it was.
    Cancelled { stats: SearchStats },
}

impl<N> RunOutcome<N> {
    pub fn stats(&self) -> &SearchStats {
        match self {
            RunOutcome::Found { stats, .. }
            | RunOutcome::NoPath { stats }
            | RunOutcome::Cancelled { stats } => stats,
        }
    }

    pub fn path(&self) -> Option<&Path<N>> {
        match self {
            RunOutcome::Found { path, .. } => Some(path),
            _ => None,
        }
    }
}

/// Steps `engine` to completion, pausing `pacing.step_interval` between steps,
/// then replays the path edge by edge at `pacing.path_interval`.
///
/// The engine must already be `reset`.
pub async fn run<G: Graph>(
    engine: &mut BidirectionalSearch<G>,
    pacing: Pacing,
    cancel: &CancelToken,
) -> Result<RunOutcome<G::Node>, SearchError> {
    loop {
        if cancel.is_cancelled() {
            tracing::debug!("run cancelled before step");
            return Ok(RunOutcome::Cancelled {
                stats: engine.stats(),
            });
        }

        match engine.step()? {
            SearchPhase::MeetingFound => break,
            SearchPhase::Exhausted => {
                return Ok(RunOutcome::NoPath {
                    stats: engine.stats(),
                });
            }
            SearchPhase::Idle | SearchPhase::Running => {}
        }

        cancel.pause(pacing.step_interval).await;
    }

    let path = engine.reconstruct()?;
    let stats = engine.stats();

    let edges: Vec<(G::Node, G::Node)> = path
        .edges()
        .map(|(from, to)| (from.clone(), to.clone()))
        .collect();
    for (index, (from, to)) in edges.into_iter().enumerate() {
        if cancel.is_cancelled() {
            tracing::debug!(index, "run cancelled during path replay");
            return Ok(RunOutcome::Cancelled { stats });
        }
        engine.publish(SearchEvent::PathEdge { from, to, index });
        cancel.pause(pacing.path_interval).await;
    }

    if cancel.is_cancelled() {
        tracing::debug!("run cancelled before path completion");
        return Ok(RunOutcome::Cancelled { stats });
    }
    engine.publish(SearchEvent::PathComplete { length: path.len() });
    Ok(RunOutcome::Found { path, stats })
}

/// A run executing on the tokio runtime.
///
/// Abandoning a run goes through [`SearchTask::cancel_and_wait`] so that no
/// event from the old run can arrive after a new one has started.
pub struct SearchTask<N> {
    cancel: CancelToken,
    handle: JoinHandle<Result<RunOutcome<N>, SearchError>>,
}

impl<N> SearchTask<N>
where
    N: Send + Sync + 'static,
{
    pub fn spawn<G>(mut engine: BidirectionalSearch<G>, pacing: Pacing) -> Self
    where
        G: Graph<Node = N> + Send + Sync + 'static,
    {
        let cancel = CancelToken::new();
        let token = cancel.clone();
        let handle = tokio::spawn(async move { run(&mut engine, pacing, &token).await });
        Self { cancel, handle }
    }

    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    pub async fn join(self) -> Result<RunOutcome<N>, DriverError> {
        match self.handle.await {
            Ok(outcome) => Ok(outcome?),
            Err(err) => Err(DriverError::TaskFailed(err.to_string())),
        }
    }

    /// Signals cancellation and waits until the task has really stopped.
    pub async fn cancel_and_wait(self) -> Result<RunOutcome<N>, DriverError> {
        self.cancel();
        self.join().await
    }
}
