//! Paced reveal of a retrieval plan.
//!
//! A [`RetrievalRun`] is a finite producer: each [`RetrievalRun::next_step`]
//! waits one pacing interval and yields the next step, so the caller can
//! render every step before the following one exists. Once drained it stays
//! drained.

use std::time::Duration;

use tracing::debug;

use crate::config::DEFAULT_PACING_MS;
use crate::types::RetrievalStep;

/// Pacing applied uniformly between revealed steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sequencer {
    pacing: Duration,
}

impl Default for Sequencer {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_PACING_MS))
    }
}

impl Sequencer {
    pub fn new(pacing: Duration) -> Self {
        Self { pacing }
    }

    pub fn pacing(&self) -> Duration {
        self.pacing
    }

    pub fn start(&self, plan: Vec<RetrievalStep>) -> RetrievalRun {
        RetrievalRun { steps: plan.into_iter(), pacing: self.pacing, revealed: 0 }
    }
}

/// One attempt's worth of steps, revealed in order.
#[derive(Debug)]
pub struct RetrievalRun {
    steps: std::vec::IntoIter<RetrievalStep>,
    pacing: Duration,
    revealed: usize,
}

impl RetrievalRun {
    /// Wait one pacing interval, then yield the next step.
    ///
    /// Returns `None` without waiting once every step has been revealed.
    pub async fn next_step(&mut self) -> Option<RetrievalStep> {
        if self.steps.as_slice().is_empty() {
            return None;
        }
        tokio::time::sleep(self.pacing).await;
        let step = self.steps.next()?;
        self.revealed += 1;
        debug!(index = self.revealed, node = step.node.as_str(), score = step.score, "Step revealed");
        Some(step)
    }

    /// Steps not yet revealed.
    pub fn remaining(&self) -> usize {
        self.steps.len()
    }

    pub fn revealed(&self) -> usize {
        self.revealed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::retrieval::{Retriever, SimulatedRetriever};
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn reveals_each_step_after_one_interval() {
        let plan = SimulatedRetriever.plan("q").unwrap();
        let mut run = Sequencer::default().start(plan);
        let start = Instant::now();

        let mut at = Vec::new();
        while let Some(step) = run.next_step().await {
            at.push((step.node, start.elapsed()));
        }

        assert_eq!(at.len(), 3);
        for (i, (_, elapsed)) in at.iter().enumerate() {
            let due = Duration::from_millis(500 * (i as u64 + 1));
            assert!(*elapsed >= due && *elapsed < due + Duration::from_millis(500));
        }
        assert_eq!(at[0].0, "Knowledge Graph");
        assert_eq!(run.revealed(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn drained_run_returns_none_without_waiting() {
        let mut run = Sequencer::new(Duration::from_millis(100)).start(vec![RetrievalStep::new(
            "only", 0.5, "r",
        )]);
        assert!(run.next_step().await.is_some());
        let start = Instant::now();
        assert!(run.next_step().await.is_none());
        assert!(run.next_step().await.is_none());
        assert_eq!(start.elapsed(), Duration::ZERO);
        assert_eq!(run.remaining(), 0);
    }
}
