//! The retrieval sandbox: search state, its display view, and the driver that
//! runs one attempt from submission to results.
//!
//! One attempt goes: [`SearchState::submit`] → every step of the retriever's
//! plan through [`SearchState::reveal`] (one pacing interval apart) →
//! [`SearchState::complete`] with the keyword-filtered projects. Retriever
//! failures end the attempt through [`SearchState::fail`] instead.
//!
//! The step scores come from the retriever and the results come from the
//! filter. The two are independent and never reconciled.

use std::sync::Arc;

use tracing::{info, warn};

use crate::catalog::Catalog;
use crate::config::FolioConfig;
use crate::error::RetrievalError;
use crate::filter::filter_projects;
use crate::retrieval::{self, Retriever};
use crate::sequencer::{RetrievalRun, Sequencer};
use crate::types::{Project, RetrievalStep};

// ---------------------------------------------------------------------------
// Search state
// ---------------------------------------------------------------------------

/// A started attempt: its id and the query exactly as submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub attempt: u64,
    pub query: String,
}

/// Per-session sandbox state. Created empty, mutated only through submissions
/// and the attempt callbacks below.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchState {
    query: String,
    is_searching: bool,
    revealed_steps: Vec<RetrievalStep>,
    results: Vec<Project>,
    path_visible: bool,
    failure: Option<String>,
    attempt: u64,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_searching(&self) -> bool {
        self.is_searching
    }

    pub fn revealed_steps(&self) -> &[RetrievalStep] {
        &self.revealed_steps
    }

    pub fn results(&self) -> &[Project] {
        &self.results
    }

    pub fn path_visible(&self) -> bool {
        self.path_visible
    }

    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }

    /// Id of the most recent attempt, `0` before the first submission.
    pub fn attempt(&self) -> u64 {
        self.attempt
    }

    /// Replace the query text. Touches nothing else.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    /// Start an attempt with the current query.
    ///
    /// Returns `None` and leaves the state untouched when the trimmed query is
    /// empty or an attempt is already in flight.
    pub fn submit(&mut self) -> Option<Submission> {
        if self.query.trim().is_empty() || self.is_searching {
            return None;
        }
        self.attempt += 1;
        self.is_searching = true;
        self.path_visible = false;
        self.revealed_steps.clear();
        self.results.clear();
        self.failure = None;
        Some(Submission { attempt: self.attempt, query: self.query.clone() })
    }

    fn is_current(&self, attempt: u64) -> bool {
        self.is_searching && attempt == self.attempt
    }

    /// Append the next step of the running attempt. Stale attempts are ignored.
    pub fn reveal(&mut self, attempt: u64, step: RetrievalStep) -> bool {
        if !self.is_current(attempt) {
            return false;
        }
        self.revealed_steps.push(step);
        true
    }

    /// Finish the running attempt with its filtered results.
    pub fn complete(&mut self, attempt: u64, results: Vec<Project>) -> bool {
        if !self.is_current(attempt) {
            return false;
        }
        self.is_searching = false;
        self.results = results;
        self.path_visible = true;
        true
    }

    /// Route one driver event to [`reveal`](Self::reveal),
    /// [`complete`](Self::complete) or [`fail`](Self::fail).
    pub fn apply(&mut self, attempt: u64, event: AttemptEvent) -> bool {
        match event {
            AttemptEvent::Revealed(step) => self.reveal(attempt, step),
            AttemptEvent::Completed(results) => self.complete(attempt, results),
            AttemptEvent::Failed(message) => self.fail(attempt, message),
        }
    }

    /// Abort the running attempt. Results stay empty.
    pub fn fail(&mut self, attempt: u64, message: impl Into<String>) -> bool {
        if !self.is_current(attempt) {
            return false;
        }
        self.is_searching = false;
        self.results.clear();
        self.path_visible = false;
        self.failure = Some(message.into());
        true
    }

    /// What the sandbox panel should show for this state.
    pub fn view(&self) -> SandboxView<'_> {
        if self.is_searching {
            return SandboxView::Searching { steps: &self.revealed_steps };
        }
        if let Some(message) = &self.failure {
            return SandboxView::Failed { message };
        }
        if !self.path_visible {
            return SandboxView::Idle;
        }
        if !self.results.is_empty() {
            SandboxView::Completed { steps: &self.revealed_steps, results: &self.results }
        } else if !self.query.is_empty() {
            SandboxView::NoResults { steps: &self.revealed_steps }
        } else {
            SandboxView::Idle
        }
    }
}

// ---------------------------------------------------------------------------
// Display view
// ---------------------------------------------------------------------------

pub const NO_RESULTS_MESSAGE: &str =
    "No results found. Try different keywords or ask about specific technologies.";

/// Pure projection of [`SearchState`] onto what is visible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SandboxView<'a> {
    /// Nothing submitted yet.
    Idle,
    /// Attempt in flight; steps revealed so far.
    Searching { steps: &'a [RetrievalStep] },
    /// Attempt finished with at least one match.
    Completed { steps: &'a [RetrievalStep], results: &'a [Project] },
    /// Attempt finished, nothing matched.
    NoResults { steps: &'a [RetrievalStep] },
    /// Retrieval failed before results were computed.
    Failed { message: &'a str },
}

impl SandboxView<'_> {
    /// Steps to draw in the retrieval path panel.
    pub fn steps(&self) -> &[RetrievalStep] {
        match self {
            SandboxView::Searching { steps }
            | SandboxView::Completed { steps, .. }
            | SandboxView::NoResults { steps } => *steps,
            SandboxView::Idle | SandboxView::Failed { .. } => &[],
        }
    }
}

/// Header above the result cards, e.g. `Found 2 results`.
pub fn result_heading(count: usize) -> String {
    format!("Found {count} result{}", if count == 1 { "" } else { "s" })
}

// ---------------------------------------------------------------------------
// Driver
// ---------------------------------------------------------------------------

/// What happened next in a running attempt, in the order [`Sandbox::drive`] emits them.
#[derive(Debug, Clone, PartialEq)]
pub enum AttemptEvent {
    Revealed(RetrievalStep),
    Completed(Vec<Project>),
    Failed(String),
}

/// Everything needed to run attempts: the shared catalog, a retriever, and pacing.
#[derive(Clone)]
pub struct Sandbox {
    catalog: Catalog,
    retriever: Arc<dyn Retriever>,
    sequencer: Sequencer,
}

impl Sandbox {
    pub fn new(catalog: Catalog, retriever: Arc<dyn Retriever>, sequencer: Sequencer) -> Self {
        Self { catalog, retriever, sequencer }
    }

    pub fn from_config(catalog: Catalog, config: &FolioConfig) -> Self {
        let retriever = retrieval::from_config(&catalog, config);
        Self::new(catalog, retriever, Sequencer::new(config.pacing))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn retriever_name(&self) -> &'static str {
        self.retriever.name()
    }

    pub fn sequencer(&self) -> Sequencer {
        self.sequencer
    }

    /// Plan the retrieval path for a submission.
    pub fn begin(&self, submission: &Submission) -> Result<RetrievalRun, RetrievalError> {
        let plan = self.retriever.plan(&submission.query)?;
        info!(
            attempt = submission.attempt,
            retriever = self.retriever.name(),
            steps = plan.len(),
            "Retrieval started"
        );
        Ok(self.sequencer.start(plan))
    }

    /// Keyword-filter the catalog for `query`.
    pub fn finish(&self, query: &str) -> Vec<Project> {
        filter_projects(self.catalog.projects(), query)
    }

    /// Drive a started attempt to its end, handing each event to `emit`.
    ///
    /// Emits one `Revealed` per planned step, one pacing interval apart, then
    /// `Completed` with the filtered projects. A retriever error emits
    /// `Failed` instead and is returned. Returns the number of matches.
    pub async fn drive<F>(
        &self,
        submission: &Submission,
        mut emit: F,
    ) -> Result<usize, RetrievalError>
    where
        F: FnMut(AttemptEvent),
    {
        let mut run = match self.begin(submission) {
            Ok(run) => run,
            Err(e) => {
                warn!(attempt = submission.attempt, error = %e, "Retrieval failed");
                emit(AttemptEvent::Failed(e.to_string()));
                return Err(e);
            }
        };

        while let Some(step) = run.next_step().await {
            emit(AttemptEvent::Revealed(step));
        }

        let results = self.finish(&submission.query);
        let count = results.len();
        emit(AttemptEvent::Completed(results));
        info!(attempt = submission.attempt, results = count, "Retrieval complete");
        Ok(count)
    }

    /// Run one full attempt against `state`, calling `observer` after every
    /// revealed step.
    ///
    /// Returns `Ok(None)` when the submission was rejected, otherwise the
    /// number of matching projects.
    pub async fn run<F>(
        &self,
        state: &mut SearchState,
        mut observer: F,
    ) -> Result<Option<usize>, RetrievalError>
    where
        F: FnMut(&SearchState),
    {
        let Some(submission) = state.submit() else {
            return Ok(None);
        };
        let attempt = submission.attempt;

        self.drive(&submission, |event| {
            let revealed = matches!(event, AttemptEvent::Revealed(_));
            state.apply(attempt, event);
            if revealed {
                observer(&*state);
            }
        })
        .await
        .map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(n: &str) -> RetrievalStep {
        RetrievalStep::new(n, 0.5, "r")
    }

    #[test]
    fn blank_submission_is_noop() {
        for q in ["", "   ", "\t\n"] {
            let mut state = SearchState::new();
            state.set_query(q);
            let before = state.clone();
            assert!(state.submit().is_none());
            assert_eq!(state, before);
        }
    }

    #[test]
    fn submit_keeps_query_untrimmed() {
        let mut state = SearchState::new();
        state.set_query("  graph ");
        let sub = state.submit().unwrap();
        assert_eq!(sub.query, "  graph ");
        assert_eq!(sub.attempt, 1);
        assert!(state.is_searching());
        assert!(!state.path_visible());
    }

    #[test]
    fn resubmit_while_searching_is_rejected() {
        let mut state = SearchState::new();
        state.set_query("graph");
        let first = state.submit().unwrap();
        state.set_query("rust");
        let before = state.clone();
        assert!(state.submit().is_none());
        assert_eq!(state, before);
        assert_eq!(state.attempt(), first.attempt);
    }

    #[test]
    fn new_attempt_resets_steps_and_results() {
        let mut state = SearchState::new();
        state.set_query("graph");
        let a = state.submit().unwrap();
        state.reveal(a.attempt, step("one"));
        state.complete(a.attempt, vec![]);
        assert_eq!(state.revealed_steps().len(), 1);

        let b = state.submit().unwrap();
        assert_eq!(b.attempt, 2);
        assert!(state.revealed_steps().is_empty());
        assert!(state.results().is_empty());
        assert_eq!(state.view(), SandboxView::Searching { steps: &[] });
    }

    #[test]
    fn stale_attempt_callbacks_are_ignored() {
        let mut state = SearchState::new();
        state.set_query("graph");
        let a = state.submit().unwrap();
        assert!(state.complete(a.attempt, vec![]));
        let b = state.submit().unwrap();

        assert!(!state.reveal(a.attempt, step("stale")));
        assert!(!state.complete(a.attempt, vec![]));
        assert!(state.is_searching());
        assert!(state.reveal(b.attempt, step("fresh")));
        assert_eq!(state.revealed_steps()[0].node, "fresh");
    }

    #[test]
    fn view_transitions() {
        let mut state = SearchState::new();
        assert_eq!(state.view(), SandboxView::Idle);

        state.set_query("zzz-no-match");
        // Typing alone does not show "no results".
        assert_eq!(state.view(), SandboxView::Idle);

        let sub = state.submit().unwrap();
        state.reveal(sub.attempt, step("one"));
        assert_eq!(state.view().steps().len(), 1);
        assert!(matches!(state.view(), SandboxView::Searching { .. }));

        state.complete(sub.attempt, vec![]);
        assert!(matches!(state.view(), SandboxView::NoResults { steps } if steps.len() == 1));

        state.set_query("");
        assert_eq!(state.view(), SandboxView::Idle);
    }

    #[test]
    fn fail_clears_results_and_reports() {
        let mut state = SearchState::new();
        state.set_query("graph");
        let sub = state.submit().unwrap();
        state.reveal(sub.attempt, step("one"));
        assert!(state.fail(sub.attempt, "backend down"));
        assert!(!state.is_searching());
        assert!(state.results().is_empty());
        assert_eq!(state.view(), SandboxView::Failed { message: "backend down" });

        // The next attempt clears the failure.
        state.submit().unwrap();
        assert!(state.failure().is_none());
    }

    #[test]
    fn apply_routes_events_and_respects_attempt() {
        let mut state = SearchState::new();
        state.set_query("graph");
        let sub = state.submit().unwrap();

        assert!(!state.apply(sub.attempt + 1, AttemptEvent::Revealed(step("stale"))));
        assert!(state.apply(sub.attempt, AttemptEvent::Revealed(step("one"))));
        assert!(state.apply(sub.attempt, AttemptEvent::Completed(vec![])));
        assert!(!state.is_searching());
        assert_eq!(state.revealed_steps().len(), 1);

        let next = state.submit().unwrap();
        assert!(state.apply(next.attempt, AttemptEvent::Failed("down".into())));
        assert_eq!(state.failure(), Some("down"));
    }

    #[test]
    fn heading_pluralizes() {
        assert_eq!(result_heading(1), "Found 1 result");
        assert_eq!(result_heading(3), "Found 3 results");
    }
}
