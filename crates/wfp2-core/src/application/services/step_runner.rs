//! Per-step bookkeeping for the closing summary.

use serde::Serialize;

/// Result of one generation step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepOutcome {
    pub description: String,
    /// Manual follow-ups the step could not automate. Empty means OK.
    pub messages: Vec<String>,
}

impl StepOutcome {
    pub fn is_ok(&self) -> bool {
        self.messages.is_empty()
    }
}

/// Collects step outcomes and the manual-fixup list shown at the end.
///
/// No step currently reports messages, so `errors` stays empty; soft-failure
/// sites append through [`StepRunner::record`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepRunner {
    steps: Vec<StepOutcome>,
    errors: Vec<String>,
}

impl StepRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a step. Returns `true` when it reported nothing to fix.
    pub fn record(&mut self, description: impl Into<String>, messages: Vec<String>) -> bool {
        self.errors.extend(messages.iter().cloned());
        let outcome = StepOutcome {
            description: description.into(),
            messages,
        };
        let ok = outcome.is_ok();
        self.steps.push(outcome);
        ok
    }

    pub fn steps(&self) -> &[StepOutcome] {
        &self.steps
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn into_parts(self) -> (Vec<StepOutcome>, Vec<String>) {
        (self.steps, self.errors)
    }
}
