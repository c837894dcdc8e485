use serde::Serialize;

/// States of a single submission.
///
/// ```text
/// Idle ──▶ Validating ──▶ Translating ──▶ Synthesizing ──▶ Done
///                │        (optional)            │
///                └──────────▶ Failed ◀──────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PipelineState {
    #[default]
    Idle,
    Validating,
    Translating,
    Synthesizing,
    Done,
    Failed,
}

impl PipelineState {
    pub fn label(&self) -> &'static str {
        match self {
            PipelineState::Idle => "Idle",
            PipelineState::Validating => "Validating",
            PipelineState::Translating => "Translating",
            PipelineState::Synthesizing => "Synthesizing",
            PipelineState::Done => "Done",
            PipelineState::Failed => "Failed",
        }
    }
}

/// Records the path a submission took through the states
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateTrail {
    states: Vec<PipelineState>,
}

impl StateTrail {
    pub fn new() -> Self {
        Self {
            states: vec![PipelineState::Idle],
        }
    }

    pub fn current(&self) -> PipelineState {
        self.states
            .last()
            .copied()
            .unwrap_or_default()
    }

    pub fn advance(&mut self, next: PipelineState) {
        tracing::debug!(from = self.current().label(), to = next.label(), "Pipeline transition");
        self.states.push(next);
    }

    pub fn states(&self) -> &[PipelineState] {
        &self.states
    }
}

impl Default for StateTrail {
    fn default() -> Self {
        Self::new()
    }
}
