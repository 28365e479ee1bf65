//! Timing collected while a pipeline runs.

#[derive(Debug, Clone)]
pub struct StepMetrics {
    pub name: String,
    pub duration_ms: u128,
}

#[derive(Debug, Clone)]
pub struct PipelineMetrics {
    pub total_duration_ms: u128,
    /// Metrics for the steps that actually ran, in execution order. A halted
    /// pipeline reports only the steps completed before the failure.
    pub steps: Vec<StepMetrics>,
}

impl PipelineMetrics {
    pub fn step_duration_ms(&self, name: &str) -> Option<u128> {
        self.steps
            .iter()
            .find(|step| step.name == name)
            .map(|step| step.duration_ms)
    }
}
