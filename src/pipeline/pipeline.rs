//! Sequential pipeline executor.

use std::time::Instant;

use super::metrics::{PipelineMetrics, StepMetrics};
use super::step::BoxedStep;
use crate::errors::HvResult;

/// Ordered chain of provisioning steps sharing one context.
pub struct Pipeline<Ctx> {
    steps: Vec<BoxedStep<Ctx>>,
}

impl<Ctx> Pipeline<Ctx> {
    pub fn new(steps: Vec<BoxedStep<Ctx>>) -> Self {
        Self { steps }
    }

    /// Run every step in order, halting at the first failure.
    pub async fn run(&self, ctx: &Ctx) -> HvResult<PipelineMetrics> {
        let total_start = Instant::now();
        let mut step_metrics = Vec::new();

        for step in &self.steps {
            let step_start = Instant::now();
            tracing::debug!(step = step.name(), "Running pipeline step");

            step.run(ctx).await?;

            let duration_ms = step_start.elapsed().as_millis();
            tracing::debug!(step = step.name(), duration_ms, "Pipeline step finished");
            step_metrics.push(StepMetrics {
                name: step.name().to_string(),
                duration_ms,
            });
        }

        Ok(PipelineMetrics {
            total_duration_ms: total_start.elapsed().as_millis(),
            steps: step_metrics,
        })
    }
}
