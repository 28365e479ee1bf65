//! Step trait for sequential pipeline execution.

use async_trait::async_trait;

use crate::errors::HvResult;

/// Trait for steps executed by the provisioning pipeline.
///
/// Steps run in declaration order with a shared, read-only context. A step
/// that returns an error halts the pipeline; later steps never run.
#[async_trait]
pub trait ProvisionStep<Ctx>: Send + Sync {
    /// Execute the step against the shared context.
    async fn run(&self, ctx: &Ctx) -> HvResult<()>;

    /// Human-readable step name for logging.
    fn name(&self) -> &str;
}

pub type BoxedStep<Ctx> = Box<dyn ProvisionStep<Ctx>>;
