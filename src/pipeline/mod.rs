//! Sequential provisioning pipeline.
//!
//! ## Architecture
//!
//! ```text
//! Pipeline → Steps
//!
//! - Pipeline: runs steps in declaration order against a shared context
//! - Step: one unit of provisioning work (e.g. customize)
//! ```
//!
//! Execution is strictly sequential with no rollback: the first failing step
//! halts the pipeline and later steps are never invoked.
//!
//! ## Example
//!
//! ```ignore
//! let pipeline = Pipeline::new(vec![
//!     Box::new(CustomizeStep::new("before_boot")) as BoxedStep<_>,
//! ]);
//! let metrics = pipeline.run(&ctx).await?;
//! println!("pipeline took {}ms", metrics.total_duration_ms);
//! ```

mod metrics;
#[allow(clippy::module_inception)]
mod pipeline;
mod step;

pub use metrics::{PipelineMetrics, StepMetrics};
pub use pipeline::Pipeline;
pub use step::{BoxedStep, ProvisionStep};
