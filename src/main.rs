use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use hvprov::config::ProvisionConfig;
use hvprov::customize::{CustomizeCtx, CustomizeStep};
use hvprov::driver::PowerShellDriver;
use hvprov::pipeline::{BoxedStep, Pipeline};
use hvprov::ui::ConsoleUi;

/// Apply provisioning-time customizations to a Hyper-V virtual machine.
#[derive(Debug, Parser)]
#[command(name = "hvprov", version, about)]
struct Args {
    /// Hyper-V identifier of the machine to customize.
    #[arg(long)]
    vm_id: String,

    /// Lifecycle event to run customizations for, e.g. "before_boot".
    #[arg(long)]
    event: String,

    /// Path to the JSON provisioning config holding the customization list.
    #[arg(long)]
    config: PathBuf,

    /// PowerShell executable to drive Hyper-V with.
    #[arg(long, default_value = "powershell.exe")]
    powershell: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let config = ProvisionConfig::load(&args.config)
        .with_context(|| format!("loading {}", args.config.display()))?;

    let ctx = CustomizeCtx {
        vm_id: args.vm_id,
        customizations: config.customizations,
        driver: Arc::new(PowerShellDriver::with_executable(args.powershell)),
        ui: Arc::new(ConsoleUi),
    };

    let pipeline = Pipeline::new(vec![
        Box::new(CustomizeStep::new(args.event)) as BoxedStep<CustomizeCtx>
    ]);
    let metrics = pipeline.run(&ctx).await?;
    tracing::debug!(
        total_duration_ms = metrics.total_duration_ms,
        "Customization pass finished"
    );

    Ok(())
}
