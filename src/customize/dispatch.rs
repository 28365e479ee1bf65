//! Customization dispatch.
//!
//! Handlers are held in an explicit command-name registry built once at
//! dispatcher construction. Dispatch filters the declared entries by
//! lifecycle event and runs the matching handlers in declaration order.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, Value};

use super::switch::VirtualSwitchHandler;
use crate::config::CustomizationEntry;
use crate::driver::HypervDriver;
use crate::errors::HvResult;
use crate::ui::UiSink;

/// Everything a customization pass may touch, passed explicitly instead of
/// through ambient state: the machine identity, its declared customizations,
/// the hypervisor driver, and the operator UI.
pub struct CustomizeCtx {
    pub vm_id: String,
    pub customizations: Vec<CustomizationEntry>,
    pub driver: Arc<dyn HypervDriver>,
    pub ui: Arc<dyn UiSink>,
}

/// One built-in customization command.
#[async_trait]
pub trait CustomizationHandler: Send + Sync {
    /// Command name this handler answers to.
    fn command(&self) -> &str;

    /// Apply the customization. Errors propagate unchanged to the pipeline.
    async fn run(&self, ctx: &CustomizeCtx, params: &Map<String, Value>) -> HvResult<()>;
}

/// Command-name → handler registry.
pub struct CustomizationDispatcher {
    handlers: HashMap<String, Box<dyn CustomizationHandler>>,
}

impl CustomizationDispatcher {
    /// Registry with the built-in handlers.
    pub fn new() -> Self {
        Self::with_handlers(vec![Box::new(VirtualSwitchHandler)])
    }

    pub fn with_handlers(handlers: Vec<Box<dyn CustomizationHandler>>) -> Self {
        let handlers = handlers
            .into_iter()
            .map(|handler| (handler.command().to_string(), handler))
            .collect();
        Self { handlers }
    }

    /// Run the handlers for every declared entry matching `event`, in
    /// declaration order.
    ///
    /// Entries naming a command with no registered handler are skipped
    /// silently; that is a policy choice, not an error. Handler errors
    /// propagate unchanged.
    pub async fn dispatch(
        &self,
        event: &str,
        entries: &[CustomizationEntry],
        ctx: &CustomizeCtx,
    ) -> HvResult<()> {
        let matching: Vec<&CustomizationEntry> =
            entries.iter().filter(|entry| entry.event == event).collect();
        if matching.is_empty() {
            return Ok(());
        }

        ctx.ui
            .info(&format!("Running customizations for event '{event}'"));

        for entry in matching {
            match self.handlers.get(entry.command.as_str()) {
                Some(handler) => {
                    tracing::debug!(
                        command = %entry.command,
                        event = %event,
                        "Running customization handler"
                    );
                    handler.run(ctx, &entry.params).await?;
                }
                None => {
                    tracing::debug!(
                        command = %entry.command,
                        "No handler registered for customization command, skipping"
                    );
                }
            }
        }

        Ok(())
    }
}

impl Default for CustomizationDispatcher {
    fn default() -> Self {
        Self::new()
    }
}
