//! The customize pipeline step.

use async_trait::async_trait;

use super::dispatch::{CustomizationDispatcher, CustomizeCtx};
use super::switch::validate_virtual_switch;
use crate::errors::HvResult;
use crate::pipeline::ProvisionStep;

/// Pipeline step applying the customizations declared for one lifecycle
/// event, followed by the unconditional switch validation pass.
///
/// Validation runs even when no customization matched the event, so a
/// machine with a dangling network adapter is caught on every pass.
pub struct CustomizeStep {
    event: String,
    dispatcher: CustomizationDispatcher,
}

impl CustomizeStep {
    pub fn new(event: impl Into<String>) -> Self {
        Self::with_dispatcher(event, CustomizationDispatcher::new())
    }

    pub fn with_dispatcher(event: impl Into<String>, dispatcher: CustomizationDispatcher) -> Self {
        Self {
            event: event.into(),
            dispatcher,
        }
    }
}

#[async_trait]
impl ProvisionStep<CustomizeCtx> for CustomizeStep {
    async fn run(&self, ctx: &CustomizeCtx) -> HvResult<()> {
        self.dispatcher
            .dispatch(&self.event, &ctx.customizations, ctx)
            .await?;
        validate_virtual_switch(ctx).await
    }

    fn name(&self) -> &str {
        "customize"
    }
}
