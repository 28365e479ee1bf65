//! Virtual switch resolution.
//!
//! Decides which virtual switch a machine should be attached to and drives
//! creation through the driver when none exists. Two entry points:
//!
//! - [`VirtualSwitchHandler`]: the `virtual_switch` customization command,
//!   applying the user's declared switch intent.
//! - [`validate_virtual_switch`]: the unconditional pass that runs on every
//!   customization step and repairs a machine whose adapter has no switch
//!   bound.

use async_trait::async_trait;
use serde_json::{Map, Value};

use super::chooser::{ChooseKind, choose_option_from};
use super::dispatch::{CustomizationHandler, CustomizeCtx};
use crate::driver::SwitchOptions;
use crate::errors::{HvError, HvResult};

pub const VIRTUAL_SWITCH_COMMAND: &str = "virtual_switch";

/// Driver sentinel: the external network is unreachable.
const MSG_NETWORK_DOWN: &str = "Network down";
/// Driver sentinel: an external switch already exists on the host.
const MSG_EXTERNAL_SWITCH_EXISTS: &str = "External switch exist";

/// Handler for the `virtual_switch` customization command.
///
/// Params: `type` ("external", "internal", "private"; defaults to
/// "external" when absent or empty), `name` (switch name), `bridge`
/// (physical adapter for external switches).
pub struct VirtualSwitchHandler;

#[async_trait]
impl CustomizationHandler for VirtualSwitchHandler {
    fn command(&self) -> &str {
        VIRTUAL_SWITCH_COMMAND
    }

    async fn run(&self, ctx: &CustomizeCtx, params: &Map<String, Value>) -> HvResult<()> {
        let kind = match param_str(params, "type").map(str::to_lowercase) {
            Some(kind) if !kind.is_empty() => kind,
            _ => "external".to_string(),
        };
        let adapter = param_str(params, "bridge")
            .map(str::to_lowercase)
            .filter(|adapter| !adapter.is_empty());

        let mut options = SwitchOptions {
            vm_id: ctx.vm_id.clone(),
            kind,
            name: param_str(params, "name").unwrap_or_default().to_string(),
            adapter,
        };

        match options.kind.as_str() {
            "private" => {
                // Private networking needs no host-side switch, so there is
                // nothing to create or attach.
                ctx.ui
                    .detail("Hyper-V needs no switch for private networking, skipping");
                return Ok(());
            }
            "external" => {
                let adapters = ctx.driver.list_net_adapters().await?;
                let requested_present = options.adapter.as_deref().is_some_and(|requested| {
                    adapters
                        .iter()
                        .any(|adapter| adapter.name.to_lowercase() == requested)
                });
                if !requested_present {
                    let selected =
                        choose_option_from(ctx.ui.as_ref(), &adapters, ChooseKind::Adapter).await?;
                    options.adapter = Some(selected.name.clone());
                }

                ctx.ui.info(&format!(
                    "Creating a {} switch with name {}",
                    options.kind, options.name
                ));
                let response = ctx.driver.create_network_switch(&options).await?;
                match response.message.as_deref() {
                    Some(MSG_NETWORK_DOWN) => return Err(HvError::NetworkDown),
                    Some(MSG_EXTERNAL_SWITCH_EXISTS) => {
                        ctx.ui
                            .detail("An external switch already exists on this host, reusing it");
                    }
                    _ => {}
                }
            }
            _ => {
                // Internal and unrecognized kinds attach without creating
                // anything.
                ctx.ui
                    .detail("Using the configured virtual switch as-is");
            }
        }

        ctx.driver.add_switch_to_vm(&options).await
    }
}

/// Unconditional switch validation, run on every customization pass.
///
/// Queries the machine's current binding fresh; a missing adapter is fatal,
/// a missing switch is repaired by attaching one of the host's existing
/// switches (chosen interactively when more than one exists).
pub async fn validate_virtual_switch(ctx: &CustomizeCtx) -> HvResult<()> {
    ctx.ui.info("Validating Virtual Switch");

    let binding = ctx.driver.find_vm_switch_name(&ctx.vm_id).await?;
    if binding.network_adapter.is_none() {
        return Err(HvError::NoNetworkAdapter);
    }
    if binding.switch_name.is_some() {
        // Adapter and switch both present: nothing to repair.
        return Ok(());
    }

    let switches = ctx.driver.list_switches().await?;
    if switches.is_empty() {
        return Err(HvError::NoSwitches);
    }

    let switch = choose_option_from(ctx.ui.as_ref(), &switches, ChooseKind::Switch).await?;
    let kind = match switch.switch_type {
        1 => "internal",
        2 => "external",
        other => return Err(HvError::UnknownSwitchType(other)),
    };

    let options = SwitchOptions {
        vm_id: ctx.vm_id.clone(),
        kind: kind.to_string(),
        name: switch.name.clone(),
        adapter: None,
    };
    ctx.ui.info(&format!(
        "Creating a {} switch with name {}",
        options.kind, options.name
    ));
    ctx.driver.add_switch_to_vm(&options).await
}

fn param_str<'a>(params: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    params.get(key).and_then(Value::as_str)
}
