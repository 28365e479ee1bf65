//! Hyper-V driver seam.
//!
//! The customization engine never talks to the hypervisor directly; it goes
//! through [`HypervDriver`], which exposes the handful of host operations the
//! engine needs. The production implementation is [`PowerShellDriver`];
//! tests substitute an in-memory fake.
//!
//! All operations query live host state. Nothing here is cached, so external
//! changes to the host are observed fresh on every run.

mod powershell;

pub use powershell::PowerShellDriver;

use async_trait::async_trait;
use serde::Deserialize;

use crate::errors::HvResult;

/// One network adapter visible on the host.
///
/// Adapter names are compared case-insensitively throughout the engine.
#[derive(Debug, Clone, Deserialize)]
pub struct NetAdapter {
    #[serde(rename = "Name")]
    pub name: String,
}

/// One virtual switch that already exists on the host.
#[derive(Debug, Clone, Deserialize)]
pub struct SwitchDescriptor {
    #[serde(rename = "Name")]
    pub name: String,
    /// Numeric type code as reported by Hyper-V: 1 = internal, 2 = external.
    #[serde(rename = "SwitchType")]
    pub switch_type: u32,
}

/// The machine's current switch attachment state.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SwitchBinding {
    /// Name of the machine's network adapter, if it has one.
    pub network_adapter: Option<String>,
    /// Name of the switch the adapter is connected to, if any.
    pub switch_name: Option<String>,
}

/// Driver response from a switch creation call.
///
/// The `message` field carries well-known sentinel strings
/// (see [`crate::customize`]) rather than an error, because an already
/// existing switch is not a failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateSwitchResponse {
    pub message: Option<String>,
}

/// Options describing the switch a machine should be attached to.
///
/// Built per invocation from user params or from an existing switch; never
/// persisted by this crate.
#[derive(Debug, Clone)]
pub struct SwitchOptions {
    /// Hyper-V identifier of the machine.
    pub vm_id: String,
    /// Lowercased switch kind label: "external", "internal", "private", or
    /// whatever the user declared.
    pub kind: String,
    /// Switch name to create or attach.
    pub name: String,
    /// Physical adapter to bridge (external switches only).
    pub adapter: Option<String>,
}

/// Host operations consumed by the customization engine.
#[async_trait]
pub trait HypervDriver: Send + Sync {
    /// List the physical network adapters on the host.
    async fn list_net_adapters(&self) -> HvResult<Vec<NetAdapter>>;

    /// Create a virtual switch described by `options`.
    async fn create_network_switch(
        &self,
        options: &SwitchOptions,
    ) -> HvResult<CreateSwitchResponse>;

    /// Connect the machine's network adapter to the switch in `options`.
    async fn add_switch_to_vm(&self, options: &SwitchOptions) -> HvResult<()>;

    /// Query the machine's current adapter and switch attachment.
    async fn find_vm_switch_name(&self, vm_id: &str) -> HvResult<SwitchBinding>;

    /// List the virtual switches that already exist on the host.
    async fn list_switches(&self) -> HvResult<Vec<SwitchDescriptor>>;
}
