//! PowerShell-backed Hyper-V driver.
//!
//! Every operation shells out to `powershell.exe` and parses the JSON that
//! `ConvertTo-Json` emits. The Hyper-V cmdlet semantics live entirely on the
//! PowerShell side; this module only marshals options in and results out.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tokio::process::Command;

use super::{
    CreateSwitchResponse, HypervDriver, NetAdapter, SwitchBinding, SwitchDescriptor, SwitchOptions,
};
use crate::errors::{HvError, HvResult};

/// Driver that runs one PowerShell invocation per host operation.
#[derive(Debug, Clone)]
pub struct PowerShellDriver {
    executable: String,
}

impl PowerShellDriver {
    pub fn new() -> Self {
        Self {
            executable: "powershell.exe".to_string(),
        }
    }

    /// Use a different PowerShell executable, e.g. `pwsh`.
    pub fn with_executable(executable: impl Into<String>) -> Self {
        Self {
            executable: executable.into(),
        }
    }

    async fn run(&self, script: &str) -> HvResult<String> {
        tracing::debug!(script, "Running PowerShell script");

        // Progress records would otherwise end up interleaved with the JSON
        // output stream.
        let wrapped = format!("& {{ $ProgressPreference = 'SilentlyContinue'; {script} }}");
        let output = Command::new(&self.executable)
            .args([
                "-NoLogo",
                "-NoProfile",
                "-NonInteractive",
                "-ExecutionPolicy",
                "Bypass",
                "-Command",
                &wrapped,
            ])
            .output()
            .await
            .map_err(|e| HvError::Driver(format!("failed to spawn {}: {}", self.executable, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(HvError::Driver(format!(
                "PowerShell script failed: {}",
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl Default for PowerShellDriver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HypervDriver for PowerShellDriver {
    async fn list_net_adapters(&self) -> HvResult<Vec<NetAdapter>> {
        let raw = self
            .run("Get-NetAdapter -Physical | Select-Object Name | ConvertTo-Json")
            .await?;
        parse_json_list(&raw)
    }

    async fn create_network_switch(
        &self,
        options: &SwitchOptions,
    ) -> HvResult<CreateSwitchResponse> {
        let script = match options.kind.as_str() {
            "external" => format!(
                "if (-not (Get-NetAdapter -Physical | Where-Object {{ $_.Status -eq 'Up' }})) \
                 {{ @{{ message = 'Network down' }} | ConvertTo-Json; exit }} \
                 if (Get-VMSwitch -SwitchType External -ErrorAction SilentlyContinue) \
                 {{ @{{ message = 'External switch exist' }} | ConvertTo-Json; exit }} \
                 New-VMSwitch -Name {name} -NetAdapterName {adapter} -AllowManagementOS $true | Out-Null; \
                 @{{ message = '' }} | ConvertTo-Json",
                name = ps_quote(&options.name),
                adapter = ps_quote(options.adapter.as_deref().unwrap_or_default()),
            ),
            _ => format!(
                "New-VMSwitch -Name {name} -SwitchType Internal | Out-Null; \
                 @{{ message = '' }} | ConvertTo-Json",
                name = ps_quote(&options.name),
            ),
        };

        let raw = self.run(&script).await?;
        parse_json(&raw)
    }

    async fn add_switch_to_vm(&self, options: &SwitchOptions) -> HvResult<()> {
        let script = format!(
            "Get-VM -Id {vm_id} | Get-VMNetworkAdapter | \
             Connect-VMNetworkAdapter -SwitchName {name}",
            vm_id = ps_quote(&options.vm_id),
            name = ps_quote(&options.name),
        );
        self.run(&script).await?;
        Ok(())
    }

    async fn find_vm_switch_name(&self, vm_id: &str) -> HvResult<SwitchBinding> {
        let script = format!(
            "$adapter = Get-VM -Id {vm_id} | Get-VMNetworkAdapter | Select-Object -First 1; \
             @{{ network_adapter = $adapter.Name; switch_name = $adapter.SwitchName }} | ConvertTo-Json",
            vm_id = ps_quote(vm_id),
        );
        let raw = self.run(&script).await?;
        parse_json(&raw)
    }

    async fn list_switches(&self) -> HvResult<Vec<SwitchDescriptor>> {
        let raw = self
            .run(
                "Get-VMSwitch | Select-Object Name, \
                 @{n='SwitchType';e={[int]$_.SwitchType}} | ConvertTo-Json",
            )
            .await?;
        parse_json_list(&raw)
    }
}

/// Quote a value as a single-quoted PowerShell string literal.
fn ps_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

fn parse_json<T: DeserializeOwned>(raw: &str) -> HvResult<T> {
    serde_json::from_str(raw.trim())
        .map_err(|e| HvError::Driver(format!("unexpected driver output: {e}")))
}

/// `ConvertTo-Json` collapses single-element collections to a bare object
/// and emits nothing for empty ones; accept all three shapes.
fn parse_json_list<T: DeserializeOwned>(raw: &str) -> HvResult<Vec<T>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(Vec::new());
    }
    if raw.starts_with('[') {
        parse_json(raw)
    } else {
        Ok(vec![parse_json(raw)?])
    }
}
