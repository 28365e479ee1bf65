//! Test doubles shared by the customization tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::config::CustomizationEntry;
use crate::customize::CustomizeCtx;
use crate::driver::{
    CreateSwitchResponse, HypervDriver, NetAdapter, SwitchBinding, SwitchDescriptor, SwitchOptions,
};
use crate::errors::{HvError, HvResult};
use crate::ui::UiSink;

/// One driver call recorded by [`FakeDriver`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DriverCall {
    ListNetAdapters,
    CreateNetworkSwitch {
        kind: String,
        name: String,
        adapter: Option<String>,
    },
    AddSwitchToVm {
        kind: String,
        name: String,
        adapter: Option<String>,
    },
    FindVmSwitchName,
    ListSwitches,
}

/// In-memory driver returning canned host state and recording every call.
#[derive(Default)]
pub struct FakeDriver {
    pub adapters: Vec<NetAdapter>,
    pub switches: Vec<SwitchDescriptor>,
    pub binding: SwitchBinding,
    /// Message returned by `create_network_switch`.
    pub create_message: Option<String>,
    pub calls: Mutex<Vec<DriverCall>>,
}

impl FakeDriver {
    pub fn calls(&self) -> Vec<DriverCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: DriverCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl HypervDriver for FakeDriver {
    async fn list_net_adapters(&self) -> HvResult<Vec<NetAdapter>> {
        self.record(DriverCall::ListNetAdapters);
        Ok(self.adapters.clone())
    }

    async fn create_network_switch(
        &self,
        options: &SwitchOptions,
    ) -> HvResult<CreateSwitchResponse> {
        self.record(DriverCall::CreateNetworkSwitch {
            kind: options.kind.clone(),
            name: options.name.clone(),
            adapter: options.adapter.clone(),
        });
        Ok(CreateSwitchResponse {
            message: self.create_message.clone(),
        })
    }

    async fn add_switch_to_vm(&self, options: &SwitchOptions) -> HvResult<()> {
        self.record(DriverCall::AddSwitchToVm {
            kind: options.kind.clone(),
            name: options.name.clone(),
            adapter: options.adapter.clone(),
        });
        Ok(())
    }

    async fn find_vm_switch_name(&self, _vm_id: &str) -> HvResult<SwitchBinding> {
        self.record(DriverCall::FindVmSwitchName);
        Ok(self.binding.clone())
    }

    async fn list_switches(&self) -> HvResult<Vec<SwitchDescriptor>> {
        self.record(DriverCall::ListSwitches);
        Ok(self.switches.clone())
    }
}

/// UI sink that replays canned answers and records everything emitted.
#[derive(Default)]
pub struct ScriptedUi {
    answers: Mutex<VecDeque<String>>,
    infos: Mutex<Vec<String>>,
    details: Mutex<Vec<String>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedUi {
    pub fn with_answers(answers: &[&str]) -> Self {
        Self {
            answers: Mutex::new(answers.iter().map(|a| a.to_string()).collect()),
            ..Default::default()
        }
    }

    pub fn infos(&self) -> Vec<String> {
        self.infos.lock().unwrap().clone()
    }

    pub fn details(&self) -> Vec<String> {
        self.details.lock().unwrap().clone()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl UiSink for ScriptedUi {
    fn info(&self, message: &str) {
        self.infos.lock().unwrap().push(message.to_string());
    }

    fn detail(&self, message: &str) {
        self.details.lock().unwrap().push(message.to_string());
    }

    async fn ask(&self, prompt: &str) -> HvResult<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.answers
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| HvError::Ui("no scripted answer available".into()))
    }
}

pub fn test_ctx(driver: Arc<FakeDriver>, ui: Arc<ScriptedUi>) -> CustomizeCtx {
    CustomizeCtx {
        vm_id: "vm-1234".to_string(),
        customizations: Vec::new(),
        driver,
        ui,
    }
}

pub fn entry(event: &str, command: &str, raw_params: &[(&str, &str)]) -> CustomizationEntry {
    CustomizationEntry {
        event: event.to_string(),
        command: command.to_string(),
        params: params(raw_params),
    }
}

pub fn params(raw: &[(&str, &str)]) -> serde_json::Map<String, serde_json::Value> {
    raw.iter()
        .map(|(key, value)| (key.to_string(), serde_json::Value::from(*value)))
        .collect()
}

pub fn adapters(names: &[&str]) -> Vec<NetAdapter> {
    names
        .iter()
        .map(|name| NetAdapter {
            name: name.to_string(),
        })
        .collect()
}

pub fn switches(specs: &[(&str, u32)]) -> Vec<SwitchDescriptor> {
    specs
        .iter()
        .map(|(name, switch_type)| SwitchDescriptor {
            name: name.to_string(),
            switch_type: *switch_type,
        })
        .collect()
}
