//! Interactive selection between equally valid options.

use crate::driver::{NetAdapter, SwitchDescriptor};
use crate::errors::{HvError, HvResult};
use crate::ui::UiSink;

/// What the operator is being asked to pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChooseKind {
    Adapter,
    Switch,
}

impl ChooseKind {
    fn noun(self) -> &'static str {
        match self {
            ChooseKind::Adapter => "adapter",
            ChooseKind::Switch => "switch",
        }
    }

    fn header(self) -> &'static str {
        match self {
            ChooseKind::Adapter => {
                "Multiple network adapters are available. Choose the adapter to bridge the external switch to:"
            }
            ChooseKind::Switch => {
                "Multiple virtual switches are available. Choose the switch to attach to the machine:"
            }
        }
    }
}

/// Anything the chooser can present to the operator by name.
pub trait DisplayName {
    fn display_name(&self) -> &str;
}

impl DisplayName for NetAdapter {
    fn display_name(&self) -> &str {
        &self.name
    }
}

impl DisplayName for SwitchDescriptor {
    fn display_name(&self) -> &str {
        &self.name
    }
}

/// Pick one of `options`.
///
/// A single candidate is returned without touching the UI. More than one
/// blocks on the operator until the answer parses to a 1-based index into
/// the list; anything non-numeric, zero, or out of range is silently asked
/// again. A failing `ask` (headless sink, closed stdin) propagates.
pub async fn choose_option_from<'a, T: DisplayName>(
    ui: &dyn UiSink,
    options: &'a [T],
    kind: ChooseKind,
) -> HvResult<&'a T> {
    match options {
        [] => Err(HvError::Internal(format!(
            "no {} candidates to choose from",
            kind.noun()
        ))),
        [only] => Ok(only),
        _ => {
            ui.detail(kind.header());
            for (i, option) in options.iter().enumerate() {
                ui.detail(&format!("{}) {}", i + 1, option.display_name()));
            }
            ui.detail("");

            loop {
                let answer = ui
                    .ask(&format!("What {} would you like to use? ", kind.noun()))
                    .await?;
                if let Ok(index) = answer.trim().parse::<usize>()
                    && (1..=options.len()).contains(&index)
                {
                    return Ok(&options[index - 1]);
                }
            }
        }
    }
}
