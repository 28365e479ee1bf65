//! Provisioning-time customization engine.
//!
//! ## Architecture
//!
//! ```text
//! CustomizeStep
//!   ├─ CustomizationDispatcher ──→ registered handlers (virtual_switch, ...)
//!   │                                    └─→ HypervDriver
//!   └─ validate_virtual_switch ─────────────→ HypervDriver
//! ```
//!
//! The step first dispatches the user-declared customizations matching its
//! lifecycle event, then runs the unconditional switch validation pass. Both
//! halves consult the operator through the [`UiSink`](crate::ui::UiSink)
//! chooser when more than one adapter or switch is a valid choice.

mod chooser;
mod dispatch;
mod step;
mod switch;

#[cfg(test)]
pub(crate) mod testing;

pub use chooser::{ChooseKind, DisplayName, choose_option_from};
pub use dispatch::{CustomizationDispatcher, CustomizationHandler, CustomizeCtx};
pub use step::CustomizeStep;
pub use switch::{VIRTUAL_SWITCH_COMMAND, VirtualSwitchHandler, validate_virtual_switch};
