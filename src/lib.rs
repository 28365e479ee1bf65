//! Provisioning-time customization engine for Hyper-V virtual machines.
//!
//! Applies user-declared customizations (keyed by lifecycle event) around a
//! machine control action and resolves which virtual switch the machine
//! should be attached to, creating one when necessary.
//!
//! ## Architecture
//!
//! ```text
//! Pipeline
//!   └─ CustomizeStep
//!        ├─ CustomizationDispatcher → handler registry → SwitchResolver
//!        └─ validate_virtual_switch (unconditional)
//!                   │
//!                   ▼
//!             HypervDriver  (PowerShell in production, fake in tests)
//! ```
//!
//! The engine is a single blocking call chain: no parallelism, no retries,
//! no cached host state. The only suspension point is the interactive
//! prompt behind [`ui::UiSink::ask`].

pub mod config;
pub mod customize;
pub mod driver;
pub mod errors;
pub mod pipeline;
pub mod ui;

pub use config::{CustomizationEntry, ProvisionConfig};
pub use customize::{CustomizeCtx, CustomizeStep};
pub use errors::{HvError, HvResult};
