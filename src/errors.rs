//! Error types shared across the crate.

use thiserror::Error;

pub type HvResult<T> = Result<T, HvError>;

/// Crate-wide error type.
///
/// Every variant is fatal to the current pipeline step; nothing is retried
/// internally. Remediation (fixing the host network, creating a switch by
/// hand) is the operator's job before re-running.
#[derive(Debug, Error)]
pub enum HvError {
    /// The host reported the external network as unavailable while creating
    /// an external switch.
    #[error("cannot create the external switch: the host network is down")]
    NetworkDown,

    /// The machine has no network adapter at all, so no switch can be
    /// attached to it.
    #[error("the virtual machine has no network adapter")]
    NoNetworkAdapter,

    /// Validation needs to attach a switch but the host has none.
    #[error("no virtual switches are available on this host")]
    NoSwitches,

    /// The host reported a switch type code outside the known set
    /// (1 = internal, 2 = external).
    #[error("the host reported an unknown switch type code: {0}")]
    UnknownSwitchType(u32),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("driver error: {0}")]
    Driver(String),

    #[error("ui error: {0}")]
    Ui(String),

    #[error("internal error: {0}")]
    Internal(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
