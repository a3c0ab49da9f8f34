use std::fmt;

use thiserror::Error;

/// Raw return code of a wireless subsystem call (a Win32 error code on Windows).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusCode(pub u32);

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08x} ({})", self.0, self.0)
    }
}

/// Everything that can end a run early.
#[derive(Debug, Error)]
pub enum PinError {
    #[error("wireless subsystem unavailable: {code}")]
    SubsystemUnavailable { code: StatusCode },

    #[error("no wireless adapter found")]
    NoAdapter,

    #[error("{count} wireless adapters found, exactly one is supported")]
    MultipleAdapters { count: usize },

    #[error("scan request rejected: {code}")]
    ScanTriggerFailed { code: StatusCode },

    #[error("saved profiles could not be listed: {code}")]
    ProfileQueryFailed { code: StatusCode },

    #[error("visible network query failed on attempt {attempt}: {code}")]
    ScanQueryFailed { attempt: usize, code: StatusCode },

    #[error("invalid selection {input:?}, expected an index below {len}")]
    InvalidSelection { input: String, len: usize },

    #[error("profile targets {profile:?} but the access point broadcasts {network:?}")]
    SsidMismatch { profile: String, network: String },

    #[error("connect request rejected: {code}")]
    ConnectRejected { code: StatusCode },

    #[error("console i/o failed: {0}")]
    Console(#[from] std::io::Error),
}

impl PinError {
    /// Process exit status for this failure.
    ///
    /// Subsystem failures hand back the code the subsystem returned, everything else is `1`.
    pub fn exit_code(&self) -> i32 {
        let code = match self {
            Self::SubsystemUnavailable { code }
            | Self::ScanTriggerFailed { code }
            | Self::ProfileQueryFailed { code }
            | Self::ScanQueryFailed { code, .. }
            | Self::ConnectRejected { code } => code.0,
            _ => 1,
        };
        // Windows reads the status back as u32, so wrapping keeps HRESULT-style codes intact.
        match code as i32 {
            0 => 1,
            code => code,
        }
    }
}
