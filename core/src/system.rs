//! Access to the host wireless stack.
//!
//! Only the Windows Native Wifi API is supported. Elsewhere [`open`] reports the subsystem as
//! unavailable.

use pinbss_common::PinError;
use pinbss_common::system::WlanSubsystem;

#[cfg(windows)]
mod native;

/// Opens a session with the wireless subsystem.
///
/// The session is closed when the returned value is dropped.
#[cfg(windows)]
pub fn open() -> Result<Box<dyn WlanSubsystem>, PinError> {
    let session = native::NativeWlan::open()
        .map_err(|code| PinError::SubsystemUnavailable { code })?;
    Ok(Box::new(session))
}

#[cfg(not(windows))]
pub fn open() -> Result<Box<dyn WlanSubsystem>, PinError> {
    use pinbss_common::error::StatusCode;

    // ERROR_NOT_SUPPORTED
    Err(PinError::SubsystemUnavailable { code: StatusCode(50) })
}
