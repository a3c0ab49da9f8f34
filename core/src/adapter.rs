//! Finds the one wireless adapter this run will drive.

use pinbss_common::PinError;
use pinbss_common::network::adapter::Adapter;
use pinbss_common::system::WlanSubsystem;
use tracing::debug;

/// Returns the only controllable wireless adapter on the host.
///
/// There is no disambiguation: zero or several adapters both end the run.
pub fn locate<S: WlanSubsystem + ?Sized>(wlan: &S) -> Result<Adapter, PinError> {
    let adapters: Vec<Adapter> = wlan
        .interfaces()
        .map_err(|code| PinError::SubsystemUnavailable { code })?;

    for adapter in &adapters {
        debug!("Found adapter {} ({}, {})", adapter.description, adapter.id, adapter.state);
    }

    let adapter: Adapter = select_single(adapters)?;
    debug!("Selected adapter {}", adapter.id);
    Ok(adapter)
}

fn select_single(mut adapters: Vec<Adapter>) -> Result<Adapter, PinError> {
    match adapters.len() {
        0 => Err(PinError::NoAdapter),
        1 => Ok(adapters.remove(0)),
        count => Err(PinError::MultipleAdapters { count }),
    }
}
