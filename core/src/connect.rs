//! Directed connect: one profile, one network name, one permitted access point.

use pinbss_common::PinError;
use pinbss_common::network::adapter::AdapterId;
use pinbss_common::network::bss::VisibleNetwork;
use pinbss_common::network::profile::Profile;
use pinbss_common::network::request::ConnectionRequest;
use pinbss_common::system::WlanSubsystem;
use tracing::info;

/// Submits a connect for `profile` restricted to the access point `network`.
///
/// Success means the subsystem accepted the request. Association happens afterwards and is not
/// awaited.
pub fn connect<S: WlanSubsystem + ?Sized>(
    wlan: &S,
    adapter: &AdapterId,
    profile: &Profile,
    network: &VisibleNetwork,
) -> Result<ConnectionRequest, PinError> {
    let request: ConnectionRequest = ConnectionRequest::new(profile, network)?;

    info!(
        "Connecting to {} via {} using profile {:?}",
        request.ssid(),
        network.bssid,
        request.profile()
    );
    wlan.connect(adapter, &request)
        .map_err(|code| PinError::ConnectRejected { code })?;

    Ok(request)
}
