use crate::error::PinError;
use crate::network::bss::VisibleNetwork;
use crate::network::mac::Bssid;
use crate::network::profile::Profile;
use crate::network::ssid::Ssid;

/// A connect request pinned to exactly one access point.
///
/// The target name and address both come from the chosen [`VisibleNetwork`], so a request can
/// never name an access point that broadcasts something other than what it asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionRequest {
    profile: String,
    ssid: Ssid,
    bssid: Bssid,
}

impl ConnectionRequest {
    pub fn new(profile: &Profile, network: &VisibleNetwork) -> Result<Self, PinError> {
        if profile.ssid != network.ssid {
            return Err(PinError::SsidMismatch {
                profile: profile.ssid.to_string(),
                network: network.ssid.to_string(),
            });
        }

        Ok(Self {
            profile: profile.name.clone(),
            ssid: network.ssid.clone(),
            bssid: network.bssid,
        })
    }

    /// Name of the saved profile supplying security settings and credentials.
    pub fn profile(&self) -> &str {
        &self.profile
    }

    pub fn ssid(&self) -> &Ssid {
        &self.ssid
    }

    /// The allow-list handed to the subsystem. Always exactly one entry.
    pub fn allowed_bssids(&self) -> &[Bssid] {
        std::slice::from_ref(&self.bssid)
    }
}
