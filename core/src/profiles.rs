//! Saved profiles and the network each one targets.

use std::sync::OnceLock;

use pinbss_common::PinError;
use pinbss_common::network::adapter::AdapterId;
use pinbss_common::network::profile::Profile;
use pinbss_common::network::ssid::Ssid;
use pinbss_common::system::WlanSubsystem;
use regex::Regex;
use tracing::{debug, warn};

static SSID_BLOCK: OnceLock<Regex> = OnceLock::new();
static NAME: OnceLock<Regex> = OnceLock::new();

/// Body of the first `<SSID>...</SSID>` block of a profile document.
fn ssid_block() -> &'static Regex {
    SSID_BLOCK.get_or_init(|| Regex::new(r"(?s)<SSID>(.*?)</SSID>").expect("static pattern"))
}

fn name() -> &'static Regex {
    NAME.get_or_init(|| Regex::new(r"<name>([0-9A-Za-z\-_+ ]+)</name>").expect("static pattern"))
}

/// Pulls the target network name out of a stored profile definition.
///
/// Only alphanumerics, `-`, `_`, `+` and spaces are accepted. The name must sit inside the first
/// SSID block; documents without any SSID block fall back to the first `<name>` element.
pub fn network_name(xml: &str) -> Option<Ssid> {
    let scope: &str = match ssid_block().captures(xml) {
        Some(block) => block.get(1)?.as_str(),
        None if xml.contains("<SSID>") => return None,
        None => xml,
    };
    let captures = name().captures(scope)?;
    captures.get(1).map(|found| Ssid::from(found.as_str()))
}

/// Lists the saved profiles of `adapter` that name a usable network, in enumeration order.
///
/// Profiles whose definition cannot be read or parsed are left out.
pub fn catalog<S: WlanSubsystem + ?Sized>(
    wlan: &S,
    adapter: &AdapterId,
) -> Result<Vec<Profile>, PinError> {
    let names: Vec<String> = wlan
        .profile_names(adapter)
        .map_err(|code| PinError::ProfileQueryFailed { code })?;
    debug!("Subsystem reports {} saved profile(s)", names.len());

    let profiles: Vec<Profile> = names
        .into_iter()
        .filter_map(|name| match wlan.profile_xml(adapter, &name) {
            Ok(xml) => match network_name(&xml) {
                Some(ssid) => Some(Profile::new(name, ssid)),
                None => {
                    debug!("Skipping profile {name:?}: no usable network name");
                    None
                }
            },
            Err(code) => {
                warn!("Skipping profile {name:?}: definition unavailable ({code})");
                None
            }
        })
        .collect();

    Ok(profiles)
}
