//! # Pinned connection session
//!
//! Runs the whole "connect to this BSSID under this profile" workflow against an open
//! [`WlanSubsystem`]:
//!
//! 1. locate the single wireless adapter,
//! 2. request a scan so the cache refills while the operator picks a profile,
//! 3. list the saved profiles and let the operator choose one,
//! 4. poll the scan cache and keep the access points broadcasting the profile's network,
//! 5. let the operator choose one of them and submit a directed connect.
//!
//! The subsystem session is owned by the caller and only borrowed here, so it is released exactly
//! once whichever step fails.

use std::time::Duration;

use pinbss_common::PinError;
use pinbss_common::config::Config;
use pinbss_common::network::adapter::Adapter;
use pinbss_common::network::bss::VisibleNetwork;
use pinbss_common::network::profile::Profile;
use pinbss_common::network::request::ConnectionRequest;
use pinbss_common::network::ssid::Ssid;
use pinbss_common::system::WlanSubsystem;
use tracing::info;

use crate::scanner::ScanPoller;
use crate::{adapter, connect, filter, profiles};

/// The operator side of a session: renders choices and reads back an index.
///
/// Returned indices are bounds-checked by the session, implementations may hand back anything.
pub trait Selector {
    fn choose_profile(&mut self, profiles: &[Profile]) -> Result<usize, PinError>;

    fn choose_network(&mut self, ssid: &Ssid, networks: &[VisibleNetwork])
    -> Result<usize, PinError>;

    /// Called once the adapter is known.
    fn adapter_found(&mut self, _adapter: &Adapter) {}

    /// Called before the first poll of the scan cache.
    fn polling_started(&mut self, _attempts: usize) {}

    /// Called after every poll with the 1-based attempt and the snapshot size.
    fn poll_progress(&mut self, _attempt: usize, _visible: usize) {}

    /// Called once polling is over, whatever the result.
    fn polling_finished(&mut self) {}
}

/// How a session that did not fail ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The connect request was accepted by the subsystem.
    Connected {
        adapter: Adapter,
        profile: Profile,
        network: VisibleNetwork,
        request: ConnectionRequest,
    },
    /// No access point currently broadcasts the profile's network.
    NotVisible {
        adapter: Adapter,
        profile: Profile,
        /// Size of the snapshot that was searched.
        scanned: usize,
    },
}

/// Runs a session, sleeping with [`std::thread::sleep`] between polls.
pub fn run<S: WlanSubsystem + ?Sized>(
    wlan: &S,
    selector: &mut dyn Selector,
    cfg: &Config,
) -> Result<Outcome, PinError> {
    run_with_sleep(wlan, selector, cfg, std::thread::sleep)
}

/// Runs a session with a caller-provided pause between polls.
pub fn run_with_sleep<S: WlanSubsystem + ?Sized>(
    wlan: &S,
    selector: &mut dyn Selector,
    cfg: &Config,
    sleep: impl FnMut(Duration),
) -> Result<Outcome, PinError> {
    let adapter: Adapter = adapter::locate(wlan)?;
    selector.adapter_found(&adapter);

    let poller: ScanPoller = ScanPoller::from_config(cfg);
    poller.trigger(wlan, &adapter.id)?;

    let catalog: Vec<Profile> = profiles::catalog(wlan, &adapter.id)?;
    let index: usize = selector.choose_profile(&catalog)?;
    let profile: Profile = pick(&catalog, index)?.clone();
    info!("Using profile {:?} for network {}", profile.name, profile.ssid);

    selector.polling_started(poller.attempts());
    let snapshot = poller.poll(wlan, &adapter.id, sleep, |attempt, visible| {
        selector.poll_progress(attempt, visible)
    });
    selector.polling_finished();
    let snapshot: Vec<VisibleNetwork> = snapshot?;

    let candidates: Vec<VisibleNetwork> = filter::matching(&snapshot, &profile.ssid);
    if candidates.is_empty() {
        return Ok(Outcome::NotVisible {
            adapter,
            profile,
            scanned: snapshot.len(),
        });
    }

    let index: usize = selector.choose_network(&profile.ssid, &candidates)?;
    let network: VisibleNetwork = pick(&candidates, index)?.clone();

    let request: ConnectionRequest = connect::connect(wlan, &adapter.id, &profile, &network)?;
    Ok(Outcome::Connected {
        adapter,
        profile,
        network,
        request,
    })
}

/// Bounds-checked lookup of an operator-provided index.
pub fn pick<T>(items: &[T], index: usize) -> Result<&T, PinError> {
    items.get(index).ok_or_else(|| PinError::InvalidSelection {
        input: index.to_string(),
        len: items.len(),
    })
}
