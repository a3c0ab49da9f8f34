use pinbss_common::network::bss::VisibleNetwork;
use pinbss_common::network::ssid::Ssid;

/// Entries of `snapshot` broadcasting exactly `ssid`, in snapshot order.
///
/// Names are compared byte for byte with no case or whitespace folding. An empty result means the
/// network is not visible right now.
pub fn matching(snapshot: &[VisibleNetwork], ssid: &Ssid) -> Vec<VisibleNetwork> {
    snapshot
        .iter()
        .filter(|network| network.ssid == *ssid)
        .cloned()
        .collect()
}

/// Index of the strongest entry, for highlighting. Ties go to the earlier entry.
pub fn strongest(networks: &[VisibleNetwork]) -> Option<usize> {
    networks
        .iter()
        .enumerate()
        .rev()
        .max_by_key(|(_, network)| network.rssi)
        .map(|(idx, _)| idx)
}
