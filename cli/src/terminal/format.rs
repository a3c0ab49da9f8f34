use colored::*;
use pinbss_common::network::bss::VisibleNetwork;
use pinbss_common::network::profile::Profile;

use crate::terminal::colors;

type Detail = (String, ColoredString);

/// Five-step bar for a dBm reading, coloured by quality.
pub fn signal_bars(rssi: i32) -> ColoredString {
    let level: usize = match rssi {
        r if r >= -50 => 5,
        r if r >= -60 => 4,
        r if r >= -70 => 3,
        r if r >= -80 => 2,
        r if r >= -90 => 1,
        _ => 0,
    };
    let bars: String = format!("{}{}", "▮".repeat(level), "▯".repeat(5 - level));
    let color = match level {
        4..=5 => colors::SIGNAL_GOOD,
        2..=3 => colors::SIGNAL_FAIR,
        _ => colors::SIGNAL_POOR,
    };
    bars.color(color)
}

/// `HomeNet (Home)` line for the profile menu.
pub fn profile_label(profile: &Profile) -> String {
    format!(
        "{} {}",
        profile.ssid.to_string().color(colors::SSID),
        format!("({})", profile.name).color(colors::SEPARATOR)
    )
}

pub fn network_details(network: &VisibleNetwork) -> Vec<Detail> {
    vec![
        (
            "Signal".to_string(),
            format!("{} {} dBm", signal_bars(network.rssi), network.rssi).normal(),
        ),
        (
            "Channel".to_string(),
            format!("{} MHz ({})", network.frequency_mhz(), network.band().label())
                .color(colors::FREQUENCY),
        ),
    ]
}
