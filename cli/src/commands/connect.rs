use colored::*;
use pinbss_common::PinError;
use pinbss_common::config::Config;
use pinbss_common::system::WlanSubsystem;
use pinbss_core::session::{self, Outcome, Selector};
use pinbss_core::system;
use tracing::{error, info, warn};

use crate::terminal::select::{Presets, TerminalSelector};
use crate::terminal::{colors, print};

/// Runs one pinned connection attempt and returns the process exit code.
pub fn connect(cfg: &Config, presets: Presets) -> i32 {
    let selector = TerminalSelector::stdin(presets, cfg.quiet);
    connect_with(cfg, system::open, selector)
}

/// The subsystem session from `open` is dropped before anything is reported, on every path.
fn connect_with<W, O, S>(cfg: &Config, open: O, mut selector: S) -> i32
where
    W: WlanSubsystem + ?Sized,
    O: FnOnce() -> Result<Box<W>, PinError>,
    S: Selector,
{
    let wlan: Box<W> = match open() {
        Ok(wlan) => wlan,
        Err(err) => return report_failure(&err),
    };

    let result: Result<Outcome, PinError> = session::run(&*wlan, &mut selector, cfg);
    drop(selector);
    drop(wlan);

    match result {
        Ok(outcome) => report_outcome(&outcome, cfg),
        Err(err) => report_failure(&err),
    }
}

fn report_outcome(outcome: &Outcome, cfg: &Config) -> i32 {
    match outcome {
        Outcome::Connected { network, request, .. } => {
            print::header("connect request accepted", cfg.quiet);
            info!(
                "Success! Pinned {} to {}",
                request.ssid().to_string().color(colors::SSID),
                network.bssid.to_string().color(colors::MAC_ADDR)
            );
            if cfg.quiet == 0 {
                print::fat_separator();
                print::centerln(&format!(
                    "{}",
                    "association runs in the background and is not confirmed".italic()
                ));
            }
            0
        }
        Outcome::NotVisible { profile, scanned, .. } => {
            print::header("access point not visible", cfg.quiet);
            print::no_results(cfg.quiet);
            warn!(
                "None of the {} visible access points broadcasts {}",
                scanned,
                profile.ssid.to_string().color(colors::SSID)
            );
            1
        }
    }
}

fn report_failure(err: &PinError) -> i32 {
    match err {
        PinError::InvalidSelection { .. } => warn!("Invalid selection! {err}"),
        _ => error!("{err}"),
    }
    err.exit_code()
}
