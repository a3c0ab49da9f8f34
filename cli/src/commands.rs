pub mod connect;

use std::time::Duration;

use clap::{ArgAction, Parser};
use pinbss_common::config::{Config, DEFAULT_SCAN_DELAY};
use pinbss_common::network::mac::Bssid;

use crate::terminal::select::Presets;

#[derive(Parser)]
#[command(name = "pinbss", version)]
#[command(about = "Connect to one specific access point of a wireless network.")]
pub struct CommandLine {
    /// Saved profile to use, by name. Skips the profile prompt
    #[arg(short, long, value_name = "NAME")]
    pub profile: Option<String>,

    /// Access point to pin, e.g. aa:bb:cc:dd:ee:ff. Skips the access point prompt
    #[arg(short, long, value_name = "MAC")]
    pub bssid: Option<Bssid>,

    /// How many times to query scan results before giving up on more arriving
    #[arg(long, value_name = "N", default_value_t = 10, value_parser = clap::value_parser!(u16).range(1..))]
    pub attempts: u16,

    /// Pause before each scan result query, in milliseconds
    #[arg(long, value_name = "MS", default_value_t = DEFAULT_SCAN_DELAY.as_millis() as u64)]
    pub delay: u64,

    /// Less output. Repeat to drop decorations as well
    #[arg(short, long, action = ArgAction::Count)]
    pub quiet: u8,

    /// Do not print the banner
    #[arg(long)]
    pub no_banner: bool,

    /// More logging. Repeat for trace output. RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            no_banner: self.no_banner,
            quiet: self.quiet,
            scan_attempts: usize::from(self.attempts),
            scan_delay: Duration::from_millis(self.delay),
        }
    }

    pub fn presets(&self) -> Presets {
        Presets {
            profile: self.profile.clone(),
            bssid: self.bssid,
        }
    }
}
