use std::io::{self, BufRead, Write};

use colored::*;
use pinbss_common::PinError;
use pinbss_common::network::adapter::Adapter;
use pinbss_common::network::bss::VisibleNetwork;
use pinbss_common::network::mac::Bssid;
use pinbss_common::network::profile::Profile;
use pinbss_common::network::ssid::Ssid;
use pinbss_core::filter;
use pinbss_core::session::Selector;
use tracing::warn;

use crate::pprint;
use crate::terminal::spinner::ScanSpinner;
use crate::terminal::{colors, format, print};

/// Choices made on the command line instead of at a prompt.
#[derive(Debug, Clone, Default)]
pub struct Presets {
    pub profile: Option<String>,
    pub bssid: Option<Bssid>,
}

/// Menus on stdout, answers from stdin.
pub struct TerminalSelector<R> {
    input: R,
    presets: Presets,
    quiet: u8,
    spinner: Option<ScanSpinner>,
}

impl TerminalSelector<io::StdinLock<'static>> {
    pub fn stdin(presets: Presets, quiet: u8) -> Self {
        Self::new(io::stdin().lock(), presets, quiet)
    }
}

impl<R: BufRead> TerminalSelector<R> {
    pub fn new(input: R, presets: Presets, quiet: u8) -> Self {
        Self {
            input,
            presets,
            quiet,
            spinner: None,
        }
    }

    fn prompt(&mut self, question: &str, len: usize) -> Result<usize, PinError> {
        let mut stdout = io::stdout();
        write!(stdout, "{} {} ", "?".color(colors::ACCENT).bold(), question)?;
        stdout.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        parse_index(&line, len)
    }
}

/// Parses an operator's answer. Bounds are checked by the session.
fn parse_index(answer: &str, len: usize) -> Result<usize, PinError> {
    let answer = answer.trim();
    answer.parse::<usize>().map_err(|_| PinError::InvalidSelection {
        input: answer.to_string(),
        len,
    })
}

impl<R: BufRead> Selector for TerminalSelector<R> {
    fn adapter_found(&mut self, adapter: &Adapter) {
        print::aligned_line("Device", 6, adapter.description.as_str().color(colors::PRIMARY));
        print::aligned_line("State", 6, adapter.state);
    }

    fn choose_profile(&mut self, profiles: &[Profile]) -> Result<usize, PinError> {
        if let Some(name) = self.presets.profile.clone() {
            return profiles
                .iter()
                .position(|profile| profile.name == name)
                .ok_or(PinError::InvalidSelection {
                    input: name,
                    len: profiles.len(),
                });
        }

        if profiles.is_empty() {
            warn!("No saved profile names a usable network");
            return Err(PinError::InvalidSelection {
                input: String::new(),
                len: 0,
            });
        }

        print::header("saved profiles", self.quiet);
        for (idx, profile) in profiles.iter().enumerate() {
            print::tree_head(idx, &format::profile_label(profile));
        }
        self.prompt("Which profile?", profiles.len())
    }

    fn polling_started(&mut self, attempts: usize) {
        if self.quiet < 2 {
            self.spinner = Some(ScanSpinner::start(attempts));
        }
    }

    fn poll_progress(&mut self, attempt: usize, visible: usize) {
        if let Some(spinner) = &self.spinner {
            spinner.report(attempt, visible);
        }
    }

    fn polling_finished(&mut self) {
        self.spinner = None;
    }

    fn choose_network(&mut self, ssid: &Ssid, networks: &[VisibleNetwork]) -> Result<usize, PinError> {
        if let Some(bssid) = self.presets.bssid {
            return networks
                .iter()
                .position(|network| network.bssid == bssid)
                .ok_or(PinError::InvalidSelection {
                    input: bssid.to_string(),
                    len: networks.len(),
                });
        }

        print::header(&format!("access points of {ssid}"), self.quiet);
        let strongest: Option<usize> = filter::strongest(networks);
        for (idx, network) in networks.iter().enumerate() {
            let mut name: String = network.bssid.to_string().color(colors::MAC_ADDR).to_string();
            if Some(idx) == strongest {
                name = format!("{} {}", name, "strongest".color(colors::ACCENT));
            }
            print::tree_head(idx, &name);
            if self.quiet < 2 {
                print::as_tree_one_level(format::network_details(network));
            }
            if idx + 1 != networks.len() {
                pprint!();
            }
        }
        self.prompt("Which BSSID?", networks.len())
    }
}
