use std::io::{self, Write};
use std::sync::Mutex;
use std::time::Duration;

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

/// The spinner currently on screen, if any. Log output is routed around it.
static ACTIVE: Mutex<Option<ProgressBar>> = Mutex::new(None);

const TICKS: &[&str] = &[
    "▁▁▁▁▁",
    "▁▂▂▂▁",
    "▁▄▂▄▁",
    "▂▄▆▄▂",
    "▄▆█▆▄",
    "▂▄▆▄▂",
    "▁▄▂▄▁",
    "▁▂▂▂▁",
];

/// Spinner shown while the scan cache is polled. Cleared on drop.
pub struct ScanSpinner {
    spinner: ProgressBar,
    attempts: usize,
}

impl ScanSpinner {
    pub fn start(attempts: usize) -> Self {
        let pb = ProgressBar::new_spinner();
        let style = ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(TICKS);

        pb.set_style(style);
        pb.enable_steady_tick(Duration::from_millis(100));
        pb.set_message(format!("{}", "Waiting for scan results...".italic().white()));

        if let Ok(mut active) = ACTIVE.lock() {
            *active = Some(pb.clone());
        }

        Self {
            spinner: pb,
            attempts,
        }
    }

    pub fn report(&self, attempt: usize, visible: usize) {
        self.spinner.set_message(format!(
            "Attempt {}/{}, {} access points visible",
            attempt.to_string().bold(),
            self.attempts,
            visible.to_string().green().bold()
        ));
    }
}

impl Drop for ScanSpinner {
    fn drop(&mut self) {
        if let Ok(mut active) = ACTIVE.lock() {
            *active = None;
        }
        self.spinner.finish_and_clear();
    }
}

/// Log sink that suspends the active spinner while writing to stdout.
pub struct SpinnerWriter;

impl Write for SpinnerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let active: Option<ProgressBar> = ACTIVE.lock().ok().and_then(|active| active.clone());
        match active {
            Some(pb) => pb.suspend(|| io::stdout().write_all(buf))?,
            None => io::stdout().write_all(buf)?,
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stdout().flush()
    }
}
