use std::time::Duration;

/// How many times the visible-network list is polled after a scan trigger.
pub const DEFAULT_SCAN_ATTEMPTS: usize = 10;

/// Pause taken before each poll of the visible-network list.
pub const DEFAULT_SCAN_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone)]
pub struct Config {
    /// Hides the banner but keeps headers.
    pub no_banner: bool,
    /// 0 prints everything, 1 drops banner and headers, 2 drops decorations too.
    pub quiet: u8,
    /// Upper bound on visible-network queries. Never zero.
    pub scan_attempts: usize,
    pub scan_delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            no_banner: false,
            quiet: 0,
            scan_attempts: DEFAULT_SCAN_ATTEMPTS,
            scan_delay: DEFAULT_SCAN_DELAY,
        }
    }
}
