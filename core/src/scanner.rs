//! Scan triggering and polling of the adapter's scan cache.
//!
//! The subsystem answers visible-network queries from a cache that refills in the background
//! after a scan is requested. Right after the trigger the cache is usually empty or stale, so the
//! poller queries it repeatedly with a fixed pause until results start to show up.

use std::time::Duration;

use pinbss_common::PinError;
use pinbss_common::config::Config;
use pinbss_common::network::adapter::AdapterId;
use pinbss_common::network::bss::VisibleNetwork;
use pinbss_common::system::WlanSubsystem;
use tracing::{debug, warn};

/// Bounded, blocking poller over the visible-network list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanPoller {
    attempts: usize,
    delay: Duration,
}

impl ScanPoller {
    pub fn new(attempts: usize, delay: Duration) -> Self {
        Self {
            attempts: attempts.max(1),
            delay,
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(cfg.scan_attempts, cfg.scan_delay)
    }

    pub fn attempts(&self) -> usize {
        self.attempts
    }

    /// Fires a scan request and returns without waiting for it.
    pub fn trigger<S: WlanSubsystem + ?Sized>(
        &self,
        wlan: &S,
        adapter: &AdapterId,
    ) -> Result<(), PinError> {
        wlan.trigger_scan(adapter)
            .map_err(|code| PinError::ScanTriggerFailed { code })?;
        debug!("Scan requested on {adapter}");
        Ok(())
    }

    /// Polls until a snapshot holds more than one entry or the attempts run out.
    ///
    /// Every attempt is preceded by `sleep(delay)`. An exhausted budget is not an error: the last
    /// snapshot is returned as is. `on_attempt` receives the 1-based attempt number and the size
    /// of the snapshot it produced.
    pub fn poll<S: WlanSubsystem + ?Sized>(
        &self,
        wlan: &S,
        adapter: &AdapterId,
        mut sleep: impl FnMut(Duration),
        mut on_attempt: impl FnMut(usize, usize),
    ) -> Result<Vec<VisibleNetwork>, PinError> {
        let mut snapshot: Vec<VisibleNetwork> = Vec::new();

        for attempt in 1..=self.attempts {
            sleep(self.delay);
            snapshot = wlan
                .bss_list(adapter)
                .map_err(|code| PinError::ScanQueryFailed { attempt, code })?;

            debug!("Poll {attempt}/{}: {} entries", self.attempts, snapshot.len());
            on_attempt(attempt, snapshot.len());

            // More than one entry means the cache has started to refill. It says nothing
            // about the refill being complete.
            if snapshot.len() > 1 {
                return Ok(snapshot);
            }
        }

        warn!(
            "Scan results still sparse after {} attempts, continuing with {} entries",
            self.attempts,
            snapshot.len()
        );
        Ok(snapshot)
    }
}

impl Default for ScanPoller {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
