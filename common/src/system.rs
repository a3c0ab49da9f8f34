//! The boundary to the host's wireless stack.
//!
//! Everything the core needs from the operating system goes through [`WlanSubsystem`]. The
//! native implementation lives in `pinbss-core`; tests plug in in-memory fakes.

use crate::error::StatusCode;
use crate::network::adapter::{Adapter, AdapterId};
use crate::network::bss::VisibleNetwork;
use crate::network::request::ConnectionRequest;

/// An open session with the wireless subsystem.
///
/// Implementations release the session when dropped.
pub trait WlanSubsystem {
    /// Lists every wireless adapter the session can control.
    fn interfaces(&self) -> Result<Vec<Adapter>, StatusCode>;

    /// Asks the adapter to refresh its scan cache. Returns before the scan finishes.
    fn trigger_scan(&self, adapter: &AdapterId) -> Result<(), StatusCode>;

    /// Names of the saved profiles, in the order the subsystem enumerates them.
    fn profile_names(&self, adapter: &AdapterId) -> Result<Vec<String>, StatusCode>;

    /// The stored XML definition of one profile.
    fn profile_xml(&self, adapter: &AdapterId, name: &str) -> Result<String, StatusCode>;

    /// Current contents of the adapter's scan cache, infrastructure networks only.
    fn bss_list(&self, adapter: &AdapterId) -> Result<Vec<VisibleNetwork>, StatusCode>;

    /// Submits a directed connect. `Ok` means the request was accepted, not that the
    /// association completed.
    fn connect(&self, adapter: &AdapterId, request: &ConnectionRequest) -> Result<(), StatusCode>;
}
