use std::cell::RefCell;
use std::collections::VecDeque;

use pinbss_common::error::StatusCode;
use pinbss_common::network::adapter::{Adapter, AdapterId, AdapterState};
use pinbss_common::network::bss::VisibleNetwork;
use pinbss_common::network::mac::Bssid;
use pinbss_common::network::request::ConnectionRequest;
use pinbss_common::network::ssid::Ssid;
use pinbss_common::system::WlanSubsystem;

pub const ADAPTER: AdapterId = AdapterId(0x1234);

pub fn adapter(id: u128) -> Adapter {
    Adapter {
        id: AdapterId(id),
        description: format!("Wireless adapter #{id}"),
        state: AdapterState::Disconnected,
    }
}

pub fn network(ssid: &str, last_octet: u8, rssi: i32) -> VisibleNetwork {
    VisibleNetwork {
        ssid: Ssid::from(ssid),
        bssid: Bssid::new([0x02, 0, 0, 0, 0, last_octet]),
        rssi,
        frequency_khz: 2_437_000,
    }
}

pub fn profile_xml(profile: &str, ssid: &str) -> String {
    format!(
        "<?xml version=\"1.0\"?>\n<WLANProfile>\n\t<name>{profile}</name>\n\t<SSIDConfig>\n\t\t<SSID>\n\t\t\t<hex>00</hex>\n\t\t\t<name>{ssid}</name>\n\t\t</SSID>\n\t</SSIDConfig>\n</WLANProfile>"
    )
}

/// Scripted stand-in for the wireless subsystem.
pub struct FakeWlan {
    pub adapters: Result<Vec<Adapter>, StatusCode>,
    pub trigger: Result<(), StatusCode>,
    pub profiles: Result<Vec<(String, Result<String, StatusCode>)>, StatusCode>,
    /// Handed out one per query; the last one repeats once the script runs dry.
    pub snapshots: RefCell<VecDeque<Result<Vec<VisibleNetwork>, StatusCode>>>,
    pub connect: Result<(), StatusCode>,
    pub bss_queries: RefCell<usize>,
    pub submitted: RefCell<Vec<ConnectionRequest>>,
}

impl FakeWlan {
    pub fn new() -> Self {
        Self {
            adapters: Ok(vec![adapter(ADAPTER.0)]),
            trigger: Ok(()),
            profiles: Ok(Vec::new()),
            snapshots: RefCell::new(VecDeque::new()),
            connect: Ok(()),
            bss_queries: RefCell::new(0),
            submitted: RefCell::new(Vec::new()),
        }
    }

    pub fn with_snapshots(self, snapshots: Vec<Result<Vec<VisibleNetwork>, StatusCode>>) -> Self {
        *self.snapshots.borrow_mut() = snapshots.into();
        self
    }
}

impl WlanSubsystem for FakeWlan {
    fn interfaces(&self) -> Result<Vec<Adapter>, StatusCode> {
        self.adapters.clone()
    }

    fn trigger_scan(&self, _adapter: &AdapterId) -> Result<(), StatusCode> {
        self.trigger
    }

    fn profile_names(&self, _adapter: &AdapterId) -> Result<Vec<String>, StatusCode> {
        self.profiles
            .as_ref()
            .map(|profiles| profiles.iter().map(|(name, _)| name.clone()).collect())
            .map_err(|code| *code)
    }

    fn profile_xml(&self, _adapter: &AdapterId, name: &str) -> Result<String, StatusCode> {
        let profiles = self.profiles.as_ref().map_err(|code| *code)?;
        profiles
            .iter()
            .find(|(profile, _)| profile == name)
            .map(|(_, xml)| xml.clone())
            .unwrap_or(Err(StatusCode(1168)))
    }

    fn bss_list(&self, _adapter: &AdapterId) -> Result<Vec<VisibleNetwork>, StatusCode> {
        *self.bss_queries.borrow_mut() += 1;
        let mut snapshots = self.snapshots.borrow_mut();
        match snapshots.len() {
            0 => Ok(Vec::new()),
            1 => snapshots[0].clone(),
            _ => snapshots.pop_front().unwrap_or(Ok(Vec::new())),
        }
    }

    fn connect(&self, _adapter: &AdapterId, request: &ConnectionRequest) -> Result<(), StatusCode> {
        self.submitted.borrow_mut().push(request.clone());
        self.connect
    }
}
