use crate::network::ssid::Ssid;

/// A saved connection profile and the network it targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub ssid: Ssid,
}

impl Profile {
    pub fn new(name: impl Into<String>, ssid: Ssid) -> Self {
        Self {
            name: name.into(),
            ssid,
        }
    }
}
