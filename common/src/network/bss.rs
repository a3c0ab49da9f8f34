use crate::network::mac::Bssid;
use crate::network::ssid::Ssid;

/// One access point seen in a scan snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleNetwork {
    pub ssid: Ssid,
    pub bssid: Bssid,
    /// Received signal strength in dBm.
    pub rssi: i32,
    /// Channel center frequency in kHz.
    pub frequency_khz: u32,
}

impl VisibleNetwork {
    pub fn frequency_mhz(&self) -> u32 {
        self.frequency_khz / 1000
    }

    pub fn band(&self) -> Band {
        Band::from_mhz(self.frequency_mhz())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    Ghz2_4,
    Ghz5,
    Ghz6,
    Other,
}

impl Band {
    fn from_mhz(mhz: u32) -> Self {
        match mhz {
            2400..=2500 => Self::Ghz2_4,
            5150..=5895 => Self::Ghz5,
            5925..=7125 => Self::Ghz6,
            _ => Self::Other,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Ghz2_4 => "2.4 GHz",
            Self::Ghz5 => "5 GHz",
            Self::Ghz6 => "6 GHz",
            Self::Other => "?",
        }
    }
}
