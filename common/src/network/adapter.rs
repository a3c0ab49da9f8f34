use std::fmt;

/// Opaque identity of a wireless adapter, the interface GUID on Windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AdapterId(pub u128);

impl fmt::Display for AdapterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;
        write!(
            f,
            "{{{:08x}-{:04x}-{:04x}-{:04x}-{:012x}}}",
            (v >> 96) as u32,
            (v >> 80) as u16,
            (v >> 64) as u16,
            (v >> 48) as u16,
            v & 0xffff_ffff_ffff
        )
    }
}

/// Connection state the adapter reported when it was enumerated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdapterState {
    NotReady,
    Connected,
    AdHocNetworkFormed,
    Disconnecting,
    Disconnected,
    Associating,
    Discovering,
    Authenticating,
    Unknown,
}

impl fmt::Display for AdapterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::NotReady => "not ready",
            Self::Connected => "connected",
            Self::AdHocNetworkFormed => "ad hoc network formed",
            Self::Disconnecting => "disconnecting",
            Self::Disconnected => "disconnected",
            Self::Associating => "associating",
            Self::Discovering => "discovering",
            Self::Authenticating => "authenticating",
            Self::Unknown => "unknown",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Adapter {
    pub id: AdapterId,
    pub description: String,
    pub state: AdapterState,
}
