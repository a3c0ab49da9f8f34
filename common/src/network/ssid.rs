use std::fmt;

/// Longest network name 802.11 allows, in bytes.
pub const MAX_SSID_LEN: usize = 32;

/// A network name as broadcast on air.
///
/// Kept as raw bytes: names are not required to be valid UTF-8 and two names are only equal when
/// their bytes are.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ssid(Vec<u8>);

impl Ssid {
    /// Builds a name from raw bytes, truncating anything past [`MAX_SSID_LEN`].
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let len = bytes.len().min(MAX_SSID_LEN);
        Self(bytes[..len].to_vec())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Ssid {
    fn from(name: &str) -> Self {
        Self::from_bytes(name.as_bytes())
    }
}

impl fmt::Display for Ssid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.0))
    }
}
