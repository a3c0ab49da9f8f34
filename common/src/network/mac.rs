use std::fmt;
use std::str::FromStr;

use pnet_base::MacAddr;
use thiserror::Error;

/// Physical address of a single access point radio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bssid(MacAddr);

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid BSSID {0:?}, expected six hex octets like aa:bb:cc:dd:ee:ff")]
pub struct ParseBssidError(pub String);

impl Bssid {
    pub fn new(octets: [u8; 6]) -> Self {
        let [a, b, c, d, e, f] = octets;
        Self(MacAddr::new(a, b, c, d, e, f))
    }

    pub fn octets(&self) -> [u8; 6] {
        let MacAddr(a, b, c, d, e, f) = self.0;
        [a, b, c, d, e, f]
    }
}

impl From<[u8; 6]> for Bssid {
    fn from(octets: [u8; 6]) -> Self {
        Self::new(octets)
    }
}

impl fmt::Display for Bssid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.octets();
        write!(f, "{a:02x}:{b:02x}:{c:02x}:{d:02x}:{e:02x}:{g:02x}")
    }
}

/// Accepts `:` or `-` separated octets in either case.
impl FromStr for Bssid {
    type Err = ParseBssidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseBssidError(s.to_string());
        let parts: Vec<&str> = s.trim().split([':', '-']).collect();
        if parts.len() != 6 {
            return Err(err());
        }

        let mut octets = [0u8; 6];
        for (octet, part) in octets.iter_mut().zip(parts) {
            if part.len() != 2 {
                return Err(err());
            }
            *octet = u8::from_str_radix(part, 16).map_err(|_| err())?;
        }
        Ok(Self::new(octets))
    }
}
