use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

use crate::types::capabilities::{
    AuthAlgs, Bands, Ciphers, FreqFlags, KeyMgmt, OpMode, WpaVersion,
};

/// A 48-bit IEEE 802 MAC address.
///
/// Displays as six upper-case hex octets separated by colons,
/// e.g. `00:1A:2B:3C:4D:5E`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct MacAddr(pub [u8; 6]);

impl MacAddr {
    /// The all-zero address, printed when no BSSID is known.
    pub const ZERO: MacAddr = MacAddr([0; 6]);

    pub fn octets(&self) -> [u8; 6] {
        self.0
    }
}

impl Display for MacAddr {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(f, "{a:02X}:{b:02X}:{c:02X}:{d:02X}:{e:02X}:{g:02X}")
    }
}

impl FromStr for MacAddr {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut octets = [0u8; 6];
        let mut parts = s.trim().split(':');
        for octet in octets.iter_mut() {
            let part = parts
                .next()
                .ok_or_else(|| QueryError::Failed(format!("short MAC address: {s}")))?;
            *octet = u8::from_str_radix(part, 16)
                .map_err(|e| QueryError::Failed(format!("bad MAC octet {part:?}: {e}")))?;
        }
        if parts.next().is_some() {
            return Err(QueryError::Failed(format!("long MAC address: {s}")));
        }
        Ok(MacAddr(octets))
    }
}

/// Security capabilities of a BSS or of the current association.
///
/// When `enabled` is false, or neither `auth_algs` nor `wpa_version` carries a
/// bit, the entry describes an open network whatever the cipher masks say.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CryptoEntry {
    /// Whether any encryption is in use.
    pub enabled: bool,
    /// WPA generations advertised.
    pub wpa_version: WpaVersion,
    /// Legacy (WEP) authentication algorithms.
    pub auth_algs: AuthAlgs,
    /// Key management suites.
    pub auth_suites: KeyMgmt,
    /// Pairwise (unicast) ciphers.
    pub pair_ciphers: Ciphers,
    /// Group (broadcast) ciphers.
    pub group_ciphers: Ciphers,
}

impl CryptoEntry {
    /// Returns true when the entry describes no protection at all.
    pub fn is_open(&self) -> bool {
        !self.enabled || (self.auth_algs.is_empty() && self.wpa_version.is_empty())
    }
}

/// PHY generation specific details of a bitrate.
///
/// Exactly one generation applies to a rate, so fields that belong to
/// another generation cannot be set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RatePhy {
    /// Legacy OFDM/DSSS rate without MCS information.
    #[default]
    Legacy,
    /// 802.11n.
    Ht { mcs: i8, mhz: u8 },
    /// 802.11ac.
    Vht { mcs: i8, mhz: u8, nss: u8 },
    /// 802.11ax.
    He {
        mcs: i8,
        mhz: u8,
        nss: u8,
        gi: u8,
        dcm: u8,
    },
    /// 802.11be. Widths above 255 MHz are carried, so `mhz` is 16 bits.
    Eht { mcs: i8, mhz: u16, nss: u8, gi: u8 },
}

/// RX or TX bitrate of an associated station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RateEntry {
    /// Bitrate in kbit/s.
    pub rate: u32,
    pub is_40mhz: bool,
    pub is_short_gi: bool,
    pub phy: RatePhy,
}

/// HT operation element of a scanned BSS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HtChanInfo {
    pub primary_chan: u8,
    /// Index into the secondary channel offset table.
    pub secondary_chan_off: u8,
    /// HT width code, see [`crate::render::chan_width`].
    pub chan_width: u8,
}

/// VHT operation element of a scanned BSS.
///
/// A zero `center_chan_1` means the BSS sent no VHT operation element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VhtChanInfo {
    /// VHT width code, see [`crate::render::chan_width`].
    pub chan_width: u8,
    pub center_chan_1: u8,
    pub center_chan_2: u8,
}

/// One BSS found by a scan.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScanEntry {
    /// BSSID
    pub mac: MacAddr,
    /// Network name, empty for hidden networks
    pub ssid: String,
    pub mode: OpMode,
    pub band: Bands,
    pub channel: u8,
    /// Center frequency in MHz
    pub mhz: u32,
    /// Signal level in dBm
    pub signal: i32,
    pub quality: u8,
    pub quality_max: u8,
    pub crypto: CryptoEntry,
    pub ht_chan_info: HtChanInfo,
    pub vht_chan_info: VhtChanInfo,
}

/// One station associated with an access point, or the AP a client is
/// associated with.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AssocEntry {
    pub mac: MacAddr,
    /// Last signal level in dBm
    pub signal: i8,
    /// Average signal level in dBm
    pub signal_avg: i8,
    /// Noise floor in dBm
    pub noise: i8,
    /// Milliseconds since the last frame from this station
    pub inactive: u32,
    /// Seconds since association
    pub connected_time: u32,
    pub rx_packets: u32,
    pub tx_packets: u32,
    pub rx_bytes: u64,
    pub tx_bytes: u64,
    pub tx_retries: u32,
    pub tx_failed: u32,
    pub rx_rate: RateEntry,
    pub tx_rate: RateEntry,
    /// Expected throughput in kbit/s
    pub thr: u32,
}

impl AssocEntry {
    /// Signal to noise ratio in dB.
    pub fn snr(&self) -> i32 {
        self.signal as i32 - self.noise as i32
    }
}

/// One selectable transmit power level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TxPowerEntry {
    pub dbm: u8,
    pub mw: u16,
}

/// One frequency a radio can tune to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FreqEntry {
    pub band: Bands,
    pub channel: u8,
    pub mhz: u32,
    pub restricted: bool,
    pub flags: FreqFlags,
}

/// One regulatory domain a radio accepts.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CountryEntry {
    /// Packed ISO-3166 alpha-2 code, see [`crate::types::iso3166::pack`].
    pub iso3166: u16,
    /// Country code as the driver spells it, e.g. "DE" or "00".
    pub ccode: String,
}

/// Bus identifiers of a wireless adapter.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HardwareId {
    pub vendor_id: u16,
    pub device_id: u16,
    pub subsystem_vendor_id: u16,
    pub subsystem_device_id: u16,
    /// Device tree "compatible" string of embedded radios
    pub compatible: String,
}

/// Failure of a single backend query.
///
/// `NotSupported` means the backend does not implement the operation at all;
/// every other variant means the operation exists but this call failed.
#[derive(Debug, Error)]
pub enum QueryError {
    /// The backend does not implement this operation.
    #[error("operation not supported by backend")]
    NotSupported,

    /// The operation is implemented but the live query failed.
    #[error("query failed: {0}")]
    Failed(String),

    /// Reading from the backend transport failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A list buffer length is not a multiple of its record stride.
    #[error("list buffer of {len} bytes is not a multiple of the {stride}-byte record stride")]
    ContractViolation { len: usize, stride: usize },
}

impl QueryError {
    /// Returns true if the operation is absent rather than failed.
    pub fn is_not_supported(&self) -> bool {
        matches!(self, QueryError::NotSupported)
    }
}

/// Result of a single backend query.
pub type QueryResult<T> = std::result::Result<T, QueryError>;

/// Errors from encoding or decoding fixed-stride record buffers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WireError {
    /// The buffer does not hold a whole number of records.
    #[error("buffer of {len} bytes is not a multiple of the {stride}-byte record stride")]
    ContractViolation { len: usize, stride: usize },

    /// The records do not fit in the caller's buffer.
    #[error("records need {needed} bytes but the buffer holds {capacity}")]
    BufferTooSmall { needed: usize, capacity: usize },
}

impl From<WireError> for QueryError {
    fn from(e: WireError) -> Self {
        match e {
            WireError::ContractViolation { len, stride } => {
                QueryError::ContractViolation { len, stride }
            }
            other => QueryError::Failed(other.to_string()),
        }
    }
}

/// Errors returned by wlinfo operations.
///
/// # Examples
///
/// ```no_run
/// use wlinfo::{Registry, WlinfoError};
///
/// # fn example() -> wlinfo::Result<()> {
/// let registry = Registry::new(Default::default());
///
/// match registry.resolve_by_device("wlan0") {
///     Ok(backend) => println!("wlan0 is handled by {}", backend.name()),
///     Err(WlinfoError::NoSuchDevice(dev)) => eprintln!("No such wireless device: {dev}"),
///     Err(e) => return Err(e),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Error)]
pub enum WlinfoError {
    /// No registered backend claims the device.
    #[error("no such wireless device: {0}")]
    NoSuchDevice(String),

    /// No backend is registered under the given name.
    #[error("no such wireless backend: {0}")]
    NoSuchBackend(String),

    /// Listing interfaces or reading configuration failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A backend query failed where the caller asked for the raw outcome.
    #[error(transparent)]
    Query(#[from] QueryError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mac_display_is_upper_hex() {
        let mac = MacAddr([0x00, 0x1a, 0x2b, 0x3c, 0x4d, 0x5e]);
        assert_eq!(mac.to_string(), "00:1A:2B:3C:4D:5E");
        assert_eq!(MacAddr::ZERO.to_string(), "00:00:00:00:00:00");
    }

    #[test]
    fn mac_parse_accepts_lower_case() {
        let mac: MacAddr = "de:ad:be:ef:00:01".parse().expect("valid MAC");
        assert_eq!(mac.octets(), [0xde, 0xad, 0xbe, 0xef, 0x00, 0x01]);
    }

    #[test]
    fn mac_parse_rejects_wrong_length() {
        assert!("de:ad:be:ef:00".parse::<MacAddr>().is_err());
        assert!("de:ad:be:ef:00:01:02".parse::<MacAddr>().is_err());
        assert!("zz:ad:be:ef:00:01".parse::<MacAddr>().is_err());
    }

    #[test]
    fn crypto_open_when_disabled() {
        let c = CryptoEntry {
            enabled: false,
            wpa_version: WpaVersion::WPA2,
            pair_ciphers: Ciphers::CCMP,
            ..Default::default()
        };
        assert!(c.is_open());
    }

    #[test]
    fn crypto_open_without_auth_or_wpa() {
        let c = CryptoEntry {
            enabled: true,
            pair_ciphers: Ciphers::CCMP,
            ..Default::default()
        };
        assert!(c.is_open());
    }

    #[test]
    fn crypto_wep_is_not_open() {
        let c = CryptoEntry {
            enabled: true,
            auth_algs: AuthAlgs::OPEN,
            ..Default::default()
        };
        assert!(!c.is_open());
    }

    #[test]
    fn assoc_snr() {
        let e = AssocEntry {
            signal: -40,
            noise: -95,
            ..Default::default()
        };
        assert_eq!(e.snr(), 55);
    }

    #[test]
    fn not_supported_is_distinguishable() {
        assert!(QueryError::NotSupported.is_not_supported());
        assert!(!QueryError::Failed("x".into()).is_not_supported());
    }

    #[test]
    fn wire_contract_violation_maps_to_query_error() {
        let e: QueryError = WireError::ContractViolation { len: 7, stride: 3 }.into();
        assert!(matches!(
            e,
            QueryError::ContractViolation { len: 7, stride: 3 }
        ));
    }

    #[test]
    fn error_display() {
        assert_eq!(
            WlinfoError::NoSuchDevice("wlan9".into()).to_string(),
            "no such wireless device: wlan9"
        );
        assert_eq!(
            WlinfoError::NoSuchBackend("madwifi".into()).to_string(),
            "no such wireless backend: madwifi"
        );
    }
}
