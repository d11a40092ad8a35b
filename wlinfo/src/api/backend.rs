//! The operation table every wireless backend implements.
//!
//! A backend is a driver family (nl80211, a vendor ioctl interface, a sysfs
//! reader, ...) that can answer some subset of the queries below for the
//! devices it claims. Every query has a default implementation returning
//! [`QueryError::NotSupported`], so a backend only overrides what it can
//! actually answer and callers can tell an absent operation apart from a
//! failed one.
//!
//! Scalar queries return a single value. List queries return an owned vector
//! of records; an empty vector is a valid answer ("nothing found") and is
//! distinct from an error ("could not ask").

use crate::api::models::{
    AssocEntry, CountryEntry, CryptoEntry, FreqEntry, HardwareId, MacAddr, QueryError,
    QueryResult, ScanEntry, TxPowerEntry,
};
use crate::types::capabilities::{HtModes, HwModes, OpMode};

/// Operation table of a wireless backend.
///
/// Implementations must be cheap to construct and must not touch hardware
/// until [`Backend::acquire`] is called.
///
/// # Examples
///
/// ```
/// use wlinfo::{Backend, QueryResult};
///
/// struct Fixed;
///
/// impl Backend for Fixed {
///     fn name(&self) -> &'static str {
///         "fixed"
///     }
///
///     fn probe(&self, device: &str) -> bool {
///         device == "wlan0"
///     }
///
///     fn channel(&self, _device: &str) -> QueryResult<i32> {
///         Ok(6)
///     }
/// }
///
/// let backend = Fixed;
/// assert_eq!(backend.channel("wlan0").unwrap(), 6);
/// assert!(backend.frequency("wlan0").unwrap_err().is_not_supported());
/// ```
pub trait Backend: Send + Sync {
    /// Returns the backend's registry name, e.g. "nl80211".
    fn name(&self) -> &'static str;

    /// Returns true if this backend can answer queries for `device`.
    fn probe(&self, device: &str) -> bool;

    /// Acquires whatever transport the backend needs (sockets, handles).
    ///
    /// Called when a [`crate::Session`] opens; paired with [`Backend::release`].
    fn acquire(&self) -> QueryResult<()> {
        Ok(())
    }

    /// Releases the transport acquired by [`Backend::acquire`].
    fn release(&self) {}

    /// Current operating mode.
    fn mode(&self, _device: &str) -> QueryResult<OpMode> {
        Err(QueryError::NotSupported)
    }

    /// Current channel number.
    fn channel(&self, _device: &str) -> QueryResult<i32> {
        Err(QueryError::NotSupported)
    }

    /// First center channel of a wide (VHT and later) channel.
    fn center_chan1(&self, _device: &str) -> QueryResult<i32> {
        Err(QueryError::NotSupported)
    }

    /// Second center channel of an 80+80 MHz channel.
    fn center_chan2(&self, _device: &str) -> QueryResult<i32> {
        Err(QueryError::NotSupported)
    }

    /// Current frequency in MHz.
    fn frequency(&self, _device: &str) -> QueryResult<i32> {
        Err(QueryError::NotSupported)
    }

    /// Frequency offset of a converter in front of the radio, in MHz.
    fn frequency_offset(&self, _device: &str) -> QueryResult<i32> {
        Err(QueryError::NotSupported)
    }

    /// Current transmit power in dBm, before offset.
    fn txpower(&self, _device: &str) -> QueryResult<i32> {
        Err(QueryError::NotSupported)
    }

    /// Gain of an amplifier or attenuator after the radio, in dB.
    fn txpower_offset(&self, _device: &str) -> QueryResult<i32> {
        Err(QueryError::NotSupported)
    }

    /// Current bitrate in kbit/s.
    fn bitrate(&self, _device: &str) -> QueryResult<i32> {
        Err(QueryError::NotSupported)
    }

    /// Signal level in dBm.
    fn signal(&self, _device: &str) -> QueryResult<i32> {
        Err(QueryError::NotSupported)
    }

    /// Noise floor in dBm.
    fn noise(&self, _device: &str) -> QueryResult<i32> {
        Err(QueryError::NotSupported)
    }

    /// Link quality, between 0 and [`Backend::quality_max`].
    fn quality(&self, _device: &str) -> QueryResult<i32> {
        Err(QueryError::NotSupported)
    }

    /// Upper bound of [`Backend::quality`].
    fn quality_max(&self, _device: &str) -> QueryResult<i32> {
        Err(QueryError::NotSupported)
    }

    /// Whether the radio can host several BSSes (virtual APs).
    fn mbssid_support(&self, _device: &str) -> QueryResult<bool> {
        Err(QueryError::NotSupported)
    }

    /// 802.11 standards the radio supports.
    fn hwmodelist(&self, _device: &str) -> QueryResult<HwModes> {
        Err(QueryError::NotSupported)
    }

    /// Channel widths the radio supports.
    fn htmodelist(&self, _device: &str) -> QueryResult<HtModes> {
        Err(QueryError::NotSupported)
    }

    /// Channel width in use; a single bit.
    fn htmode(&self, _device: &str) -> QueryResult<HtModes> {
        Err(QueryError::NotSupported)
    }

    /// ESSID of the current network.
    fn ssid(&self, _device: &str) -> QueryResult<String> {
        Err(QueryError::NotSupported)
    }

    /// BSSID of the current network.
    fn bssid(&self, _device: &str) -> QueryResult<MacAddr> {
        Err(QueryError::NotSupported)
    }

    /// Current regulatory domain as a two-letter code.
    fn country(&self, _device: &str) -> QueryResult<String> {
        Err(QueryError::NotSupported)
    }

    /// Bus identifiers of the adapter.
    fn hardware_id(&self, _device: &str) -> QueryResult<HardwareId> {
        Err(QueryError::NotSupported)
    }

    /// Human readable adapter name.
    fn hardware_name(&self, _device: &str) -> QueryResult<String> {
        Err(QueryError::NotSupported)
    }

    /// Encryption of the current network.
    fn encryption(&self, _device: &str) -> QueryResult<CryptoEntry> {
        Err(QueryError::NotSupported)
    }

    /// Name of the PHY behind the interface, e.g. "phy0".
    fn phyname(&self, _device: &str) -> QueryResult<String> {
        Err(QueryError::NotSupported)
    }

    /// BSSes visible from the device.
    fn scanlist(&self, _device: &str) -> QueryResult<Vec<ScanEntry>> {
        Err(QueryError::NotSupported)
    }

    /// Stations associated with the device.
    fn assoclist(&self, _device: &str) -> QueryResult<Vec<AssocEntry>> {
        Err(QueryError::NotSupported)
    }

    /// Selectable transmit power levels.
    fn txpwrlist(&self, _device: &str) -> QueryResult<Vec<TxPowerEntry>> {
        Err(QueryError::NotSupported)
    }

    /// Frequencies the device can tune to.
    fn freqlist(&self, _device: &str) -> QueryResult<Vec<FreqEntry>> {
        Err(QueryError::NotSupported)
    }

    /// Regulatory domains the device accepts.
    fn countrylist(&self, _device: &str) -> QueryResult<Vec<CountryEntry>> {
        Err(QueryError::NotSupported)
    }

    /// Finds the PHY configured by a named configuration section.
    fn lookup_phy(&self, _section: &str) -> QueryResult<String> {
        Err(QueryError::NotSupported)
    }

    /// Returns the bus path of a PHY, e.g. "platform/soc/18000000.wifi".
    fn phy_path(&self, _phy: &str) -> QueryResult<String> {
        Err(QueryError::NotSupported)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Bare;

    impl Backend for Bare {
        fn name(&self) -> &'static str {
            "bare"
        }

        fn probe(&self, _device: &str) -> bool {
            true
        }
    }

    #[test]
    fn every_query_defaults_to_not_supported() {
        let b = Bare;
        let dev = "wlan0";
        assert!(b.mode(dev).unwrap_err().is_not_supported());
        assert!(b.channel(dev).unwrap_err().is_not_supported());
        assert!(b.center_chan1(dev).unwrap_err().is_not_supported());
        assert!(b.frequency(dev).unwrap_err().is_not_supported());
        assert!(b.txpower(dev).unwrap_err().is_not_supported());
        assert!(b.signal(dev).unwrap_err().is_not_supported());
        assert!(b.encryption(dev).unwrap_err().is_not_supported());
        assert!(b.scanlist(dev).unwrap_err().is_not_supported());
        assert!(b.assoclist(dev).unwrap_err().is_not_supported());
        assert!(b.countrylist(dev).unwrap_err().is_not_supported());
        assert!(b.lookup_phy("radio0").unwrap_err().is_not_supported());
        assert!(b.phy_path("phy0").unwrap_err().is_not_supported());
    }

    #[test]
    fn lifecycle_defaults_are_noops() {
        let b = Bare;
        assert!(b.acquire().is_ok());
        b.release();
    }
}
