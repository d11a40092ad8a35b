//! Pure formatting of radio values for display.
//!
//! Every renderer takes a plain value and returns a display string; none of
//! them perform I/O or keep state between calls. Failed queries are mapped to
//! sentinel inputs by the caller (see [`crate::report`]) and come out as
//! `"unknown"`:
//!
//! | value             | sentinel        |
//! |-------------------|-----------------|
//! | channel           | `<= 0`          |
//! | frequency         | `<= 0`          |
//! | rate              | `<= 0`          |
//! | signal, noise     | `== 0`          |
//! | quality           | `< 0`           |
//! | tx power          | `< 0`           |

mod capability;
mod crypto;
mod rate;

pub use capability::{band, chan_width, freq_flags, ht_secondary_offset, htmode, htmode_list, hwmodes};
pub use crypto::{ciphers, encryption, suites};
pub use rate::{assoc_rate, rate};

use crate::api::models::{HardwareId, MacAddr};

/// Sentinel text for values that are absent or not applicable.
pub const UNKNOWN: &str = "unknown";

/// Quotes an ESSID, or returns "unknown" when it is empty.
pub fn ssid(ssid: &str) -> String {
    if ssid.is_empty() {
        UNKNOWN.to_string()
    } else {
        format!("\"{ssid}\"")
    }
}

pub fn bssid(mac: &MacAddr) -> String {
    mac.to_string()
}

pub fn channel(ch: i32) -> String {
    if ch <= 0 {
        UNKNOWN.to_string()
    } else {
        ch.to_string()
    }
}

/// Renders a frequency in MHz as GHz with three decimals.
pub fn frequency(mhz: i32) -> String {
    if mhz <= 0 {
        UNKNOWN.to_string()
    } else {
        format!("{:.3} GHz", f64::from(mhz) / 1000.0)
    }
}

pub fn txpower(dbm: i32) -> String {
    if dbm < 0 {
        UNKNOWN.to_string()
    } else {
        format!("{dbm} dBm")
    }
}

pub fn quality(quality: i32) -> String {
    if quality < 0 {
        UNKNOWN.to_string()
    } else {
        quality.to_string()
    }
}

pub fn quality_max(quality_max: i32) -> String {
    quality(quality_max)
}

/// Renders a signal level in dBm. Zero means no measurement.
pub fn signal(dbm: i32) -> String {
    if dbm == 0 {
        UNKNOWN.to_string()
    } else {
        format!("{dbm} dBm")
    }
}

/// Renders a noise floor in dBm. Zero means no measurement.
pub fn noise(dbm: i32) -> String {
    signal(dbm)
}

/// Describes the bus identity of an adapter.
///
/// Embedded radios show as "embedded", USB adapters (no PCI ids, only
/// subsystem ids) as `USB 0BDA:8812`, everything else as the four PCI ids.
pub fn hardware_id(id: Option<&HardwareId>) -> String {
    let Some(id) = id else {
        return UNKNOWN.to_string();
    };

    if !id.compatible.is_empty() {
        "embedded".to_string()
    } else if id.vendor_id == 0
        && id.device_id == 0
        && id.subsystem_vendor_id != 0
        && id.subsystem_device_id != 0
    {
        format!(
            "USB {:04X}:{:04X}",
            id.subsystem_vendor_id, id.subsystem_device_id
        )
    } else {
        format!(
            "{:04X}:{:04X} {:04X}:{:04X}",
            id.vendor_id, id.device_id, id.subsystem_vendor_id, id.subsystem_device_id
        )
    }
}

/// Renders a TX power offset in dB; `None` is a failed query.
pub fn txpower_offset(offset: Option<i32>) -> String {
    match offset {
        None => UNKNOWN.to_string(),
        Some(0) => "none".to_string(),
        Some(off) => format!("{off} dB"),
    }
}

/// Renders a frequency offset in MHz as GHz; `None` is a failed query.
pub fn frequency_offset(offset: Option<i32>) -> String {
    match offset {
        None => UNKNOWN.to_string(),
        Some(0) => "none".to_string(),
        Some(off) => format!("{:.3} GHz", f64::from(off) / 1000.0),
    }
}

/// Renders multi-BSSID support. A failed query counts as unsupported.
pub fn mbssid(supported: Option<bool>) -> &'static str {
    if supported.unwrap_or(false) { "yes" } else { "no" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_sentinel() {
        for c in [-100, -1, 0] {
            assert_eq!(channel(c), "unknown");
        }
        for c in [1, 6, 36, 233] {
            assert_eq!(channel(c), c.to_string());
        }
    }

    #[test]
    fn frequency_in_ghz() {
        assert_eq!(frequency(2412), "2.412 GHz");
        assert_eq!(frequency(5180), "5.180 GHz");
        assert_eq!(frequency(0), "unknown");
        assert_eq!(frequency(-1), "unknown");
    }

    #[test]
    fn quality_zero_is_a_value() {
        assert_eq!(quality(-1), "unknown");
        assert_eq!(quality(0), "0");
        assert_eq!(quality(55), "55");
        assert_eq!(quality_max(70), "70");
        assert_eq!(quality_max(-1), "unknown");
    }

    #[test]
    fn txpower_sentinel() {
        assert_eq!(txpower(-1), "unknown");
        assert_eq!(txpower(0), "0 dBm");
        assert_eq!(txpower(20), "20 dBm");
    }

    #[test]
    fn signal_and_noise_zero_is_unknown() {
        assert_eq!(signal(0), "unknown");
        assert_eq!(signal(-67), "-67 dBm");
        assert_eq!(noise(0), "unknown");
        assert_eq!(noise(-95), "-95 dBm");
    }

    #[test]
    fn ssid_quoting() {
        assert_eq!(ssid("OpenWrt"), "\"OpenWrt\"");
        assert_eq!(ssid(""), "unknown");
    }

    #[test]
    fn hardware_id_forms() {
        assert_eq!(hardware_id(None), "unknown");

        let pci = HardwareId {
            vendor_id: 0x168c,
            device_id: 0x003c,
            subsystem_vendor_id: 0x168c,
            subsystem_device_id: 0x3223,
            ..Default::default()
        };
        assert_eq!(hardware_id(Some(&pci)), "168C:003C 168C:3223");

        let usb = HardwareId {
            subsystem_vendor_id: 0x0bda,
            subsystem_device_id: 0x8812,
            ..Default::default()
        };
        assert_eq!(hardware_id(Some(&usb)), "USB 0BDA:8812");

        let soc = HardwareId {
            compatible: "mediatek,mt7622-wmac".into(),
            ..pci
        };
        assert_eq!(hardware_id(Some(&soc)), "embedded");
    }

    #[test]
    fn offsets() {
        assert_eq!(txpower_offset(None), "unknown");
        assert_eq!(txpower_offset(Some(0)), "none");
        assert_eq!(txpower_offset(Some(-3)), "-3 dB");
        assert_eq!(frequency_offset(Some(0)), "none");
        assert_eq!(frequency_offset(Some(2400)), "2.400 GHz");
        assert_eq!(frequency_offset(None), "unknown");
    }

    #[test]
    fn mbssid_failed_is_no() {
        assert_eq!(mbssid(None), "no");
        assert_eq!(mbssid(Some(false)), "no");
        assert_eq!(mbssid(Some(true)), "yes");
    }
}
