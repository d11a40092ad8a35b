//! Text reports over a backend, one per command-line query.
//!
//! Every report queries the backend, maps failed queries to the renderer
//! sentinels and returns the finished text, newline terminated. Nothing is
//! printed here; the caller decides where the text goes.

use thiserror::Error;

use crate::api::backend::Backend;
use crate::api::models::{AssocEntry, QueryError, ScanEntry};
use crate::render;
use crate::types::capabilities::OpMode;
use crate::types::iso3166::ISO3166_NAMES;
use crate::util::utils::dbm_to_mw;

/// Indentation of continuation lines in `info` and `scan` output.
const INDENT: &str = "          ";
/// Indentation of the HT/VHT operation fields of a scan cell.
const SUB_INDENT: &str = "                    ";

/// Why a PHY lookup produced no answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("Not supported")]
    NotSupported,
    #[error("Phy not found")]
    NotFound,
}

/// Summary of a device's current state.
pub fn info(backend: &dyn Backend, device: &str) -> String {
    let ssid = backend.ssid(device).unwrap_or_default();
    let bssid = backend
        .bssid(device)
        .map(|mac| render::bssid(&mac))
        .unwrap_or_else(|_| "00:00:00:00:00:00".to_string());
    let mode = backend.mode(device).unwrap_or(OpMode::Unknown);
    let htmode = backend.htmode(device).map_or(-1, |m| m.bits() as i32);

    let mut out = format!("{device:<9} ESSID: {}\n", render::ssid(&ssid));
    out.push_str(&format!("{INDENT}Access Point: {bssid}\n"));
    out.push_str(&format!(
        "{INDENT}Mode: {mode}  Channel: {} ({})  HT Mode: {}\n",
        render::channel(backend.channel(device).unwrap_or(-1)),
        render::frequency(backend.frequency(device).unwrap_or(-1)),
        render::htmode(htmode),
    ));

    match backend.center_chan1(device) {
        Err(QueryError::NotSupported) => {}
        chan1 => out.push_str(&format!(
            "{INDENT}Center Channel 1: {} 2: {}\n",
            render::channel(chan1.unwrap_or(-1)),
            render::channel(backend.center_chan2(device).unwrap_or(-1)),
        )),
    }

    let offset = backend.txpower_offset(device).ok();
    let txpower = backend
        .txpower(device)
        .map_or(-1, |pwr| pwr.saturating_add(offset.unwrap_or(0)));
    out.push_str(&format!(
        "{INDENT}Tx-Power: {}  Link Quality: {}/{}\n",
        render::txpower(txpower),
        render::quality(backend.quality(device).unwrap_or(-1)),
        render::quality_max(backend.quality_max(device).unwrap_or(-1)),
    ));
    out.push_str(&format!(
        "{INDENT}Signal: {}  Noise: {}\n",
        render::signal(backend.signal(device).unwrap_or(0)),
        render::noise(backend.noise(device).unwrap_or(0)),
    ));
    out.push_str(&format!(
        "{INDENT}Bit Rate: {}\n",
        render::rate(backend.bitrate(device).map_or(-1, i64::from)),
    ));
    out.push_str(&format!(
        "{INDENT}Encryption: {}\n",
        render::encryption(backend.encryption(device).ok().as_ref()),
    ));
    out.push_str(&format!(
        "{INDENT}Type: {}  HW Mode(s): {}\n",
        backend.name(),
        render::hwmodes(backend.hwmodelist(device).map_or(-1, |m| m.bits() as i32)),
    ));
    out.push_str(&format!(
        "{INDENT}Hardware: {} [{}]\n",
        render::hardware_id(backend.hardware_id(device).ok().as_ref()),
        backend
            .hardware_name(device)
            .unwrap_or_else(|_| render::UNKNOWN.to_string()),
    ));
    out.push_str(&format!(
        "{INDENT}TX power offset: {}\n",
        render::txpower_offset(offset),
    ));
    out.push_str(&format!(
        "{INDENT}Frequency offset: {}\n",
        render::frequency_offset(backend.frequency_offset(device).ok()),
    ));
    out.push_str(&format!(
        "{INDENT}Supports VAPs: {}  PHY name: {}\n",
        render::mbssid(backend.mbssid_support(device).ok()),
        backend.phyname(device).unwrap_or_else(|_| "?".to_string()),
    ));
    out
}

fn scan_cell(index: usize, entry: &ScanEntry) -> String {
    let mut out = format!("Cell {index:02} - Address: {}\n", render::bssid(&entry.mac));
    out.push_str(&format!("{INDENT}ESSID: {}\n", render::ssid(&entry.ssid)));
    out.push_str(&format!(
        "{INDENT}Mode: {}  Frequency: {}  Band: {}  Channel: {}\n",
        entry.mode,
        render::frequency(entry.mhz as i32),
        render::band(entry.band),
        render::channel(i32::from(entry.channel)),
    ));
    out.push_str(&format!(
        "{INDENT}Signal: {}  Quality: {}/{}\n",
        render::signal(entry.signal),
        render::quality(i32::from(entry.quality)),
        render::quality_max(i32::from(entry.quality_max)),
    ));
    out.push_str(&format!(
        "{INDENT}Encryption: {}\n",
        render::encryption(Some(&entry.crypto)),
    ));

    let ht = &entry.ht_chan_info;
    out.push_str(&format!("{INDENT}HT Operation:\n"));
    out.push_str(&format!("{SUB_INDENT}Primary Channel: {}\n", ht.primary_chan));
    out.push_str(&format!(
        "{SUB_INDENT}Secondary Channel Offset: {}\n",
        render::ht_secondary_offset(ht.secondary_chan_off),
    ));
    out.push_str(&format!(
        "{SUB_INDENT}Channel Width: {}\n",
        render::chan_width(false, ht.chan_width),
    ));

    let vht = &entry.vht_chan_info;
    if vht.center_chan_1 != 0 {
        out.push_str(&format!("{INDENT}VHT Operation:\n"));
        out.push_str(&format!("{SUB_INDENT}Center Frequency 1: {}\n", vht.center_chan_1));
        out.push_str(&format!("{SUB_INDENT}Center Frequency 2: {}\n", vht.center_chan_2));
        out.push_str(&format!(
            "{SUB_INDENT}Channel Width: {}\n",
            render::chan_width(true, vht.chan_width),
        ));
    }

    out.push('\n');
    out
}

/// BSSes visible from the device, one numbered cell each.
pub fn scanlist(backend: &dyn Backend, device: &str) -> String {
    match backend.scanlist(device) {
        Err(_) => "Scanning not possible\n\n".to_string(),
        Ok(list) if list.is_empty() => "No scan results\n\n".to_string(),
        Ok(list) => list
            .iter()
            .enumerate()
            .map(|(i, entry)| scan_cell(i + 1, entry))
            .collect(),
    }
}

/// Selectable TX power levels, offset applied; `*` marks the current one.
pub fn txpwrlist(backend: &dyn Backend, device: &str) -> String {
    let list = match backend.txpwrlist(device) {
        Ok(list) if !list.is_empty() => list,
        _ => return "No TX power information available\n".to_string(),
    };

    let current = backend.txpower(device).unwrap_or(-1);
    let offset = backend.txpower_offset(device).unwrap_or(0);

    list.iter()
        .map(|entry| {
            let dbm = i32::from(entry.dbm).saturating_add(offset);
            format!(
                "{}{dbm:3} dBm ({:4} mW)\n",
                if current == i32::from(entry.dbm) { "*" } else { " " },
                dbm_to_mw(dbm),
            )
        })
        .collect()
}

/// Frequencies the device can tune to; `*` marks the current one.
pub fn freqlist(backend: &dyn Backend, device: &str) -> String {
    let list = match backend.freqlist(device) {
        Ok(list) if !list.is_empty() => list,
        _ => return "No frequency information available\n".to_string(),
    };

    let current = backend.frequency(device).unwrap_or(-1);

    list.iter()
        .map(|entry| {
            format!(
                "{} {} (Band: {}, Channel {}) {}\n",
                if i64::from(current) == i64::from(entry.mhz) { "*" } else { " " },
                render::frequency(entry.mhz as i32),
                render::band(entry.band),
                render::channel(i32::from(entry.channel)),
                render::freq_flags(entry.flags),
            )
        })
        .collect()
}

fn station(entry: &AssocEntry) -> String {
    let mut out = format!(
        "{}  {} / {} (SNR {})  {} ms ago\n",
        render::bssid(&entry.mac),
        render::signal(i32::from(entry.signal)),
        render::noise(i32::from(entry.noise)),
        entry.snr(),
        entry.inactive,
    );
    out.push_str(&format!(
        "\tRX: {:<38}  {:>8} Pkts.\n",
        render::assoc_rate(&entry.rx_rate),
        entry.rx_packets,
    ));
    out.push_str(&format!(
        "\tTX: {:<38}  {:>8} Pkts.\n",
        render::assoc_rate(&entry.tx_rate),
        entry.tx_packets,
    ));
    out.push_str(&format!(
        "\texpected throughput: {}\n\n",
        render::rate(i64::from(entry.thr)),
    ));
    out
}

/// Stations associated with the device.
pub fn assoclist(backend: &dyn Backend, device: &str) -> String {
    match backend.assoclist(device) {
        Err(_) => "No information available\n".to_string(),
        Ok(list) if list.is_empty() => "No station connected\n".to_string(),
        Ok(list) => list.iter().map(station).collect(),
    }
}

/// Regulatory domains the device accepts, in ISO-3166 table order.
///
/// `*` marks the domain currently in effect.
pub fn countrylist(backend: &dyn Backend, device: &str) -> String {
    let list = match backend.countrylist(device) {
        Ok(list) => list,
        Err(_) => return "No country code information available\n".to_string(),
    };

    let current = backend.country(device).unwrap_or_default();

    let mut out = String::new();
    for label in ISO3166_NAMES {
        let Some(entry) = list.iter().find(|c| c.iso3166 == label.code) else {
            continue;
        };
        let mark = if entry.ccode.bytes().take(2).eq(current.bytes().take(2)) {
            "*"
        } else {
            " "
        };
        let [a, b] = label.letters();
        out.push_str(&format!("{mark} {:>4}\t{a}{b}\n", entry.ccode));
    }
    out
}

/// Channel widths the device supports, each followed by a space.
pub fn htmodelist(backend: &dyn Backend, device: &str) -> String {
    match backend.htmodelist(device) {
        Ok(modes) if modes.is_empty() => "\n".to_string(),
        Ok(modes) => format!("{} \n", render::htmode_list(modes)),
        Err(_) => "No HT mode information available\n".to_string(),
    }
}

/// Finds the PHY behind a configuration section.
pub fn lookup_phy(backend: &dyn Backend, section: &str) -> Result<String, LookupError> {
    match backend.lookup_phy(section) {
        Ok(phy) => Ok(phy),
        Err(QueryError::NotSupported) => Err(LookupError::NotSupported),
        Err(_) => Err(LookupError::NotFound),
    }
}

/// Bus path of a PHY, or `None` when the backend cannot tell.
pub fn lookup_path(backend: &dyn Backend, phy: &str) -> Option<String> {
    backend.phy_path(phy).ok().filter(|path| !path.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::{CountryEntry, MacAddr, QueryResult, TxPowerEntry};
    use crate::types::capabilities::HtModes;
    use crate::types::iso3166::pack;

    struct Bare;

    impl Backend for Bare {
        fn name(&self) -> &'static str {
            "bare"
        }

        fn probe(&self, _device: &str) -> bool {
            true
        }
    }

    struct Tuned;

    impl Backend for Tuned {
        fn name(&self) -> &'static str {
            "tuned"
        }

        fn probe(&self, _device: &str) -> bool {
            true
        }

        fn txpower(&self, _device: &str) -> QueryResult<i32> {
            Ok(17)
        }

        fn txpower_offset(&self, _device: &str) -> QueryResult<i32> {
            Ok(3)
        }

        fn txpwrlist(&self, _device: &str) -> QueryResult<Vec<TxPowerEntry>> {
            Ok(vec![
                TxPowerEntry { dbm: 0, mw: 1 },
                TxPowerEntry { dbm: 17, mw: 50 },
            ])
        }

        fn country(&self, _device: &str) -> QueryResult<String> {
            Ok("DE".to_string())
        }

        fn countrylist(&self, _device: &str) -> QueryResult<Vec<CountryEntry>> {
            Ok(vec![
                CountryEntry {
                    iso3166: pack(b"US"),
                    ccode: "US".to_string(),
                },
                CountryEntry {
                    iso3166: pack(b"DE"),
                    ccode: "DE".to_string(),
                },
            ])
        }

        fn bssid(&self, _device: &str) -> QueryResult<MacAddr> {
            Ok(MacAddr([0x00, 0x11, 0x22, 0x33, 0x44, 0x55]))
        }

        fn center_chan1(&self, _device: &str) -> QueryResult<i32> {
            Err(QueryError::Failed("not tuned".into()))
        }
    }

    #[test]
    fn info_of_a_bare_backend_is_all_unknown() {
        let text = info(&Bare, "wlan0");
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "wlan0     ESSID: unknown");
        assert_eq!(lines[1], "          Access Point: 00:00:00:00:00:00");
        assert_eq!(
            lines[2],
            "          Mode: Unknown  Channel: unknown (unknown)  HT Mode: unknown"
        );
        assert!(!text.contains("Center Channel"));
        assert!(text.contains("Tx-Power: unknown  Link Quality: unknown/unknown\n"));
        assert!(text.contains("Type: bare  HW Mode(s): unknown\n"));
        assert!(text.contains("Hardware: unknown [unknown]\n"));
        assert!(text.contains("Supports VAPs: no  PHY name: ?\n"));
    }

    #[test]
    fn info_applies_txpower_offset() {
        let text = info(&Tuned, "wlan0");
        assert!(text.contains("Access Point: 00:11:22:33:44:55\n"));
        assert!(text.contains("Tx-Power: 20 dBm"));
        assert!(text.contains("TX power offset: 3 dB\n"));
    }

    #[test]
    fn failed_center_channel_is_still_shown() {
        let text = info(&Tuned, "wlan0");
        assert!(text.contains("Center Channel 1: unknown 2: unknown\n"));
    }

    struct Extreme;

    impl Backend for Extreme {
        fn name(&self) -> &'static str {
            "extreme"
        }

        fn probe(&self, _device: &str) -> bool {
            true
        }

        fn txpower(&self, _device: &str) -> QueryResult<i32> {
            Ok(i32::MAX)
        }

        fn txpower_offset(&self, _device: &str) -> QueryResult<i32> {
            Ok(i32::MAX)
        }

        fn txpwrlist(&self, _device: &str) -> QueryResult<Vec<TxPowerEntry>> {
            Ok(vec![TxPowerEntry { dbm: 255, mw: 0 }])
        }

        fn country(&self, _device: &str) -> QueryResult<String> {
            Ok("D".to_string())
        }

        fn countrylist(&self, _device: &str) -> QueryResult<Vec<CountryEntry>> {
            Ok(vec![CountryEntry {
                iso3166: pack(b"DE"),
                ccode: "DE".to_string(),
            }])
        }

        fn htmodelist(&self, _device: &str) -> QueryResult<HtModes> {
            Ok(HtModes::empty())
        }
    }

    #[test]
    fn extreme_txpower_offset_saturates() {
        let text = info(&Extreme, "wlan0");
        assert!(text.contains(&format!("Tx-Power: {} dBm", i32::MAX)));

        let list = txpwrlist(&Extreme, "wlan0");
        assert!(list.starts_with(&format!(" {} dBm (", i32::MAX)));
    }

    #[test]
    fn negative_txpower_reads_as_one_milliwatt() {
        struct Attenuated;

        impl Backend for Attenuated {
            fn name(&self) -> &'static str {
                "attenuated"
            }

            fn probe(&self, _device: &str) -> bool {
                true
            }

            fn txpower_offset(&self, _device: &str) -> QueryResult<i32> {
                Ok(-3)
            }

            fn txpwrlist(&self, _device: &str) -> QueryResult<Vec<TxPowerEntry>> {
                Ok(vec![TxPowerEntry { dbm: 0, mw: 1 }])
            }
        }

        assert_eq!(txpwrlist(&Attenuated, "wlan0"), "  -3 dBm (   1 mW)\n");
    }

    #[test]
    fn partial_country_code_marks_nothing() {
        assert_eq!(countrylist(&Extreme, "wlan0"), "    DE\tDE\n");
    }

    #[test]
    fn empty_htmode_list_is_a_blank_line() {
        assert_eq!(htmodelist(&Extreme, "wlan0"), "\n");
    }

    #[test]
    fn txpower_list_marks_current_level() {
        assert_eq!(
            txpwrlist(&Tuned, "wlan0"),
            "   3 dBm (   1 mW)\n* 20 dBm ( 100 mW)\n"
        );
        assert_eq!(
            txpwrlist(&Bare, "wlan0"),
            "No TX power information available\n"
        );
    }

    #[test]
    fn country_list_follows_label_order() {
        assert_eq!(countrylist(&Tuned, "wlan0"), "*   DE\tDE\n    US\tUS\n");
    }

    #[test]
    fn empty_and_failed_lists() {
        assert_eq!(scanlist(&Bare, "wlan0"), "Scanning not possible\n\n");
        assert_eq!(assoclist(&Bare, "wlan0"), "No information available\n");
        assert_eq!(freqlist(&Bare, "wlan0"), "No frequency information available\n");
        assert_eq!(
            countrylist(&Bare, "wlan0"),
            "No country code information available\n"
        );
        assert_eq!(htmodelist(&Bare, "wlan0"), "No HT mode information available\n");
    }

    #[test]
    fn phy_lookups() {
        assert_eq!(lookup_phy(&Bare, "radio0"), Err(LookupError::NotSupported));
        assert_eq!(LookupError::NotFound.to_string(), "Phy not found");
        assert_eq!(lookup_path(&Bare, "phy0"), None);
    }
}
