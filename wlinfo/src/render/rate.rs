//! Rendering of bitrates.

use crate::api::models::{RateEntry, RatePhy};
use crate::render::UNKNOWN;
use crate::types::constants::rate::{KBIT_TENTHS, KBIT_TO_MBPS};

/// Renders a rate in kbit/s as `54.0 MBit/s`, truncated to tenths.
///
/// Zero and negative rates are "unknown".
pub fn rate(kbit: i64) -> String {
    if kbit <= 0 {
        return UNKNOWN.to_string();
    }
    let mbit = kbit / i64::from(KBIT_TO_MBPS);
    let tenths = (kbit % i64::from(KBIT_TO_MBPS)) / i64::from(KBIT_TENTHS);
    format!("{mbit}.{tenths} MBit/s")
}

/// Renders a station rate with its MCS details.
///
/// Only the fields of the rate's own PHY generation are shown, e.g.
/// `866.7 MBit/s, VHT-MCS 9, 80MHz, VHT-NSS 2`.
pub fn assoc_rate(entry: &RateEntry) -> String {
    if entry.rate == 0 {
        return UNKNOWN.to_string();
    }

    let mut out = rate(i64::from(entry.rate));
    match entry.phy {
        RatePhy::Legacy => {}
        RatePhy::Ht { mcs, mhz } => {
            out.push_str(&format!(", MCS {mcs}, {mhz}MHz"));
        }
        RatePhy::Vht { mcs, mhz, nss } => {
            out.push_str(&format!(", VHT-MCS {mcs}, {mhz}MHz"));
            if nss != 0 {
                out.push_str(&format!(", VHT-NSS {nss}"));
            }
        }
        RatePhy::He {
            mcs,
            mhz,
            nss,
            gi,
            dcm,
        } => {
            out.push_str(&format!(
                ", HE-MCS {mcs}, {mhz}MHz, HE-NSS {nss}, HE-GI {gi}, HE-DCM {dcm}"
            ));
        }
        RatePhy::Eht { mcs, mhz, nss, gi } => {
            out.push_str(&format!(
                ", EHT-MCS {mcs}, {mhz}MHz, EHT-NSS {nss}, EHT-GI {gi}"
            ));
        }
    }
    out
}
