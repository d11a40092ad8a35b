//! Utility functions for radio unit conversion.
//!
//! Provides helpers for converting between Wi-Fi data representations:
//! dBm to mW and back, band bits to GHz, and classification of HT mode bits
//! by PHY generation.

use crate::types::capabilities::{BAND_GHZ, Bands, HtModes};
use crate::types::constants::power;

/// Converts a power level in dBm to milliwatts, rounding down.
///
/// Works in whole decibels: tens of dB multiply by 10, single dB steps by
/// `10^(1/10)`. Levels at or below 0 dBm report 1 mW, never less.
pub fn dbm_to_mw(dbm: i32) -> i32 {
    let tens = (dbm / 10).max(0);
    let ones = (dbm % 10).max(0);
    let mut res = 10f64.powi(tens);
    res *= power::LOG10_MAGIC.powi(ones);
    res as i32
}

/// Converts milliwatts to dBm, rounding up to the next whole decibel.
pub fn mw_to_dbm(mw: i32) -> i32 {
    let mut fin = f64::from(mw);
    let mut res = 0;
    while fin > 10.0 {
        res += 10;
        fin /= 10.0;
    }
    while fin > 1.000_001 {
        res += 1;
        fin /= power::LOG10_MAGIC;
    }
    res
}

/// Converts mBm (hundredths of a dBm) to dBm.
pub fn mbm_to_dbm(mbm: i32) -> i32 {
    mbm / 100
}

/// Returns the GHz value of a single band bit.
pub fn band_to_ghz(band: Bands) -> Option<u32> {
    if band.bits().count_ones() != 1 {
        return None;
    }
    BAND_GHZ.get(band.bits().trailing_zeros() as usize).copied()
}

/// Returns the band bit for a GHz value (2, 5, 6 or 60).
pub fn ghz_to_band(ghz: u32) -> Option<Bands> {
    BAND_GHZ
        .iter()
        .position(|&g| g == ghz)
        .map(|i| Bands::from_bits_retain(1 << i))
}

/// Returns true if any of `modes` is an HT (802.11n) width.
pub fn htmode_is_ht(modes: HtModes) -> bool {
    modes.intersects(HtModes::HT)
}

/// Returns true if any of `modes` is a VHT (802.11ac) width.
pub fn htmode_is_vht(modes: HtModes) -> bool {
    modes.intersects(HtModes::VHT)
}

/// Returns true if any of `modes` is an HE (802.11ax) width.
pub fn htmode_is_he(modes: HtModes) -> bool {
    modes.intersects(HtModes::HE)
}

/// Returns true if any of `modes` is an EHT (802.11be) width.
pub fn htmode_is_eht(modes: HtModes) -> bool {
    modes.intersects(HtModes::EHT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dbm_to_mw() {
        assert_eq!(dbm_to_mw(0), 1);
        assert_eq!(dbm_to_mw(10), 10);
        assert_eq!(dbm_to_mw(20), 100);
        assert_eq!(dbm_to_mw(17), 50);
        assert_eq!(dbm_to_mw(23), 199);
    }

    #[test]
    fn test_dbm_to_mw_floors_at_one() {
        assert_eq!(dbm_to_mw(-3), 1);
        assert_eq!(dbm_to_mw(-13), 1);
        assert_eq!(dbm_to_mw(i32::MIN), 1);
    }

    #[test]
    fn test_mw_to_dbm() {
        assert_eq!(mw_to_dbm(1), 0);
        assert_eq!(mw_to_dbm(100), 20);
        assert_eq!(mw_to_dbm(50), 17);
    }

    #[test]
    fn test_mbm_to_dbm() {
        assert_eq!(mbm_to_dbm(2000), 20);
        assert_eq!(mbm_to_dbm(1750), 17);
    }

    #[test]
    fn test_band_ghz_round_trip() {
        for ghz in [2, 5, 6, 60] {
            let band = ghz_to_band(ghz).expect("known band");
            assert_eq!(band_to_ghz(band), Some(ghz));
        }
        assert_eq!(ghz_to_band(3), None);
        assert_eq!(band_to_ghz(Bands::empty()), None);
    }

    #[test]
    fn test_htmode_classification() {
        assert!(htmode_is_ht(HtModes::HT40));
        assert!(!htmode_is_ht(HtModes::VHT40));
        assert!(htmode_is_vht(HtModes::VHT80_80));
        assert!(htmode_is_he(HtModes::HE160 | HtModes::NOHT));
        assert!(htmode_is_eht(HtModes::EHT320));
        assert!(!htmode_is_eht(HtModes::NOHT));
    }
}
