//! Rendering of channel, band and PHY capability codes.

use crate::render::UNKNOWN;
use crate::types::capabilities::{
    BAND_NAMES, Bands, FREQ_FLAG_NAMES, FreqFlags, HT_CHAN_WIDTH, HT_SECONDARY_OFFSET,
    HTMODE_NAMES, HWMODE_DISPLAY_ORDER, HWMODE_FAMILY, HWMODE_NAMES, HtModes, VHT_CHAN_WIDTH,
    set_bit_names, single_bit_name,
};

/// Names the channel width code of an HT or VHT operation element.
///
/// HT codes: 0 is 20 MHz, 1 is "40 MHz or higher". VHT codes: 0 is
/// "20 or 40 MHz", 1 is 80, 2 is 160 and 3 is 80+80 MHz. Anything else is
/// "unknown".
pub fn chan_width(vht: bool, width: u8) -> &'static str {
    let idx = usize::from(width);
    if vht {
        match VHT_CHAN_WIDTH.get(idx) {
            Some(40) => "20 or 40 MHz",
            Some(80) => "80 MHz",
            Some(8080) => "80+80 MHz",
            Some(160) => "160 MHz",
            _ => UNKNOWN,
        }
    } else {
        match HT_CHAN_WIDTH.get(idx) {
            Some(20) => "20 MHz",
            Some(2040) => "40 MHz or higher",
            _ => UNKNOWN,
        }
    }
}

/// Names the secondary channel offset of an HT operation element.
pub fn ht_secondary_offset(code: u8) -> &'static str {
    HT_SECONDARY_OFFSET
        .get(usize::from(code))
        .copied()
        .unwrap_or(UNKNOWN)
}

/// Lists frequency restrictions as `[NO_IR, INDOOR_ONLY]`.
///
/// An empty set renders as an empty string.
pub fn freq_flags(flags: FreqFlags) -> String {
    let names: Vec<_> = set_bit_names(flags.bits(), &FREQ_FLAG_NAMES).collect();
    if names.is_empty() {
        return String::new();
    }
    format!("[{}]", names.join(", "))
}

/// Renders supported 802.11 standards as e.g. `802.11ac/ax/b/g/n`.
///
/// Negative or zero masks, and masks with no known bit, are "unknown".
pub fn hwmodes(modes: i32) -> String {
    if modes <= 0 {
        return UNKNOWN.to_string();
    }
    let modes = modes as u32;
    let names: Vec<_> = HWMODE_DISPLAY_ORDER
        .iter()
        .filter(|&&bit| modes & (1 << bit) != 0)
        .map(|&bit| HWMODE_NAMES[bit])
        .collect();
    if names.is_empty() {
        return UNKNOWN.to_string();
    }
    format!("{HWMODE_FAMILY}{}", names.join("/"))
}

/// Names a single HT mode bit, e.g. `VHT80`.
///
/// Negative values and masks with zero or several bits are "unknown".
pub fn htmode(mode: i32) -> &'static str {
    if mode < 0 {
        return UNKNOWN;
    }
    single_bit_name(mode as u32, &HTMODE_NAMES).unwrap_or(UNKNOWN)
}

/// Lists every HT mode in `modes`, space separated, in bit order.
pub fn htmode_list(modes: HtModes) -> String {
    set_bit_names(modes.bits(), &HTMODE_NAMES)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Names a single band bit, e.g. `5 GHz`.
pub fn band(band: Bands) -> &'static str {
    single_bit_name(u32::from(band.bits()), &BAND_NAMES).unwrap_or(UNKNOWN)
}
