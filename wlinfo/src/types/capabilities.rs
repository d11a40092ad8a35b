//! Capability bitmasks and the lookup tables that name their bits.
//!
//! Every table is indexed by bit position, so bit `i` of a mask is named by
//! entry `i` of the matching `*_NAMES` table. The renderers walk these tables
//! in ascending bit order.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

bitflags! {
    /// WPA protocol generations advertised by a BSS.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct WpaVersion: u8 {
        const WPA1 = 1 << 0;
        const WPA2 = 1 << 1;
        const WPA3 = 1 << 2;
    }
}

bitflags! {
    /// 802.11 authentication algorithms (WEP era).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct AuthAlgs: u8 {
        const OPEN = 1 << 0;
        const SHARED = 1 << 1;
    }
}

bitflags! {
    /// Authentication and key management suites.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct KeyMgmt: u8 {
        const NONE = 1 << 0;
        const IEEE8021X = 1 << 1;
        const PSK = 1 << 2;
        const SAE = 1 << 3;
        const OWE = 1 << 4;
    }
}

bitflags! {
    /// Pairwise and group cipher suites.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct Ciphers: u16 {
        const NONE = 1 << 0;
        const WEP40 = 1 << 1;
        const TKIP = 1 << 2;
        const WRAP = 1 << 3;
        const CCMP = 1 << 4;
        const WEP104 = 1 << 5;
        const AES_OCB = 1 << 6;
        const CKIP = 1 << 7;
        const GCMP = 1 << 8;
        const CCMP256 = 1 << 9;
        const GCMP256 = 1 << 10;
    }
}

bitflags! {
    /// Regulatory restrictions attached to a supported frequency.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct FreqFlags: u32 {
        const NO_10MHZ = 1 << 0;
        const NO_20MHZ = 1 << 1;
        const NO_HT40_PLUS = 1 << 2;
        const NO_HT40_MINUS = 1 << 3;
        const NO_80MHZ = 1 << 4;
        const NO_160MHZ = 1 << 5;
        const NO_HE = 1 << 6;
        const NO_IR = 1 << 7;
        const INDOOR_ONLY = 1 << 8;
    }
}

bitflags! {
    /// 802.11 PHY standards a radio supports.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct HwModes: u32 {
        const A = 1 << 0;
        const B = 1 << 1;
        const G = 1 << 2;
        const N = 1 << 3;
        const AC = 1 << 4;
        const AD = 1 << 5;
        const AX = 1 << 6;
        const BE = 1 << 7;
    }
}

bitflags! {
    /// Channel bandwidth modes, grouped by PHY generation.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct HtModes: u32 {
        const HT20 = 1 << 0;
        const HT40 = 1 << 1;
        const VHT20 = 1 << 2;
        const VHT40 = 1 << 3;
        const VHT80 = 1 << 4;
        const VHT80_80 = 1 << 5;
        const VHT160 = 1 << 6;
        const NOHT = 1 << 7;
        const HE20 = 1 << 8;
        const HE40 = 1 << 9;
        const HE80 = 1 << 10;
        const HE80_80 = 1 << 11;
        const HE160 = 1 << 12;
        const EHT20 = 1 << 13;
        const EHT40 = 1 << 14;
        const EHT80 = 1 << 15;
        const EHT80_80 = 1 << 16;
        const EHT160 = 1 << 17;
        const EHT320 = 1 << 18;

        const HT = Self::HT20.bits() | Self::HT40.bits();
        const VHT = Self::VHT20.bits()
            | Self::VHT40.bits()
            | Self::VHT80.bits()
            | Self::VHT80_80.bits()
            | Self::VHT160.bits();
        const HE = Self::HE20.bits()
            | Self::HE40.bits()
            | Self::HE80.bits()
            | Self::HE80_80.bits()
            | Self::HE160.bits();
        const EHT = Self::EHT20.bits()
            | Self::EHT40.bits()
            | Self::EHT80.bits()
            | Self::EHT80_80.bits()
            | Self::EHT160.bits()
            | Self::EHT320.bits();
    }
}

bitflags! {
    /// Frequency bands.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct Bands: u8 {
        const BAND_24 = 1 << 0;
        const BAND_5 = 1 << 1;
        const BAND_6 = 1 << 2;
        const BAND_60 = 1 << 3;
    }
}

pub const CIPHER_NAMES: [&str; 11] = [
    "NONE", "WEP-40", "TKIP", "WRAP", "CCMP", "WEP-104", "AES-OCB", "CKIP", "GCMP", "CCMP-256",
    "GCMP-256",
];

pub const KMGMT_NAMES: [&str; 5] = ["NONE", "802.1X", "PSK", "SAE", "OWE"];

pub const AUTH_NAMES: [&str; 2] = ["OPEN", "SHARED"];

pub const FREQ_FLAG_NAMES: [&str; 9] = [
    "NO_10MHZ",
    "NO_20MHZ",
    "NO_HT40+",
    "NO_HT40-",
    "NO_80MHZ",
    "NO_160MHZ",
    "NO_HE",
    "NO_IR",
    "INDOOR_ONLY",
];

pub const HWMODE_NAMES: [&str; 8] = ["a", "b", "g", "n", "ac", "ad", "ax", "be"];

/// Bit positions of [`HWMODE_NAMES`] in display order: ad ac ax a b be g n.
pub const HWMODE_DISPLAY_ORDER: [usize; 8] = [5, 4, 6, 0, 1, 7, 2, 3];

/// Family label prefixed to the rendered PHY mode list.
pub const HWMODE_FAMILY: &str = "802.11";

pub const HTMODE_NAMES: [&str; 19] = [
    "HT20", "HT40", "VHT20", "VHT40", "VHT80", "VHT80+80", "VHT160", "NOHT", "HE20", "HE40",
    "HE80", "HE80+80", "HE160", "EHT20", "EHT40", "EHT80", "EHT80+80", "EHT160", "EHT320",
];

pub const BAND_NAMES: [&str; 4] = ["2.4 GHz", "5 GHz", "6 GHz", "60 GHz"];

/// GHz value of each band bit, in the same order as [`BAND_NAMES`].
pub const BAND_GHZ: [u32; 4] = [2, 5, 6, 60];

/// HT operation "secondary channel offset" field, indexed by its 2-bit value.
pub const HT_SECONDARY_OFFSET: [&str; 4] = ["no secondary", "above", "[reserved!]", "below"];

/// HT operation "STA channel width" codes. 2040 means 20 MHz or any wider width.
pub const HT_CHAN_WIDTH: [u16; 2] = [20, 2040];

/// VHT operation "channel width" codes. 40 means 20 or 40 MHz, see the HT element.
pub const VHT_CHAN_WIDTH: [u16; 4] = [40, 80, 160, 8080];

/// Yields the table names of every set bit, in ascending bit order.
///
/// Bits beyond the end of `table` are ignored.
pub(crate) fn set_bit_names(
    bits: u32,
    table: &'static [&'static str],
) -> impl Iterator<Item = &'static str> {
    table
        .iter()
        .enumerate()
        .filter(move |(i, _)| bits & (1 << i) != 0)
        .map(|(_, name)| *name)
}

/// Looks up the table entry for a mask that has exactly one bit set.
pub(crate) fn single_bit_name(bits: u32, table: &'static [&'static str]) -> Option<&'static str> {
    if bits.count_ones() != 1 {
        return None;
    }
    table.get(bits.trailing_zeros() as usize).copied()
}

/// Operating mode of a wireless interface or BSS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum OpMode {
    #[default]
    Unknown,
    Master,
    AdHoc,
    Client,
    Monitor,
    MasterVlan,
    Wds,
    MeshPoint,
    P2pClient,
    P2pGo,
}

impl OpMode {
    /// Wire code of this mode.
    pub fn code(self) -> u8 {
        match self {
            Self::Unknown => 0,
            Self::Master => 1,
            Self::AdHoc => 2,
            Self::Client => 3,
            Self::Monitor => 4,
            Self::MasterVlan => 5,
            Self::Wds => 6,
            Self::MeshPoint => 7,
            Self::P2pClient => 8,
            Self::P2pGo => 9,
        }
    }
}

impl From<u8> for OpMode {
    fn from(code: u8) -> Self {
        match code {
            1 => Self::Master,
            2 => Self::AdHoc,
            3 => Self::Client,
            4 => Self::Monitor,
            5 => Self::MasterVlan,
            6 => Self::Wds,
            7 => Self::MeshPoint,
            8 => Self::P2pClient,
            9 => Self::P2pGo,
            _ => Self::Unknown,
        }
    }
}

impl Display for OpMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Unknown => "Unknown",
            Self::Master => "Master",
            Self::AdHoc => "Ad-Hoc",
            Self::Client => "Client",
            Self::Monitor => "Monitor",
            Self::MasterVlan => "Master (VLAN)",
            Self::Wds => "WDS",
            Self::MeshPoint => "Mesh Point",
            Self::P2pClient => "P2P Client",
            Self::P2pGo => "P2P Go",
        };
        f.write_str(name)
    }
}
