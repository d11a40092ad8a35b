//! Constants shared by the codec, the renderers and the built-in backends.
//!
//! These mirror the values used by the wireless information ABI: buffer
//! capacities, field sizes, sentinel offsets and well-known filesystem paths.

/// Buffer and field sizes for list queries.
pub mod limits {
    /// Default capacity of a caller-allocated list buffer, in bytes.
    pub const BUFSIZE: usize = 24 * 1024;

    /// Maximum ESSID length, not counting the terminating NUL.
    pub const ESSID_MAX_SIZE: usize = 32;

    /// Size of the NUL-padded country code field of a country record.
    pub const CCODE_SIZE: usize = 4;

    /// Size of the NUL-padded device tree `compatible` field of a hardware id.
    pub const COMPATIBLE_SIZE: usize = 128;
}

/// Offsets applied to raw values as they cross the backend boundary.
pub mod sentinel {
    /// Scan results carry signal as an unsigned byte holding `dBm + 256`.
    pub const SCAN_SIGNAL_BIAS: i32 = 0x100;

    /// Link quality ceiling reported for drivers that expose no maximum.
    pub const DEFAULT_QUALITY_MAX: i32 = 70;

    /// `/proc/net/wireless` reports a missing noise level as this value.
    pub const PROC_NOISE_NONE: i32 = -256;
}

/// Power conversion constants.
pub mod power {
    /// `10^(1/10)`: one decibel step as a linear factor.
    pub const LOG10_MAGIC: f64 = 1.258_925_411_79;
}

/// Rate conversion constants
pub mod rate {
    pub const KBIT_TO_MBPS: u32 = 1000;
    pub const KBIT_TENTHS: u32 = 100;
}

/// Paths relative to the configured sysfs and procfs roots.
pub mod paths {
    pub const CLASS_NET: &str = "class/net";
    pub const CLASS_IEEE80211: &str = "class/ieee80211";
    pub const DEVICES: &str = "devices";
    pub const PHY80211: &str = "phy80211";
    pub const WIRELESS: &str = "wireless";
    pub const PROC_NET_WIRELESS: &str = "net/wireless";
}
