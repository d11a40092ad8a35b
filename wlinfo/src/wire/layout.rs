//! Wire layouts of the list record types.

use super::{Record, WireReader, WireWriter};
use crate::api::models::{
    AssocEntry, CountryEntry, CryptoEntry, FreqEntry, HardwareId, HtChanInfo, MacAddr, RateEntry,
    RatePhy, ScanEntry, TxPowerEntry, VhtChanInfo,
};
use crate::types::capabilities::{
    AuthAlgs, Bands, Ciphers, FreqFlags, KeyMgmt, OpMode, WpaVersion,
};
use crate::types::constants::{limits, sentinel};

const SSID_FIELD: usize = limits::ESSID_MAX_SIZE + 1;

impl Record for MacAddr {
    const STRIDE: usize = 6;

    fn decode(r: &mut WireReader<'_>) -> Self {
        MacAddr(r.bytes())
    }

    fn encode(&self, w: &mut WireWriter) {
        w.bytes(&self.0);
    }
}

impl Record for CryptoEntry {
    const STRIDE: usize = 8;

    fn decode(r: &mut WireReader<'_>) -> Self {
        let enabled = r.bool();
        let wpa_version = WpaVersion::from_bits_retain(r.u8());
        let group_ciphers = Ciphers::from_bits_retain(r.u16());
        let pair_ciphers = Ciphers::from_bits_retain(r.u16());
        let auth_suites = KeyMgmt::from_bits_retain(r.u8());
        let auth_algs = AuthAlgs::from_bits_retain(r.u8());
        CryptoEntry {
            enabled,
            wpa_version,
            auth_algs,
            auth_suites,
            pair_ciphers,
            group_ciphers,
        }
    }

    fn encode(&self, w: &mut WireWriter) {
        w.bool(self.enabled);
        w.u8(self.wpa_version.bits());
        w.u16(self.group_ciphers.bits());
        w.u16(self.pair_ciphers.bits());
        w.u8(self.auth_suites.bits());
        w.u8(self.auth_algs.bits());
    }
}

impl Record for RateEntry {
    const STRIDE: usize = 17;

    fn decode(r: &mut WireReader<'_>) -> Self {
        let rate = r.u32();
        let mcs = r.i8();
        let is_40mhz = r.bool();
        let is_short_gi = r.bool();
        let is_ht = r.bool();
        let is_vht = r.bool();
        let is_he = r.bool();
        let he_gi = r.u8();
        let he_dcm = r.u8();
        let mhz = r.u8();
        let nss = r.u8();
        let mhz_hi = r.u8();
        let is_eht = r.bool();
        let eht_gi = r.u8();

        // First flag wins if a producer sets more than one.
        let phy = if is_ht {
            RatePhy::Ht { mcs, mhz }
        } else if is_vht {
            RatePhy::Vht { mcs, mhz, nss }
        } else if is_he {
            RatePhy::He {
                mcs,
                mhz,
                nss,
                gi: he_gi,
                dcm: he_dcm,
            }
        } else if is_eht {
            RatePhy::Eht {
                mcs,
                mhz: u16::from(mhz_hi) << 8 | u16::from(mhz),
                nss,
                gi: eht_gi,
            }
        } else {
            RatePhy::Legacy
        };

        RateEntry {
            rate,
            is_40mhz,
            is_short_gi,
            phy,
        }
    }

    fn encode(&self, w: &mut WireWriter) {
        let (mcs, mhz, nss, mhz_hi) = match self.phy {
            RatePhy::Legacy => (0, 0, 0, 0),
            RatePhy::Ht { mcs, mhz } => (mcs, mhz, 0, 0),
            RatePhy::Vht { mcs, mhz, nss } | RatePhy::He { mcs, mhz, nss, .. } => {
                (mcs, mhz, nss, 0)
            }
            RatePhy::Eht { mcs, mhz, nss, .. } => (mcs, (mhz & 0xff) as u8, nss, (mhz >> 8) as u8),
        };
        let (he_gi, he_dcm) = match self.phy {
            RatePhy::He { gi, dcm, .. } => (gi, dcm),
            _ => (0, 0),
        };
        let eht_gi = match self.phy {
            RatePhy::Eht { gi, .. } => gi,
            _ => 0,
        };

        w.u32(self.rate);
        w.i8(mcs);
        w.bool(self.is_40mhz);
        w.bool(self.is_short_gi);
        w.bool(matches!(self.phy, RatePhy::Ht { .. }));
        w.bool(matches!(self.phy, RatePhy::Vht { .. }));
        w.bool(matches!(self.phy, RatePhy::He { .. }));
        w.u8(he_gi);
        w.u8(he_dcm);
        w.u8(mhz);
        w.u8(nss);
        w.u8(mhz_hi);
        w.bool(matches!(self.phy, RatePhy::Eht { .. }));
        w.u8(eht_gi);
    }
}

impl Record for ScanEntry {
    const STRIDE: usize = 6 + SSID_FIELD + 3 + 4 + 3 + CryptoEntry::STRIDE + 3 + 3;

    fn decode(r: &mut WireReader<'_>) -> Self {
        let mac = MacAddr::decode(r);
        let ssid = r.cstr::<SSID_FIELD>();
        let mode = OpMode::from(r.u8());
        let band = Bands::from_bits_retain(r.u8());
        let channel = r.u8();
        let mhz = r.u32();
        let signal = i32::from(r.u8()) - sentinel::SCAN_SIGNAL_BIAS;
        let quality = r.u8();
        let quality_max = r.u8();
        let crypto = CryptoEntry::decode(r);
        let ht_chan_info = HtChanInfo {
            primary_chan: r.u8(),
            secondary_chan_off: r.u8(),
            chan_width: r.u8(),
        };
        let vht_chan_info = VhtChanInfo {
            chan_width: r.u8(),
            center_chan_1: r.u8(),
            center_chan_2: r.u8(),
        };
        ScanEntry {
            mac,
            ssid,
            mode,
            band,
            channel,
            mhz,
            signal,
            quality,
            quality_max,
            crypto,
            ht_chan_info,
            vht_chan_info,
        }
    }

    fn encode(&self, w: &mut WireWriter) {
        self.mac.encode(w);
        w.cstr::<SSID_FIELD>(&self.ssid);
        w.u8(self.mode.code());
        w.u8(self.band.bits());
        w.u8(self.channel);
        w.u32(self.mhz);
        // 0 dBm ("unknown") has no byte form and reads back as -1 dBm.
        w.u8(self.signal.saturating_add(sentinel::SCAN_SIGNAL_BIAS).clamp(0, 0xff) as u8);
        w.u8(self.quality);
        w.u8(self.quality_max);
        self.crypto.encode(w);
        w.u8(self.ht_chan_info.primary_chan);
        w.u8(self.ht_chan_info.secondary_chan_off);
        w.u8(self.ht_chan_info.chan_width);
        w.u8(self.vht_chan_info.chan_width);
        w.u8(self.vht_chan_info.center_chan_1);
        w.u8(self.vht_chan_info.center_chan_2);
    }
}

impl Record for AssocEntry {
    const STRIDE: usize = 6 + 3 + 4 * 4 + 8 * 2 + 4 * 2 + RateEntry::STRIDE * 2 + 4;

    fn decode(r: &mut WireReader<'_>) -> Self {
        AssocEntry {
            mac: MacAddr::decode(r),
            signal: r.i8(),
            signal_avg: r.i8(),
            noise: r.i8(),
            inactive: r.u32(),
            connected_time: r.u32(),
            rx_packets: r.u32(),
            tx_packets: r.u32(),
            rx_bytes: r.u64(),
            tx_bytes: r.u64(),
            tx_retries: r.u32(),
            tx_failed: r.u32(),
            rx_rate: RateEntry::decode(r),
            tx_rate: RateEntry::decode(r),
            thr: r.u32(),
        }
    }

    fn encode(&self, w: &mut WireWriter) {
        self.mac.encode(w);
        w.i8(self.signal);
        w.i8(self.signal_avg);
        w.i8(self.noise);
        w.u32(self.inactive);
        w.u32(self.connected_time);
        w.u32(self.rx_packets);
        w.u32(self.tx_packets);
        w.u64(self.rx_bytes);
        w.u64(self.tx_bytes);
        w.u32(self.tx_retries);
        w.u32(self.tx_failed);
        self.rx_rate.encode(w);
        self.tx_rate.encode(w);
        w.u32(self.thr);
    }
}

impl Record for TxPowerEntry {
    const STRIDE: usize = 3;

    fn decode(r: &mut WireReader<'_>) -> Self {
        TxPowerEntry {
            dbm: r.u8(),
            mw: r.u16(),
        }
    }

    fn encode(&self, w: &mut WireWriter) {
        w.u8(self.dbm);
        w.u16(self.mw);
    }
}

impl Record for FreqEntry {
    const STRIDE: usize = 11;

    fn decode(r: &mut WireReader<'_>) -> Self {
        FreqEntry {
            band: Bands::from_bits_retain(r.u8()),
            channel: r.u8(),
            mhz: r.u32(),
            restricted: r.bool(),
            flags: FreqFlags::from_bits_retain(r.u32()),
        }
    }

    fn encode(&self, w: &mut WireWriter) {
        w.u8(self.band.bits());
        w.u8(self.channel);
        w.u32(self.mhz);
        w.bool(self.restricted);
        w.u32(self.flags.bits());
    }
}

impl Record for CountryEntry {
    const STRIDE: usize = 2 + limits::CCODE_SIZE;

    fn decode(r: &mut WireReader<'_>) -> Self {
        CountryEntry {
            iso3166: r.u16(),
            ccode: r.cstr::<{ limits::CCODE_SIZE }>(),
        }
    }

    fn encode(&self, w: &mut WireWriter) {
        w.u16(self.iso3166);
        w.cstr::<{ limits::CCODE_SIZE }>(&self.ccode);
    }
}

impl Record for HardwareId {
    const STRIDE: usize = 2 * 4 + limits::COMPATIBLE_SIZE;

    fn decode(r: &mut WireReader<'_>) -> Self {
        HardwareId {
            vendor_id: r.u16(),
            device_id: r.u16(),
            subsystem_vendor_id: r.u16(),
            subsystem_device_id: r.u16(),
            compatible: r.cstr::<{ limits::COMPATIBLE_SIZE }>(),
        }
    }

    fn encode(&self, w: &mut WireWriter) {
        w.u16(self.vendor_id);
        w.u16(self.device_id);
        w.u16(self.subsystem_vendor_id);
        w.u16(self.subsystem_device_id);
        w.cstr::<{ limits::COMPATIBLE_SIZE }>(&self.compatible);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire::{decode_records, encode_records};

    fn encoded_len<T: Record>(record: &T) -> usize {
        let mut w = WireWriter::new();
        record.encode(&mut w);
        w.len()
    }

    #[test]
    fn strides_match_encoders() {
        assert_eq!(CryptoEntry::STRIDE, 8);
        assert_eq!(RateEntry::STRIDE, 17);
        assert_eq!(ScanEntry::STRIDE, 63);
        assert_eq!(AssocEntry::STRIDE, 87);
        assert_eq!(TxPowerEntry::STRIDE, 3);
        assert_eq!(FreqEntry::STRIDE, 11);
        assert_eq!(CountryEntry::STRIDE, 6);
        assert_eq!(HardwareId::STRIDE, 136);

        assert_eq!(encoded_len(&CryptoEntry::default()), CryptoEntry::STRIDE);
        assert_eq!(encoded_len(&RateEntry::default()), RateEntry::STRIDE);
        assert_eq!(encoded_len(&ScanEntry::default()), ScanEntry::STRIDE);
        assert_eq!(encoded_len(&AssocEntry::default()), AssocEntry::STRIDE);
        assert_eq!(encoded_len(&TxPowerEntry::default()), TxPowerEntry::STRIDE);
        assert_eq!(encoded_len(&FreqEntry::default()), FreqEntry::STRIDE);
        assert_eq!(encoded_len(&CountryEntry::default()), CountryEntry::STRIDE);
        assert_eq!(encoded_len(&HardwareId::default()), HardwareId::STRIDE);
    }

    #[test]
    fn crypto_field_order() {
        let bytes = [1u8, 0b010, 0x10, 0x00, 0x14, 0x00, 0b100, 0];
        let c = decode_records::<CryptoEntry>(&bytes)
            .expect("valid")
            .get(0)
            .expect("one record");
        assert!(c.enabled);
        assert_eq!(c.wpa_version, WpaVersion::WPA2);
        assert_eq!(c.group_ciphers, Ciphers::CCMP);
        assert_eq!(c.pair_ciphers, Ciphers::CCMP | Ciphers::TKIP);
        assert_eq!(c.auth_suites, KeyMgmt::PSK);
        assert!(c.auth_algs.is_empty());
    }

    #[test]
    fn rate_first_generation_flag_wins() {
        let mut bytes = [0u8; 17];
        bytes[0..4].copy_from_slice(&300_000u32.to_le_bytes());
        bytes[4] = 7; // mcs
        bytes[7] = 1; // is_ht
        bytes[8] = 1; // is_vht
        bytes[12] = 40; // mhz
        let rate = decode_records::<RateEntry>(&bytes)
            .expect("valid")
            .get(0)
            .expect("one record");
        assert_eq!(rate.phy, RatePhy::Ht { mcs: 7, mhz: 40 });
    }

    #[test]
    fn rate_eht_width_spans_two_bytes() {
        let rate = RateEntry {
            rate: 2_882_400,
            phy: RatePhy::Eht {
                mcs: 13,
                mhz: 320,
                nss: 2,
                gi: 1,
            },
            ..Default::default()
        };
        let bytes = encode_records(&[rate]);
        assert_eq!(bytes[12], (320 & 0xff) as u8);
        assert_eq!(bytes[14], 1);
        let back = decode_records::<RateEntry>(&bytes).expect("valid").to_vec();
        assert_eq!(back, vec![rate]);
    }

    #[test]
    fn scan_signal_is_biased_byte() {
        let entry = ScanEntry {
            ssid: "OpenWrt".into(),
            signal: -62,
            ..Default::default()
        };
        let bytes = encode_records(std::slice::from_ref(&entry));
        assert_eq!(bytes[6 + SSID_FIELD + 3 + 4], (256 - 62) as u8);
        let back = decode_records::<ScanEntry>(&bytes).expect("valid").to_vec();
        assert_eq!(back, vec![entry]);
    }

    #[test]
    fn scan_signal_out_of_byte_range_is_clamped() {
        let loud = ScanEntry {
            signal: i32::MAX,
            ..Default::default()
        };
        let faint = ScanEntry {
            signal: i32::MIN,
            ..Default::default()
        };
        let unknown = ScanEntry::default();
        let bytes = encode_records(&[loud, faint, unknown]);
        let back = decode_records::<ScanEntry>(&bytes).expect("valid").to_vec();
        assert_eq!(back[0].signal, -1);
        assert_eq!(back[1].signal, -256);
        assert_eq!(back[2].signal, -1);
    }

    #[test]
    fn scan_ssid_is_truncated_to_field() {
        let entry = ScanEntry {
            ssid: "x".repeat(40),
            ..Default::default()
        };
        let bytes = encode_records(&[entry]);
        let back = decode_records::<ScanEntry>(&bytes).expect("valid").to_vec();
        assert_eq!(back[0].ssid.len(), limits::ESSID_MAX_SIZE);
    }

    #[test]
    fn unknown_opmode_decodes_as_unknown() {
        let mut bytes = encode_records(&[ScanEntry::default()]);
        bytes[6 + SSID_FIELD] = 200;
        let back = decode_records::<ScanEntry>(&bytes).expect("valid").to_vec();
        assert_eq!(back[0].mode, OpMode::Unknown);
    }

    #[test]
    fn country_code_text() {
        let bytes = [b'E', b'D', b'D', b'E', 0, 0];
        let c = decode_records::<CountryEntry>(&bytes)
            .expect("valid")
            .get(0)
            .expect("one record");
        assert_eq!(c.iso3166, u16::from_le_bytes([b'E', b'D']));
        assert_eq!(c.ccode, "DE");
    }

    #[test]
    fn hardware_id_layout() {
        let mut bytes = vec![0u8; HardwareId::STRIDE];
        bytes[0..2].copy_from_slice(&0x168cu16.to_le_bytes());
        bytes[2..4].copy_from_slice(&0x003cu16.to_le_bytes());
        bytes[8..20].copy_from_slice(b"qcom,ath10k\0");
        let id = decode_records::<HardwareId>(&bytes)
            .expect("valid")
            .get(0)
            .expect("one record");
        assert_eq!(id.vendor_id, 0x168c);
        assert_eq!(id.device_id, 0x003c);
        assert_eq!(id.subsystem_vendor_id, 0);
        assert_eq!(id.compatible, "qcom,ath10k");
    }
}
