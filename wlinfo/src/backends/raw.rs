//! Adapter for drivers that speak the fixed-stride buffer ABI.
//!
//! A driver shim implements [`RawOps`]: scalars come back as plain integers,
//! strings and lists are written into a caller-allocated buffer and the shim
//! reports how many bytes it filled. [`RawBackend`] owns the buffers, decodes
//! them with [`crate::wire::decode_records`] and presents the result as a
//! regular [`Backend`].

use log::{debug, warn};

use crate::api::backend::Backend;
use crate::api::models::{
    AssocEntry, CountryEntry, CryptoEntry, FreqEntry, HardwareId, MacAddr, QueryError, QueryResult,
    ScanEntry, TxPowerEntry,
};
use crate::config::Config;
use crate::types::capabilities::{HtModes, HwModes, OpMode};
use crate::wire::{self, Record};

/// Integer-valued queries of a raw driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarQuery {
    Mode,
    Channel,
    CenterChan1,
    CenterChan2,
    Frequency,
    FrequencyOffset,
    TxPower,
    TxPowerOffset,
    Bitrate,
    Signal,
    Noise,
    Quality,
    QualityMax,
    MbssidSupport,
    HwModeList,
    HtModeList,
    HtMode,
}

/// String-valued queries of a raw driver, answered as NUL-terminated text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextQuery {
    Ssid,
    /// Colon separated, e.g. `00:11:22:33:44:55`.
    Bssid,
    Country,
    HardwareName,
    PhyName,
}

const TEXT_CAPACITY: usize = 128;

/// Low-level operations of a buffer-filling driver.
///
/// Every fill method receives a zeroed buffer and returns the number of
/// bytes written. All queries default to `NotSupported`.
pub trait RawOps: Send + Sync {
    fn name(&self) -> &'static str;

    fn probe(&self, device: &str) -> bool;

    fn open(&self) -> QueryResult<()> {
        Ok(())
    }

    fn close(&self) {}

    fn scalar(&self, _query: ScalarQuery, _device: &str) -> QueryResult<i32> {
        Err(QueryError::NotSupported)
    }

    fn text(&self, _query: TextQuery, _device: &str, _buf: &mut [u8]) -> QueryResult<usize> {
        Err(QueryError::NotSupported)
    }

    /// Writes exactly one crypto record.
    fn encryption_raw(&self, _device: &str, _buf: &mut [u8]) -> QueryResult<usize> {
        Err(QueryError::NotSupported)
    }

    /// Writes exactly one hardware id record.
    fn hardware_id_raw(&self, _device: &str, _buf: &mut [u8]) -> QueryResult<usize> {
        Err(QueryError::NotSupported)
    }

    fn scanlist_raw(&self, _device: &str, _buf: &mut [u8]) -> QueryResult<usize> {
        Err(QueryError::NotSupported)
    }

    fn assoclist_raw(&self, _device: &str, _buf: &mut [u8]) -> QueryResult<usize> {
        Err(QueryError::NotSupported)
    }

    fn txpwrlist_raw(&self, _device: &str, _buf: &mut [u8]) -> QueryResult<usize> {
        Err(QueryError::NotSupported)
    }

    fn freqlist_raw(&self, _device: &str, _buf: &mut [u8]) -> QueryResult<usize> {
        Err(QueryError::NotSupported)
    }

    fn countrylist_raw(&self, _device: &str, _buf: &mut [u8]) -> QueryResult<usize> {
        Err(QueryError::NotSupported)
    }

    fn lookup_phy(&self, _section: &str, _buf: &mut [u8]) -> QueryResult<usize> {
        Err(QueryError::NotSupported)
    }

    fn phy_path(&self, _phy: &str, _buf: &mut [u8]) -> QueryResult<usize> {
        Err(QueryError::NotSupported)
    }
}

/// Presents a [`RawOps`] driver as a [`Backend`].
pub struct RawBackend<R> {
    ops: R,
    buffer_size: usize,
}

impl<R: RawOps> RawBackend<R> {
    /// Wraps `ops`, sizing list buffers from `config.buffer_size`.
    pub fn new(ops: R, config: &Config) -> Self {
        Self {
            ops,
            buffer_size: config.buffer_size,
        }
    }

    pub fn ops(&self) -> &R {
        &self.ops
    }

    /// Runs a fill into a fresh buffer and returns the filled prefix.
    fn fill<F>(&self, capacity: usize, fill: F) -> QueryResult<Vec<u8>>
    where
        F: FnOnce(&mut [u8]) -> QueryResult<usize>,
    {
        let mut buf = vec![0u8; capacity];
        let len = fill(&mut buf)?;
        if len > capacity {
            return Err(QueryError::Failed(format!(
                "{} reported {len} bytes for a {capacity}-byte buffer",
                self.ops.name()
            )));
        }
        buf.truncate(len);
        Ok(buf)
    }

    fn list<T, F>(&self, what: &str, device: &str, fill: F) -> QueryResult<Vec<T>>
    where
        T: Record,
        F: FnOnce(&mut [u8]) -> QueryResult<usize>,
    {
        let buf = self.fill(self.buffer_size, fill)?;
        let records = wire::decode_records::<T>(&buf).map_err(|e| {
            debug!("{} returned a malformed {what} for {device}", self.ops.name());
            QueryError::from(e)
        })?;
        debug!("{what} for {device}: {} entries", records.len());
        Ok(records.to_vec())
    }

    fn text_value<F>(&self, fill: F) -> QueryResult<String>
    where
        F: FnOnce(&mut [u8]) -> QueryResult<usize>,
    {
        let buf = self.fill(TEXT_CAPACITY, fill)?;
        let end = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
        Ok(String::from_utf8_lossy(&buf[..end]).into_owned())
    }

    fn text(&self, query: TextQuery, device: &str) -> QueryResult<String> {
        self.text_value(|buf| self.ops.text(query, device, buf))
    }

    /// Decodes a fill that must produce exactly one record.
    fn single<T, F>(&self, what: &str, device: &str, fill: F) -> QueryResult<T>
    where
        T: Record,
        F: FnOnce(&mut [u8]) -> QueryResult<usize>,
    {
        let buf = self.fill(T::STRIDE, fill)?;
        if buf.len() != T::STRIDE {
            warn!(
                "{} returned {} bytes of {what} for {device}",
                self.ops.name(),
                buf.len()
            );
            return Err(QueryError::ContractViolation {
                len: buf.len(),
                stride: T::STRIDE,
            });
        }
        Ok(T::decode(&mut wire::WireReader::new(&buf)))
    }
}

impl<R: RawOps> Backend for RawBackend<R> {
    fn name(&self) -> &'static str {
        self.ops.name()
    }

    fn probe(&self, device: &str) -> bool {
        self.ops.probe(device)
    }

    fn acquire(&self) -> QueryResult<()> {
        self.ops.open()
    }

    fn release(&self) {
        self.ops.close()
    }

    fn mode(&self, device: &str) -> QueryResult<OpMode> {
        let code = self.ops.scalar(ScalarQuery::Mode, device)?;
        Ok(u8::try_from(code).map(OpMode::from).unwrap_or_default())
    }

    fn channel(&self, device: &str) -> QueryResult<i32> {
        self.ops.scalar(ScalarQuery::Channel, device)
    }

    fn center_chan1(&self, device: &str) -> QueryResult<i32> {
        self.ops.scalar(ScalarQuery::CenterChan1, device)
    }

    fn center_chan2(&self, device: &str) -> QueryResult<i32> {
        self.ops.scalar(ScalarQuery::CenterChan2, device)
    }

    fn frequency(&self, device: &str) -> QueryResult<i32> {
        self.ops.scalar(ScalarQuery::Frequency, device)
    }

    fn frequency_offset(&self, device: &str) -> QueryResult<i32> {
        self.ops.scalar(ScalarQuery::FrequencyOffset, device)
    }

    fn txpower(&self, device: &str) -> QueryResult<i32> {
        self.ops.scalar(ScalarQuery::TxPower, device)
    }

    fn txpower_offset(&self, device: &str) -> QueryResult<i32> {
        self.ops.scalar(ScalarQuery::TxPowerOffset, device)
    }

    fn bitrate(&self, device: &str) -> QueryResult<i32> {
        self.ops.scalar(ScalarQuery::Bitrate, device)
    }

    fn signal(&self, device: &str) -> QueryResult<i32> {
        self.ops.scalar(ScalarQuery::Signal, device)
    }

    fn noise(&self, device: &str) -> QueryResult<i32> {
        self.ops.scalar(ScalarQuery::Noise, device)
    }

    fn quality(&self, device: &str) -> QueryResult<i32> {
        self.ops.scalar(ScalarQuery::Quality, device)
    }

    fn quality_max(&self, device: &str) -> QueryResult<i32> {
        self.ops.scalar(ScalarQuery::QualityMax, device)
    }

    fn mbssid_support(&self, device: &str) -> QueryResult<bool> {
        Ok(self.ops.scalar(ScalarQuery::MbssidSupport, device)? != 0)
    }

    fn hwmodelist(&self, device: &str) -> QueryResult<HwModes> {
        let bits = self.ops.scalar(ScalarQuery::HwModeList, device)?;
        Ok(HwModes::from_bits_retain(bits as u32))
    }

    fn htmodelist(&self, device: &str) -> QueryResult<HtModes> {
        let bits = self.ops.scalar(ScalarQuery::HtModeList, device)?;
        Ok(HtModes::from_bits_retain(bits as u32))
    }

    fn htmode(&self, device: &str) -> QueryResult<HtModes> {
        let bits = self.ops.scalar(ScalarQuery::HtMode, device)?;
        Ok(HtModes::from_bits_retain(bits as u32))
    }

    fn ssid(&self, device: &str) -> QueryResult<String> {
        self.text(TextQuery::Ssid, device)
    }

    fn bssid(&self, device: &str) -> QueryResult<MacAddr> {
        self.text(TextQuery::Bssid, device)?.parse()
    }

    fn country(&self, device: &str) -> QueryResult<String> {
        self.text(TextQuery::Country, device)
    }

    fn hardware_name(&self, device: &str) -> QueryResult<String> {
        self.text(TextQuery::HardwareName, device)
    }

    fn phyname(&self, device: &str) -> QueryResult<String> {
        self.text(TextQuery::PhyName, device)
    }

    fn hardware_id(&self, device: &str) -> QueryResult<HardwareId> {
        self.single("hardware id", device, |buf| self.ops.hardware_id_raw(device, buf))
    }

    fn encryption(&self, device: &str) -> QueryResult<CryptoEntry> {
        self.single("crypto state", device, |buf| self.ops.encryption_raw(device, buf))
    }

    fn scanlist(&self, device: &str) -> QueryResult<Vec<ScanEntry>> {
        self.list("scan list", device, |buf| self.ops.scanlist_raw(device, buf))
    }

    fn assoclist(&self, device: &str) -> QueryResult<Vec<AssocEntry>> {
        self.list("station list", device, |buf| self.ops.assoclist_raw(device, buf))
    }

    fn txpwrlist(&self, device: &str) -> QueryResult<Vec<TxPowerEntry>> {
        self.list("tx power list", device, |buf| self.ops.txpwrlist_raw(device, buf))
    }

    fn freqlist(&self, device: &str) -> QueryResult<Vec<FreqEntry>> {
        self.list("frequency list", device, |buf| self.ops.freqlist_raw(device, buf))
    }

    fn countrylist(&self, device: &str) -> QueryResult<Vec<CountryEntry>> {
        self.list("country list", device, |buf| self.ops.countrylist_raw(device, buf))
    }

    fn lookup_phy(&self, section: &str) -> QueryResult<String> {
        self.text_value(|buf| self.ops.lookup_phy(section, buf))
    }

    fn phy_path(&self, phy: &str) -> QueryResult<String> {
        self.text_value(|buf| self.ops.phy_path(phy, buf))
    }
}
