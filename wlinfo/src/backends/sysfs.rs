//! Backend that answers from sysfs and procfs alone.
//!
//! Needs no driver-specific transport, so it works for any interface the
//! kernel registers as wireless. It cannot scan, list stations or change
//! anything; those operations stay `NotSupported`.

use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

use crate::api::backend::Backend;
use crate::api::models::{CountryEntry, HardwareId, QueryError, QueryResult};
use crate::config::Config;
use crate::types::constants::{paths, sentinel};
use crate::types::iso3166::ISO3166_NAMES;

/// One row of `/proc/net/wireless`.
#[derive(Debug, Clone, Copy, PartialEq)]
struct LinkStats {
    quality: i32,
    level: i32,
    noise: i32,
}

pub struct SysfsBackend {
    sysfs_root: PathBuf,
    procfs_root: PathBuf,
}

impl SysfsBackend {
    pub fn new(config: &Config) -> Self {
        Self {
            sysfs_root: config.sysfs_root.clone(),
            procfs_root: config.procfs_root.clone(),
        }
    }

    fn netdev(&self, device: &str) -> PathBuf {
        self.sysfs_root.join(paths::CLASS_NET).join(device)
    }

    fn read_trimmed(path: &Path) -> QueryResult<String> {
        let text = fs::read_to_string(path)?;
        Ok(text.trim().to_string())
    }

    /// Reads a sysfs id attribute such as `0x168c`.
    fn read_hex(path: &Path) -> QueryResult<u16> {
        let text = Self::read_trimmed(path)?;
        let digits = text.strip_prefix("0x").unwrap_or(&text);
        u16::from_str_radix(digits, 16)
            .map_err(|e| QueryError::Failed(format!("{}: {e}", path.display())))
    }

    fn link_stats(&self, device: &str) -> QueryResult<LinkStats> {
        let path = self.procfs_root.join(paths::PROC_NET_WIRELESS);
        let text = fs::read_to_string(&path)?;
        parse_link_stats(&text, device)
            .ok_or_else(|| QueryError::Failed(format!("{device} not listed in {}", path.display())))
    }
}

/// Finds `device` in the text of `/proc/net/wireless`.
///
/// The file starts with two header lines; each following row is
/// `iface: status link. level. noise. ...` where the trailing dots mark
/// values that were updated since the last read.
fn parse_link_stats(text: &str, device: &str) -> Option<LinkStats> {
    text.lines().skip(2).find_map(|line| {
        let (name, rest) = line.split_once(':')?;
        if name.trim() != device {
            return None;
        }

        let mut fields = rest
            .split_whitespace()
            .skip(1)
            .map(|f| f.trim_end_matches('.').parse::<i32>());
        let quality = fields.next()?.ok()?;
        let level = fields.next()?.ok()?;
        let noise = fields.next()?.ok()?;
        Some(LinkStats {
            quality,
            level,
            noise,
        })
    })
}

impl Backend for SysfsBackend {
    fn name(&self) -> &'static str {
        "sysfs"
    }

    fn probe(&self, device: &str) -> bool {
        if device.is_empty() || device.contains('/') {
            return false;
        }
        let dir = self.netdev(device);
        dir.join(paths::PHY80211).exists() || dir.join(paths::WIRELESS).exists()
    }

    fn quality(&self, device: &str) -> QueryResult<i32> {
        Ok(self.link_stats(device)?.quality)
    }

    fn quality_max(&self, _device: &str) -> QueryResult<i32> {
        Ok(sentinel::DEFAULT_QUALITY_MAX)
    }

    fn signal(&self, device: &str) -> QueryResult<i32> {
        Ok(self.link_stats(device)?.level)
    }

    fn noise(&self, device: &str) -> QueryResult<i32> {
        let noise = self.link_stats(device)?.noise;
        if noise == sentinel::PROC_NOISE_NONE {
            return Err(QueryError::Failed("driver reports no noise level".into()));
        }
        Ok(noise)
    }

    fn hardware_id(&self, device: &str) -> QueryResult<HardwareId> {
        let dev = self.netdev(device).join("device");

        let compatible = fs::read(dev.join("of_node/compatible"))
            .ok()
            .and_then(|raw| {
                raw.split(|&b| b == 0)
                    .next()
                    .map(|first| String::from_utf8_lossy(first).into_owned())
            })
            .unwrap_or_default();

        let vendor = Self::read_hex(&dev.join("vendor"));
        let device_id = Self::read_hex(&dev.join("device"));

        match (vendor, device_id) {
            (Ok(vendor_id), Ok(device_id)) => Ok(HardwareId {
                vendor_id,
                device_id,
                subsystem_vendor_id: Self::read_hex(&dev.join("subsystem_vendor")).unwrap_or(0),
                subsystem_device_id: Self::read_hex(&dev.join("subsystem_device")).unwrap_or(0),
                compatible,
            }),
            _ if !compatible.is_empty() => Ok(HardwareId {
                compatible,
                ..HardwareId::default()
            }),
            (Err(e), _) | (_, Err(e)) => {
                debug!("no bus ids for {device}: {e}");
                Err(e)
            }
        }
    }

    fn phyname(&self, device: &str) -> QueryResult<String> {
        let name = Self::read_trimmed(&self.netdev(device).join(paths::PHY80211).join("name"))?;
        if name.is_empty() {
            return Err(QueryError::Failed(format!("{device} has an empty phy name")));
        }
        Ok(name)
    }

    fn countrylist(&self, _device: &str) -> QueryResult<Vec<CountryEntry>> {
        Ok(ISO3166_NAMES
            .iter()
            .map(|label| CountryEntry {
                iso3166: label.code,
                ccode: label.alpha2(),
            })
            .collect())
    }

    fn phy_path(&self, phy: &str) -> QueryResult<String> {
        if phy.is_empty() || phy.contains('/') {
            return Err(QueryError::Failed(format!("invalid phy name {phy:?}")));
        }

        let link = self
            .sysfs_root
            .join(paths::CLASS_IEEE80211)
            .join(phy)
            .join("device");
        let target = fs::canonicalize(&link)?;
        let devices = fs::canonicalize(self.sysfs_root.join(paths::DEVICES))?;

        let relative = target.strip_prefix(&devices).map_err(|_| {
            QueryError::Failed(format!("{} is outside {}", target.display(), devices.display()))
        })?;
        debug!("{phy} resolves to {}", relative.display());
        Ok(relative.to_string_lossy().into_owned())
    }
}
