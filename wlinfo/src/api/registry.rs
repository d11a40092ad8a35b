//! Backend registry and scoped backend sessions.
//!
//! The registry holds an ordered, immutable list of backends. A device is
//! handed to the first backend whose [`Backend::probe`] claims it, so when
//! two backends could serve the same interface the registration order
//! decides, the same way on every run.

use log::{debug, warn};
use std::fs;
use std::ops::Deref;

use crate::Result;
use crate::api::backend::Backend;
use crate::api::models::WlinfoError;
use crate::backends;
use crate::config::Config;
use crate::types::constants::paths;

/// Ordered set of wireless backends.
///
/// # Examples
///
/// ```no_run
/// use wlinfo::{Config, Registry, render};
///
/// # fn example() -> wlinfo::Result<()> {
/// let registry = Registry::new(Config::discover()?);
///
/// for device in registry.enumerate_devices()? {
///     if let Ok(session) = registry.open(&device) {
///         let quality = session.quality(&device).unwrap_or(-1);
///         println!("{device}: {} ({})", render::quality(quality), session.name());
///     }
/// }
/// # Ok(())
/// # }
/// ```
pub struct Registry {
    config: Config,
    backends: Vec<Box<dyn Backend>>,
}

impl Registry {
    /// Creates a registry with the built-in backends enabled by `config`.
    pub fn new(config: Config) -> Self {
        let backends = backends::builtin(&config);
        Self::with_backends(config, backends)
    }

    /// Creates a registry with an explicit backend list, probed in the
    /// order given.
    pub fn with_backends(config: Config, backends: Vec<Box<dyn Backend>>) -> Self {
        let backends: Vec<_> = backends
            .into_iter()
            .filter(|b| config.backend_enabled(b.name()))
            .collect();
        debug!(
            "registered backends: {:?}",
            backends.iter().map(|b| b.name()).collect::<Vec<_>>()
        );
        Self { config, backends }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Iterates the registered backends in probe order.
    pub fn backends(&self) -> impl Iterator<Item = &dyn Backend> {
        self.backends.iter().map(|b| b.as_ref())
    }

    /// Returns the first backend that claims `device`.
    pub fn resolve_by_device(&self, device: &str) -> Result<&dyn Backend> {
        for backend in self.backends() {
            if backend.probe(device) {
                debug!("{device} claimed by backend {}", backend.name());
                return Ok(backend);
            }
        }
        debug!("no backend claims {device}");
        Err(WlinfoError::NoSuchDevice(device.to_string()))
    }

    /// Returns the backend registered as `name`.
    pub fn resolve_by_name(&self, name: &str) -> Result<&dyn Backend> {
        self.backends()
            .find(|b| b.name() == name)
            .ok_or_else(|| WlinfoError::NoSuchBackend(name.to_string()))
    }

    /// Name of the backend that claims `device`, if any.
    pub fn backend_type(&self, device: &str) -> Option<&'static str> {
        self.resolve_by_device(device).ok().map(|b| b.name())
    }

    /// Lists network interfaces known to the system, sorted by name.
    ///
    /// Interfaces that no backend claims are included; resolve each one to
    /// find out whether it is wireless.
    pub fn enumerate_devices(&self) -> Result<Vec<String>> {
        let dir = self.config.sysfs_root.join(paths::CLASS_NET);
        let mut devices = Vec::new();
        for entry in fs::read_dir(&dir)? {
            let entry = entry?;
            match entry.file_name().into_string() {
                Ok(name) => devices.push(name),
                Err(raw) => warn!("skipping interface with non UTF-8 name {raw:?}"),
            }
        }
        devices.sort();
        Ok(devices)
    }

    /// Resolves `device` and acquires its backend for the lifetime of the
    /// returned session.
    pub fn open(&self, device: &str) -> Result<Session<'_>> {
        Session::acquire(self.resolve_by_device(device)?)
    }

    /// Acquires the backend registered as `name`.
    pub fn open_backend(&self, name: &str) -> Result<Session<'_>> {
        Session::acquire(self.resolve_by_name(name)?)
    }
}

/// A backend whose transport is held open.
///
/// Dereferences to the backend. The transport is released when the session
/// is dropped.
pub struct Session<'r> {
    backend: &'r dyn Backend,
}

impl<'r> Session<'r> {
    fn acquire(backend: &'r dyn Backend) -> Result<Self> {
        backend.acquire()?;
        debug!("acquired backend {}", backend.name());
        Ok(Self { backend })
    }

    pub fn backend(&self) -> &'r dyn Backend {
        self.backend
    }
}

impl<'r> Deref for Session<'r> {
    type Target = dyn Backend + 'r;

    fn deref(&self) -> &Self::Target {
        self.backend
    }
}

impl Drop for Session<'_> {
    fn drop(&mut self) {
        debug!("releasing backend {}", self.backend.name());
        self.backend.release();
    }
}
