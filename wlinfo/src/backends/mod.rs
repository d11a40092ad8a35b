//! Built-in backends.
//!
//! [`builtin`] returns them in probe order. Drivers that fill ABI buffers
//! plug in through [`RawBackend`] and [`Registry::with_backends`](crate::Registry::with_backends).

mod raw;
mod sysfs;

pub use raw::{RawBackend, RawOps, ScalarQuery, TextQuery};
pub use sysfs::SysfsBackend;

use crate::api::backend::Backend;
use crate::config::Config;

/// Backends compiled into the crate, in probe order.
pub fn builtin(config: &Config) -> Vec<Box<dyn Backend>> {
    vec![Box::new(SysfsBackend::new(config))]
}
