//! Wireless interface information over pluggable driver backends.
//!
//! A backend answers queries (channel, signal, scan results, associated
//! stations, ...) for the devices it claims. The [`Registry`] keeps the
//! backends in a fixed order and hands each device to the first one that
//! claims it. Results come back as typed records that the [`render`] and
//! [`report`] modules turn into the familiar `iwinfo` style text.
//!
//! # Example
//!
//! ```no_run
//! use wlinfo::{Config, Registry, report};
//!
//! # fn example() -> wlinfo::Result<()> {
//! let registry = Registry::new(Config::discover()?);
//!
//! let session = registry.open("wlan0")?;
//! print!("{}", report::info(session.backend(), "wlan0"));
//! print!("{}", report::assoclist(session.backend(), "wlan0"));
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! Backend queries return [`QueryResult`]. [`QueryError::NotSupported`] means
//! the backend lacks the operation altogether, which callers treat
//! differently from a query that was attempted and failed. Registry level
//! operations return [`Result`] with [`WlinfoError`].
//!
//! # Binary Record Buffers
//!
//! Drivers that fill caller-allocated buffers with fixed-stride records plug
//! in through [`backends::RawBackend`]. The [`wire`] module holds the codec;
//! a buffer whose length is not a whole number of records is rejected as a
//! [`QueryError::ContractViolation`] instead of being partially decoded.
//!
//! # Logging
//!
//! This crate uses the [`log`](https://docs.rs/log) facade for logging. To see
//! log output, add a logging implementation like `env_logger`. For example:
//!
//! ```no_run,ignore
//! env_logger::init();
//! // ...
//! ```

// Internal implementation modules
mod api;
mod config;

// Public API modules
pub mod backends;
pub mod render;
pub mod report;
pub mod types;
pub mod util;
pub mod wire;

// Re-exported public API
pub use api::backend::Backend;
pub use api::models::{
    AssocEntry, CountryEntry, CryptoEntry, FreqEntry, HardwareId, HtChanInfo, MacAddr,
    QueryError, QueryResult, RateEntry, RatePhy, ScanEntry, TxPowerEntry, VhtChanInfo,
    WireError, WlinfoError,
};
pub use api::registry::{Registry, Session};
pub use config::Config;

/// A specialized `Result` type for wlinfo operations.
pub type Result<T> = std::result::Result<T, WlinfoError>;
