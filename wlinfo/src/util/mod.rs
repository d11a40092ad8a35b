//! Unit conversions shared by renderers and backends.

pub mod utils;
