//! Type definitions and constants.
//!
//! This module contains the capability bitmasks, their name tables and the
//! ISO-3166 label table.

pub mod capabilities;
pub mod constants;
pub mod iso3166;
