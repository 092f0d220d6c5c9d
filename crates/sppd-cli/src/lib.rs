//! CLI library components for the SPPD converter.

pub mod logging;
pub mod output;
