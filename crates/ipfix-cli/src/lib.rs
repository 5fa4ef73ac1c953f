//! CLI library components for the IPFIX IANA generator.

pub mod logging;
pub mod pipeline;
