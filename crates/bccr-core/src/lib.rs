pub mod config;
pub mod logging;

pub mod artifact;
pub mod checksum;
pub mod conf;
pub mod framing;
pub mod rom;
pub mod status;
pub mod upload;
