//! Utility modules for the Cloudflare zone manager.
//! This module contains common utilities used across the crate.

mod logging;

pub use logging::{init_logging, log_cloudflare_event};
