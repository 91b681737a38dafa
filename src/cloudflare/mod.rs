//! Cloudflare integration for the zone manager.
//! This module provides the HTTP client and the zone-level
//! operations: cache purging and development mode control.

mod client;
mod zones;

pub use client::{
    CloudflareClient, CloudflareClientBuilder, CloudflareError, CloudflareResponse,
    DevelopmentModeSetting, Zone, CLOUDFLARE_API_BASE,
};
pub use zones::{CloudflareZoneManager, DevModeOrigin, DevModeStatus};
