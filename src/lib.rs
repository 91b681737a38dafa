//! A client library for a small slice of the Cloudflare v4 management API:
//! resolving the zone behind a domain, purging that zone's cache, and
//! switching the zone to development mode with idempotent status reporting.
//!
//! [`CloudflareClient`] owns the configured HTTP transport and exposes one
//! typed call per endpoint; [`CloudflareZoneManager`] layers the
//! domain-level operations on top and reports failures as
//! [`ZoneManagerError`] values.

pub mod cloudflare;
pub mod error;
pub mod utils;

pub use cloudflare::{CloudflareClient, CloudflareZoneManager, DevModeOrigin, DevModeStatus};
pub use error::{ZoneManagerError, ZoneManagerResult};
