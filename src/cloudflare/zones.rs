use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::cloudflare::client::{CloudflareClient, CloudflareResponse};
use crate::error::{ZoneManagerError, ZoneManagerResult};
use crate::utils::log_cloudflare_event;

/// How development mode came to be enabled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DevModeOrigin {
    /// The zone already had development mode on; no update was sent
    AlreadyOn,
    /// Development mode was off and this call switched it on
    JustEnabled,
}

impl fmt::Display for DevModeOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DevModeOrigin::AlreadyOn => write!(f, "already-on"),
            DevModeOrigin::JustEnabled => write!(f, "just-enabled"),
        }
    }
}

/// Outcome of enabling development mode on a zone
///
/// `time_remaining` comes from the update response when the mode was just
/// enabled, and from the status query when it was already on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DevModeStatus {
    pub status: bool,
    pub origin: DevModeOrigin,
    pub time_remaining: u64,
}

/// Manages cache and development mode for Cloudflare zones
///
/// This struct provides the domain-level operations on top of the raw API
/// client: it resolves the zone id for a domain on every call, drives the
/// endpoint requests, and converts API-level failures into typed errors.
pub struct CloudflareZoneManager {
    /// Cloudflare API client for making HTTP requests to the Cloudflare API
    client: Arc<CloudflareClient>,
}

impl CloudflareZoneManager {
    /// Creates a new Cloudflare zone manager
    ///
    /// # Arguments
    ///
    /// * `client` - An Arc-wrapped CloudflareClient for making API requests
    ///
    /// # Returns
    ///
    /// A new CloudflareZoneManager instance
    pub fn new(client: Arc<CloudflareClient>) -> Self {
        Self { client }
    }

    /// Clears the entire cache of the zone serving a domain
    ///
    /// # Arguments
    ///
    /// * `domain` - The domain name whose zone cache should be purged
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - If the API accepted the purge
    /// * `Err(ZoneManagerError)` - If the zone could not be resolved or the
    ///   purge was rejected
    pub async fn clear_cache(&self, domain: &str) -> ZoneManagerResult<bool> {
        // Resolve the zone id for the domain
        let zone_id = self.resolve_zone_id(domain).await?;

        // Send the purge request to the Cloudflare API
        let response = self.client.purge_cache(&zone_id).await?;

        // Check if the request was successful
        if !response.success {
            return Err(ZoneManagerError::CachePurge {
                domain: domain.to_string(),
                message: first_error_message(&response),
            });
        }

        // Log the successful purge
        log_cloudflare_event("clear_cache", true, Some(&format!("Cache cleared on {}", domain)));

        Ok(true)
    }

    /// Switches the zone serving a domain to development mode
    ///
    /// Queries the current setting first. When development mode is already
    /// on the call reports success without issuing an update; otherwise it
    /// sends the update and reports the new state.
    ///
    /// # Arguments
    ///
    /// * `domain` - The domain name whose zone should enter development mode
    ///
    /// # Returns
    ///
    /// * `Ok(DevModeStatus)` - The resulting mode, its origin, and the
    ///   seconds remaining until it expires
    /// * `Err(ZoneManagerError)` - If the zone could not be resolved, the
    ///   status query failed, or the update was rejected
    pub async fn enable_dev_mode(&self, domain: &str) -> ZoneManagerResult<DevModeStatus> {
        // Resolve the zone id for the domain
        let zone_id = self.resolve_zone_id(domain).await?;

        // Query the current development mode status
        let current = self.client.get_development_mode(&zone_id).await?;

        if !current.success {
            return Err(ZoneManagerError::DevModeQuery {
                domain: domain.to_string(),
                message: first_error_message(&current),
            });
        }

        let setting = current.result.ok_or_else(|| ZoneManagerError::DevModeQuery {
            domain: domain.to_string(),
            message: "Response carried no development mode setting".to_string(),
        })?;

        // Anything other than "off" counts as already enabled
        if setting.value != "off" {
            log_cloudflare_event(
                "enable_dev_mode",
                true,
                Some(&format!("Development mode already on for {}", domain)),
            );
            return Ok(DevModeStatus {
                status: true,
                origin: DevModeOrigin::AlreadyOn,
                time_remaining: setting.time_remaining,
            });
        }

        // Status is off. Switch the zone to development mode
        let updated = self.client.set_development_mode(&zone_id, "on").await?;

        if !updated.success {
            return Err(ZoneManagerError::DevModeSet {
                domain: domain.to_string(),
                message: first_error_message(&updated),
            });
        }

        let setting = updated.result.ok_or_else(|| ZoneManagerError::DevModeSet {
            domain: domain.to_string(),
            message: "Response carried no development mode setting".to_string(),
        })?;

        // Log the successful switch
        log_cloudflare_event(
            "enable_dev_mode",
            true,
            Some(&format!("Development mode enabled for {}", domain)),
        );

        Ok(DevModeStatus {
            status: true,
            origin: DevModeOrigin::JustEnabled,
            time_remaining: setting.time_remaining,
        })
    }

    /// Resolves the zone id serving a domain
    ///
    /// The zones endpoint returns a list; the first entry is the zone for
    /// the queried name. An empty list means no zone matches the domain and
    /// is reported as a lookup error.
    async fn resolve_zone_id(&self, domain: &str) -> ZoneManagerResult<String> {
        let response = self.client.list_zones(domain).await?;

        if !response.success {
            return Err(ZoneManagerError::ZoneLookup {
                domain: domain.to_string(),
                message: first_error_message(&response),
            });
        }

        response
            .result
            .unwrap_or_default()
            .into_iter()
            .next()
            .map(|zone| zone.id)
            .ok_or_else(|| ZoneManagerError::ZoneLookup {
                domain: domain.to_string(),
                message: "No matching zone found".to_string(),
            })
    }
}

/// Extracts the first API error message from a response envelope
fn first_error_message<T>(response: &CloudflareResponse<T>) -> String {
    response
        .errors
        .first()
        .map(|e| e.message.clone())
        .unwrap_or_else(|| "Unknown error".to_string())
}
