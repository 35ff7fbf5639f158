//! Service provider configuration as defined in RFC 7644 Section 5.
//!
//! Only [`ServiceProviderConfig::ignore_required_attributes_on_response`] changes
//! filtering behavior; the remaining flags describe the provider's capabilities
//! and travel with the configuration so it can be loaded from a single document.

use serde::{Deserialize, Serialize};

/// Capabilities and behavioral switches of the SCIM service provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceProviderConfig {
    /// Whether PATCH operations are supported
    #[serde(rename = "patch", default)]
    pub patch_supported: bool,

    /// Whether bulk operations are supported
    #[serde(rename = "bulk", default)]
    pub bulk_supported: bool,

    /// Whether filtering is supported
    #[serde(rename = "filter", default)]
    pub filter_supported: bool,

    /// Whether password change operations are supported
    #[serde(rename = "changePassword", default)]
    pub change_password_supported: bool,

    /// Whether sorting is supported
    #[serde(rename = "sort", default)]
    pub sort_supported: bool,

    /// Whether ETags are supported for versioning
    #[serde(rename = "etag", default)]
    pub etag_supported: bool,

    /// Maximum number of resources returned in a query
    #[serde(rename = "filter.maxResults", default = "default_max_results")]
    pub filter_max_results: u32,

    /// Skip required-attribute enforcement when building responses.
    ///
    /// Useful for providers whose backing store does not hold every attribute
    /// the schema marks as required.
    #[serde(default)]
    pub ignore_required_attributes_on_response: bool,
}

fn default_max_results() -> u32 {
    1
}

impl Default for ServiceProviderConfig {
    fn default() -> Self {
        Self {
            patch_supported: false,
            bulk_supported: false,
            filter_supported: false,
            change_password_supported: false,
            sort_supported: false,
            etag_supported: false,
            filter_max_results: default_max_results(),
            ignore_required_attributes_on_response: false,
        }
    }
}

impl ServiceProviderConfig {
    /// Configuration that skips required-attribute checks on responses.
    pub fn ignoring_required_attributes() -> Self {
        Self {
            ignore_required_attributes_on_response: true,
            ..Self::default()
        }
    }
}
