//! Resource URL resolution for `$ref` sub-attributes.
//!
//! The response filter only needs a function from `(resource id, resource type)`
//! to an optional URL; [`ReferenceUrlResolver`] is that seam. [`EndpointConfig`]
//! builds those URLs for the common tenant layouts.

use crate::error::ScimError;

use log::warn;
use std::collections::HashMap;

/// Resolves the URL of a resource managed by this service provider.
///
/// Implementations must be cheap and side-effect free; the filter calls them
/// once per reference it fills in and never retries.
pub trait ReferenceUrlResolver {
    /// Return the URL of `resource_id` of type `resource_type` (e.g. `"Group"`),
    /// or `None` when it cannot be resolved.
    fn resolve(&self, resource_id: &str, resource_type: &str) -> Option<String>;
}

impl<F> ReferenceUrlResolver for F
where
    F: Fn(&str, &str) -> Option<String>,
{
    fn resolve(&self, resource_id: &str, resource_type: &str) -> Option<String> {
        self(resource_id, resource_type)
    }
}

/// Strategy for handling tenant information in URLs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TenantStrategy {
    /// Single tenant mode - no tenant information in URLs.
    /// Example: `https://scim.example.com/v2/Users/123`
    #[default]
    SingleTenant,

    /// Tenant as subdomain.
    /// Example: `https://tenantA.scim.example.com/v2/Users/123`
    Subdomain,

    /// Tenant in URL path before SCIM version.
    /// Example: `https://scim.example.com/tenantA/v2/Users/123`
    PathBased,
}

/// Endpoint layout used to build resource URLs.
#[derive(Debug, Clone)]
pub struct EndpointConfig {
    /// Base URL without tenant or path information, e.g. `https://scim.example.com`
    pub base_url: String,

    /// Strategy for incorporating tenant information into URLs.
    pub tenant_strategy: TenantStrategy,

    /// SCIM protocol version segment. Defaults to "v2".
    pub scim_version: String,

    /// Resource type name to endpoint path, e.g. `User` -> `Users`.
    pub endpoints: HashMap<String, String>,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            base_url: "https://localhost".to_string(),
            tenant_strategy: TenantStrategy::SingleTenant,
            scim_version: "v2".to_string(),
            endpoints: HashMap::from([
                ("User".to_string(), "Users".to_string()),
                ("Group".to_string(), "Groups".to_string()),
            ]),
        }
    }
}

impl EndpointConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn with_tenant_strategy(mut self, strategy: TenantStrategy) -> Self {
        self.tenant_strategy = strategy;
        self
    }

    pub fn with_scim_version(mut self, version: impl Into<String>) -> Self {
        self.scim_version = version.into();
        self
    }

    /// Map a resource type name to its endpoint path segment.
    pub fn with_endpoint(mut self, resource_type: impl Into<String>, path: impl Into<String>) -> Self {
        self.endpoints.insert(resource_type.into(), path.into());
        self
    }

    /// Endpoint path for a resource type; unknown names are used as-is.
    pub fn endpoint<'a>(&'a self, resource_type: &'a str) -> &'a str {
        self.endpoints
            .get(resource_type)
            .map(String::as_str)
            .unwrap_or(resource_type)
    }

    /// Generate the URL of a resource.
    ///
    /// # Errors
    ///
    /// Returns an error if the tenant strategy needs a tenant id and none was given,
    /// or if the base URL has an unsupported scheme.
    pub fn generate_ref_url(
        &self,
        tenant_id: Option<&str>,
        resource_type: &str,
        resource_id: &str,
    ) -> Result<String, ScimError> {
        let endpoint = self.endpoint(resource_type);
        match &self.tenant_strategy {
            TenantStrategy::SingleTenant => Ok(format!(
                "{}/{}/{}/{}",
                self.base_url, self.scim_version, endpoint, resource_id
            )),
            TenantStrategy::Subdomain => {
                let tenant = tenant_id.ok_or_else(|| {
                    ScimError::invalid_request(
                        "Tenant ID required for subdomain strategy but not provided",
                    )
                })?;
                let (protocol, host) = self
                    .base_url
                    .split_once("://")
                    .ok_or_else(|| ScimError::internal("Invalid base URL format"))?;

                Ok(format!(
                    "{}://{}.{}/{}/{}/{}",
                    protocol, tenant, host, self.scim_version, endpoint, resource_id
                ))
            }
            TenantStrategy::PathBased => {
                let tenant = tenant_id.ok_or_else(|| {
                    ScimError::invalid_request(
                        "Tenant ID required for path-based strategy but not provided",
                    )
                })?;

                Ok(format!(
                    "{}/{}/{}/{}/{}",
                    self.base_url, tenant, self.scim_version, endpoint, resource_id
                ))
            }
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ScimError> {
        if self.base_url.is_empty() {
            return Err(ScimError::internal("Base URL cannot be empty"));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ScimError::internal(
                "Base URL must start with http:// or https://",
            ));
        }

        if self.scim_version.is_empty() {
            return Err(ScimError::internal("SCIM version cannot be empty"));
        }

        Ok(())
    }

    /// Bind this configuration to the tenant of the current request.
    pub fn resolver(&self, tenant_id: Option<&str>) -> TenantReferenceResolver<'_> {
        TenantReferenceResolver {
            config: self,
            tenant_id: tenant_id.map(str::to_string),
        }
    }
}

/// [`EndpointConfig`] bound to one tenant, usable as a [`ReferenceUrlResolver`].
#[derive(Debug, Clone)]
pub struct TenantReferenceResolver<'a> {
    config: &'a EndpointConfig,
    tenant_id: Option<String>,
}

impl ReferenceUrlResolver for TenantReferenceResolver<'_> {
    fn resolve(&self, resource_id: &str, resource_type: &str) -> Option<String> {
        match self
            .config
            .generate_ref_url(self.tenant_id.as_deref(), resource_type, resource_id)
        {
            Ok(url) => Some(url),
            Err(e) => {
                warn!(
                    "Unable to build reference URL for {} '{}': {}",
                    resource_type, resource_id, e
                );
                None
            }
        }
    }
}
