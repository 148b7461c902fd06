use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AwsListError;

/// Largest page size accepted by `ListSubscribedRuleGroups`.
pub const MAX_PAGE_SIZE: i32 = 100;

/// Which WAF Classic API the rule groups are listed from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WafScope {
    /// Global WAF, used with `CloudFront` distributions.
    #[default]
    Global,
    /// Regional WAF, used with load balancers and API gateways.
    Regional,
}

impl WafScope {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Global => "global",
            Self::Regional => "regional",
        }
    }
}

impl fmt::Display for WafScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WafScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "global" | "waf" => Ok(Self::Global),
            "regional" | "wafregional" => Ok(Self::Regional),
            other => Err(format!(
                "unknown WAF scope '{other}' (expected 'global' or 'regional')"
            )),
        }
    }
}

/// Connection settings for listing subscribed rule groups.
///
/// Region, optional STS assume-role settings for cross-account access, an
/// endpoint override for local development (e.g. `LocalStack`), the WAF scope
/// and an optional page size for each listing request.
#[derive(Clone, Serialize, Deserialize)]
pub struct WafLookupConfig {
    /// AWS region (e.g. `"us-east-1"`). Global WAF is served from `us-east-1`.
    #[serde(default = "default_region")]
    pub region: String,

    /// Optional IAM role ARN to assume via STS.
    #[serde(default)]
    pub role_arn: Option<String>,

    /// Optional endpoint URL override.
    #[serde(default)]
    pub endpoint_url: Option<String>,

    /// Optional STS session name (defaults to `"waf-lookup"`).
    #[serde(default)]
    pub session_name: Option<String>,

    /// Optional external ID for cross-account trust policies.
    #[serde(default)]
    pub external_id: Option<String>,

    #[serde(default)]
    pub scope: WafScope,

    /// Items requested per page (1 to 100). The service default applies when unset.
    #[serde(default)]
    pub page_size: Option<i32>,
}

fn default_region() -> String {
    "us-east-1".to_owned()
}

impl fmt::Debug for WafLookupConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WafLookupConfig")
            .field("region", &self.region)
            .field("role_arn", &self.role_arn.as_ref().map(|_| "[REDACTED]"))
            .field("endpoint_url", &self.endpoint_url)
            .field("session_name", &self.session_name)
            .field("external_id", &self.external_id)
            .field("scope", &self.scope)
            .field("page_size", &self.page_size)
            .finish()
    }
}

impl Default for WafLookupConfig {
    fn default() -> Self {
        Self::new(default_region())
    }
}

impl WafLookupConfig {
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            role_arn: None,
            endpoint_url: None,
            session_name: None,
            external_id: None,
            scope: WafScope::Global,
            page_size: None,
        }
    }

    #[must_use]
    pub fn with_scope(mut self, scope: WafScope) -> Self {
        self.scope = scope;
        self
    }

    #[must_use]
    pub fn with_page_size(mut self, page_size: i32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    #[must_use]
    pub fn with_role_arn(mut self, role_arn: impl Into<String>) -> Self {
        self.role_arn = Some(role_arn.into());
        self
    }

    #[must_use]
    pub fn with_endpoint_url(mut self, endpoint_url: impl Into<String>) -> Self {
        self.endpoint_url = Some(endpoint_url.into());
        self
    }

    #[must_use]
    pub fn with_session_name(mut self, session_name: impl Into<String>) -> Self {
        self.session_name = Some(session_name.into());
        self
    }

    #[must_use]
    pub fn with_external_id(mut self, external_id: impl Into<String>) -> Self {
        self.external_id = Some(external_id.into());
        self
    }

    pub fn validate(&self) -> Result<(), AwsListError> {
        if self.region.trim().is_empty() {
            return Err(AwsListError::Configuration("region must not be empty".into()));
        }
        if let Some(size) = self.page_size {
            if !(1..=MAX_PAGE_SIZE).contains(&size) {
                return Err(AwsListError::Configuration(format!(
                    "page_size must be between 1 and {MAX_PAGE_SIZE}, got {size}"
                )));
            }
        }
        Ok(())
    }
}
