use aws_config::{ConfigLoader, Region, SdkConfig};
use tracing::{debug, info};

use crate::config::WafLookupConfig;

const DEFAULT_SESSION_NAME: &str = "waf-lookup";

fn base_loader(config: &WafLookupConfig) -> ConfigLoader {
    let loader = aws_config::from_env().region(Region::new(config.region.clone()));
    match &config.endpoint_url {
        Some(endpoint) => loader.endpoint_url(endpoint),
        None => loader,
    }
}

/// Build an AWS SDK configuration for the WAF clients.
///
/// Credentials come from the standard environment chain. When `role_arn` is
/// set the role is assumed through STS, using the base chain for the STS call
/// itself; the assume-role provider refreshes the session before it expires.
///
/// ```no_run
/// use waf_lookup_aws::{WafLookupConfig, build_sdk_config};
///
/// # async fn example() {
/// let config = WafLookupConfig::new("us-east-1").with_endpoint_url("http://localhost:4566");
/// let sdk_config = build_sdk_config(&config).await;
/// # }
/// ```
pub async fn build_sdk_config(config: &WafLookupConfig) -> SdkConfig {
    if let Some(endpoint) = &config.endpoint_url {
        debug!(endpoint = %endpoint, "using custom AWS endpoint");
    }

    let Some(role_arn) = &config.role_arn else {
        return base_loader(config).load().await;
    };

    let session_name = config
        .session_name
        .as_deref()
        .unwrap_or(DEFAULT_SESSION_NAME);

    info!(session_name = %session_name, "assuming IAM role via STS");

    let base_config = base_loader(config).load().await;

    let mut provider = aws_config::sts::AssumeRoleProvider::builder(role_arn)
        .session_name(session_name)
        .region(Region::new(config.region.clone()));
    if let Some(external_id) = &config.external_id {
        provider = provider.external_id(external_id);
    }
    let provider = provider.configure(&base_config).build().await;

    base_loader(config)
        .credentials_provider(provider)
        .load()
        .await
}
