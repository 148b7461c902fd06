//! Layered configuration: defaults, then an optional TOML file, then flags
//! and environment variables.
//!
//! ```toml
//! [aws]
//! region = "eu-west-1"
//! scope = "regional"
//! page_size = 50
//!
//! [lookup]
//! name = "Fortinet Managed Rules for AWS WAF - Complete OWASP Top 10"
//! ```

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
use waf_lookup_aws::{WafLookupConfig, WafScope};
use waf_lookup_core::Predicate;

/// Contents of a `--config` file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub aws: WafLookupConfig,

    #[serde(default)]
    pub lookup: Predicate,
}

impl FileConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::parse(&contents).with_context(|| format!("invalid config file {}", path.display()))
    }

    pub fn parse(contents: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Apply command-line overrides on top of the file values.
    pub fn merge(self, overrides: Overrides) -> (WafLookupConfig, Predicate) {
        let Self { mut aws, mut lookup } = self;

        if let Some(region) = overrides.region {
            aws.region = region;
        }
        if let Some(scope) = overrides.scope {
            aws.scope = scope;
        }
        if overrides.endpoint_url.is_some() {
            aws.endpoint_url = overrides.endpoint_url;
        }
        if overrides.role_arn.is_some() {
            aws.role_arn = overrides.role_arn;
        }
        if overrides.page_size.is_some() {
            aws.page_size = overrides.page_size;
        }
        if overrides.name.is_some() {
            lookup.name = overrides.name;
        }
        if overrides.metric_name.is_some() {
            lookup.metric_name = overrides.metric_name;
        }

        (aws, lookup)
    }
}

/// Values given on the command line or through `WAF_LOOKUP_*` variables.
#[derive(Debug, Default)]
pub struct Overrides {
    pub name: Option<String>,
    pub metric_name: Option<String>,
    pub scope: Option<WafScope>,
    pub region: Option<String>,
    pub endpoint_url: Option<String>,
    pub role_arn: Option<String>,
    pub page_size: Option<i32>,
}
