use aws_sdk_wafregional::Client;
use aws_sdk_wafregional::error::{DisplayErrorContext, ProvideErrorMetadata};
use aws_sdk_wafregional::types::SubscribedRuleGroupSummary;
use tracing::{debug, error};
use waf_lookup_core::{Lister, Page, RuleGroupSummary};

use crate::auth::build_sdk_config;
use crate::config::WafLookupConfig;
use crate::error::{AwsListError, classify_sdk_error};
use crate::listing::page_from_parts;

/// Lists subscribed rule groups from WAF Classic Regional.
#[derive(Debug, Clone)]
pub struct WafRegionalLister {
    client: Client,
    page_size: Option<i32>,
}

impl WafRegionalLister {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            page_size: None,
        }
    }

    /// Build a lister from configuration, loading credentials and region.
    pub async fn connect(config: &WafLookupConfig) -> Result<Self, AwsListError> {
        config.validate()?;
        let sdk_config = build_sdk_config(config).await;
        let lister = Self::new(Client::new(&sdk_config));
        Ok(match config.page_size {
            Some(size) => lister.with_page_size(size),
            None => lister,
        })
    }

    #[must_use]
    pub fn with_page_size(mut self, page_size: i32) -> Self {
        self.page_size = Some(page_size);
        self
    }
}

fn to_summary(group: &SubscribedRuleGroupSummary) -> RuleGroupSummary {
    RuleGroupSummary::new(group.rule_group_id(), group.name(), group.metric_name())
}

impl Lister for WafRegionalLister {
    type Item = RuleGroupSummary;
    type Error = AwsListError;

    async fn list_page(
        &self,
        marker: Option<String>,
    ) -> Result<Page<RuleGroupSummary>, AwsListError> {
        debug!(scope = "regional", marker = ?marker, limit = ?self.page_size, "ListSubscribedRuleGroups");

        let output = self
            .client
            .list_subscribed_rule_groups()
            .set_next_marker(marker)
            .set_limit(self.page_size)
            .send()
            .await
            .map_err(|e| {
                let code = e.as_service_error().and_then(ProvideErrorMetadata::code);
                let err_str = DisplayErrorContext(&e).to_string();
                error!(error = %err_str, code = ?code, "list_subscribed_rule_groups failed");
                classify_sdk_error(code, &err_str)
            })?;

        let items = output.rule_groups().iter().map(to_summary).collect();
        Ok(page_from_parts(items, output.next_marker()))
    }
}
