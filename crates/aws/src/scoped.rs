use tracing::info;
use waf_lookup_core::{Lister, Page, RuleGroupSummary};

use crate::config::{WafLookupConfig, WafScope};
use crate::error::AwsListError;
use crate::global::WafLister;
use crate::regional::WafRegionalLister;

/// Lister for whichever WAF Classic scope the configuration selects.
#[derive(Debug, Clone)]
pub enum ScopedLister {
    Global(WafLister),
    Regional(WafRegionalLister),
}

impl ScopedLister {
    pub async fn connect(config: &WafLookupConfig) -> Result<Self, AwsListError> {
        info!(scope = %config.scope, region = %config.region, "connecting to WAF Classic");
        match config.scope {
            WafScope::Global => WafLister::connect(config).await.map(Self::Global),
            WafScope::Regional => WafRegionalLister::connect(config).await.map(Self::Regional),
        }
    }

    pub fn scope(&self) -> WafScope {
        match self {
            Self::Global(_) => WafScope::Global,
            Self::Regional(_) => WafScope::Regional,
        }
    }
}

impl Lister for ScopedLister {
    type Item = RuleGroupSummary;
    type Error = AwsListError;

    async fn list_page(
        &self,
        marker: Option<String>,
    ) -> Result<Page<RuleGroupSummary>, AwsListError> {
        match self {
            Self::Global(lister) => lister.list_page(marker).await,
            Self::Regional(lister) => lister.list_page(marker).await,
        }
    }
}
