//! waf-lookup CLI
//!
//! Resolves a subscribed AWS WAF Classic rule group by name and/or metric
//! name and prints its identifier.

mod config;
mod output;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};
use waf_lookup_aws::{ScopedLister, WafScope};
use waf_lookup_core::{MemoryLister, ResolveError, RuleGroupSummary, resolve};

use crate::config::{FileConfig, Overrides};

/// Look up a subscribed WAF Classic rule group.
#[derive(Parser, Debug)]
#[command(name = "waf-lookup", version, about)]
struct Cli {
    /// Exact rule group name.
    #[arg(long, env = "WAF_LOOKUP_NAME")]
    name: Option<String>,

    /// Exact rule group metric name.
    #[arg(long, env = "WAF_LOOKUP_METRIC_NAME")]
    metric_name: Option<String>,

    /// WAF Classic scope: `global` or `regional`.
    #[arg(long, env = "WAF_LOOKUP_SCOPE")]
    scope: Option<WafScope>,

    /// AWS region.
    #[arg(long, env = "WAF_LOOKUP_REGION")]
    region: Option<String>,

    /// Endpoint URL override (e.g. `LocalStack`).
    #[arg(long, env = "WAF_LOOKUP_ENDPOINT_URL")]
    endpoint_url: Option<String>,

    /// IAM role ARN to assume via STS.
    #[arg(long, env = "WAF_LOOKUP_ROLE_ARN")]
    role_arn: Option<String>,

    /// Rule groups requested per page.
    #[arg(
        long,
        env = "WAF_LOOKUP_PAGE_SIZE",
        value_parser = clap::value_parser!(i32).range(1..=100)
    )]
    page_size: Option<i32>,

    /// TOML configuration file.
    #[arg(long, short, env = "WAF_LOOKUP_CONFIG")]
    config: Option<PathBuf>,

    /// Resolve against a JSON file of pages instead of calling AWS.
    #[arg(long)]
    pages_file: Option<PathBuf>,

    /// Exit successfully with no output when the rule group does not exist.
    #[arg(long)]
    allow_missing: bool,

    /// Output format.
    #[arg(long, default_value = "text")]
    format: OutputFormat,
}

#[derive(Debug, Clone, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            name: self.name.clone(),
            metric_name: self.metric_name.clone(),
            scope: self.scope,
            region: self.region.clone(),
            endpoint_url: self.endpoint_url.clone(),
            role_arn: self.role_arn.clone(),
            page_size: self.page_size,
        }
    }
}

/// Load a fixture of the form `[[{"rule_group_id": ..., "name": ..., "metric_name": ...}], ...]`,
/// one inner array per page.
fn load_pages(path: &Path) -> anyhow::Result<MemoryLister<RuleGroupSummary>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read pages file {}", path.display()))?;
    let pages: Vec<Vec<RuleGroupSummary>> = serde_json::from_str(&contents)
        .with_context(|| format!("invalid pages file {}", path.display()))?;
    Ok(MemoryLister::new(pages))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let file = match &cli.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };
    let (aws, predicate) = file.merge(cli.overrides());

    predicate.validate()?;

    let result: Result<RuleGroupSummary, ResolveError> = match &cli.pages_file {
        Some(path) => {
            let lister = load_pages(path)?;
            resolve(&predicate, &lister).await
        }
        None => {
            let lister = ScopedLister::connect(&aws).await?;
            resolve(&predicate, &lister).await
        }
    };

    match result {
        Ok(group) => {
            println!("{}", output::render(&group, &cli.format)?);
            Ok(())
        }
        Err(e) if cli.allow_missing && e.is_not_found() => {
            info!(error = %e, "rule group absent, nothing to print");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
