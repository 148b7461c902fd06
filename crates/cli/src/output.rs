use waf_lookup_core::RuleGroupSummary;

use crate::OutputFormat;

pub fn render(group: &RuleGroupSummary, format: &OutputFormat) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Json => serde_json::to_string_pretty(group)?,
        OutputFormat::Text => format!(
            "id:          {}\nname:        {}\nmetric_name: {}",
            group.rule_group_id, group.name, group.metric_name
        ),
    })
}
