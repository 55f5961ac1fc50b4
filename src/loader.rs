//! Stats loader: fetch the report and attach tooltips to blocks.

use anyhow::{anyhow, Result};
use reqwest::Client;
use serde_json::json;

use crate::element::Element;
use crate::logging::{json_log, obj, v_str};
use crate::report::StatsReport;
use crate::tooltip::build_tooltip;

pub struct StatsClient {
    client: Client,
}

impl StatsClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Single GET for the stats report.
    ///
    /// The body is parsed as JSON regardless of HTTP status; there is no
    /// timeout, retry or cancellation. Malformed JSON is an error.
    pub async fn fetch_report(&self, url: &str) -> Result<StatsReport> {
        let resp = self.client.get(url).send().await?;
        let report: StatsReport = resp.json().await?;
        Ok(report)
    }
}

impl Default for StatsClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Append one generated tooltip to each block.
///
/// Every block id must have a report entry; a missing entry aborts the
/// remaining blocks. Not idempotent: a second call appends a second tooltip.
pub fn attach_tooltips(report: &StatsReport, blocks: &mut [Element]) -> Result<()> {
    for block in blocks.iter_mut() {
        let stats = report
            .get(&block.id)
            .ok_or_else(|| anyhow!("no stats entry for block \"{}\"", block.id))?;
        let tooltip = build_tooltip(stats)?;
        block.append_child(tooltip);
        json_log(
            "tooltips",
            obj(&[("event", v_str("attached")), ("block", v_str(&block.id))]),
        );
    }
    Ok(())
}

/// Fetch the stats report for a block diagram and add tooltips to its blocks.
pub async fn load_tooltips(stats_url: &str, blocks: &mut [Element]) -> Result<()> {
    let client = StatsClient::new();
    let report = client.fetch_report(stats_url).await?;
    json_log(
        "tooltips",
        obj(&[
            ("event", v_str("report_fetched")),
            ("url", v_str(stats_url)),
            ("entries", json!(report.len())),
        ]),
    );
    attach_tooltips(&report, blocks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::parse_report;

    const REPORT: &str = r#"{
        "blk0": {"name": "uart", "version": "1.0"},
        "blk1": {"name": "spi", "version": "0.5"}
    }"#;

    #[test]
    fn attach_appends_one_tooltip_per_block() {
        let report = parse_report(REPORT).expect("report parses");
        let mut blocks = vec![
            Element::with_id("div", "blk0"),
            Element::with_id("div", "blk1"),
        ];
        attach_tooltips(&report, &mut blocks).expect("attach");
        assert_eq!(blocks[0].child_count(), 1);
        assert_eq!(blocks[1].child_count(), 1);
        assert_eq!(blocks[0].children[0].classes, "tooltip");
    }

    #[test]
    fn attach_is_not_idempotent() {
        let report = parse_report(REPORT).expect("report parses");
        let mut blocks = vec![Element::with_id("div", "blk0")];
        attach_tooltips(&report, &mut blocks).expect("first attach");
        attach_tooltips(&report, &mut blocks).expect("second attach");
        assert_eq!(blocks[0].child_count(), 2);
    }

    #[test]
    fn missing_entry_aborts_remaining_blocks() {
        let report = parse_report(REPORT).expect("report parses");
        let mut blocks = vec![
            Element::with_id("div", "nonesuch"),
            Element::with_id("div", "blk0"),
        ];
        let result = attach_tooltips(&report, &mut blocks);
        assert!(result.is_err());
        assert_eq!(blocks[1].child_count(), 0);
    }
}
