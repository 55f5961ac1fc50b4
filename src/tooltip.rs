//! Tooltip construction from one block's stats.

use crate::element::{build_element, Element};
use crate::report::BlockStats;
use crate::status::{passing_status, stage_status, StatusError};

/// Build the tooltip element for one block.
///
/// Output ordering is always title, then the design/verification pair when
/// both stages are present, then the test pass-rate pair when both counts
/// are non-zero. A classifier failure aborts the whole tooltip.
pub fn build_tooltip(stats: &BlockStats) -> Result<Element, StatusError> {
    let mut children = vec![build_element(
        "p",
        "tooltip-title",
        &format!("{} v{}", stats.name, stats.version),
    )];

    if stats.has_stages() {
        let design = stats.design_stage.as_deref().unwrap_or_default();
        let verification = stats.verification_stage.as_deref().unwrap_or_default();
        let design_status = stage_status(design)?;
        let verification_status = stage_status(verification)?;

        children.push(build_element(
            "span",
            &status_classes("value status", design_status),
            design,
        ));
        children.push(build_element("span", "label", "design"));
        children.push(build_element(
            "span",
            &status_classes("value status", verification_status),
            verification,
        ));
        children.push(build_element("span", "label", "verification"));
    }

    if stats.has_test_counts() {
        let runs = stats.total_runs.unwrap_or_default();
        let passing_runs = stats.total_passing.unwrap_or_default();
        // Integer percentage, truncated toward zero. Widen to u128 so
        // extreme counts cannot overflow; a quotient beyond i64 is far
        // above 100 and saturates into the classifier's rejection range.
        let percentage = 100u128 * u128::from(passing_runs) / u128::from(runs);
        let passing = i64::try_from(percentage).unwrap_or(i64::MAX);
        let passing_class = passing_status(passing)?;

        children.push(build_element("hr", "", ""));
        children.push(build_element("span", "value", &runs.to_string()));
        children.push(build_element("span", "label", "tests"));
        children.push(build_element(
            "span",
            &status_classes("value percentage", passing_class),
            &format!("{}%", passing),
        ));
        children.push(build_element("span", "label", "passing"));
    }

    let mut tooltip = Element::new("div");
    tooltip.classes = "tooltip".to_string();
    for child in children {
        tooltip.append_child(child);
    }
    Ok(tooltip)
}

fn status_classes(base: &str, status: &str) -> String {
    if status.is_empty() {
        base.to_string()
    } else {
        format!("{} {}", base, status)
    }
}
