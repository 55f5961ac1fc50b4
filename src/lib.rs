//! Tooltip generation for documentation block diagrams.
//!
//! Fetches a JSON stats report mapping block ids to per-block design,
//! verification and test statistics, and attaches a summary tooltip
//! element to each block of the diagram.

pub mod element;
pub mod loader;
pub mod logging;
pub mod report;
pub mod status;
pub mod tooltip;

pub use element::{build_element, Element};
pub use loader::{attach_tooltips, load_tooltips, StatsClient};
pub use report::{parse_report, BlockStats, StatsReport};
pub use status::{passing_status, stage_status, StatusError};
pub use tooltip::build_tooltip;
