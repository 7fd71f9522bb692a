pub mod catalog;
pub mod inspect;
pub mod simulate;

use malady_core::{BodyRegion, ConditionKind};

/// Look up a condition key, turning the error into a CLI message.
fn parse_kind(key: &str) -> Result<ConditionKind, String> {
    ConditionKind::from_key(key).map_err(|e| e.to_string())
}

/// Region column text: the region key, or "whole body".
fn region_cell(region: Option<BodyRegion>) -> String {
    region.map_or_else(|| "whole body".to_string(), |r| r.key().to_string())
}
