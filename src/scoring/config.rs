use serde::{Deserialize, Serialize};

/// How several framework answers in the same category combine.
///
/// Example YAML:
/// ```yaml
/// framework_aggregation: mean
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameworkAggregation {
    /// Each answer overwrites its category's score; the most recent answer wins
    #[default]
    LastWrite,
    /// Average all answers in a category
    Mean,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_last_write() {
        assert_eq!(FrameworkAggregation::default(), FrameworkAggregation::LastWrite);
    }

    #[test]
    fn test_parse_from_yaml() {
        let mode: FrameworkAggregation = serde_saphyr::from_str("mean").unwrap();
        assert_eq!(mode, FrameworkAggregation::Mean);
        let mode: FrameworkAggregation = serde_saphyr::from_str("last_write").unwrap();
        assert_eq!(mode, FrameworkAggregation::LastWrite);
    }
}
