use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

pub const ALL: &str = "all";

/// Equality constraint on a single session field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FilterValue {
    #[default]
    All,
    Exact(String),
}

impl FilterValue {
    pub fn exact(value: impl Into<String>) -> Self {
        FilterValue::Exact(value.into())
    }

    pub fn is_all(&self) -> bool {
        matches!(self, FilterValue::All)
    }

    pub fn matches(&self, value: &str) -> bool {
        match self {
            FilterValue::All => true,
            FilterValue::Exact(expected) => expected == value,
        }
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        if value == ALL {
            FilterValue::All
        } else {
            FilterValue::Exact(value)
        }
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::from(value.to_owned())
    }
}

impl From<FilterValue> for String {
    fn from(value: FilterValue) -> Self {
        match value {
            FilterValue::All => ALL.to_owned(),
            FilterValue::Exact(value) => value,
        }
    }
}

impl FromStr for FilterValue {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(FilterValue::from(s))
    }
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterValue::All => f.write_str(ALL),
            FilterValue::Exact(value) => f.write_str(value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterSelection {
    #[serde(default)]
    pub trainer: FilterValue,
    #[serde(default)]
    pub location: FilterValue,
    #[serde(default)]
    pub group: FilterValue,
}

impl FilterSelection {
    pub fn trainer(mut self, trainer: impl Into<FilterValue>) -> Self {
        self.trainer = trainer.into();
        self
    }

    pub fn location(mut self, location: impl Into<FilterValue>) -> Self {
        self.location = location.into();
        self
    }

    pub fn group(mut self, group: impl Into<FilterValue>) -> Self {
        self.group = group.into();
        self
    }

    /// True when no field is constrained.
    pub fn is_empty(&self) -> bool {
        self.trainer.is_all() && self.location.is_all() && self.group.is_all()
    }

    pub fn reset(&mut self) {
        *self = FilterSelection::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel() {
        assert_eq!(FilterValue::from("all"), FilterValue::All);
        assert_eq!(FilterValue::from("All"), FilterValue::exact("All"));
        assert_eq!(FilterValue::All.to_string(), "all");
        assert!(FilterValue::All.matches("anything"));
        assert!(FilterValue::exact("Anna").matches("Anna"));
        assert!(!FilterValue::exact("Anna").matches("anna"));
    }

    #[test]
    fn test_selection_builder() {
        let mut selection = FilterSelection::default().trainer("Anna").group("all");
        assert!(!selection.is_empty());
        assert!(selection.group.is_all());
        selection.reset();
        assert!(selection.is_empty());
    }

    #[test]
    fn test_selection_json() {
        let selection: FilterSelection =
            serde_json::from_str(r#"{"trainer":"all","location":"Pool 1"}"#).unwrap();
        assert_eq!(selection.trainer, FilterValue::All);
        assert_eq!(selection.location, FilterValue::exact("Pool 1"));
        assert_eq!(selection.group, FilterValue::All);
        let json = serde_json::to_string(&selection).unwrap();
        assert_eq!(json, r#"{"trainer":"all","location":"Pool 1","group":"all"}"#);
    }
}
