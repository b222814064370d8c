//! Draft of a new budget entry
//!
//! Every field is kept as the raw text the user typed so partial numbers
//! like "12." or "" survive editing. Conversion happens at submission.

use std::fmt;
use std::str::FromStr;

use crate::error::DeskError;

/// Top-level text fields of a draft
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Department,
    Project,
    Period,
    Amount,
    Forecast,
    Notes,
}

impl DraftField {
    pub const ALL: [DraftField; 6] = [
        Self::Department,
        Self::Project,
        Self::Period,
        Self::Amount,
        Self::Forecast,
        Self::Notes,
    ];

    /// Wire/form name of the field
    pub fn name(&self) -> &'static str {
        match self {
            Self::Department => "department",
            Self::Project => "project",
            Self::Period => "period",
            Self::Amount => "amount",
            Self::Forecast => "forecast",
            Self::Notes => "notes",
        }
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, Self::Project | Self::Notes)
    }
}

impl FromStr for DraftField {
    type Err = DeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| DeskError::InvalidInput(format!("unknown draft field '{}'", s)))
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Fields of the nested scenario sub-object
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioField {
    Best,
    Worst,
    Expected,
}

impl ScenarioField {
    pub const ALL: [ScenarioField; 3] = [Self::Best, Self::Worst, Self::Expected];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Best => "best",
            Self::Worst => "worst",
            Self::Expected => "expected",
        }
    }
}

impl FromStr for ScenarioField {
    type Err = DeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| DeskError::InvalidInput(format!("unknown scenario field '{}'", s)))
    }
}

impl fmt::Display for ScenarioField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Scenario values as typed
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DraftScenarios {
    pub best: String,
    pub worst: String,
    pub expected: String,
}

impl DraftScenarios {
    pub fn get(&self, field: ScenarioField) -> &str {
        match field {
            ScenarioField::Best => &self.best,
            ScenarioField::Worst => &self.worst,
            ScenarioField::Expected => &self.expected,
        }
    }
}

/// In-progress new budget entry
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Draft {
    pub department: String,
    pub project: String,
    pub period: String,
    pub amount: String,
    pub forecast: String,
    pub scenarios: DraftScenarios,
    pub notes: String,
}

impl Draft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::Department => &self.department,
            DraftField::Project => &self.project,
            DraftField::Period => &self.period,
            DraftField::Amount => &self.amount,
            DraftField::Forecast => &self.forecast,
            DraftField::Notes => &self.notes,
        }
    }

    /// Replace one top-level field. No validation.
    pub fn set_field(&mut self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        match field {
            DraftField::Department => self.department = value,
            DraftField::Project => self.project = value,
            DraftField::Period => self.period = value,
            DraftField::Amount => self.amount = value,
            DraftField::Forecast => self.forecast = value,
            DraftField::Notes => self.notes = value,
        }
    }

    /// Replace one scenario value, leaving the other two alone
    pub fn set_scenario_field(&mut self, field: ScenarioField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ScenarioField::Best => self.scenarios.best = value,
            ScenarioField::Worst => self.scenarios.worst = value,
            ScenarioField::Expected => self.scenarios.expected = value,
        }
    }

    /// Back to the all-empty shape
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Names of required fields that are still blank.
    ///
    /// Used by the CLI and TUI to hold back submission; the draft itself
    /// accepts any content.
    pub fn missing_required(&self) -> Vec<&'static str> {
        let top = DraftField::ALL
            .into_iter()
            .filter(|f| f.is_required() && self.field(*f).trim().is_empty())
            .map(|f| f.name());
        let nested = ScenarioField::ALL
            .into_iter()
            .filter(|f| self.scenarios.get(*f).trim().is_empty())
            .map(|f| f.name());
        top.chain(nested).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_field_accepts_any_text() {
        let mut draft = Draft::new();
        draft.set_field(DraftField::Amount, "12.");
        draft.set_field(DraftField::Forecast, "abc");
        assert_eq!(draft.amount, "12.");
        assert_eq!(draft.forecast, "abc");
    }

    #[test]
    fn test_set_scenario_field_leaves_others() {
        let mut draft = Draft::new();
        draft.set_scenario_field(ScenarioField::Best, "600");
        draft.set_scenario_field(ScenarioField::Worst, "400");
        draft.set_scenario_field(ScenarioField::Best, "650");

        assert_eq!(draft.scenarios.best, "650");
        assert_eq!(draft.scenarios.worst, "400");
        assert_eq!(draft.scenarios.expected, "");
    }

    #[test]
    fn test_reset() {
        let mut draft = Draft::new();
        draft.set_field(DraftField::Department, "IT");
        draft.set_scenario_field(ScenarioField::Expected, "1");
        assert!(!draft.is_empty());

        draft.reset();
        assert!(draft.is_empty());
        assert_eq!(draft.scenarios, DraftScenarios::default());
    }

    #[test]
    fn test_field_names_parse() {
        assert_eq!("notes".parse::<DraftField>().unwrap(), DraftField::Notes);
        assert_eq!("worst".parse::<ScenarioField>().unwrap(), ScenarioField::Worst);
        assert!("variance".parse::<DraftField>().is_err());
    }

    #[test]
    fn test_missing_required() {
        let mut draft = Draft::new();
        assert_eq!(
            draft.missing_required(),
            vec!["department", "period", "amount", "forecast", "best", "worst", "expected"]
        );

        draft.set_field(DraftField::Department, "IT");
        draft.set_field(DraftField::Period, "2024-Q2");
        draft.set_field(DraftField::Amount, "500");
        draft.set_field(DraftField::Forecast, "  ");
        draft.set_scenario_field(ScenarioField::Best, "600");
        assert_eq!(draft.missing_required(), vec!["forecast", "worst", "expected"]);
    }
}
