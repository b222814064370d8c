//! Budget entry model
//!
//! A budget entry is owned by the remote service; the client only reads
//! it and never edits it in place.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier assigned by the budget service
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct BudgetId(String);

impl BudgetId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BudgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Best/worst/expected projections attached to an entry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Scenarios {
    pub best: f64,
    pub worst: f64,
    pub expected: f64,
}

/// One department/project/period budget record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BudgetRecord")]
pub struct Budget {
    #[serde(rename = "_id")]
    pub id: BudgetId,

    pub department: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,

    /// Free-form fiscal period label, e.g. "2024-Q2"
    pub period: String,

    pub amount: f64,

    pub forecast: f64,

    pub scenarios: Scenarios,

    pub actual: f64,

    /// Signed deviation; negative is favorable
    pub variance: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Prior revisions, carried through untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history: Option<Vec<serde_json::Value>>,
}

/// Wire form of a budget. Servers may send `_id`, `id` or both; `_id` wins.
#[derive(Deserialize)]
struct BudgetRecord {
    #[serde(rename = "_id", default)]
    underscore_id: Option<BudgetId>,
    #[serde(default)]
    id: Option<BudgetId>,
    department: String,
    #[serde(default)]
    project: Option<String>,
    period: String,
    amount: f64,
    forecast: f64,
    scenarios: Scenarios,
    actual: f64,
    variance: f64,
    #[serde(default)]
    notes: Option<String>,
    #[serde(default)]
    history: Option<Vec<serde_json::Value>>,
}

impl TryFrom<BudgetRecord> for Budget {
    type Error = String;

    fn try_from(record: BudgetRecord) -> Result<Self, Self::Error> {
        let id = record
            .underscore_id
            .or(record.id)
            .ok_or_else(|| "missing field `_id`".to_string())?;

        Ok(Self {
            id,
            department: record.department,
            project: record.project,
            period: record.period,
            amount: record.amount,
            forecast: record.forecast,
            scenarios: record.scenarios,
            actual: record.actual,
            variance: record.variance,
            notes: record.notes,
            history: record.history,
        })
    }
}

impl Budget {
    /// Project name, or the empty string when absent
    pub fn project_or_empty(&self) -> &str {
        self.project.as_deref().unwrap_or("")
    }

    pub fn variance_tone(&self) -> VarianceTone {
        VarianceTone::from_variance(self.variance)
    }
}

/// How a variance figure should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarianceTone {
    /// Under budget (negative variance)
    Favorable,
    /// Over budget (positive variance)
    Unfavorable,
    /// Exactly on budget, or not a number
    Neutral,
}

impl VarianceTone {
    pub fn from_variance(variance: f64) -> Self {
        if variance < 0.0 {
            Self::Favorable
        } else if variance > 0.0 {
            Self::Unfavorable
        } else {
            Self::Neutral
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Favorable => "favorable",
            Self::Unfavorable => "unfavorable",
            Self::Neutral => "neutral",
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// Build a budget with scenarios derived from the amount
    pub fn budget(id: &str, department: &str, project: Option<&str>, period: &str, amount: f64) -> Budget {
        Budget {
            id: BudgetId::new(id),
            department: department.to_string(),
            project: project.map(str::to_string),
            period: period.to_string(),
            amount,
            forecast: amount * 0.95,
            scenarios: Scenarios {
                best: amount * 1.1,
                worst: amount * 0.8,
                expected: amount * 0.95,
            },
            actual: amount * 0.9,
            variance: -amount * 0.1,
            notes: None,
            history: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_wire_format() {
        let json = r#"{
            "_id": "65f1c0ffee",
            "department": "Ops",
            "period": "2024-Q1",
            "amount": 1000,
            "actual": 900,
            "variance": -100,
            "forecast": 950,
            "scenarios": {"best": 1100, "worst": 800, "expected": 950},
            "history": [{"amount": 800}]
        }"#;

        let budget: Budget = serde_json::from_str(json).unwrap();
        assert_eq!(budget.id.as_str(), "65f1c0ffee");
        assert_eq!(budget.project, None);
        assert_eq!(budget.project_or_empty(), "");
        assert_eq!(budget.scenarios.worst, 800.0);
        assert_eq!(budget.history.as_ref().map(Vec::len), Some(1));
        assert_eq!(budget.variance_tone(), VarianceTone::Favorable);
    }

    #[test]
    fn test_plain_id_alias() {
        let json = r#"{"id":"7","department":"IT","period":"2024-Q2","amount":1,
            "actual":1,"variance":0,"forecast":1,
            "scenarios":{"best":1,"worst":1,"expected":1}}"#;
        let budget: Budget = serde_json::from_str(json).unwrap();
        assert_eq!(budget.id, BudgetId::new("7"));
    }

    #[test]
    fn test_both_id_keys_prefer_underscore() {
        let json = r#"{"_id":"65f1","id":"virtual","department":"Ops","period":"2024-Q1",
            "amount":1,"actual":1,"variance":0,"forecast":1,
            "scenarios":{"best":1,"worst":1,"expected":1}}"#;
        let budget: Budget = serde_json::from_str(json).unwrap();
        assert_eq!(budget.id, BudgetId::new("65f1"));

        let round = serde_json::to_value(&budget).unwrap();
        assert_eq!(round["_id"], "65f1");
        assert!(round.get("id").is_none());
    }

    #[test]
    fn test_missing_id_rejected() {
        let json = r#"{"department":"Ops","period":"2024-Q1","amount":1,"actual":1,
            "variance":0,"forecast":1,"scenarios":{"best":1,"worst":1,"expected":1}}"#;
        let err = serde_json::from_str::<Budget>(json).unwrap_err();
        assert!(err.to_string().contains("_id"));
    }

    #[test]
    fn test_missing_scenarios_rejected() {
        let json = r#"{"_id":"1","department":"IT","period":"2024-Q2","amount":1,
            "actual":1,"variance":0,"forecast":1}"#;
        assert!(serde_json::from_str::<Budget>(json).is_err());
    }

    #[test]
    fn test_variance_tone() {
        assert_eq!(VarianceTone::from_variance(-0.01), VarianceTone::Favorable);
        assert_eq!(VarianceTone::from_variance(25.0), VarianceTone::Unfavorable);
        assert_eq!(VarianceTone::from_variance(0.0), VarianceTone::Neutral);
        assert_eq!(VarianceTone::from_variance(f64::NAN), VarianceTone::Neutral);
    }
}
