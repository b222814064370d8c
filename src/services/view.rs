//! Search and sort over the fetched collection
//!
//! Pure functions: the input slice is never modified and the same inputs
//! always give the same view.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::DeskError;
use crate::models::Budget;

/// Column the view is ordered by. Always ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    None,
    Department,
    Project,
    Period,
    Amount,
    Actual,
    Variance,
    Forecast,
}

/// Typed read access to the value a sort key orders by
#[derive(Clone, Copy)]
pub enum SortAccessor {
    Text(fn(&Budget) -> &str),
    Number(fn(&Budget) -> f64),
}

impl SortKey {
    pub const ALL: [SortKey; 8] = [
        Self::None,
        Self::Department,
        Self::Project,
        Self::Period,
        Self::Amount,
        Self::Actual,
        Self::Variance,
        Self::Forecast,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Department => "department",
            Self::Project => "project",
            Self::Period => "period",
            Self::Amount => "amount",
            Self::Actual => "actual",
            Self::Variance => "variance",
            Self::Forecast => "forecast",
        }
    }

    /// Accessor for this key; `None` leaves the order untouched
    pub fn accessor(&self) -> Option<SortAccessor> {
        let accessor = match self {
            Self::None => return None,
            Self::Department => SortAccessor::Text(|b| b.department.as_str()),
            Self::Project => SortAccessor::Text(Budget::project_or_empty),
            Self::Period => SortAccessor::Text(|b| b.period.as_str()),
            Self::Amount => SortAccessor::Number(|b| b.amount),
            Self::Actual => SortAccessor::Number(|b| b.actual),
            Self::Variance => SortAccessor::Number(|b| b.variance),
            Self::Forecast => SortAccessor::Number(|b| b.forecast),
        };
        Some(accessor)
    }

    /// Next key in column order, wrapping back to `None`
    pub fn cycle(&self) -> Self {
        let index = Self::ALL.iter().position(|k| k == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }
}

impl SortAccessor {
    pub fn compare(&self, a: &Budget, b: &Budget) -> Ordering {
        match self {
            Self::Text(get) => get(a).to_lowercase().cmp(&get(b).to_lowercase()),
            Self::Number(get) => get(a).total_cmp(&get(b)),
        }
    }
}

impl FromStr for SortKey {
    type Err = DeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        if wanted.is_empty() {
            return Ok(Self::None);
        }
        Self::ALL
            .into_iter()
            .find(|key| key.name() == wanted)
            .ok_or_else(|| {
                DeskError::InvalidInput(format!(
                    "unknown sort key '{}' (expected one of: {})",
                    s,
                    Self::ALL.map(|k| k.name()).join(", ")
                ))
            })
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// True when the lowercased needle occurs in department, project or period
fn matches_search(budget: &Budget, needle: &str) -> bool {
    budget.department.to_lowercase().contains(needle)
        || budget.project_or_empty().to_lowercase().contains(needle)
        || budget.period.to_lowercase().contains(needle)
}

/// Filter by search text, then order by the sort key.
///
/// The search text is trimmed and matched case-insensitively as a plain
/// substring. Sorting is stable, so entries that compare equal keep their
/// fetched order.
pub fn filter_and_sort(budgets: &[Budget], search: &str, sort_key: SortKey) -> Vec<Budget> {
    let needle = search.trim().to_lowercase();

    let mut view: Vec<Budget> = if needle.is_empty() {
        budgets.to_vec()
    } else {
        budgets
            .iter()
            .filter(|b| matches_search(b, &needle))
            .cloned()
            .collect()
    };

    if let Some(accessor) = sort_key.accessor() {
        view.sort_by(|a, b| accessor.compare(a, b));
    }

    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::budget::fixtures::budget;

    fn sample() -> Vec<Budget> {
        vec![
            budget("1", "Ops", None, "2024-Q1", 1000.0),
            budget("2", "it", Some("Cloud Migration"), "2024-Q2", 500.0),
            budget("3", "Marketing", Some("Launch"), "2023-Q4", 750.0),
            budget("4", "IT", Some("helpdesk"), "2024-Q1", 250.0),
            budget("5", "Finance", None, "2024-Q3", 500.0),
        ]
    }

    #[test]
    fn test_empty_search_keeps_everything() {
        let budgets = sample();
        for key in SortKey::ALL {
            let view = filter_and_sort(&budgets, "", key);
            assert_eq!(view.len(), budgets.len());
            for b in &budgets {
                assert!(view.contains(b));
            }
        }
        assert_eq!(filter_and_sort(&budgets, "   ", SortKey::None), budgets);
    }

    #[test]
    fn test_search_partitions_collection() {
        let budgets = sample();
        for search in ["it", "2024-q1", "LAUNCH", "o", "zzz", " cloud "] {
            let view = filter_and_sort(&budgets, search, SortKey::None);
            let needle = search.trim().to_lowercase();
            for b in &budgets {
                assert_eq!(view.contains(b), matches_search(b, &needle), "search {:?}", search);
            }
        }
    }

    #[test]
    fn test_search_matches_project_and_period() {
        let budgets = sample();
        let by_project = filter_and_sort(&budgets, "helpdesk", SortKey::None);
        assert_eq!(by_project.len(), 1);
        assert_eq!(by_project[0].id.as_str(), "4");

        let by_period = filter_and_sort(&budgets, "2023", SortKey::None);
        assert_eq!(by_period.len(), 1);
        assert_eq!(by_period[0].department, "Marketing");
    }

    #[test]
    fn test_ops_scenario() {
        let budgets = vec![budget("1", "Ops", None, "2024-Q1", 1000.0)];
        let view = filter_and_sort(&budgets, "ops", SortKey::None);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].variance, -100.0);
        assert_eq!(view[0].variance_tone(), crate::models::VarianceTone::Favorable);
    }

    #[test]
    fn test_text_sort_is_case_insensitive_and_stable() {
        let view = filter_and_sort(&sample(), "", SortKey::Department);
        let ids: Vec<_> = view.iter().map(|b| b.id.as_str()).collect();
        // "it" and "IT" compare equal and keep fetched order
        assert_eq!(ids, vec!["5", "2", "4", "3", "1"]);
    }

    #[test]
    fn test_numeric_sort_ascending_and_stable() {
        let view = filter_and_sort(&sample(), "", SortKey::Amount);
        let ids: Vec<_> = view.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["4", "2", "5", "3", "1"]);
    }

    #[test]
    fn test_missing_project_sorts_first() {
        let view = filter_and_sort(&sample(), "", SortKey::Project);
        let ids: Vec<_> = view.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "5", "2", "4", "3"]);
    }

    #[test]
    fn test_sort_is_idempotent() {
        let budgets = sample();
        for key in SortKey::ALL {
            for search in ["", "it", "2024"] {
                let once = filter_and_sort(&budgets, search, key);
                let twice = filter_and_sort(&once, search, key);
                assert_eq!(once, twice);
            }
        }
    }

    #[test]
    fn test_input_untouched() {
        let budgets = sample();
        let before = budgets.clone();
        let _ = filter_and_sort(&budgets, "it", SortKey::Variance);
        assert_eq!(budgets, before);
    }

    #[test]
    fn test_nan_values_do_not_break_sort() {
        let mut budgets = sample();
        budgets[2].variance = f64::NAN;
        let view = filter_and_sort(&budgets, "", SortKey::Variance);
        assert_eq!(view.len(), budgets.len());
    }

    #[test]
    fn test_sort_key_parse_and_cycle() {
        assert_eq!("Variance".parse::<SortKey>().unwrap(), SortKey::Variance);
        assert_eq!("".parse::<SortKey>().unwrap(), SortKey::None);
        assert!("notes".parse::<SortKey>().is_err());

        assert_eq!(SortKey::None.cycle(), SortKey::Department);
        assert_eq!(SortKey::Forecast.cycle(), SortKey::None);
    }
}
