//! Create-budget request payload
//!
//! Built from a [`Draft`] at submission time. Numeric text is converted
//! with the same rules a browser applies to `Number(text)`; text that is
//! not a number becomes NaN and is sent as JSON `null`.

use serde::Serialize;
use tracing::warn;

use super::draft::Draft;

/// Scenario figures in a create request
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScenarioPayload {
    pub best: f64,
    pub worst: f64,
    pub expected: f64,
}

/// Body of `POST /api/budgets`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateBudgetRequest {
    pub department: String,
    pub project: String,
    pub period: String,
    pub amount: f64,
    pub forecast: f64,
    pub scenarios: ScenarioPayload,
    pub notes: String,
}

impl CreateBudgetRequest {
    pub fn from_draft(draft: &Draft) -> Self {
        let request = Self {
            department: draft.department.clone(),
            project: draft.project.clone(),
            period: draft.period.clone(),
            amount: coerce_number(&draft.amount),
            forecast: coerce_number(&draft.forecast),
            scenarios: ScenarioPayload {
                best: coerce_number(&draft.scenarios.best),
                worst: coerce_number(&draft.scenarios.worst),
                expected: coerce_number(&draft.scenarios.expected),
            },
            notes: draft.notes.clone(),
        };

        let invalid = request.non_finite_fields();
        if !invalid.is_empty() {
            warn!(fields = ?invalid, "draft has non-numeric values; forwarding to server as-is");
        }

        request
    }

    /// Names of numeric fields that did not coerce to a finite number
    pub fn non_finite_fields(&self) -> Vec<&'static str> {
        [
            ("amount", self.amount),
            ("forecast", self.forecast),
            ("best", self.scenarios.best),
            ("worst", self.scenarios.worst),
            ("expected", self.scenarios.expected),
        ]
        .into_iter()
        .filter(|(_, value)| !value.is_finite())
        .map(|(name, _)| name)
        .collect()
    }
}

/// Convert form text to a number the way `Number(text)` does.
///
/// Blank text is 0, surrounding whitespace is ignored, `Infinity` and
/// `0x`/`0o`/`0b` integer literals are accepted, everything else that is
/// not a decimal literal is NaN.
pub fn coerce_number(text: &str) -> f64 {
    let trimmed = text.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    if trimmed.is_empty() {
        return 0.0;
    }

    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    let radix = match trimmed.get(..2) {
        Some("0x") | Some("0X") => Some(16),
        Some("0o") | Some("0O") => Some(8),
        Some("0b") | Some("0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return parse_radix(&trimmed[2..], radix);
    }

    let is_decimal_literal = trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'));
    if !is_decimal_literal {
        return f64::NAN;
    }

    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

fn parse_radix(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    digits
        .chars()
        .try_fold(0.0_f64, |acc, c| {
            c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
        })
        .unwrap_or(f64::NAN)
}
