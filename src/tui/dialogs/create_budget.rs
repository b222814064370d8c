//! Create budget dialog
//!
//! Modal form over the shared draft: tab navigation, required-field
//! markers, submit and cancel. Field values live in the draft; the form
//! only tracks focus and the last validation message.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::{Draft, DraftField, ScenarioField};
use crate::state::AppState;
use crate::tui::app::App;
use crate::tui::layout::centered_rect;

/// Which field is currently focused in the create form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Department,
    Project,
    Period,
    Amount,
    Forecast,
    Best,
    Worst,
    Expected,
    Notes,
}

/// Where a form field's text is stored in the draft
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldTarget {
    Draft(DraftField),
    Scenario(ScenarioField),
}

impl FormField {
    pub const ALL: [FormField; 9] = [
        Self::Department,
        Self::Project,
        Self::Period,
        Self::Amount,
        Self::Forecast,
        Self::Best,
        Self::Worst,
        Self::Expected,
        Self::Notes,
    ];

    fn index(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn target(self) -> FieldTarget {
        match self {
            Self::Department => FieldTarget::Draft(DraftField::Department),
            Self::Project => FieldTarget::Draft(DraftField::Project),
            Self::Period => FieldTarget::Draft(DraftField::Period),
            Self::Amount => FieldTarget::Draft(DraftField::Amount),
            Self::Forecast => FieldTarget::Draft(DraftField::Forecast),
            Self::Best => FieldTarget::Scenario(ScenarioField::Best),
            Self::Worst => FieldTarget::Scenario(ScenarioField::Worst),
            Self::Expected => FieldTarget::Scenario(ScenarioField::Expected),
            Self::Notes => FieldTarget::Draft(DraftField::Notes),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Department => "Department",
            Self::Project => "Project",
            Self::Period => "Period",
            Self::Amount => "Budgeted",
            Self::Forecast => "Forecast",
            Self::Best => "Best case",
            Self::Worst => "Worst case",
            Self::Expected => "Expected",
            Self::Notes => "Notes",
        }
    }

    fn placeholder(self) -> &'static str {
        match self {
            Self::Department => "e.g. IT",
            Self::Project => "optional",
            Self::Period => "e.g. 2024-Q2",
            Self::Notes => "optional",
            _ => "0",
        }
    }

    pub fn is_required(self) -> bool {
        match self.target() {
            FieldTarget::Draft(field) => field.is_required(),
            FieldTarget::Scenario(_) => true,
        }
    }

    pub fn value(self, draft: &Draft) -> &str {
        match self.target() {
            FieldTarget::Draft(field) => draft.field(field),
            FieldTarget::Scenario(field) => draft.scenarios.get(field),
        }
    }
}

/// Apply an edit to one field of the state's draft
pub fn edit_field(state: &mut AppState, field: FormField, edit: impl FnOnce(&mut String)) {
    let mut value = field.value(state.draft()).to_string();
    edit(&mut value);
    match field.target() {
        FieldTarget::Draft(target) => state.set_draft_field(target, value),
        FieldTarget::Scenario(target) => state.set_draft_scenario_field(target, value),
    }
}

/// State for the create budget dialog
#[derive(Debug, Clone, Default)]
pub struct CreateBudgetFormState {
    /// Currently focused field
    pub focused_field: FormField,

    /// Validation message to display
    pub error_message: Option<String>,
}

impl CreateBudgetFormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move to the next field
    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
    }

    /// Move to the previous field
    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
    }

    /// Back to the first field with no message
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Check required fields; the message lists what is missing
    pub fn validate(&self, draft: &Draft) -> Result<(), String> {
        let missing = draft.missing_required();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(format!("Required: {}", missing.join(", ")))
        }
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }
}

/// Render the create budget dialog
pub fn render(frame: &mut Frame, app: &App, state: &AppState) {
    let area = centered_rect(60, 70, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" New Budget ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    frame.render_widget(block, area);

    let inner = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(2),
    };

    let mut constraints: Vec<Constraint> = FormField::ALL
        .iter()
        .map(|_| Constraint::Length(1))
        .collect();
    constraints.extend([
        Constraint::Length(1), // Spacer
        Constraint::Length(1), // Error
        Constraint::Length(1), // Buttons
        Constraint::Min(0),
    ]);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    let form = &app.create_form;
    let draft = state.draft();
    let submitting = state.is_submitting();

    for (i, field) in FormField::ALL.iter().enumerate() {
        render_field(
            frame,
            chunks[i],
            *field,
            field.value(draft),
            form.focused_field == *field && !submitting,
        );
    }

    let message_row = FormField::ALL.len() + 1;
    let message = form
        .error_message
        .as_deref()
        .or_else(|| state.error().filter(|_| !submitting));
    if let Some(message) = message {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                message,
                Style::default().fg(Color::Red),
            ))),
            chunks[message_row],
        );
    }

    let hints = if submitting {
        Line::from(vec![
            Span::styled("Submitting...", Style::default().fg(Color::Yellow)),
            Span::raw("  "),
            Span::styled("[Esc] Cancel", Style::default().fg(Color::DarkGray)),
        ])
    } else {
        Line::from(vec![
            Span::styled("[Tab]", Style::default().fg(Color::White)),
            Span::raw(" Next  "),
            Span::styled("[Enter]", Style::default().fg(Color::Green)),
            Span::raw(" Create  "),
            Span::styled("[Esc]", Style::default().fg(Color::Red)),
            Span::raw(" Cancel  "),
            Span::styled("*", Style::default().fg(Color::Red)),
            Span::raw(" required"),
        ])
    };
    frame.render_widget(Paragraph::new(hints), chunks[message_row + 1]);
}

/// Render one labelled field with a trailing cursor when focused
fn render_field(frame: &mut Frame, area: Rect, field: FormField, value: &str, focused: bool) {
    let label_style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };

    let marker = if field.is_required() { "*" } else { " " };
    let mut spans = vec![
        Span::styled(marker, Style::default().fg(Color::Red)),
        Span::styled(format!("{:<11}: ", field.label()), label_style),
    ];

    if value.is_empty() && !focused {
        spans.push(Span::styled(
            field.placeholder(),
            Style::default().fg(Color::DarkGray),
        ));
    } else {
        spans.push(Span::styled(value.to_string(), Style::default().fg(Color::White)));
    }

    if focused {
        spans.push(Span::styled(
            " ",
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
