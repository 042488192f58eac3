//! Render targets for the dashboard.
//!
//! Renderers write into a [`Dashboard`]; the terminal frame and the headless
//! report are both drawn from it. The only fields read back by the
//! controller are the two form inputs.

use view::{AgentPanelView, StatisticsView, TransactionLogView};

use crate::canvas::TerminalCanvas;

/// Longest text accepted in a form input.
const MAX_INPUT_LEN: usize = 12;

/// Which form input receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Cycles,
    InitialPrice,
}

/// The two numeric inputs, kept as typed text until submission.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationForm {
    pub cycles: String,
    pub initial_price: String,
    pub focus: FormField,
}

impl SimulationForm {
    pub fn new(cycles: impl Into<String>, initial_price: impl Into<String>) -> Self {
        Self {
            cycles: cycles.into(),
            initial_price: initial_price.into(),
            focus: FormField::default(),
        }
    }

    /// Move focus to the other input.
    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            FormField::Cycles => FormField::InitialPrice,
            FormField::InitialPrice => FormField::Cycles,
        };
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            FormField::Cycles => &mut self.cycles,
            FormField::InitialPrice => &mut self.initial_price,
        }
    }

    /// Append a character to the focused input. Only digits and `.` are accepted.
    pub fn push(&mut self, c: char) {
        if !(c.is_ascii_digit() || c == '.') {
            return;
        }
        let field = self.focused_mut();
        if field.len() < MAX_INPUT_LEN {
            field.push(c);
        }
    }

    pub fn backspace(&mut self) {
        self.focused_mut().pop();
    }
}

impl Default for SimulationForm {
    fn default() -> Self {
        Self::new("8", "100.0")
    }
}

/// Everything visible on screen.
#[derive(Debug, Default)]
pub struct Dashboard {
    pub form: SimulationForm,
    /// Busy indicator.
    pub loading: bool,
    /// Results container visibility.
    pub results_visible: bool,
    pub statistics: Option<StatisticsView>,
    pub canvas: TerminalCanvas,
    pub agents: AgentPanelView,
    /// `None` until the first successful run.
    pub transactions: Option<TransactionLogView>,
    /// Blocking notification; input is ignored until dismissed.
    pub alert: Option<String>,
}

impl Dashboard {
    pub fn new(form: SimulationForm) -> Self {
        Self {
            form,
            ..Default::default()
        }
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }
}
