//! The submit control. It owns no state; the form tells it whether a
//! submission is in flight.

use crate::ui::theme::{ACTIVE_HIGHLIGHT, CAT_ORANGE, MUTED_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

pub const SUBMIT_LABEL: &str = "Submit";
pub const SUBMITTING_LABEL: &str = "Submitting...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitButton {
    pending: bool,
}

impl SubmitButton {
    pub fn new(pending: bool) -> Self {
        Self { pending }
    }

    pub fn label(&self) -> &'static str {
        if self.pending {
            SUBMITTING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    pub fn is_disabled(&self) -> bool {
        self.pending
    }

    pub fn span(&self) -> Span<'static> {
        let style = if self.is_disabled() {
            Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM)
        } else {
            Style::default()
                .fg(CAT_ORANGE)
                .bg(ACTIVE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD)
        };
        Span::styled(format!("[ {} ]", self.label()), style)
    }
}
