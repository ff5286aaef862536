use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use crate::ui::submit::SubmitButton;
use crate::ui::theme::{CAT_ORANGE, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR, STATUS_OK};

use super::state::{FormState, FormStatus};

pub const FORM_LABEL: &str = "New Cat Fact";

/// Form view: label, input, errors and the submit control.
pub struct FactForm<'a> {
    state: &'a FormState,
}

impl<'a> FactForm<'a> {
    pub fn new(state: &'a FormState) -> Self {
        Self { state }
    }

    pub fn lines(&self) -> Vec<Line<'a>> {
        let pending = self.state.is_pending();
        let mut input = vec![
            Span::styled("> ", Style::default().fg(CAT_ORANGE)),
            Span::styled(self.state.input.as_str(), Style::default().fg(HEADER_TEXT)),
        ];
        if !pending {
            input.push(Span::styled("▏", Style::default().fg(CAT_ORANGE)));
        }

        let mut lines = vec![Line::from(input)];
        for error in self.state.errors() {
            lines.push(Line::from(vec![
                Span::styled("✗ ", Style::default().fg(STATUS_ERROR)),
                Span::styled(error.as_str(), Style::default().fg(STATUS_ERROR)),
            ]));
        }
        if self.state.status == FormStatus::Succeeded {
            lines.push(Line::from(Span::styled(
                "✓ Fact added.",
                Style::default().fg(STATUS_OK),
            )));
        }
        lines.push(Line::from(vec![
            SubmitButton::new(pending).span(),
            Span::styled("  Enter", Style::default().fg(MUTED_TEXT)),
        ]));
        lines
    }

    /// Rows needed to show everything, borders included.
    pub fn height(&self) -> u16 {
        self.lines().len().saturating_add(2) as u16
    }
}

impl Widget for FactForm<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(Span::styled(
                format!(" {} ", FORM_LABEL),
                Style::default().fg(CAT_ORANGE),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER));

        Paragraph::new(self.lines()).block(block).render(area, buf);
    }
}
