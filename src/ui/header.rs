use crate::ui::app::LoadStatus;
use crate::ui::theme::{
    CAT_ORANGE, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_OK,
    STATUS_PENDING,
};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header<'a> {
    base_url: &'a str,
    status: &'a LoadStatus,
}

impl<'a> Header<'a> {
    pub fn new(base_url: &'a str, status: &'a LoadStatus) -> Self {
        Self { base_url, status }
    }

    pub fn line(&self) -> Line<'a> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let (marker, status_text, status_color) = match self.status {
            LoadStatus::Loading => ("●", "Loading facts...".to_string(), STATUS_PENDING),
            LoadStatus::Loaded => ("●", "Connected".to_string(), STATUS_OK),
            LoadStatus::Failed(message) => ("●", format!("Load failed: {message}"), STATUS_ERROR),
        };

        Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(
                "Cat Facts",
                Style::default().fg(CAT_ORANGE).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(self.base_url, text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(marker, Style::default().fg(status_color)),
            Span::styled(" ", text_style),
            Span::styled(status_text, Style::default().fg(status_color)),
        ])
    }

    pub fn widget(&self) -> Paragraph<'a> {
        Paragraph::new(self.line()).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
