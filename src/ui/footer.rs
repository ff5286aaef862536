use crate::ui::theme::{CAT_ORANGE, GLOBAL_BORDER, HEADER_SEPARATOR, MUTED_TEXT};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

/// Key, then what it does. Mirrors the bindings in `ui::input`.
const KEY_HINTS: &[(&str, &str)] = &[
    ("Enter", "Submit"),
    ("Ctrl+U", "Clear"),
    ("Ctrl+R", "Random fact"),
    ("↑/↓", "Scroll"),
    ("Esc", "Quit"),
];

/// Bottom bar: key hints on the left, crate version on the right.
pub struct Footer;

impl Footer {
    pub fn hints() -> Line<'static> {
        let mut spans = vec![Span::raw(" ")];
        for (i, (key, label)) in KEY_HINTS.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" · ", Style::default().fg(HEADER_SEPARATOR)));
            }
            spans.push(Span::styled(*key, Style::default().fg(CAT_ORANGE)));
            spans.push(Span::styled(format!(" {label}"), Style::default().fg(MUTED_TEXT)));
        }
        Line::from(spans)
    }
}

impl Widget for Footer {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER));
        let inner = block.inner(area);
        block.render(area, buf);

        let version = concat!("v", env!("CARGO_PKG_VERSION"), " ");
        let version_width = (version.len() as u16).min(inner.width);
        let hints_area = Rect {
            width: inner.width - version_width,
            ..inner
        };
        let version_area = Rect {
            x: inner.x + hints_area.width,
            width: version_width,
            ..inner
        };

        Paragraph::new(Self::hints()).render(hints_area, buf);
        Paragraph::new(version)
            .style(Style::default().fg(MUTED_TEXT))
            .alignment(Alignment::Right)
            .render(version_area, buf);
    }
}
