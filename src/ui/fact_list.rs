//! The "Cat Facts" panel and the per-fact display unit.

use crate::api::CatFact;
use crate::ui::theme::{CAT_ORANGE, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget, Wrap};

pub const LIST_TITLE: &str = "Cat Facts";
pub const NO_FACTS: &str = "No cat facts available yet.";

/// One fact, rendered as its literal text.
pub struct FactItem<'a> {
    text: &'a str,
}

impl<'a> FactItem<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }

    pub fn span(&self) -> Span<'a> {
        Span::styled(self.text, Style::default().fg(HEADER_TEXT))
    }
}

/// Facts ordered by ascending id. The input slice is left as it is.
pub fn sorted_by_id(facts: &[CatFact]) -> Vec<&CatFact> {
    let mut sorted: Vec<&CatFact> = facts.iter().collect();
    sorted.sort_by_key(|fact| fact.id);
    sorted
}

pub struct FactList<'a> {
    facts: &'a [CatFact],
    scroll: u16,
}

impl<'a> FactList<'a> {
    pub fn new(facts: &'a [CatFact]) -> Self {
        Self { facts, scroll: 0 }
    }

    pub fn scroll(mut self, offset: u16) -> Self {
        self.scroll = offset;
        self
    }

    pub fn lines(&self) -> Vec<Line<'a>> {
        if self.facts.is_empty() {
            return vec![Line::from(Span::styled(
                NO_FACTS,
                Style::default().fg(MUTED_TEXT).add_modifier(Modifier::ITALIC),
            ))];
        }

        sorted_by_id(self.facts)
            .into_iter()
            .map(|fact| {
                Line::from(vec![
                    Span::styled("• ", Style::default().fg(CAT_ORANGE)),
                    FactItem::new(&fact.fact).span(),
                ])
            })
            .collect()
    }

    fn paragraph(&self) -> Paragraph<'a> {
        Paragraph::new(self.lines()).wrap(Wrap { trim: false })
    }

    /// Largest offset that still fills the panel, in wrapped rows.
    ///
    /// Long facts wrap onto several rows, so this is measured against the
    /// inner width of `area` rather than the number of facts.
    pub fn max_scroll(&self, area: Rect) -> u16 {
        let inner = Block::default().borders(Borders::ALL).inner(area);
        let rows = self.paragraph().line_count(inner.width);
        u16::try_from(rows)
            .unwrap_or(u16::MAX)
            .saturating_sub(inner.height)
    }
}

impl Widget for FactList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = match self.facts.len() {
            0 => format!(" {} ", LIST_TITLE),
            n => format!(" {} ({}) ", LIST_TITLE, n),
        };
        let block = Block::default()
            .title(Span::styled(title, Style::default().fg(CAT_ORANGE)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER));

        let scroll = self.scroll.min(self.max_scroll(area));
        self.paragraph()
            .scroll((scroll, 0))
            .block(block)
            .render(area, buf);
    }
}
