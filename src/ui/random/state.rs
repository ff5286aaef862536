use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::ui::mvi::UiState;
use crate::ui::theme::{CAT_ORANGE, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RandomFactState {
    #[default]
    Hidden,
    Loading,
    Shown { fact: String },
    Failed { error: String },
}

impl UiState for RandomFactState {}

impl RandomFactState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn line(&self) -> Option<Line<'_>> {
        let label = Span::styled(
            "Random fact: ",
            Style::default().fg(CAT_ORANGE).add_modifier(Modifier::BOLD),
        );
        let body = match self {
            Self::Hidden => return None,
            Self::Loading => Span::styled("fetching...", Style::default().fg(MUTED_TEXT)),
            Self::Shown { fact } => Span::styled(fact.as_str(), Style::default().fg(HEADER_TEXT)),
            Self::Failed { error } => {
                Span::styled(error.as_str(), Style::default().fg(STATUS_ERROR))
            }
        };
        Some(Line::from(vec![label, body]))
    }
}
