use crate::ui::app::App;
use crate::ui::fact_list::FactList;
use crate::ui::footer::Footer;
use crate::ui::form::FactForm;
use crate::ui::header::Header;
use crate::ui::layout::{body_sections, layout_regions};
use crate::ui::theme::{CAT_ORANGE, STATUS_ERROR, STATUS_PENDING};
use crate::ui::random::RandomFactState;
use ratatui::style::Style;
use ratatui::widgets::{Clear, Paragraph};
use ratatui::Frame;

/// Draw one frame. Returns the fact list's scroll limit for this layout.
pub fn draw(frame: &mut Frame<'_>, app: &App) -> u16 {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new(app.base_url(), app.load_status()).widget(), header);
    frame.render_widget(Clear, body);

    let form = FactForm::new(app.form());
    let random = app.random_fact();
    let (form_area, banner_area, list_area) =
        body_sections(body, form.height(), random.is_visible());

    frame.render_widget(form, form_area);

    if let (Some(rect), Some(line)) = (banner_area, random.line()) {
        let color = match random {
            RandomFactState::Loading => STATUS_PENDING,
            RandomFactState::Failed { .. } => STATUS_ERROR,
            _ => CAT_ORANGE,
        };
        frame.render_widget(Paragraph::new(line).style(Style::default().fg(color)), rect);
    }

    let facts = app.facts();
    let list = FactList::new(&facts).scroll(app.list_scroll());
    let max_scroll = list.max_scroll(list_area);
    frame.render_widget(list, list_area);

    frame.render_widget(Footer, footer);
    max_scroll
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::RandomFactOutcome;
    use crate::ui::app::tests::test_app;
    use crate::ui::fact_list::tests::buffer_rows;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render(app: &App) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
        terminal
            .draw(|frame| {
                draw(frame, app);
            })
            .unwrap();
        buffer_rows(terminal.backend().buffer())
    }

    #[test]
    fn full_screen_has_form_above_list() {
        let (app, _rx) = test_app(1);
        let rows = render(&app);

        let form = rows.iter().position(|r| r.contains("New Cat Fact")).unwrap();
        let list = rows.iter().position(|r| r.contains("┌ Cat Facts")).unwrap();
        assert!(form < list);
        assert!(rows.iter().any(|r| r.contains("No cat facts available yet.")));
        assert!(rows.iter().any(|r| r.contains("http://127.0.0.1:8000")));
    }

    #[test]
    fn empty_list_reports_no_scroll() {
        let (app, _rx) = test_app(1);
        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
        let mut max = u16::MAX;
        terminal
            .draw(|frame| max = draw(frame, &app))
            .unwrap();
        assert_eq!(max, 0);
    }

    #[test]
    fn random_banner_sits_between_form_and_list() {
        let (mut app, _rx) = test_app(2);
        app.request_random_fact();
        app.on_random_finished(RandomFactOutcome::Fact("Cats purr.".into()));
        let rows = render(&app);

        let banner = rows
            .iter()
            .position(|r| r.contains("Random fact: Cats purr."))
            .unwrap();
        let submit = rows.iter().position(|r| r.contains("[ Submit ]")).unwrap();
        let list = rows.iter().position(|r| r.contains("No cat facts")).unwrap();
        assert!(submit < banner && banner < list);
    }
}
