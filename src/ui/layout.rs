use ratatui::layout::Rect;

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Split the body into form, optional one-line banner, and the list.
///
/// The form gets its full height first; the list takes whatever is left.
pub fn body_sections(body: Rect, form_height: u16, banner: bool) -> (Rect, Option<Rect>, Rect) {
    let form_height = form_height.min(body.height);
    let form = Rect {
        height: form_height,
        ..body
    };

    let mut y = body.y + form_height;
    let banner = if banner && y < body.y + body.height {
        let rect = Rect {
            y,
            height: 1,
            ..body
        };
        y += 1;
        Some(rect)
    } else {
        None
    };

    let list = Rect {
        y,
        height: (body.y + body.height).saturating_sub(y),
        ..body
    };
    (form, banner, list)
}
