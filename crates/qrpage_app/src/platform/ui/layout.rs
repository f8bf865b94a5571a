use ratatui::layout::{Constraint, Layout, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageAreas {
    pub header: Rect,
    pub input: Rect,
    pub qr: Rect,
    pub footer: Rect,
}

pub fn page_layout(area: Rect) -> PageAreas {
    let [header, input, qr, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Min(5),
        Constraint::Length(2),
    ])
    .areas(area);

    PageAreas {
        header,
        input,
        qr,
        footer,
    }
}
