use qrpage_core::{AppViewModel, DownloadOutcome, Phase};
use ratatui::layout::Alignment;
use ratatui::style::{Color, Modifier, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use super::constants::*;
use super::layout::page_layout;

pub fn draw(frame: &mut Frame, view: &AppViewModel) {
    let areas = page_layout(frame.area());

    frame.render_widget(header(), areas.header);
    frame.render_widget(input_field(view), areas.input);
    frame.render_widget(qr_panel(view), areas.qr);
    frame.render_widget(footer(view), areas.footer);
}

fn header() -> Paragraph<'static> {
    Paragraph::new(vec![
        Line::from(TITLE.bold()),
        Line::from(TAGLINE.dim()),
    ])
    .alignment(Alignment::Center)
}

fn input_field(view: &AppViewModel) -> Paragraph<'_> {
    let mut block = Block::bordered().title(INPUT_TITLE);
    if view.phase == Phase::Generating {
        block = block.title_top(Line::from(GENERATING_MARKER.dim()).right_aligned());
    }

    let line = if view.input.is_empty() {
        Line::from(vec![Span::raw("▏"), INPUT_PLACEHOLDER.dark_gray()])
    } else {
        Line::from(vec![Span::raw(view.input.as_str()), Span::raw("▏")])
    };
    Paragraph::new(line).block(block)
}

fn qr_panel(view: &AppViewModel) -> Paragraph<'_> {
    let block = Block::bordered();
    if view.settled_query.is_empty() {
        return Paragraph::new(vec![Line::default(), Line::from(QR_PLACEHOLDER.dark_gray())])
            .alignment(Alignment::Center)
            .block(block);
    }

    let module_style = Style::new().fg(Color::White).bg(Color::Black);
    let mut lines: Vec<Line> = match &view.preview {
        Some(preview) => preview
            .iter()
            .map(|row| Line::from(Span::styled(row.clone(), module_style)))
            .collect(),
        None => vec![Line::default()],
    };
    lines.push(Line::default());
    lines.push(Line::from(
        Span::from(truncate_chars(&view.settled_query, QUERY_DISPLAY_CHARS)).dim(),
    ));
    let hint_style = if view.download_enabled {
        Style::new().add_modifier(Modifier::BOLD)
    } else {
        Style::new().fg(Color::DarkGray)
    };
    lines.push(Line::from(Span::styled(DOWNLOAD_HINT, hint_style)));

    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block)
}

fn footer(view: &AppViewModel) -> Paragraph<'_> {
    let status = match &view.last_download {
        Some(DownloadOutcome::Saved { path }) => {
            Line::from(Span::from(format!("Saved to {path}")).green())
        }
        Some(DownloadOutcome::Failed { reason }) => {
            Line::from(Span::from(format!("Download failed: {reason}")).red())
        }
        None => Line::default(),
    };
    Paragraph::new(vec![status, Line::from(FOOTER_HINT.dim())]).alignment(Alignment::Center)
}

fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(max.saturating_sub(1)).collect();
    truncated.push('…');
    truncated
}
