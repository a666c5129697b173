//! TUI rendering.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};

use super::app::{App, Pane};
use crate::commands::truncate;

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Lists
            Constraint::Length(3), // Footer
        ])
        .split(f.area());

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    draw_header(f, app, chunks[0]);
    draw_available(f, app, panes[0]);
    draw_allowed(f, app, panes[1]);
    draw_footer(f, app, chunks[2]);
}

fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let title = if app.is_searching() {
        format!("WiFiFilter | Search: {}_", app.search_query)
    } else {
        format!(
            "WiFiFilter | {} available | {} allowed",
            app.filtered_available().len(),
            app.allowed.len()
        )
    };

    let header = Paragraph::new(title)
        .style(Style::default().fg(Color::Cyan).bold())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );

    f.render_widget(header, area);
}

fn pane_block(title: &str, focused: bool) -> Block<'_> {
    let border = if focused { Color::Cyan } else { Color::DarkGray };
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(title)
}

fn row_style(selected: bool, focused: bool) -> Style {
    if selected && focused {
        Style::default().bg(Color::DarkGray).fg(Color::White)
    } else {
        Style::default()
    }
}

fn draw_available(f: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Pane::Available;
    let header_cells = ["SSID", "SIGNAL", "SECURITY"]
        .iter()
        .map(|h| Cell::from(*h).style(Style::default().fg(Color::Yellow).bold()));
    let header = Row::new(header_cells).height(1).bottom_margin(1);

    let filtered = app.filtered_available();
    let rows = filtered.iter().enumerate().map(|(i, network)| {
        let signal_color = if network.signal.ends_with('%') {
            Color::Green
        } else {
            Color::DarkGray
        };
        let cells = vec![
            Cell::from(truncate(&network.ssid, 28)),
            Cell::from(network.signal.clone()).style(Style::default().fg(signal_color)),
            Cell::from(truncate(&network.security, 18)),
        ];
        Row::new(cells).style(row_style(i == app.selected_available, focused))
    });

    let widths = [
        Constraint::Min(12),
        Constraint::Length(7),
        Constraint::Length(18),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(pane_block(" Available ", focused))
        .row_highlight_style(Style::default().add_modifier(Modifier::BOLD));

    let mut state = TableState::default();
    if !filtered.is_empty() {
        state.select(Some(app.selected_available));
    }

    f.render_stateful_widget(table, area, &mut state);
}

fn draw_allowed(f: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Pane::Allowed;
    let header = Row::new([Cell::from("SSID").style(Style::default().fg(Color::Yellow).bold())])
        .height(1)
        .bottom_margin(1);

    let rows = app.allowed.iter().enumerate().map(|(i, entry)| {
        Row::new([Cell::from(truncate(&entry.ssid, 32))])
            .style(row_style(i == app.selected_allowed, focused))
    });

    let table = Table::new(rows, [Constraint::Min(12)])
        .header(header)
        .block(pane_block(" Allowed ", focused))
        .row_highlight_style(Style::default().add_modifier(Modifier::BOLD));

    let mut state = TableState::default();
    if !app.allowed.is_empty() {
        state.select(Some(app.selected_allowed));
    }

    f.render_stateful_widget(table, area, &mut state);
}

fn draw_footer(f: &mut Frame, app: &App, area: Rect) {
    let status = app.notice().map(str::to_string).unwrap_or_else(|| app.status.to_string());

    let help = if app.is_searching() {
        "Type to search | Enter: done | Esc: cancel"
    } else if app.is_confirming_clear() {
        "y: clear everything | any other key: cancel"
    } else {
        "Tab: switch | j/k: navigate | a: allow | d: remove | p: apply | c: clear | r: rescan | /: search | q: quit"
    };

    let footer_text = if status.is_empty() {
        help.to_string()
    } else {
        format!("{} | {}", status, help)
    };

    let color = if app.status.busy {
        Color::Yellow
    } else {
        Color::DarkGray
    };

    let footer = Paragraph::new(footer_text)
        .style(Style::default().fg(color))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );

    f.render_widget(footer, area);
}
