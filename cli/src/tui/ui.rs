use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, BorderType, Padding, Paragraph, Row, Table},
    Frame,
};
use periodism_core::PeriodSummary;

use crate::tui::app::App;

// --- THEME ---
struct Theme {
    primary: Color,
    muted: Color,
    text: Color,
    today: Color,
}

const THEME: Theme = Theme {
    primary: Color::Cyan,
    muted: Color::DarkGray,
    text: Color::White,
    today: Color::Green,
};

pub fn draw(frame: &mut Frame, app: &App) {
    let size = frame.area();

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Week + labels
            Constraint::Length(1), // Footer / Help
        ])
        .split(size);

    let Some(summary) = &app.summary else {
        frame.render_widget(
            Paragraph::new("Week out of range").alignment(Alignment::Center),
            main_layout[1],
        );
        return;
    };

    // --- Header ---
    let header_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(20), // App title
            Constraint::Min(1),     // Spacer
            Constraint::Length(34), // Week selector
        ])
        .split(main_layout[0]);

    let app_title = Paragraph::new(Span::styled("PERIODISM", Style::default().fg(THEME.primary).add_modifier(Modifier::BOLD)))
        .block(Block::default().padding(Padding::new(0, 0, 1, 0)));
    frame.render_widget(app_title, header_layout[0]);

    let nav_text = Line::from(vec![
        Span::styled(" < ", Style::default().fg(THEME.text)),
        Span::styled(summary.week_display.clone(), Style::default().fg(THEME.text).add_modifier(Modifier::BOLD)),
        Span::styled(" > ", Style::default().fg(THEME.text)),
    ]);
    let nav = Paragraph::new(nav_text).alignment(Alignment::Right).block(Block::default().padding(Padding::new(0, 0, 1, 0)));
    frame.render_widget(nav, header_layout[2]);

    frame.render_widget(
        Block::default().borders(Borders::BOTTOM).border_style(Style::default().fg(THEME.muted)),
        main_layout[0],
    );

    // --- Main Content Split ---
    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Days
            Constraint::Length(1),      // Gutter
            Constraint::Percentage(45), // Labels
        ])
        .split(main_layout[1]);

    draw_days(frame, app, summary, content_chunks[0]);
    draw_labels(frame, summary, content_chunks[2]);

    // --- Footer ---
    let help = Line::from(vec![
        Span::styled("NAV: ", Style::default().fg(THEME.muted)),
        Span::styled("←/→ ", Style::default().fg(THEME.text)),
        Span::raw("  "),
        Span::styled("TODAY: ", Style::default().fg(THEME.muted)),
        Span::styled("t", Style::default().fg(THEME.text)),
        Span::raw("  "),
        Span::styled("QUIT: ", Style::default().fg(THEME.muted)),
        Span::styled("q", Style::default().fg(THEME.text)),
    ]);
    let footer = Paragraph::new(help).alignment(Alignment::Center).style(Style::default().fg(THEME.muted));
    frame.render_widget(footer, main_layout[2]);
}

fn draw_days(frame: &mut Frame, app: &App, summary: &PeriodSummary, area: Rect) {
    let rows: Vec<Row> = summary.days.iter().map(|day| {
        let mut style = Style::default().fg(THEME.text);
        if day.date == app.today {
            style = style.fg(THEME.today).add_modifier(Modifier::BOLD);
        }
        if day.date == app.selected {
            style = style.add_modifier(Modifier::REVERSED);
        }
        Row::new(vec![format!("{:?}", day.day), day.date.to_string(), day.label.clone()]).style(style)
    }).collect();

    let table = Table::new(rows, [
        Constraint::Length(10),
        Constraint::Length(12),
        Constraint::Min(10),
    ])
    .header(Row::new(vec!["Day", "Date", "Label"]).style(Style::default().fg(THEME.primary)))
    .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded).border_style(Style::default().fg(THEME.muted)).title(" Week "));

    frame.render_widget(table, area);
}

fn draw_labels(frame: &mut Frame, summary: &PeriodSummary, area: Rect) {
    let mut lines = vec![
        Line::from(vec![Span::styled(summary.season_display.clone(), Style::default().add_modifier(Modifier::BOLD))]),
        Line::from(""),
    ];
    for label in &summary.labels {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<18}", label.period.to_string()), Style::default().fg(THEME.muted)),
            Span::styled(label.label.clone(), Style::default().fg(THEME.text)),
        ]));
    }

    let panel = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded).border_style(Style::default().fg(THEME.muted)).title(" Periods "));
    frame.render_widget(panel, area);
}
