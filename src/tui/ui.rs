use ratatui::prelude::*;
use ratatui::widgets::{Block, Cell, Clear, Paragraph, Row, Table, Wrap};
use crate::output::truncate_text;
use crate::ranking::{Tier, HOT_LEAD_THRESHOLD};
use crate::tui::app::{App, InputMode};
use crate::tui::theme::ThemeColors;

pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Handle very small terminal sizes gracefully
    if area.height < 8 || area.width < 40 {
        let msg = Paragraph::new("Terminal too small")
            .alignment(Alignment::Center);
        frame.render_widget(msg, area);
        return;
    }

    // Layout: Title(1) + Metrics(1) + Body(fill) + Status(1)
    let chunks = Layout::vertical([
        Constraint::Length(1), // Title bar
        Constraint::Length(1), // Metrics row
        Constraint::Fill(1),   // Table + detail pane
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    let body = Layout::horizontal([Constraint::Fill(3), Constraint::Fill(2)]).split(chunks[2]);

    render_title(frame, chunks[0], app);
    render_metrics(frame, chunks[1], app);
    render_table(frame, body[0], app);
    render_detail(frame, body[1], app);
    render_status_bar(frame, chunks[3], app);

    // Render overlays based on input mode
    match app.input_mode {
        InputMode::LocationInput => render_location_popup(frame, app),
        InputMode::Help => render_help_popup(frame, &app.colors),
        InputMode::Normal => {}
    }
}

fn render_title(frame: &mut Frame, area: Rect, app: &App) {
    let title_text = "Lead Rank";
    let mut spans = vec![Span::styled(
        title_text,
        Style::default().fg(app.colors.title_color).bold(),
    )];

    // Active filters on the right
    let mut filter_text = format!("min score {}", app.filter.min_score);
    if let Some(ref location) = app.filter.location {
        filter_text.push_str(&format!(" | location \"{}\"", location));
    }
    let padding_len = (area.width as usize)
        .saturating_sub(title_text.len() + filter_text.chars().count());
    spans.push(Span::raw(" ".repeat(padding_len)));
    spans.push(Span::styled(filter_text, Style::default().fg(app.colors.muted)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_metrics(frame: &mut Frame, area: Rect, app: &App) {
    let muted = Style::default().fg(app.colors.muted);
    let value = Style::default().bold();

    let top = match &app.summary.top_candidate {
        Some((name, score)) => format!("{} ({} pts)", name, score),
        None => "-".to_string(),
    };

    let line = Line::from(vec![
        Span::styled("Total ", muted),
        Span::styled(app.summary.total.to_string(), value),
        Span::styled(format!("  Hot (>{}) ", HOT_LEAD_THRESHOLD), muted),
        Span::styled(
            app.summary.hot_leads.to_string(),
            Style::default().fg(app.colors.tier_high).bold(),
        ),
        Span::styled("  Top ", muted),
        Span::styled(top, value),
        Span::styled("  Showing ", muted),
        Span::styled(app.visible.len().to_string(), value),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_table(frame: &mut Frame, area: Rect, app: &mut App) {
    if app.visible.is_empty() {
        let empty_msg = Paragraph::new("No leads match the current filters")
            .alignment(Alignment::Center)
            .block(Block::default());
        frame.render_widget(empty_msg, area);
        return;
    }

    let colors = &app.colors;
    let rows: Vec<Row> = app
        .visible
        .iter()
        .enumerate()
        .map(|(idx, scored)| {
            let index = format!("{}.", idx + 1);
            let score_color = colors.score_color(scored.propensity_score);

            let mut score_spans = vec![Span::styled(
                format!("{:>3} ", scored.propensity_score),
                Style::default().fg(score_color),
            )];
            score_spans.extend(score_bar(scored.propensity_score, 10, colors).spans);

            let tier = Tier::from_score(scored.propensity_score);

            // Alternating row background (odd rows get subtle background)
            let row_style = if idx % 2 == 1 {
                Style::default().bg(colors.row_alt_bg)
            } else {
                Style::default()
            };

            Row::new(vec![
                Cell::from(index).style(Style::default().fg(colors.index_color)),
                Cell::from(Line::from(score_spans)),
                Cell::from(tier.short_label()).style(Style::default().fg(colors.tier_color(tier))),
                Cell::from(truncate_text(&scored.lead.name, 24)),
                Cell::from(truncate_text(&scored.lead.title, 40)),
            ])
            .style(row_style)
        })
        .collect();

    // Column widths
    let widths = [
        Constraint::Length(4),  // Index: "99."
        Constraint::Length(15), // Score + bar: "100 ██████████"
        Constraint::Length(7),  // Tier: "Medium"
        Constraint::Length(24), // Name
        Constraint::Fill(1),    // Title
    ];

    let table = Table::new(rows, widths)
        .header(
            Row::new(vec!["#", "Score", "Tier", "Name", "Title"])
                .style(colors.header_style)
                .bottom_margin(1),
        )
        .row_highlight_style(colors.row_selected);

    frame.render_stateful_widget(table, area, &mut app.table_state);
}

fn render_detail(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::bordered()
        .title(" Score Breakdown ")
        .border_style(Style::default().fg(app.colors.popup_border));

    let Some(scored) = app.selected_lead() else {
        let msg = Paragraph::new("Select a lead to see why it was ranked this way")
            .style(Style::default().fg(app.colors.muted))
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(msg, area);
        return;
    };

    let lead = &scored.lead;
    let muted = Style::default().fg(app.colors.muted);
    let tier = Tier::from_score(scored.propensity_score);

    let mut lines = vec![
        Line::from(Span::styled(lead.name.clone(), Style::default().bold())),
        Line::from(vec![Span::styled("Title    ", muted), Span::raw(lead.title.clone())]),
        Line::from(vec![Span::styled("Company  ", muted), Span::raw(lead.company.clone())]),
        Line::from(vec![Span::styled("Location ", muted), Span::raw(lead.location.clone())]),
        Line::from(vec![Span::styled("HQ       ", muted), Span::raw(lead.hq_location.clone())]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Total Score ", muted),
            Span::styled(
                format!("{}/100", scored.propensity_score),
                Style::default().fg(app.colors.tier_color(tier)).bold(),
            ),
        ]),
        Line::from(Span::styled("Factors", muted)),
    ];

    if scored.score_breakdown.is_empty() {
        lines.push(Line::from(Span::styled("  (no rules triggered)", muted)));
    } else {
        for reason in &scored.score_breakdown {
            lines.push(Line::from(format!("  • {}", reason)));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        tier.recommendation(),
        Style::default().fg(app.colors.tier_color(tier)).bold(),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![Span::styled("Email    ", muted), Span::raw(lead.email.clone())]));
    lines.push(Line::from(vec![
        Span::styled("LinkedIn ", muted),
        Span::styled(lead.linkedin.clone(), Style::default().underlined()),
    ]));

    let detail = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(block);
    frame.render_widget(detail, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let colors = &app.colors;
    let text = if let Some((ref msg, _)) = app.flash_message {
        // Show flash message with color based on message type
        let msg_color = if msg.starts_with("Failed") {
            colors.flash_error
        } else if msg.starts_with("Opened:") || msg.starts_with("Exported") {
            colors.flash_success
        } else {
            colors.muted
        };
        Line::from(Span::styled(msg.clone(), Style::default().fg(msg_color)))
    } else {
        // Build hints with colored shortcut keys
        let hints = [
            ("j/k", ":nav "),
            ("+/-", ":min score "),
            ("/", ":location "),
            ("o", ":open "),
            ("e", ":export "),
            ("?", ":help "),
            ("q", ":quit"),
        ];

        let mut spans = vec![
            Span::styled(format!("{} leads", app.visible.len()), Style::default().fg(colors.muted)),
            Span::raw("  "),
        ];
        for (i, (key, label)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(*key, Style::default().fg(colors.status_key_color)));
            spans.push(Span::raw(*label));
        }
        Line::from(spans)
    };

    frame.render_widget(
        Paragraph::new(text).style(Style::default().bg(colors.status_bar_bg)),
        area,
    );
}

fn score_bar(score: u8, width: usize, colors: &ThemeColors) -> Line<'static> {
    let ratio = f64::from(score.min(100)) / 100.0;
    let filled = (ratio * width as f64).round() as usize;
    let empty = width.saturating_sub(filled);

    let bar_color = colors.score_color(score);

    let mut spans = Vec::new();
    if filled > 0 {
        spans.push(Span::styled("█".repeat(filled), Style::default().fg(bar_color)));
    }
    if empty > 0 {
        spans.push(Span::styled("░".repeat(empty), Style::default().fg(colors.bar_empty)));
    }

    Line::from(spans)
}

/// Render the location search input popup
fn render_location_popup(frame: &mut Frame, app: &App) {
    let popup_area = centered_rect_fixed(44, 4, frame.area());

    // Clear the background
    frame.render_widget(Clear, popup_area);

    let block = Block::bordered()
        .title(" Search Location ")
        .border_style(Style::default().fg(app.colors.popup_border));
    frame.render_widget(block.clone(), popup_area);

    let inner = block.inner(popup_area);
    let chunks = Layout::vertical([
        Constraint::Length(1), // Input line
        Constraint::Length(1), // Help text
    ])
    .split(inner);

    // Render input with cursor
    let input = Paragraph::new(format!("{}|", app.location_input));
    frame.render_widget(input, chunks[0]);

    let help = Paragraph::new("Enter: apply | Esc: cancel | empty = all")
        .style(Style::default().fg(app.colors.muted));
    frame.render_widget(help, chunks[1]);
}

/// Create a centered rectangle with fixed width and height
fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    // Clamp dimensions to area bounds
    let width = width.min(area.width);
    let height = height.min(area.height);

    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect {
        x,
        y,
        width,
        height,
    }
}

/// Render the help overlay popup
fn render_help_popup(frame: &mut Frame, colors: &ThemeColors) {
    let popup_area = centered_rect_fixed(50, 14, frame.area());

    frame.render_widget(Clear, popup_area);

    let block = Block::bordered()
        .title(" Keyboard Shortcuts ")
        .border_style(Style::default().fg(colors.popup_border));
    frame.render_widget(block.clone(), popup_area);

    let inner = block.inner(popup_area);
    let key_style = Style::default().fg(colors.status_key_color).bold();

    let entries = [
        ("j / Down      ", "Move down"),
        ("k / Up        ", "Move up"),
        ("+ / -         ", "Raise / lower minimum score"),
        ("/             ", "Search by location"),
        ("Esc           ", "Clear location search"),
        ("Enter / o     ", "Open LinkedIn profile"),
        ("e             ", "Export visible leads to CSV"),
        ("?             ", "Show/hide this help"),
        ("q / Ctrl-c    ", "Quit"),
    ];

    let mut help_lines: Vec<Line> = entries
        .iter()
        .map(|(key, desc)| Line::from(vec![Span::styled(*key, key_style), Span::raw(*desc)]))
        .collect();
    help_lines.push(Line::from(""));
    help_lines.push(Line::from(Span::styled(
        "Press any key to close",
        Style::default().fg(colors.muted),
    )));

    frame.render_widget(Paragraph::new(help_lines), inner);
}
