use {
    crate::state::Snapshot,
    crate::ui::renderer::{format_kib, format_mbps},
    ratatui::{
        layout::{Constraint, Layout as RatLayout, Rect},
        style::{Color, Modifier, Style},
        symbols,
        text::{Line, Span},
        widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
        Frame,
    },
};

/// Render the main UI layout: header, artifact pane + throughput chart, footer
pub fn render_layout(f: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let chunks = RatLayout::default()
        .direction(ratatui::layout::Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Main panes
            Constraint::Length(3), // Footer/Status
        ])
        .split(area);

    render_header(f, chunks[0]);

    let columns = RatLayout::default()
        .direction(ratatui::layout::Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(chunks[1]);

    render_artifact_pane(f, columns[0], snapshot);
    render_throughput_chart(f, columns[1], snapshot);

    render_footer(f, chunks[2], snapshot);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Block::default().borders(Borders::ALL);

    let text = vec![Line::from(vec![
        Span::styled(
            "Quasar Mission Control",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" - Live Acquisition Monitor  |  Press 'q' or Esc to quit"),
    ])];

    f.render_widget(Paragraph::new(text).block(header), area);
}

fn render_artifact_pane(f: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let block = Block::default().borders(Borders::ALL).title("Live Saliency Feed");

    let lines = match &snapshot.latest_artifact {
        Some(path) => {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| path.display().to_string());

            // Renderer-side best-effort stat; the file may already be gone
            let size_line = match std::fs::metadata(path) {
                Ok(meta) => format_kib(meta.len()),
                Err(_) => "size unavailable".to_string(),
            };

            vec![
                Line::from(vec![
                    Span::styled("Latest: ", Style::default().fg(Color::Cyan)),
                    Span::styled(name, Style::default().fg(Color::Green)),
                ]),
                Line::from(vec![
                    Span::styled("Size:   ", Style::default().fg(Color::Cyan)),
                    Span::raw(size_line),
                ]),
                Line::from(Span::raw(path.display().to_string())),
            ]
        }
        None => vec![Line::from(Span::styled(
            "Waiting for data...",
            Style::default().fg(Color::Gray),
        ))],
    };

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_throughput_chart(f: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let points: Vec<(f64, f64)> = snapshot
        .samples
        .iter()
        .map(|s| (s.seq as f64, s.mbps))
        .collect();

    // Dynamic y scaling with headroom, never below 1 Mbps
    let max_mbps = snapshot.samples.iter().map(|s| s.mbps).fold(0.0_f64, f64::max);
    let y_max = (max_mbps * 1.2).max(1.0);

    // Fixed 60-sample x span, scrolling with the window
    let x_min = points.first().map(|p| p.0).unwrap_or(0.0);
    let x_max = points
        .last()
        .map(|p| p.0)
        .unwrap_or(0.0)
        .max(x_min + 60.0);

    let dataset = Dataset::default()
        .name("Mbps")
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Green))
        .data(&points);

    let chart = Chart::new(vec![dataset])
        .block(Block::default().borders(Borders::ALL).title("Bandwidth (Mbps)"))
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([x_min, x_max]),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, y_max])
                .labels(vec![
                    Span::raw("0"),
                    Span::raw(format!("{:.1}", y_max / 2.0)),
                    Span::raw(format!("{:.1}", y_max)),
                ]),
        );

    f.render_widget(chart, area);
}

fn render_footer(f: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let current_mbps = snapshot.samples.last().map(|s| s.mbps).unwrap_or(0.0);

    let text = vec![Line::from(vec![
        Span::styled("Status: ", Style::default().fg(Color::Green)),
        Span::raw("Watching"),
        Span::raw(" | "),
        Span::styled("Current: ", Style::default().fg(Color::Cyan)),
        Span::raw(format_mbps(current_mbps)),
        Span::raw(" | "),
        Span::styled("Samples: ", Style::default().fg(Color::Cyan)),
        Span::raw(snapshot.samples.len().to_string()),
        Span::raw(" | "),
        Span::raw(chrono::Local::now().format("%H:%M:%S").to_string()),
    ])];

    let footer = Block::default().borders(Borders::ALL).title("Status");

    f.render_widget(Paragraph::new(text).block(footer), area);
}
