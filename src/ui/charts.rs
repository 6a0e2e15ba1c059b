use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::Span;
use ratatui::widgets::{Axis, Block, BorderType, Borders, Chart, Dataset, GraphType, Paragraph};

use crate::summary::{cpu_summary, memory_summary};
use crate::system::series::HISTORY_CAPACITY;
use crate::system::snapshot::{HistoryView, Snapshot};
use crate::ui::theme::Theme;

const CPU_AXIS_MAX: f64 = 100.0;

/// Chart points with the sample index as x, oldest at 0.
pub fn series_points(values: &[f64]) -> Vec<(f64, f64)> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| (i as f64, *v))
        .collect()
}

fn split(area: Rect, text_lines: u16) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(text_lines + 2)])
        .split(area);
    (chunks[0], chunks[1])
}

fn panel_block<'a>(title: &'a str, theme: &Theme) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border))
        .title(Span::styled(
            format!(" {title} "),
            Style::default()
                .fg(theme.text_secondary)
                .add_modifier(Modifier::BOLD),
        ))
}

#[allow(clippy::too_many_arguments)]
fn render_chart(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    y_title: &str,
    points: &[(f64, f64)],
    y_max: f64,
    color: ratatui::style::Color,
    theme: &Theme,
) {
    let dataset = Dataset::default()
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(color))
        .data(points);

    let axis_style = Style::default().fg(theme.text_secondary);
    let x_max = HISTORY_CAPACITY as f64;
    let chart = Chart::new(vec![dataset])
        .block(panel_block(title, theme))
        .x_axis(
            Axis::default()
                .title("Time")
                .style(axis_style)
                .bounds([0.0, x_max])
                .labels([
                    "0".to_string(),
                    (HISTORY_CAPACITY / 2).to_string(),
                    HISTORY_CAPACITY.to_string(),
                ]),
        )
        .y_axis(
            Axis::default()
                .title(y_title.to_string())
                .style(axis_style)
                .bounds([0.0, y_max])
                .labels([
                    "0".to_string(),
                    format!("{:.0}", y_max / 2.0),
                    format!("{y_max:.0}"),
                ]),
        );
    frame.render_widget(chart, area);
}

pub fn render_cpu(
    frame: &mut Frame,
    area: Rect,
    snapshot: &Snapshot,
    history: &HistoryView,
    theme: &Theme,
) {
    let (chart_area, text_area) = split(area, 1);
    let points = series_points(&history.cpu_percent);
    render_chart(
        frame,
        chart_area,
        "CPU Usage",
        "Percentage",
        &points,
        CPU_AXIS_MAX,
        theme.cpu_line,
        theme,
    );

    let text = Paragraph::new(cpu_summary(snapshot))
        .style(Style::default().fg(theme.text_primary))
        .block(panel_block("CPU", theme));
    frame.render_widget(text, text_area);
}

pub fn render_memory(
    frame: &mut Frame,
    area: Rect,
    snapshot: &Snapshot,
    history: &HistoryView,
    theme: &Theme,
) {
    let (chart_area, text_area) = split(area, 2);
    let points = series_points(&history.memory_used_gb);
    let y_max = if snapshot.memory_total_gb > 0.0 {
        snapshot.memory_total_gb
    } else {
        1.0
    };
    render_chart(
        frame,
        chart_area,
        "Memory Usage",
        "Memory (GB)",
        &points,
        y_max,
        theme.memory_line,
        theme,
    );

    let text = Paragraph::new(memory_summary(snapshot))
        .style(Style::default().fg(theme.text_primary))
        .block(panel_block("Memory", theme));
    frame.render_widget(text, text_area);
}
