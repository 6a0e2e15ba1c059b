use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Borders, Cell, Row, Table, TableState};

use crate::format::truncate_unicode;
use crate::summary::process_row;
use crate::system::process::ProcessInfo;
use crate::ui::theme::Theme;

const NAME_WIDTH: usize = 32;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    processes: &[ProcessInfo],
    state: &mut TableState,
    theme: &Theme,
) {
    let header = Row::new(["PID", "Name", "CPU Percent", "Memory Percent"])
        .style(
            Style::default()
                .fg(theme.table_header_fg)
                .add_modifier(Modifier::BOLD),
        )
        .bottom_margin(1);

    let rows = processes.iter().map(|p| {
        let [pid, name, cpu, mem] = process_row(p);
        Row::new([
            Cell::from(pid),
            Cell::from(truncate_unicode(&name, NAME_WIDTH)),
            Cell::from(cpu),
            Cell::from(mem),
        ])
    });

    let widths = [
        Constraint::Length(8),
        Constraint::Min(16),
        Constraint::Length(12),
        Constraint::Length(15),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border))
        .title(Span::styled(
            format!(" Running Processes ({}) ", processes.len()),
            Style::default()
                .fg(theme.text_secondary)
                .add_modifier(Modifier::BOLD),
        ));

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .style(Style::default().fg(theme.text_primary))
        .row_highlight_style(
            Style::default()
                .fg(theme.row_highlight_fg)
                .bg(theme.row_highlight_bg)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    frame.render_stateful_widget(table, area, state);
}
