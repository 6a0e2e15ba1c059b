use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

use crate::app::Tab;
use crate::summary::{battery_summary, system_summary};
use crate::system::snapshot::Snapshot;
use crate::ui::theme::Theme;

pub const WAITING_TEXT: &str = "Collecting metrics...";

fn text_panel(frame: &mut Frame, area: Rect, title: &str, text: String, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border))
        .title(Span::styled(
            format!(" {title} "),
            Style::default()
                .fg(theme.text_secondary)
                .add_modifier(Modifier::BOLD),
        ));

    let lines: Vec<Line> = text.lines().map(|l| Line::from(l.to_string())).collect();
    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().fg(theme.text_primary))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

pub fn render_waiting(frame: &mut Frame, area: Rect, tab: Tab, theme: &Theme) {
    text_panel(frame, area, tab.title(), WAITING_TEXT.to_string(), theme);
}

pub fn render_battery(frame: &mut Frame, area: Rect, snapshot: &Snapshot, theme: &Theme) {
    text_panel(
        frame,
        area,
        Tab::Battery.title(),
        battery_summary(snapshot.battery.as_ref()),
        theme,
    );
}

pub fn render_system(frame: &mut Frame, area: Rect, snapshot: &Snapshot, theme: &Theme) {
    text_panel(
        frame,
        area,
        Tab::System.title(),
        system_summary(&snapshot.system),
        theme,
    );
}
