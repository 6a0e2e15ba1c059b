pub mod charts;
pub mod help;
pub mod panels;
pub mod process_table;
pub mod statusbar;
pub mod tab_bar;
pub mod theme;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};

use crate::app::{Dashboard, Tab};

pub fn draw(frame: &mut Frame, dash: &mut Dashboard) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    tab_bar::render(frame, chunks[0], dash.tab, &dash.theme);

    let content = chunks[1];
    match dash.snapshot.as_ref() {
        None => panels::render_waiting(frame, content, dash.tab, &dash.theme),
        Some(snapshot) => match dash.tab {
            Tab::Cpu => charts::render_cpu(frame, content, snapshot, &dash.history, &dash.theme),
            Tab::Memory => {
                charts::render_memory(frame, content, snapshot, &dash.history, &dash.theme)
            }
            Tab::Battery => panels::render_battery(frame, content, snapshot, &dash.theme),
            Tab::Processes => process_table::render(
                frame,
                content,
                &snapshot.processes,
                &mut dash.process_table,
                &dash.theme,
            ),
            Tab::System => panels::render_system(frame, content, snapshot, &dash.theme),
        },
    }

    statusbar::render(frame, chunks[2], dash.tab, &dash.keybinds, &dash.theme);

    // Help overlay last so it draws on top
    if dash.show_help() {
        help::render(frame, frame.area(), &dash.help_entries(), &dash.theme);
    }
}
