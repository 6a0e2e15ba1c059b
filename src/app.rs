use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::widgets::TableState;

use crate::action::{Action, Scroll};
use crate::config::{Config, KeybindsConfig, parse_key};
use crate::sampler::{Presenter, SamplingLoop, Scheduler, TickOutcome};
use crate::system::provider::MetricsProvider;
use crate::system::snapshot::{HistoryView, Snapshot};
use crate::ui::theme::{ColorSupport, Theme, resolve_color_support};

const PAGE_ROWS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Cpu,
    Memory,
    Battery,
    Processes,
    System,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::Cpu,
        Tab::Memory,
        Tab::Battery,
        Tab::Processes,
        Tab::System,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Cpu => "CPU Usage",
            Tab::Memory => "Memory Usage",
            Tab::Battery => "Battery Status",
            Tab::Processes => "Running Processes",
            Tab::System => "System Information",
        }
    }

    pub fn index(self) -> usize {
        Tab::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Tab::ALL.get(index).copied()
    }

    pub fn next(self) -> Self {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }

    pub fn from_str_config(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "memory" | "mem" => Tab::Memory,
            "battery" => Tab::Battery,
            "processes" | "process" | "procs" => Tab::Processes,
            "system" | "info" => Tab::System,
            _ => Tab::Cpu,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Help,
}

#[derive(Debug, Clone)]
pub struct ResolvedKeybinds {
    pub quit: KeyCode,
    pub next_tab: KeyCode,
    pub prev_tab: KeyCode,
    pub cycle_theme: KeyCode,
    pub help: KeyCode,
}

impl ResolvedKeybinds {
    pub fn from_config(kb: &KeybindsConfig) -> Self {
        Self {
            quit: parse_key(&kb.quit).unwrap_or(KeyCode::Char('q')),
            next_tab: parse_key(&kb.next_tab).unwrap_or(KeyCode::Tab),
            prev_tab: parse_key(&kb.prev_tab).unwrap_or(KeyCode::BackTab),
            cycle_theme: parse_key(&kb.cycle_theme).unwrap_or(KeyCode::Char('t')),
            help: parse_key(&kb.help).unwrap_or(KeyCode::Char('?')),
        }
    }

    /// Returns (key_label, description) pairs for the help overlay.
    pub fn help_entries(&self) -> Vec<(String, &'static str)> {
        vec![
            (key_label(self.quit), "Quit"),
            (key_label(self.next_tab), "Next tab"),
            (key_label(self.prev_tab), "Previous tab"),
            (key_label(self.cycle_theme), "Cycle theme"),
            (key_label(self.help), "Toggle help"),
            ("1-5".to_string(), "Jump to tab"),
            ("←→".to_string(), "Switch tab"),
            ("↑↓".to_string(), "Scroll processes"),
            ("PgUp/PgDn".to_string(), "Scroll a page"),
            ("Ctrl+C".to_string(), "Quit (always)"),
        ]
    }
}

pub fn key_label(code: KeyCode) -> String {
    match code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => "S-Tab".to_string(),
        KeyCode::Backspace => "Bksp".to_string(),
        KeyCode::Delete => "Del".to_string(),
        _ => "?".to_string(),
    }
}

/// Everything the window shows. Receives snapshots from the sampling loop
/// and never touches the series themselves.
pub struct Dashboard {
    alive: bool,
    pub snapshot: Option<Snapshot>,
    pub history: HistoryView,
    pub tab: Tab,
    pub input_mode: InputMode,
    pub process_table: TableState,
    pub theme: Theme,
    pub color_support: ColorSupport,
    pub keybinds: ResolvedKeybinds,
}

impl Dashboard {
    pub fn new(config: &Config) -> Self {
        let color_support = resolve_color_support(&config.colors.color_support);
        Dashboard {
            alive: true,
            snapshot: None,
            history: HistoryView::default(),
            tab: Tab::from_str_config(&config.general.default_tab),
            input_mode: InputMode::Normal,
            process_table: TableState::default(),
            theme: Theme::from_config(&config.colors.theme, color_support),
            color_support,
            keybinds: ResolvedKeybinds::from_config(&config.keybinds),
        }
    }

    /// Marks the window as closed. Returns `false` if it already was.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.alive, false)
    }

    pub fn show_help(&self) -> bool {
        self.input_mode == InputMode::Help
    }

    pub fn help_entries(&self) -> Vec<(String, &'static str)> {
        self.keybinds.help_entries()
    }

    fn process_count(&self) -> usize {
        self.snapshot.as_ref().map_or(0, |s| s.processes.len())
    }

    pub fn scroll(&mut self, scroll: Scroll) {
        let count = self.process_count();
        if count == 0 {
            self.process_table.select(None);
            return;
        }
        let last = count - 1;
        let current = self.process_table.selected().unwrap_or(0);
        let next = match scroll {
            Scroll::Up => current.saturating_sub(1),
            Scroll::Down => (current + 1).min(last),
            Scroll::PageUp => current.saturating_sub(PAGE_ROWS),
            Scroll::PageDown => (current + PAGE_ROWS).min(last),
            Scroll::Top => 0,
            Scroll::Bottom => last,
        };
        self.process_table.select(Some(next));
    }

    fn clamp_selection(&mut self) {
        let count = self.process_count();
        match self.process_table.selected() {
            _ if count == 0 => self.process_table.select(None),
            Some(i) if i >= count => self.process_table.select(Some(count - 1)),
            None => self.process_table.select(Some(0)),
            Some(_) => {}
        }
    }

    pub fn map_key(&self, key: KeyEvent) -> Action {
        // Ctrl+C always quits (hardwired safety)
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }

        match self.input_mode {
            InputMode::Normal => self.map_key_normal(key),
            InputMode::Help => self.map_key_help(key),
        }
    }

    fn map_key_normal(&self, key: KeyEvent) -> Action {
        let code = key.code;
        let kb = &self.keybinds;

        if code == kb.quit {
            return Action::Quit;
        }
        if code == kb.next_tab {
            return Action::NextTab;
        }
        if code == kb.prev_tab {
            return Action::PrevTab;
        }
        if code == kb.cycle_theme {
            return Action::CycleTheme;
        }
        if code == kb.help {
            return Action::ToggleHelp;
        }

        // Navigation keys are hardwired (not configurable)
        match code {
            KeyCode::Right => Action::NextTab,
            KeyCode::Left => Action::PrevTab,
            KeyCode::Up => Action::Scroll(Scroll::Up),
            KeyCode::Down => Action::Scroll(Scroll::Down),
            KeyCode::PageUp => Action::Scroll(Scroll::PageUp),
            KeyCode::PageDown => Action::Scroll(Scroll::PageDown),
            KeyCode::Home => Action::Scroll(Scroll::Top),
            KeyCode::End => Action::Scroll(Scroll::Bottom),
            KeyCode::Char(c @ '1'..='5') => Action::SelectTab(c as usize - '1' as usize),
            _ => Action::None,
        }
    }

    fn map_key_help(&self, key: KeyEvent) -> Action {
        // In help mode, only the help key and Esc dismiss, everything else is ignored
        if key.code == self.keybinds.help || key.code == KeyCode::Esc {
            return Action::ToggleHelp;
        }
        Action::None
    }
}

impl Presenter for Dashboard {
    fn render(&mut self, snapshot: Snapshot, history: HistoryView) {
        self.snapshot = Some(snapshot);
        self.history = history;
        self.clamp_selection();
    }

    fn is_alive(&self) -> bool {
        self.alive
    }
}

/// Application context: the sampling loop plus the dashboard it feeds.
pub struct App {
    pub sampler: SamplingLoop<Box<dyn MetricsProvider>>,
    pub dashboard: Dashboard,
}

impl App {
    pub fn new(config: &Config, provider: Box<dyn MetricsProvider>) -> Self {
        App {
            sampler: SamplingLoop::new(provider, config.general.disk_path.clone()),
            dashboard: Dashboard::new(config),
        }
    }

    pub fn running(&self) -> bool {
        self.dashboard.is_alive()
    }

    pub fn on_tick(&mut self, scheduler: &mut impl Scheduler) -> TickOutcome {
        self.sampler.tick(&mut self.dashboard, scheduler)
    }

    pub fn map_key(&self, key: KeyEvent) -> Action {
        self.dashboard.map_key(key)
    }

    pub fn dispatch(&mut self, action: Action) {
        let dash = &mut self.dashboard;
        match action {
            Action::Quit => {
                // Closing the window is the one-time shutdown signal.
                dash.close();
                self.sampler.shutdown();
            }
            Action::NextTab => dash.tab = dash.tab.next(),
            Action::PrevTab => dash.tab = dash.tab.prev(),
            Action::SelectTab(index) => {
                if let Some(tab) = Tab::from_index(index) {
                    dash.tab = tab;
                }
            }
            Action::Scroll(scroll) => {
                if dash.tab == Tab::Processes {
                    dash.scroll(scroll);
                }
            }
            Action::CycleTheme => {
                dash.theme = dash.theme.next(dash.color_support);
            }
            Action::ToggleHelp => {
                dash.input_mode = if dash.input_mode == InputMode::Help {
                    InputMode::Normal
                } else {
                    InputMode::Help
                };
            }
            Action::None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampler::LoopState;
    use crate::system::testing::FakeProvider;
    use std::time::Duration;

    #[derive(Default)]
    struct CountingScheduler {
        requests: usize,
    }

    impl Scheduler for CountingScheduler {
        fn schedule_after(&mut self, _delay: Duration) {
            self.requests += 1;
        }
    }

    fn make_app() -> App {
        App::new(&Config::default(), Box::new(FakeProvider::default()))
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn tabs_cycle_in_both_directions() {
        assert_eq!(Tab::Cpu.next(), Tab::Memory);
        assert_eq!(Tab::System.next(), Tab::Cpu);
        assert_eq!(Tab::Cpu.prev(), Tab::System);
        assert_eq!(Tab::from_str_config("procs"), Tab::Processes);
        assert_eq!(Tab::from_str_config("bogus"), Tab::Cpu);
    }

    #[test]
    fn tick_feeds_dashboard() {
        let mut app = make_app();
        let mut scheduler = CountingScheduler::default();
        assert!(app.dashboard.snapshot.is_none());

        assert_eq!(app.on_tick(&mut scheduler), TickOutcome::Rendered);

        let snapshot = app.dashboard.snapshot.as_ref().unwrap();
        assert_eq!(snapshot.processes.len(), 2);
        assert_eq!(app.dashboard.history.cpu_percent.len(), 1);
        assert_eq!(app.dashboard.process_table.selected(), Some(0));
        assert_eq!(scheduler.requests, 1);
    }

    #[test]
    fn quit_stops_sampler_and_later_ticks_do_nothing() {
        let mut app = make_app();
        let mut scheduler = CountingScheduler::default();
        app.on_tick(&mut scheduler);

        app.dispatch(Action::Quit);
        assert!(!app.running());
        assert_eq!(app.sampler.state(), LoopState::Stopped);

        assert_eq!(app.on_tick(&mut scheduler), TickOutcome::Stopped);
        assert_eq!(scheduler.requests, 1);
        assert_eq!(app.dashboard.snapshot.as_ref().unwrap().tick, 1);
    }

    #[test]
    fn repeated_quit_is_harmless() {
        let mut app = make_app();
        app.dispatch(Action::Quit);
        app.dispatch(Action::Quit);
        assert!(!app.running());
        assert!(!app.dashboard.close());
    }

    #[test]
    fn default_keybinds() {
        let app = make_app();
        assert_eq!(app.map_key(key(KeyCode::Char('q'))), Action::Quit);
        assert_eq!(app.map_key(key(KeyCode::Tab)), Action::NextTab);
        assert_eq!(app.map_key(key(KeyCode::BackTab)), Action::PrevTab);
        assert_eq!(app.map_key(key(KeyCode::Right)), Action::NextTab);
        assert_eq!(app.map_key(key(KeyCode::Char('4'))), Action::SelectTab(3));
        assert_eq!(app.map_key(key(KeyCode::Down)), Action::Scroll(Scroll::Down));
        assert_eq!(app.map_key(key(KeyCode::Char('?'))), Action::ToggleHelp);
        assert_eq!(app.map_key(key(KeyCode::Char('z'))), Action::None);

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(app.map_key(ctrl_c), Action::Quit);
    }

    #[test]
    fn custom_keybind_remap_works() {
        let mut app = make_app();
        app.dashboard.keybinds.quit = KeyCode::Char('x');
        assert_eq!(app.map_key(key(KeyCode::Char('x'))), Action::Quit);
        assert_eq!(app.map_key(key(KeyCode::Char('q'))), Action::None);
    }

    #[test]
    fn help_mode_blocks_other_keys() {
        let mut app = make_app();
        app.dispatch(Action::ToggleHelp);
        assert!(app.dashboard.show_help());

        assert_eq!(app.map_key(key(KeyCode::Char('q'))), Action::None);
        assert_eq!(app.map_key(key(KeyCode::Tab)), Action::None);
        assert_eq!(app.map_key(key(KeyCode::Esc)), Action::ToggleHelp);

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(app.map_key(ctrl_c), Action::Quit);

        app.dispatch(Action::ToggleHelp);
        assert!(!app.dashboard.show_help());
    }

    #[test]
    fn scrolling_is_clamped_to_process_list() {
        let mut app = make_app();
        let mut scheduler = CountingScheduler::default();
        app.on_tick(&mut scheduler);
        app.dispatch(Action::SelectTab(3));
        assert_eq!(app.dashboard.tab, Tab::Processes);

        app.dispatch(Action::Scroll(Scroll::PageDown));
        assert_eq!(app.dashboard.process_table.selected(), Some(1));
        app.dispatch(Action::Scroll(Scroll::Up));
        assert_eq!(app.dashboard.process_table.selected(), Some(0));
        app.dispatch(Action::Scroll(Scroll::Up));
        assert_eq!(app.dashboard.process_table.selected(), Some(0));
        app.dispatch(Action::Scroll(Scroll::Bottom));
        assert_eq!(app.dashboard.process_table.selected(), Some(1));
    }

    #[test]
    fn scrolling_outside_process_tab_is_ignored() {
        let mut app = make_app();
        let mut scheduler = CountingScheduler::default();
        app.on_tick(&mut scheduler);
        app.dispatch(Action::Scroll(Scroll::Bottom));
        assert_eq!(app.dashboard.process_table.selected(), Some(0));
    }

    #[test]
    fn select_tab_out_of_range_is_ignored() {
        let mut app = make_app();
        app.dispatch(Action::SelectTab(9));
        assert_eq!(app.dashboard.tab, Tab::Cpu);
    }

    #[test]
    fn cycle_theme_advances() {
        let mut app = make_app();
        app.dashboard.color_support = ColorSupport::Truecolor;
        app.dashboard.theme = Theme::dark();
        app.dispatch(Action::CycleTheme);
        assert_eq!(app.dashboard.theme.name, "light");
    }
}
