use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;
use color_eyre::eyre::eyre;
use crossterm::event::KeyEventKind;

use perftrack::app::App;
use perftrack::config::{self, load_config, load_config_from_path};
use perftrack::event::{Event, EventHandler};
use perftrack::sampler::SamplingLoop;
use perftrack::summary::full_report;
use perftrack::system::collector::Collector;
use perftrack::{logging, ui};

#[derive(Parser)]
#[command(
    name = "perftrack",
    about = "Terminal system performance tracker: CPU, memory, battery, processes and system info"
)]
struct Cli {
    /// Path to config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Theme: dark, light, mono
    #[arg(long)]
    theme: Option<String>,

    /// Color support: auto, 256, truecolor, mono
    #[arg(long)]
    color: Option<String>,

    /// Tab to open on: cpu, memory, battery, processes, system
    #[arg(long)]
    tab: Option<String>,

    /// Log file path (overrides the config file)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Take one sample, print every panel to stdout and exit.
    #[arg(long, default_value_t = false)]
    print: bool,

    /// With --print, emit the snapshot as JSON instead of text.
    #[arg(long, default_value_t = false, requires = "print")]
    json: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let config = load_config_for_cli(&cli);

    match logging::init_tracing(&config.logging, cli.log_file.as_deref()) {
        Ok(path) => tracing::info!(log = %path.display(), "perftrack starting"),
        Err(err) => eprintln!("perftrack: logging disabled: {err}"),
    }

    if cli.print {
        return run_print(&config, cli.json);
    }

    let mut terminal = ratatui::init();

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));

    let result = run(&mut terminal, &config).await;

    ratatui::restore();
    tracing::info!("perftrack exiting");

    result
}

async fn run(terminal: &mut ratatui::DefaultTerminal, config: &config::Config) -> Result<()> {
    let mut app = App::new(config, Box::new(Collector::new()));
    let mut events = EventHandler::new();
    let mut scheduler = events.scheduler();

    terminal.draw(|frame| ui::draw(frame, &mut app.dashboard))?;

    // First tick runs immediately; every later one is requested by the loop.
    app.on_tick(&mut scheduler);
    terminal.draw(|frame| ui::draw(frame, &mut app.dashboard))?;

    while app.running() {
        let Some(event) = events.next().await else {
            break;
        };
        match event {
            Event::Key(key) => {
                if key.kind == KeyEventKind::Press {
                    let action = app.map_key(key);
                    app.dispatch(action);
                }
            }
            Event::Tick => {
                app.on_tick(&mut scheduler);
            }
            Event::Resize => {}
        }
        if app.running() {
            terminal.draw(|frame| ui::draw(frame, &mut app.dashboard))?;
        }
    }

    Ok(())
}

fn load_config_for_cli(cli: &Cli) -> config::Config {
    let mut config = match &cli.config {
        Some(path) => load_config_from_path(path),
        None => load_config(),
    };

    if let Some(ref theme) = cli.theme {
        config.colors.theme = theme.clone();
    }
    if let Some(ref support) = cli.color {
        config.colors.color_support = support.clone();
    }
    if let Some(ref tab) = cli.tab {
        config.general.default_tab = tab.clone();
    }

    config
}

/// Headless mode. Samples twice so per-process CPU has a baseline.
fn run_print(config: &config::Config, json: bool) -> Result<()> {
    let mut sampler = SamplingLoop::new(Collector::new(), config.general.disk_path.clone());
    sampler.sample()?;
    let snapshot = sampler.sample()?;

    if json {
        let out = serde_json::to_string_pretty(&snapshot)
            .map_err(|e| eyre!("failed to serialize snapshot: {e}"))?;
        println!("{out}");
    } else {
        println!("{}", full_report(&snapshot));
    }
    Ok(())
}
