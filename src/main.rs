//! Command line entry point.
//!
//! A thin shell over the library: flags become configuration and gallery
//! events, results are rendered to text on stdout.
//!
//! # Commands
//!
//! ```text
//! legio gallery [--reset] [--search TEXT] [--category NAME|all]
//!               [--sort newest|oldest|popular|views] [--open ID]
//!               [--step next|prev]... [--close]
//! legio chat TEXT...
//! legio testimonials [--elapsed-ms N] [--step next|prev]... [--go INDEX]
//! legio admin gallery [list | delete ID | add k=v... | update ID k=v...]
//! legio admin events  [list | delete ID | add k=v... | update ID k=v...]
//! ```
//!
//! # Configuration
//!
//! `--config PATH` (or `LEGIO_CONFIG`) names a TOML file. `--catalog`,
//! `--data-dir`, `--trace-level`, `--reply-delay-ms` and
//! `--carousel-interval-ms` override it.

#![allow(clippy::multiple_crate_versions)]

mod cli;

use clap::Parser;
use cli::{AdminAction, AdminTable, Cli, Commands};
use legio::admin::{AdminPanel, EventForm, GalleryItemForm};
use legio::chat::ChatSession;
use legio::gallery::{handle_event, Carousel, Direction, Event, TESTIMONIALS};
use legio::infrastructure::paths;
use legio::storage::JsonStore;
use legio::{ui, Config, Result};
use std::collections::BTreeMap;
use std::path::Path;
use std::process::ExitCode;
use std::time::Duration;

const COLUMNS: usize = 80;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("legio: {e}");
            return ExitCode::FAILURE;
        }
    };

    legio::observability::init_tracing(&config);
    let _span = tracing::debug_span!("command", name = command_name(&cli.command)).entered();

    match run(&config, cli.command) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("legio: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Config file, then command line overrides.
fn load_config(cli: &Cli) -> Result<Config> {
    let base = match &cli.config {
        Some(path) => {
            let expanded = legio::infrastructure::expand_tilde(&path.to_string_lossy());
            Config::from_file(Path::new(&expanded))?
        }
        None => Config::default(),
    };
    Ok(base.merged_with(&cli.overrides()))
}

const fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Gallery { .. } => "gallery",
        Commands::Chat { .. } => "chat",
        Commands::Testimonials { .. } => "testimonials",
        Commands::Admin { .. } => "admin",
    }
}

fn run(config: &Config, command: Commands) -> Result<String> {
    match command {
        Commands::Gallery {
            reset,
            search,
            category,
            sort,
            open,
            steps,
            close,
        } => {
            let mut events = Vec::new();
            if reset {
                events.push(Event::ResetFilters);
            }
            events.extend(search.map(Event::SearchChanged));
            events.extend(category.map(Event::CategorySelected));
            events.extend(sort.map(Event::SortSelected));
            events.extend(open.map(Event::Open));
            events.extend(steps.into_iter().map(|step| match step {
                Direction::Next => Event::Next,
                Direction::Previous => Event::Previous,
            }));
            if close {
                events.push(Event::Close);
            }
            run_gallery(config, &events)
        }
        Commands::Chat { text } => Ok(run_chat(config, &text.join(" "))),
        Commands::Testimonials { elapsed_ms, steps, go } => {
            run_testimonials(config, elapsed_ms.map(Duration::from_millis), &steps, go)
        }
        Commands::Admin { table } => run_admin(config, table),
    }
}

fn run_gallery(config: &Config, events: &[Event]) -> Result<String> {
    let mut state = legio::initialize(config)?;
    for event in events {
        handle_event(&mut state, event)?;
    }
    Ok(ui::render_gallery(&state.compute_viewmodel(), COLUMNS))
}

fn run_chat(config: &Config, text: &str) -> String {
    let mut rng = rand::thread_rng();
    let mut session = ChatSession::new(config.reply_delay());

    if let Some(greeting) = session.open(&mut rng) {
        session.deliver(greeting);
    }
    if let Some(reply) = session.send(text, &mut rng) {
        tracing::debug!(delay_ms = reply.deliver_after.as_millis(), "reply ready");
        session.deliver(reply);
    }
    ui::render_chat(session.messages(), session.is_typing())
}

fn run_testimonials(
    config: &Config,
    elapsed: Option<Duration>,
    steps: &[Direction],
    go: Option<usize>,
) -> Result<String> {
    let mut carousel = Carousel::new(TESTIMONIALS.len())?;
    if let Some(elapsed) = elapsed {
        carousel.elapse(elapsed, config.carousel_interval());
    }
    for step in steps {
        match step {
            Direction::Next => carousel.next(),
            Direction::Previous => carousel.previous(),
        }
    }
    if let Some(index) = go {
        carousel.go_to(index)?;
    }
    Ok(ui::render_carousel(&carousel, TESTIMONIALS, COLUMNS))
}

fn fields(pairs: Vec<(String, String)>) -> BTreeMap<String, String> {
    pairs.into_iter().collect()
}

fn run_admin(config: &Config, table: AdminTable) -> Result<String> {
    let mut panel = AdminPanel::new(JsonStore::new(paths::store_path(config))?);

    match table {
        AdminTable::Gallery { action } => match action.unwrap_or(AdminAction::List) {
            AdminAction::List => Ok(ui::render_gallery_records(&panel.list_gallery()?, COLUMNS)),
            AdminAction::Add { fields: pairs } => {
                let record = panel.save_gallery(None, &GalleryItemForm::from_pairs(&fields(pairs)))?;
                Ok(format!("Added gallery item {}: {}\n", record.id, record.title))
            }
            AdminAction::Update { id, fields: pairs } => {
                let record = panel.save_gallery(Some(id), &GalleryItemForm::from_pairs(&fields(pairs)))?;
                Ok(format!("Updated gallery item {}: {}\n", record.id, record.title))
            }
            AdminAction::Delete { id } => {
                panel.delete_gallery(id)?;
                Ok(format!("Deleted gallery item {id}.\n"))
            }
        },
        AdminTable::Events { action } => match action.unwrap_or(AdminAction::List) {
            AdminAction::List => Ok(ui::render_events(&panel.list_events()?, COLUMNS)),
            AdminAction::Add { fields: pairs } => {
                let event = panel.save_event(None, &EventForm::from_pairs(&fields(pairs)))?;
                Ok(format!("Added event {}: {}\n", event.id, event.title))
            }
            AdminAction::Update { id, fields: pairs } => {
                let event = panel.save_event(Some(id), &EventForm::from_pairs(&fields(pairs)))?;
                Ok(format!("Updated event {}: {}\n", event.id, event.title))
            }
            AdminAction::Delete { id } => {
                panel.delete_event(id)?;
                Ok(format!("Deleted event {id}.\n"))
            }
        },
    }
}
