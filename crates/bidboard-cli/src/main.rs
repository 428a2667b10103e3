mod dataset;
mod display;
mod session;
mod share;

use std::path::PathBuf;

use anyhow::Context;
use bidboard_core::{SortKey, codec, facets, filter_applications, quick_search, sort_applications};
use bidboard_store::{FileStore, ViewMode};
use clap::{Parser, Subcommand};

use crate::session::FilterSession;

#[derive(Parser)]
#[command(name = "bidboard", version, about = "Filter and track procurement applications")]
struct Cli {
    /// Applications dataset (JSON array).
    #[arg(long, global = true, default_value = "data/applications.json")]
    data: PathBuf,

    /// Persisted session state.
    #[arg(long, global = true, default_value = ".bidboard/state.json")]
    state: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show applications matching the applied criteria.
    List {
        /// Sort key: dueDate, percentComplete, or fitScore.
        #[arg(long)]
        sort: Option<SortKey>,

        /// Ephemeral quick-search within the filtered results (not persisted).
        #[arg(long)]
        search: Option<String>,

        /// Override the persisted view for this invocation.
        #[arg(long)]
        view: Option<ViewMode>,

        /// Share query string, e.g. "filters=%7B...%7D". Wins over persisted criteria.
        #[arg(long)]
        query: Option<String>,
    },

    /// Validate, apply, and persist criteria; prints the share query string.
    Apply {
        /// Criteria as a JSON document.
        #[arg(long)]
        filters: String,
    },

    /// Reset criteria to the empty default and apply.
    Reset,

    /// Save or load the criteria preset.
    Preset {
        #[command(subcommand)]
        action: PresetAction,
    },

    /// Persist the preferred results view.
    View { mode: ViewMode },

    /// Mark an application submitted and write the dataset back.
    Submit { id: String },

    /// List the distinct filterable values in the dataset.
    Facets,
}

#[derive(Subcommand)]
enum PresetAction {
    /// Save the currently applied criteria as the preset.
    Save,
    /// Load the preset and apply it.
    Load,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let store = FileStore::open(&cli.state)
        .with_context(|| format!("opening state store at {}", cli.state.display()))?;

    match cli.command {
        Command::List {
            sort,
            search,
            view,
            query,
        } => {
            let apps = dataset::load(&cli.data)?;
            let session = FilterSession::start(store, query.as_deref());
            let today = chrono::Local::now().date_naive();

            let filtered = filter_applications(&apps, session.applied(), today);
            let refined = match &search {
                Some(term) => quick_search(&filtered, term),
                None => filtered,
            };
            let sorted = sort_applications(&refined, sort.unwrap_or_default());

            match view.unwrap_or_else(|| session.view_mode()) {
                ViewMode::Cards => display::print_cards(&sorted),
                ViewMode::Table => display::print_table(&sorted),
            }
            display::print_summary(&sorted);
        }

        Command::Apply { filters } => {
            let criteria = codec::decode(&filters)
                .context("filters are not a usable criteria document")?;
            let mut session = FilterSession::start(store, None);
            session.set_draft(criteria);
            match session.apply()? {
                Some(link) => println!("applied; share link query: ?{link}"),
                None => println!("applied; criteria are empty, share link cleared"),
            }
        }

        Command::Reset => {
            let mut session = FilterSession::start(store, None);
            session.reset()?;
            println!("criteria reset");
        }

        Command::Preset { action } => {
            let mut session = FilterSession::start(store, None);
            match action {
                PresetAction::Save => {
                    session.save_preset()?;
                    println!("preset saved");
                }
                PresetAction::Load => {
                    session.load_preset()?;
                    println!("preset loaded and applied");
                }
            }
        }

        Command::View { mode } => {
            let mut session = FilterSession::start(store, None);
            session.set_view_mode(mode)?;
            println!("view set to {mode}");
        }

        Command::Submit { id } => {
            let mut apps = dataset::load(&cli.data)?;
            let app = apps
                .iter_mut()
                .find(|app| app.id == id)
                .with_context(|| format!("no application with id {id}"))?;
            app.mark_submitted();
            dataset::save(&cli.data, &apps)?;
            println!("{id} marked submitted");
        }

        Command::Facets => {
            let apps = dataset::load(&cli.data)?;
            display::print_facets(&facets(&apps));
        }
    }

    Ok(())
}
