//! Command-line inspector for the native bookmark store
//!
//! Pages and menus come from a JSON host snapshot (`--snapshot`), the same
//! format `SnapshotHost` reads.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};

use crate::config::StoreConfig;
use crate::domain::models::PinKey;
use crate::domain::services::{resolve_current_page, FavoriteApps, PinBoard};
use crate::infrastructure::host::SnapshotHost;
use crate::infrastructure::storage::{BookmarkStore, FileStore};
use crate::shared::events::NotificationBus;

#[derive(Parser)]
#[command(name = "nova")]
#[command(about = "Inspect and edit Nova favorite apps and pinned pages")]
pub struct Cli {
    /// Store file (defaults to $NOVA_STORE_PATH, then the user data dir)
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Favorite apps
    Favorites {
        #[command(subcommand)]
        action: FavoritesCommands,
    },
    /// Pinned pages
    Pins {
        #[command(subcommand)]
        action: PinsCommands,
    },
    /// Print the page a host snapshot is showing
    Resolve {
        #[arg(long)]
        snapshot: PathBuf,
    },
}

#[derive(Subcommand)]
pub enum FavoritesCommands {
    /// Print stored favorite app ids
    List,
    /// Add or remove an app id
    Toggle { app_id: i64 },
    /// Print favorite apps that exist in the snapshot
    Resolve {
        #[arg(long)]
        snapshot: PathBuf,
    },
}

#[derive(Subcommand)]
pub enum PinsCommands {
    /// Print pinned pages
    List,
    /// Pin the snapshot's current page
    Pin {
        #[arg(long)]
        snapshot: PathBuf,
    },
    /// Remove pins by key (e.g. "12:list:")
    Unpin { key: String },
    /// Print the action a pin navigates to
    Open {
        key: String,
        #[arg(long)]
        snapshot: PathBuf,
    },
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let config = StoreConfig::resolve(cli.store);
    tracing::debug!(store = %config.path.display(), "Using store");
    let store = FileStore::new(config.path);
    let bus = NotificationBus::new();

    match cli.command {
        Commands::Favorites { action } => {
            let mut favorites = FavoriteApps::load(BookmarkStore::new(store), bus);
            match action {
                FavoritesCommands::List => print_json(&favorites.ids())?,
                FavoritesCommands::Toggle { app_id } => {
                    let favorited = favorites.toggle(app_id);
                    println!("app {} {}", app_id, if favorited { "favorited" } else { "removed" });
                }
                FavoritesCommands::Resolve { snapshot } => {
                    let host = load_host(&snapshot)?;
                    print_json(&favorites.resolve_from(&host))?;
                }
            }
        }
        Commands::Pins { action } => {
            let mut board = PinBoard::load(BookmarkStore::new(store), bus);
            match action {
                PinsCommands::List => print_json(&board.pins().to_vec())?,
                PinsCommands::Pin { snapshot } => {
                    let host = load_host(&snapshot)?;
                    if board.pin(&host) {
                        let pins = board.pins();
                        if let Some(pin) = pins.last() {
                            print_json(pin)?;
                        }
                    } else {
                        println!("nothing pinned (no current page, or already pinned)");
                    }
                }
                PinsCommands::Unpin { key } => {
                    let removed = board.unpin_key(&PinKey::from(key.as_str()));
                    println!("{}", if removed { "unpinned" } else { "not pinned" });
                }
                PinsCommands::Open { key, snapshot } => {
                    let host = load_host(&snapshot)?;
                    let pin = board
                        .find(&PinKey::from(key.as_str()))
                        .cloned()
                        .with_context(|| format!("no pin with key {:?}", key))?;
                    board.open(&pin, &host);
                    print_json(&host.dispatched())?;
                }
            }
        }
        Commands::Resolve { snapshot } => {
            let host = load_host(&snapshot)?;
            print_json(&resolve_current_page(&host))?;
        }
    }
    Ok(())
}

fn load_host(path: &Path) -> anyhow::Result<SnapshotHost> {
    SnapshotHost::load(path).with_context(|| format!("failed to load host snapshot {}", path.display()))
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
