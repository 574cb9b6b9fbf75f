//! Handler functions for item CLI commands.
//!
//! Every handler drives a [`ListState`] through the same refresh/mutate
//! cycle the interactive client uses, then turns any recorded error string
//! into a non-zero exit via [`Error::Sync`].

use listra_client::{ClientConfig, HttpStore};
use listra_core::{Item, ItemStore};
use listra_state::ListState;

use crate::cli::{Args, Command, ListArgs};
use crate::config_handlers;
use crate::error::{Error, Result};

/// Dispatch a parsed command line.
pub async fn run(args: Args) -> Result<()> {
    match args.command {
        Command::Config { action } => {
            config_handlers::handle_config_command(args.config.as_deref(), action)
        }
        command => {
            let mut config = ClientConfig::load(args.config.as_deref())?;
            if let Some(url) = args.base_url {
                config.base_url = url;
            }
            tracing::debug!(url = %config.base_url, "using collection resource");
            let store = HttpStore::new(config)?;
            let mut state = ListState::new(store);
            dispatch(command, &mut state).await
        }
    }
}

async fn dispatch<S: ItemStore>(command: Command, state: &mut ListState<S>) -> Result<()> {
    // Every item command starts from a fresh fetch; id allocation and
    // toggling depend on the current remote list.
    state.refresh().await;
    ensure_synced(state)?;

    match command {
        Command::List(args) => cmd_list(state, args),
        Command::Add { text } => cmd_add(state, &text.join(" ")).await,
        Command::Toggle { id } => cmd_toggle(state, id.into()).await,
        Command::Rm { id } => cmd_rm(state, id.into()).await,
        Command::Count => {
            println!("{}", state.len());
            Ok(())
        }
        Command::Config { .. } => unreachable!("handled in run"),
    }
}

/// List items, honoring search and checked-state filters.
fn cmd_list<S: ItemStore>(state: &mut ListState<S>, args: ListArgs) -> Result<()> {
    if let Some(search) = args.search {
        state.set_search(search);
    }

    let visible: Vec<&Item> = state
        .visible_items()
        .into_iter()
        .filter(|item| {
            if args.checked {
                item.checked
            } else if args.unchecked {
                !item.checked
            } else {
                true
            }
        })
        .collect();

    if args.json {
        let json = serde_json::to_string_pretty(&visible).map_err(listra_core::Error::from)?;
        println!("{json}");
        return Ok(());
    }

    for item in &visible {
        println!("{}", render(item));
    }
    println!("{} item(s) total", state.len());
    Ok(())
}

/// Add a new item with the given text.
async fn cmd_add<S: ItemStore>(state: &mut ListState<S>, text: &str) -> Result<()> {
    let text = text.trim();
    if text.is_empty() {
        return Err(listra_core::Error::EmptyItemText.into());
    }

    state.add(text).await;
    ensure_synced(state)?;

    if let Some(item) = state.items().last() {
        println!("Added {}", render(item));
    }
    Ok(())
}

/// Flip the checked flag of an item.
async fn cmd_toggle<S: ItemStore>(state: &mut ListState<S>, id: listra_core::ItemId) -> Result<()> {
    state.toggle(id).await;
    ensure_synced(state)?;

    if let Some(item) = state.items().iter().find(|item| item.id == id) {
        println!("{}", render(item));
    }
    Ok(())
}

/// Delete an item.
async fn cmd_rm<S: ItemStore>(state: &mut ListState<S>, id: listra_core::ItemId) -> Result<()> {
    state.remove(id).await;
    ensure_synced(state)?;
    println!("Deleted item {id}");
    Ok(())
}

/// Turn a recorded error string into a hard failure.
fn ensure_synced<S: ItemStore>(state: &ListState<S>) -> Result<()> {
    match state.last_error() {
        Some(message) => Err(Error::sync(message)),
        None => Ok(()),
    }
}

fn render(item: &Item) -> String {
    let mark = if item.checked { "x" } else { " " };
    format!("[{mark}] {:>4}  {}", item.id.get(), item.text)
}
