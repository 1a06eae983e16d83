use std::path::PathBuf;

use crate::app::{Controller, Outcome, Route};
use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::config_io;
use crate::io::store::{FileStore, KeyValueStore};
use crate::model::{Config, Filter, ItemList};
use crate::ops::item_ops::ItemError;

/// Errors specific to the command line surface
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("no item matches id '{0}'")]
    UnknownId(String),
    #[error("id prefix '{prefix}' matches {count} items")]
    AmbiguousId { prefix: String, count: usize },
}

/// Where and how a headless command runs
#[derive(Debug, Clone)]
pub struct Session {
    pub data_dir: PathBuf,
    pub key: String,
    pub route: String,
}

impl Session {
    /// Resolve data dir, storage key and start route from flags and config
    pub fn resolve(cli: &Cli, config: &Config) -> Result<Self, config_io::ConfigError> {
        Ok(Session {
            data_dir: config_io::resolve_data_dir(cli.data_dir.as_deref(), config)?,
            key: config.storage.key.clone(),
            route: cli
                .route
                .clone()
                .unwrap_or_else(|| config.ui.default_route.clone()),
        })
    }
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let session = Session::resolve(&cli, config)?;
    let json = cli.json;
    let Some(command) = cli.command else {
        return Err("no subcommand given".into());
    };

    let store = FileStore::new(&session.data_dir);
    let mut controller = Controller::start(store, session.key.clone(), Route::new(session.route))?;

    match command {
        Commands::List(args) => cmd_list(&mut controller, args, json),
        Commands::Add(args) => cmd_add(&mut controller, args, json),
        Commands::Toggle(args) => cmd_toggle(&mut controller, args, json),
        Commands::Rm(args) => cmd_rm(&mut controller, args, json),
        Commands::Edit(args) => cmd_edit(&mut controller, args, json),
        Commands::ToggleAll => {
            let outcome = controller.toggle_all()?;
            report_bulk(&controller, outcome, json)
        }
        Commands::ClearCompleted => {
            let outcome = controller.clear_completed()?;
            report_bulk(&controller, outcome, json)
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Find the one item whose id starts with `prefix`. An exact match wins
/// even when it is also a prefix of other ids.
pub fn resolve_id(items: &ItemList, prefix: &str) -> Result<String, CliError> {
    if items.contains(prefix) {
        return Ok(prefix.to_string());
    }
    let matches: Vec<&str> = items
        .iter()
        .map(|item| item.id.as_str())
        .filter(|id| !prefix.is_empty() && id.starts_with(prefix))
        .collect();
    match matches.as_slice() {
        [id] => Ok(id.to_string()),
        [] => Err(CliError::UnknownId(prefix.to_string())),
        many => Err(CliError::AmbiguousId {
            prefix: prefix.to_string(),
            count: many.len(),
        }),
    }
}

fn print_change<S: KeyValueStore>(
    controller: &Controller<S>,
    id: &str,
    changed: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let out = ChangeJson {
        changed,
        item: controller.items().get(id).map(item_to_json),
        remaining: controller.items().remaining(),
    };
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn report_bulk<S: KeyValueStore>(
    controller: &Controller<S>,
    outcome: Outcome,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let changed = match outcome {
        Outcome::Unchanged(ItemError::Unchanged) => false,
        Outcome::Unchanged(e) => return Err(e.into()),
        _ => true,
    };
    if json {
        let out = ChangeJson {
            changed,
            item: None,
            remaining: controller.items().remaining(),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else if changed {
        println!("{}", controller.view().count_text());
    } else {
        println!("nothing to change");
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_list<S: KeyValueStore>(
    controller: &mut Controller<S>,
    args: ListArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(filter) = args.filter {
        controller.navigate(Filter::from(filter).route());
    }
    let model = controller.view().view_model();

    if json {
        println!("{}", serde_json::to_string_pretty(&list_to_json(model))?);
    } else {
        for item in &model.visible {
            println!("{}", format_item_line(item));
        }
        println!("{}", model.count_text());
    }
    Ok(())
}

fn cmd_add<S: KeyValueStore>(
    controller: &mut Controller<S>,
    args: AddArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = args.text.join(" ");
    let id = match controller.add(&text)? {
        Outcome::Added(id) => id,
        Outcome::Unchanged(e) => return Err(e.into()),
        Outcome::Changed => return Err("add did not create an item".into()),
    };
    if json {
        print_change(controller, &id, true)?;
    } else {
        println!("{}", id);
    }
    Ok(())
}

fn cmd_toggle<S: KeyValueStore>(
    controller: &mut Controller<S>,
    args: IdArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let id = resolve_id(controller.items(), &args.id)?;
    if let Outcome::Unchanged(e) = controller.toggle(&id)? {
        return Err(e.into());
    }
    if json {
        return print_change(controller, &id, true);
    }
    if let Some(item) = controller.items().get(&id) {
        let state = if item.completed { "completed" } else { "active" };
        println!("{} \u{2192} {}", short_id(&id), state);
    }
    Ok(())
}

fn cmd_rm<S: KeyValueStore>(
    controller: &mut Controller<S>,
    args: IdArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let id = resolve_id(controller.items(), &args.id)?;
    if let Outcome::Unchanged(e) = controller.remove(&id)? {
        return Err(e.into());
    }
    if json {
        print_change(controller, &id, true)
    } else {
        println!("removed {}", short_id(&id));
        Ok(())
    }
}

fn cmd_edit<S: KeyValueStore>(
    controller: &mut Controller<S>,
    args: EditArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let id = resolve_id(controller.items(), &args.id)?;
    let changed = match controller.edit(&id, &args.text.join(" "))? {
        Outcome::Unchanged(ItemError::Unchanged) => false,
        Outcome::Unchanged(e) => return Err(e.into()),
        _ => true,
    };
    if json {
        return print_change(controller, &id, changed);
    }
    if let Some(item) = controller.items().get(&id) {
        println!("{}", format_item_line(item));
    }
    Ok(())
}
