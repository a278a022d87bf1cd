use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::bridge::CliBridge;
use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::config_io;
use crate::io::kv_store::{FileStore, StoreBackend};
use crate::io::storage::TaskStorage;
use crate::model::config::Config;
use crate::model::filter::Filter;
use crate::model::task::{Category, NewTask, Priority, parse_date};
use crate::ops::task_ops::TaskStore;
use crate::ops::{actions, projection};

type CmdResult = Result<(), Box<dyn std::error::Error>>;

// ---------------------------------------------------------------------------
// Setup
// ---------------------------------------------------------------------------

/// Load the config from `--config` or the default location. An explicit
/// path must exist; the default one may be missing.
pub fn load_config(path: Option<&Path>) -> Result<Config, Box<dyn std::error::Error>> {
    match path {
        Some(p) if !p.exists() => Err(format!("config file not found: {}", p.display()).into()),
        Some(p) => Ok(config_io::read_config_from(p)?),
        None => Ok(config_io::read_config()?),
    }
}

/// Open the task store backed by the storage file at `path`
pub fn open_store(config: &Config, path: &Path) -> TaskStore<StoreBackend> {
    tracing::debug!(path = %path.display(), key = %config.storage.key, "opening storage");
    let backend = StoreBackend::File(FileStore::new(path));
    TaskStore::open(TaskStorage::with_key(backend, config.storage.key.clone()))
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli, config: &Config, data_path: &Path) -> CmdResult {
    let json = cli.json;
    let mut store = open_store(config, data_path);

    match cli.command {
        None => Err("no command given".into()),
        Some(cmd) => match cmd {
            // Read commands
            Commands::List(args) => cmd_list(&store, args, json),
            Commands::Show(args) => cmd_show(&store, args, json),

            // Write commands
            Commands::Add(args) => cmd_add(&mut store, args, json),
            Commands::Toggle(args) => cmd_toggle(&mut store, args, json),
            Commands::Delete(args) => {
                let stdin = io::stdin();
                cmd_delete(&mut store, args, json, &mut stdin.lock())
            }
        },
    }
}

// ---------------------------------------------------------------------------
// Read handlers
// ---------------------------------------------------------------------------

fn cmd_list(store: &TaskStore<StoreBackend>, args: ListArgs, json: bool) -> CmdResult {
    // Parsing a filter never fails; unknown names become categories
    let filter: Filter = args.filter.parse().unwrap_or_default();
    let tasks = projection::project(store.tasks(), &filter);

    if json {
        let results: Vec<TaskJson> = tasks.iter().map(|t| task_to_json(t)).collect();
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        for task in &tasks {
            println!("{}", format_task_line(task));
        }
        let (open, done) = projection::counts(store.tasks(), &filter);
        if tasks.is_empty() {
            println!("no tasks");
        } else {
            println!();
            println!("{}", format_counts(open, done));
        }
    }
    Ok(())
}

fn cmd_show(store: &TaskStore<StoreBackend>, args: IdArgs, json: bool) -> CmdResult {
    let task = store
        .get(args.id)
        .ok_or_else(|| format!("task not found: {}", args.id))?;
    if json {
        println!("{}", serde_json::to_string_pretty(&task_to_json(task))?);
    } else {
        for line in format_task_detail(task) {
            println!("{}", line);
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Write handlers
// ---------------------------------------------------------------------------

fn cmd_add(store: &mut TaskStore<StoreBackend>, args: AddArgs, json: bool) -> CmdResult {
    let date = match args.date.as_deref() {
        Some(s) => parse_date(s).map_err(|_| actions::INVALID_DATE_ALERT.to_string())?,
        None => None,
    };
    let priority = match args.priority.as_deref() {
        Some(s) => s.parse::<Priority>()?,
        None => Priority::default(),
    };
    let category = args
        .category
        .as_deref()
        .map(Category::from)
        .unwrap_or_default();

    let new = NewTask {
        title: args.title,
        desc: args.desc.unwrap_or_default(),
        date,
        priority,
        category,
    };
    let mut bridge = CliBridge::new();
    let id = actions::create_task(store, &mut bridge, new)?.ok_or("no task created")?;

    match store.get(id) {
        Some(task) if json => println!("{}", serde_json::to_string_pretty(&task_to_json(task))?),
        _ => println!("{}", id),
    }
    Ok(())
}

fn cmd_toggle(store: &mut TaskStore<StoreBackend>, args: IdArgs, json: bool) -> CmdResult {
    let mut bridge = CliBridge::new();
    let completed = actions::toggle_task(store, &mut bridge, args.id)?
        .ok_or_else(|| format!("task not found: {}", args.id))?;

    if json {
        let out = ToggleJson {
            id: args.id,
            completed,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else if let Some(task) = store.get(args.id) {
        println!("{}", format_task_line(task));
    }
    Ok(())
}

fn cmd_delete(
    store: &mut TaskStore<StoreBackend>,
    args: DeleteArgs,
    json: bool,
    input: &mut dyn BufRead,
) -> CmdResult {
    let title = store
        .get(args.id)
        .map(|t| t.title.clone())
        .ok_or_else(|| format!("task not found: {}", args.id))?;

    if !args.yes {
        // Interactive confirmation
        eprint!("Delete \u{201c}{}\u{201d}? [y/N] ", title);
        io::stderr().flush()?;
        let mut answer = String::new();
        input.read_line(&mut answer)?;
        if !answer.trim().eq_ignore_ascii_case("y") {
            eprintln!("cancelled");
            return Ok(());
        }
    }

    let mut bridge = CliBridge::new();
    let deleted = actions::delete_task(store, &mut bridge, args.id)?;
    if json {
        let out = DeleteJson {
            id: args.id,
            deleted,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("deleted {}", args.id);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_store(dir: &TempDir) -> TaskStore<StoreBackend> {
        open_store(&Config::default(), &dir.path().join("storage.json"))
    }

    #[test]
    fn delete_prompt_declined_keeps_task() {
        let dir = TempDir::new().unwrap();
        let mut store = temp_store(&dir);
        let args = DeleteArgs { id: 2, yes: false };
        cmd_delete(&mut store, args, false, &mut "n\n".as_bytes()).unwrap();
        assert!(store.get(2).is_some());
    }

    #[test]
    fn delete_prompt_accepted_removes_task() {
        let dir = TempDir::new().unwrap();
        let mut store = temp_store(&dir);
        let args = DeleteArgs { id: 2, yes: false };
        cmd_delete(&mut store, args, false, &mut "y\n".as_bytes()).unwrap();
        assert!(store.get(2).is_none());

        // Persisted: a fresh store sees the deletion
        let reopened = temp_store(&dir);
        assert_eq!(reopened.len(), 1);
    }

    #[test]
    fn delete_unknown_id_is_an_error() {
        let dir = TempDir::new().unwrap();
        let mut store = temp_store(&dir);
        let args = DeleteArgs { id: 42, yes: true };
        let err = cmd_delete(&mut store, args, false, &mut "".as_bytes()).unwrap_err();
        assert_eq!(err.to_string(), "task not found: 42");
    }

    #[test]
    fn add_rejects_bad_date_and_priority() {
        let dir = TempDir::new().unwrap();
        let mut store = temp_store(&dir);
        let args = AddArgs {
            title: "x".into(),
            desc: None,
            date: Some("31/12/2025".into()),
            priority: None,
            category: None,
        };
        let err = cmd_add(&mut store, args, false).unwrap_err();
        assert_eq!(err.to_string(), "Invalid date, use YYYY-MM-DD");

        let args = AddArgs {
            title: "x".into(),
            desc: None,
            date: None,
            priority: Some("urgent".into()),
            category: None,
        };
        assert!(cmd_add(&mut store, args, false).is_err());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn add_with_empty_title_fails() {
        let dir = TempDir::new().unwrap();
        let mut store = temp_store(&dir);
        let args = AddArgs {
            title: "   ".into(),
            desc: None,
            date: None,
            priority: None,
            category: None,
        };
        let err = cmd_add(&mut store, args, false).unwrap_err();
        assert_eq!(err.to_string(), "no task created");
    }

    #[test]
    fn explicit_config_must_exist() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(load_config(Some(missing.as_path())).is_err());
    }
}
