use std::io::IsTerminal;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands, TaskId};
use crate::display::{
    print_centered, print_error, print_greeting, print_insert_or_delete, print_quote, print_tasks,
    print_update, print_warning,
};
use crate::error::{Error, Result, TaskError};
use crate::model::SettingsDocument;
use crate::ops;
use crate::quotes::{QUOTES, pick_random};
use crate::storage::{SettingsStore, default_config_dir};
use crate::theme::Theme;
use crate::util::{confirm, prompt_input};

pub fn run() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    let theme = Theme::from_env(resolve_color(&cli));
    let dir = cli.config_dir.clone().unwrap_or_else(default_config_dir);
    let store = SettingsStore::new(dir);
    tracing::debug!(path = %store.path().display(), "using settings file");

    match dispatch(cli.command, &store, &theme) {
        Ok(()) => ExitCode::SUCCESS,
        Err(Error::ConfigCorrupt { path, source }) => {
            eprintln!("{}: {source}", path.display());
            print_error("Failed while loading configuration", &theme);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("pls: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("PLS_LOG").unwrap_or_else(|_| EnvFilter::new("off"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}

fn resolve_color(cli: &Cli) -> bool {
    !cli.no_color && std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
}

fn dispatch(command: Option<Commands>, store: &SettingsStore, theme: &Theme) -> Result<()> {
    let Some(command) = command else {
        return show(store, theme);
    };

    match command {
        Commands::Tasks => print_tasks(&store.load()?, true, theme),
        Commands::Add { task } => add(store, theme, &task)?,
        Commands::Edit { id, task, yes } => edit(store, theme, &id, &task, yes)?,
        Commands::Done { id } => done(store, theme, id.get())?,
        Commands::Undone { id } => undone(store, theme, id.get())?,
        Commands::Delete { id } => delete(store, theme, id.get())?,
        Commands::Move { from, to } => move_task(store, theme, from.get(), to.get())?,
        Commands::Swap { a, b } => swap(store, theme, a.get(), b.get())?,
        Commands::Clear { yes } => clear(store, theme, yes)?,
        Commands::Clean { yes } => clean(store, theme, yes)?,
        Commands::CountDone => println!("{}", store.count_done()?),
        Commands::CountUndone => println!("{}", store.count_undone()?),

        Commands::Callme { name } => {
            store.update(|doc| {
                doc.user_name = name;
                Ok(())
            })?;
            print_centered("Thanks for letting me know your name!", theme, theme.msg_pending);
        }

        Commands::Setup => setup(store, theme)?,

        Commands::TasksProgress(toggle) => {
            store.update(|doc| {
                doc.show_task_progress = toggle.enabled();
                Ok(())
            })?;
            print_centered("Thanks for letting me know that!", theme, theme.msg_pending);
        }

        Commands::Quotes(toggle) => {
            store.update(|doc| {
                doc.show_quotes = toggle.enabled();
                Ok(())
            })?;
            print_centered("Thanks for letting me know that!", theme, theme.msg_pending);
        }

        Commands::Config => println!("{}", store.path().display()),

        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(shell, &mut cmd, name, &mut std::io::stdout());
        }

        Commands::Version => println!("pls CLI Version: {}", env!("CARGO_PKG_VERSION")),
    }

    Ok(())
}

/// Separate validation refusals from store failures.
fn outcome<T>(result: Result<T>) -> Result<std::result::Result<T, TaskError>> {
    match result {
        Ok(value) => Ok(Ok(value)),
        Err(Error::Task(e)) => Ok(Err(e)),
        Err(e) => Err(e),
    }
}

fn show(store: &SettingsStore, theme: &Theme) -> Result<()> {
    if !store.exists() {
        return setup(store, theme);
    }

    let doc = store.load()?;
    let name = match doc.user_name.trim() {
        "" => "friend",
        name => name,
    };
    print_greeting(name, theme);
    if doc.show_quotes {
        if let Some(quote) = pick_random(QUOTES) {
            print_quote(quote, theme);
        }
    }
    print_tasks(&doc, false, theme);
    Ok(())
}

fn setup(store: &SettingsStore, theme: &Theme) -> Result<()> {
    let user_name = prompt_input("Hello! What can I call you?: ").unwrap_or_default();
    let show_task_progress = confirm("Do you want to show tasks progress?", true);
    let show_quotes = confirm("Do you want to show quotes?", true);

    let doc = SettingsDocument {
        user_name: user_name.trim().to_string(),
        initial_setup_done: true,
        show_task_progress,
        show_quotes,
        tasks: Vec::new(),
    };
    store.replace(&doc)?;
    tracing::info!(path = %store.path().display(), "setup complete");

    println!();
    print_centered("Thanks for letting me know your name!", theme, theme.msg_pending);
    print_centered("If you wanna change your name later, please use:", theme, theme.hint);
    print_centered("pls callme <Your Name Goes Here>", theme, theme.quote);
    print_centered(
        "If you need to disable or enable the task progress bar later, please use:",
        theme,
        theme.hint,
    );
    print_centered("pls tasks-progress --show | --no-show", theme, theme.quote);
    print_centered(
        "If you need to disable or enable quotes later, please use:",
        theme,
        theme.hint,
    );
    print_centered("pls quotes --show | --no-show", theme, theme.quote);
    print_centered(
        "To apply the changes restart the terminal or use this command:",
        theme,
        theme.hint,
    );
    print_centered("pls", theme, theme.quote);
    Ok(())
}

fn add(store: &SettingsStore, theme: &Theme, task: &str) -> Result<()> {
    store.update(|doc| Ok(ops::add(doc, task)))?;
    print_insert_or_delete(&format!("Added \"{task}\" to the list"), theme);
    print_tasks(&store.load()?, false, theme);
    Ok(())
}

fn edit(store: &SettingsStore, theme: &Theme, id: &TaskId, task: &str, yes: bool) -> Result<()> {
    let result = outcome(store.update(|doc| {
        let old = ops::edit(doc, id.get(), task)?;
        println!("Old Task: {old}");
        println!("Edited Task: {task}");
        if yes || confirm(&format!("Are you sure you want to edit Task #{id}?"), false) {
            Ok(())
        } else {
            Err(TaskError::NoUpdate.into())
        }
    }))?;

    match result {
        Ok(()) => print_update("Updated Task List", theme),
        Err(TaskError::NoTasks) => {
            print_error("Currently, you have no tasks to edit 📝", theme);
            return Ok(());
        }
        Err(TaskError::InvalidId(_)) => {
            print_error(
                &format!("Task #{id} was not found, pls choose an existing ID"),
                theme,
            );
            return Ok(());
        }
        Err(_) => print_warning("No Updates Made", theme),
    }
    print_tasks(&store.load()?, true, theme);
    Ok(())
}

fn done(store: &SettingsStore, theme: &Theme, id: usize) -> Result<()> {
    match outcome(store.update(|doc| Ok(ops::done(doc, id)?)))? {
        Ok(()) => {
            print_update("Updated Task List", theme);
            print_tasks(&store.load()?, false, theme);
        }
        Err(TaskError::NoTasks) => print_error("Sorry, There are no tasks to mark as done", theme),
        Err(TaskError::InvalidId(_)) => print_error(
            "Are you sure you gave me the correct ID to mark as done?",
            theme,
        ),
        Err(TaskError::NoUpdate) => {
            print_warning("No Updates Made, Task Already Done", theme);
            print_tasks(&store.load()?, false, theme);
        }
        Err(TaskError::AlreadyComplete) => print_update("All tasks are already completed!", theme),
    }
    Ok(())
}

fn undone(store: &SettingsStore, theme: &Theme, id: usize) -> Result<()> {
    match outcome(store.update(|doc| Ok(ops::undone(doc, id)?)))? {
        Ok(()) => {
            print_update("Updated Task List", theme);
            print_tasks(&store.load()?, false, theme);
        }
        Err(TaskError::NoTasks) => {
            print_error("Sorry, There are no tasks to mark as undone", theme)
        }
        Err(TaskError::InvalidId(_)) => print_error(
            "Are you sure you gave me the correct ID to mark as undone?",
            theme,
        ),
        Err(_) => {
            print_warning("No Updates Made, Task Still Pending", theme);
            print_tasks(&store.load()?, false, theme);
        }
    }
    Ok(())
}

fn delete(store: &SettingsStore, theme: &Theme, id: usize) -> Result<()> {
    match outcome(store.update(|doc| Ok(ops::delete(doc, id)?)))? {
        Ok(task) => {
            print_insert_or_delete(&format!("Deleted \"{}\"", task.name), theme);
            print_tasks(&store.load()?, true, theme);
        }
        Err(TaskError::NoTasks) => print_error("Sorry, There are no tasks left to delete", theme),
        Err(_) => print_error("Are you sure you gave me the correct ID to delete?", theme),
    }
    Ok(())
}

fn move_task(store: &SettingsStore, theme: &Theme, from: usize, to: usize) -> Result<()> {
    match outcome(store.update(|doc| Ok(ops::move_task(doc, from, to)?)))? {
        Ok(()) => {
            print_update("Updated Task List", theme);
            print_tasks(&store.load()?, true, theme);
        }
        Err(TaskError::NoTasks) => {
            print_error("Sorry, cannot move task as the Task list is empty", theme)
        }
        Err(TaskError::NoUpdate) => print_warning("No Updates Made", theme),
        Err(_) => print_error("Please check the entered ID's values", theme),
    }
    Ok(())
}

fn swap(store: &SettingsStore, theme: &Theme, a: usize, b: usize) -> Result<()> {
    match outcome(store.update(|doc| Ok(ops::swap(doc, a, b)?)))? {
        Ok(()) => {
            print_update("Updated Task List", theme);
            print_tasks(&store.load()?, true, theme);
        }
        Err(TaskError::NoTasks) => {
            print_error("Sorry, cannot swap tasks as the Task list is empty", theme)
        }
        Err(TaskError::NoUpdate) => print_warning("No Updates Made", theme),
        Err(_) => print_error("Are you sure you gave me the correct ID to swap?", theme),
    }
    Ok(())
}

fn clear(store: &SettingsStore, theme: &Theme, yes: bool) -> Result<()> {
    if !yes && !confirm("Are you sure you want to delete all tasks?", false) {
        println!("Aborted!");
        return Ok(());
    }
    store.update(|doc| Ok(ops::clear(doc)))?;
    print_update("Task List Deleted", theme);
    Ok(())
}

fn clean(store: &SettingsStore, theme: &Theme, yes: bool) -> Result<()> {
    if !yes && !confirm("Are you sure you want to delete all done tasks?", false) {
        println!("Aborted!");
        return Ok(());
    }
    store.update(|doc| Ok(ops::clean(doc)))?;
    print_update("Done Tasks Deleted", theme);
    Ok(())
}
