mod editor;
mod prompt;
mod store;
mod template;

use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, Command};
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};

use prompt::{LinePrompter, TermPrompter};
use store::STORE_FILE_NAME;

fn main() -> Result<()> {
    let env = env_logger::Env::default().default_filter_or("warn");
    env_logger::Builder::from_env(env).init();

    let matches = cli().get_matches();
    let exe = std::env::current_exe()
        .context("Failed to locate the running executable")?;
    let store_path = resolve_store_path(store_arg(&matches), &exe)?;
    log::debug!("Using store {}", store_path.display());

    let stdin = io::stdin();
    if stdin.is_terminal() {
        editor::run(&mut TermPrompter, &store_path)
    } else {
        let mut prompter = LinePrompter::new(stdin.lock(), io::stdout());
        editor::run(&mut prompter, &store_path)
    }
}

fn cli() -> Command {
    Command::new("template-entry")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Add or update a template in templates.json")
        .arg(
            Arg::new("store")
                .long("store")
                .value_name("PATH")
                .help("templates.json to edit (default: next to this executable)")
                .value_parser(clap::value_parser!(PathBuf)),
        )
}

fn store_arg(matches: &ArgMatches) -> Option<PathBuf> {
    matches.get_one::<PathBuf>("store").cloned()
}

/// `--store` when given, otherwise templates.json colocated with the executable.
fn resolve_store_path(store: Option<PathBuf>, exe: &Path) -> Result<PathBuf> {
    if let Some(path) = store {
        return Ok(path);
    }
    let dir = exe
        .parent()
        .context("Executable path has no parent directory")?;
    Ok(dir.join(STORE_FILE_NAME))
}
