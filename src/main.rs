//! TaskLoom
//!
//! Interactive command-line todo manager. Todos live in a single SQLite
//! file given on the command line.

use anyhow::{Result, bail};
use clap::Parser;
use std::io;
use taskloom::cli::Cli;
use taskloom::config::ConfigLoader;
use taskloom::db::Database;
use taskloom::logging::{LogTarget, init_logging};
use taskloom::shell::{CommandTable, Outcome, Shell, ShellSettings};
use tracing::{debug, info};

const BANNER: [&str; 5] = [
    "TTTTT    A     SSS   K   K  L       OOO    OOO   M   M  ",
    "  T     A A   S      K  K   L      O   O  O   O  MM MM  ",
    "  T    AAAAA   SSS   KKK    L      O   O  O   O  M M M  ",
    "  T    A   A      S  K  K   L      O   O  O   O  M   M  ",
    "  T    A   A  SSSS   K   K  LLLLL   OOO    OOO   M   M  ",
];

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(&LogTarget::parse(&cli.log), cli.verbose)?;

    let mut loader = ConfigLoader::load(cli.config.as_deref())?;
    if let Some(path) = loader.config_path() {
        debug!(path = %path.display(), "Using config file");
    }

    let config = loader.config_mut();
    if let Some(db_path) = &cli.database {
        config.storage.db_path = Some(db_path.clone());
    }
    if cli.no_banner {
        config.shell.banner = false;
    }
    let config = loader.into_config();

    let Some(db_path) = config.storage.db_path.clone() else {
        bail!("no database path given: pass DATABASE or set storage.db_path / TASKLOOM_DB_PATH");
    };

    if config.shell.banner {
        for line in BANNER {
            println!("{}", line);
        }
    }

    config.ensure_db_dir(&db_path)?;

    let mut db = Database::new(db_path);
    if !db.exists(None) {
        info!(path = %db.path().display(), "Database file not found, creating it");
    }
    db.initialize_schema(None)?;

    let settings = ShellSettings {
        prompt: config.shell.prompt.clone(),
    };
    let mut shell = Shell::new(
        db,
        CommandTable::default(),
        settings,
        io::stdin().lock(),
        io::stdout(),
    );

    match shell.run()? {
        Outcome::Exit => std::process::exit(0),
        outcome => {
            debug!(?outcome, "Shell stopped");
            Ok(())
        }
    }
}
