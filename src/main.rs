use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use aula::bmi::BmiTracker;
use aula::config::Settings;
use aula::contacts::ContactBook;
use aula::expenses::ExpenseLedger;
use aula::library::Library;
use aula::menu::{self, Console};
use aula::notes::{local_now, NoteBook};
use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Exercise {
    Library,
    Temperature,
    Text,
    Contacts,
    Guess,
    Notes,
    Bmi,
    Expenses,
}

#[derive(Parser, Clone, Debug)]
#[clap(author, version, about = "Classroom exercises: record stores, converters and console menus", long_about = None)]
struct Args {
    #[clap(value_enum)]
    exercise: Exercise,

    /// Directory for exported notes and the expense snapshot.
    #[clap(long, env = "AULA_DATA_DIR", default_value = ".")]
    data_dir: PathBuf,

    /// Fixed seed for the guessing game.
    #[clap(long)]
    seed: Option<u64>,

    #[clap(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let settings = Settings {
        data_dir: args.data_dir,
        seed: args.seed,
        verbose: args.verbose,
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(settings.log_directive()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true)
        .with_writer(io::stderr)
        .init();

    let mut console = Console::new(io::stdin().lock(), io::stdout().lock());
    match launch(args.exercise, &settings, &mut console) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("aula: {e}");
            ExitCode::FAILURE
        }
    }
}

fn launch<R: BufRead, W: Write>(exercise: Exercise, settings: &Settings, console: &mut Console<R, W>) -> aula::Result<()> {
    info!(?exercise, data_dir = %settings.data_dir.display(), "starting");
    match exercise {
        Exercise::Library => menu::library::run(console, &mut Library::new())?,
        Exercise::Temperature => menu::temperature::run(console)?,
        Exercise::Text => menu::text::run(console)?,
        Exercise::Contacts => menu::contacts::run(console, &mut ContactBook::new())?,
        Exercise::Guess => {
            let mut rng = match settings.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            menu::guess::run(console, &mut rng)?
        }
        Exercise::Notes => menu::notes::run(console, &mut NoteBook::new(), &settings.notes_export_path())?,
        Exercise::Bmi => menu::bmi::run(console, &mut BmiTracker::new())?,
        Exercise::Expenses => {
            let path = settings.expenses_path();
            let mut ledger = ExpenseLedger::load(&path, local_now)?;
            menu::expenses::run(console, &mut ledger, Some(&path))?
        }
    }
    Ok(())
}
