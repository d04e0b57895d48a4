use std::path::PathBuf;

use example::{Routine, entry::Entry, helper::Helper, sum::Sum};

use clap::{Parser, Subcommand};
use env_logger::{Builder, Target};
use log::LevelFilter;

#[derive(Parser, Debug)]
#[clap(name = "example")]
#[command(version, about)]
struct Args {
    /// Set log filter value [ off, error, warn, info, debug, trace ]
    #[arg(long, default_value_t = LevelFilter::Warn)]
    log_level: LevelFilter,
    /// Also write every printed line to this file as CSV
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a single routine
    Run {
        /// Which routine to run
        #[arg(default_value = "entry")]
        routine: RoutineMode,
    },
    /// Print the sum of two integers
    Sum {
        #[arg(allow_negative_numbers = true)]
        a: i32,
        #[arg(allow_negative_numbers = true)]
        b: i32,
    },
}

#[derive(clap::ValueEnum, Clone, Debug)]
enum RoutineMode {
    /// Greet, run the helper, greet again
    Entry,
    /// Print the first element of both sequences
    Helper,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    Builder::new()
        .filter_level(args.log_level)
        .target(Target::Stderr)
        .init();

    let command = args.command.unwrap_or(Commands::Run {
        routine: RoutineMode::Entry,
    });
    let routine: Box<dyn Routine> = match command {
        Commands::Run { routine } => match routine {
            RoutineMode::Entry => Box::new(Entry::new()),
            RoutineMode::Helper => Box::new(Helper::new()),
        },
        Commands::Sum { a, b } => Box::new(Sum::new(a, b)),
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let lines = routine.execute(&mut out)?;

    if let Some(path) = args.output {
        let mut writer = csv::Writer::from_path(&path)?;
        for line in &lines {
            writer.serialize(line)?;
        }
        writer.flush()?;
        log::info!("wrote {} lines to {}", lines.len(), path.display());
    }
    Ok(())
}
