use clap::Parser;
use colored::Colorize;
use hangar::config::Config;
use hangar::console::{COMMANDS, Console, Outcome};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::{Context, Editor, Helper, Highlighter, Hinter, Validator};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hangar", about = "Control tower console for a single airport")]
struct Args {
    /// Path to a JSON scenario file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Hangar capacity, overrides the scenario file
    #[arg(long)]
    capacity: Option<usize>,

    /// Seed for the weather, for reproducible sessions
    #[arg(long)]
    seed: Option<u64>,

    /// Log every command to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Helper, Hinter, Highlighter, Validator)]
pub struct CompleteHelper {
    pub commands: Vec<String>,
}

impl Completer for CompleteHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, _pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Pair>)> {
        let candidates = self
            .commands
            .iter()
            .filter(|cmd| cmd.starts_with(line))
            .map(|cmd| Pair {
                display: cmd.clone(),
                replacement: format!("{} ", cmd),
            })
            .collect();

        Ok((0, candidates))
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "hangar=debug" } else { "hangar=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // stdout belongs to the prompt
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = match &args.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::default(),
    }
    .with_overrides(args.capacity, args.seed)?;
    tracing::debug!(?config, "configuration loaded");

    let mut console = Console::new(config)?;
    println!(
        "Tower online. Hangar capacity {}.",
        console.airport().capacity()
    );

    let rl_config = rustyline::Config::builder()
        .history_ignore_space(true)
        .completion_type(rustyline::CompletionType::List)
        .build();

    let helper = CompleteHelper {
        commands: COMMANDS.iter().map(|c| c.to_string()).collect(),
    };

    let mut rl = Editor::with_config(rl_config)?;
    rl.set_helper(Some(helper));

    loop {
        match rl.readline(">> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() { continue; }

                rl.add_history_entry(trimmed)?;

                match console.execute(trimmed) {
                    Outcome::Done(msg) => println!("{}", msg.green()),
                    Outcome::Rejected(msg) => println!("{}", msg.red()),
                    Outcome::Info(msg) => println!("{}", msg),
                    Outcome::Exit => break,
                }
            },
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            },
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            },
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }
    Ok(())
}
