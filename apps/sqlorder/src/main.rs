use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use log::{debug, info};
use sqlorder_core::Config;
use std::io::{BufWriter, Write};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "sqlorder")]
#[command(about = "Order sql files so each one loads after what it requires", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the sql files of a root in dependency order
    Order(OrderArgs),
    /// Check that a sql root has something to load
    Check(Config),
}

#[derive(Debug, Args)]
struct OrderArgs {
    #[command(flatten)]
    config: Config,

    /// Print the load plan as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    // stdio is blocked by LineWriter, use a BufWriter to reduce syscalls.
    // See https://github.com/rust-lang/rust/issues/60673
    let mut stdout = BufWriter::new(std::io::stdout());

    let cli = Cli::parse();
    debug!("Parsed CLI arguments: {:?}", cli.command);

    let start = Instant::now();

    match cli.command {
        Commands::Order(OrderArgs { config, json }) => {
            debug!("Config: root={:?}, json={}", config.root, json);

            match sqlorder_core::build_load_plan(config) {
                Ok(plan) => {
                    sqlorder_core::print_load_order(&mut stdout, &plan, json)?;
                    info!(
                        "Ordered {} files in {}ms",
                        plan.files.len(),
                        start.elapsed().as_millis()
                    );
                    Ok(())
                }
                Err(e) => {
                    stdout.flush()?;
                    sqlorder_core::print_error(&mut std::io::stderr(), &e)?;
                    // Non-zero exit so the surrounding build aborts
                    std::process::exit(1);
                }
            }
        }
        Commands::Check(cfg) => match sqlorder_core::run_check(cfg) {
            Ok(sources) => {
                sqlorder_core::print_check_summary(&mut stdout, &sources)?;
                writeln!(
                    stdout,
                    "\n{} Finished in {}ms.",
                    "●".bright_blue(),
                    start.elapsed().as_millis().to_string().cyan()
                )?;
                stdout.flush()?;
                Ok(())
            }
            Err(e) => {
                stdout.flush()?;
                sqlorder_core::print_error(&mut std::io::stderr(), &e)?;
                std::process::exit(1);
            }
        },
    }
}
