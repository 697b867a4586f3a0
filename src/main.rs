mod dataset;
mod gamma;
mod grouping;
mod report;
mod stats;
mod table;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(version, about)]
struct CLI {
    #[arg(long)]
    data_file: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    Report,

    Export {
        #[arg(long)]
        output: PathBuf,
    },
}

fn main() {
    env_logger::Builder::new()
        .format_timestamp_millis()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(error) = run_cli() {
        log::error!("{error:#?}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<()> {
    let args = CLI::parse();
    log::info!("{args:#?}");

    let records = dataset::load_records(&args.data_file);
    log::info!("loaded {} records", records.len());

    let flavanoid_stats = report::flavanoid_stats(&records);

    let records = gamma::attach_gamma(records);
    let gamma_stats = report::gamma_stats(&records);

    match args.command {
        Command::Report => {
            println!("Class-wise Statistics");
            println!("{}", table::render_table("Flavanoids", &flavanoid_stats));
            println!("Gamma Class-wise Statistics");
            println!("{}", table::render_table("Gamma", &gamma_stats));
        }
        Command::Export { output } => {
            report::save_stats(&output, &flavanoid_stats, &gamma_stats)?;
            log::info!("saved statistics to {output:?}");
        }
    }

    Ok(())
}
