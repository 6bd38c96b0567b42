//! `fql` - renders the FQL a search would send, without contacting Facebook.

mod args;
mod dry_run;

use std::process::ExitCode;

use clap::Parser;
use fql_lib::Error;
use fql_lib::FqlTransport;
use fql_lib::SearchConfig;
use log::debug;
use simplelog::ColorChoice;
use simplelog::Config;
use simplelog::TermLogger;
use simplelog::TerminalMode;

use crate::args::Cli;
use crate::dry_run::DryRun;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = TermLogger::init(
        cli.log_level(),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), Error> {
    let transport = DryRun::new(cli.encode);
    let config = SearchConfig::default().with_fallback_range(cli.fallback_range);
    debug!("Using {:?}", config);

    let mut search = transport.search_with(config).set_table(&cli.table);

    if !cli.columns.is_empty() {
        search = search.set_columns(&cli.columns);
    }
    for filter in &cli.filters {
        search = search.add_filter(filter.as_str());
    }
    for (column, value) in &cli.filter_by {
        search = search.filter_by(column, value.clone());
    }
    for (column, direction) in &cli.sort {
        search = search.add_sort(column, *direction);
    }
    if let Some(range) = cli.range {
        search = search.set_range(range);
    }
    if let Some(start) = cli.start {
        search = search.set_start(start);
    }
    if let Some(page) = cli.page {
        search = search.set_page(page);
    }

    if cli.count {
        search.get_total().await?;
    } else {
        search.get_rows(&cli.group).await?;
    }

    Ok(())
}
