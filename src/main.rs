use std::io;

use anyhow::Context;
use clap::Parser;
use log::info;
use searchtable::logger::initialize_logger;
use searchtable::options::CliOpts;
use searchtable::seed::{default_records, load_records};
use searchtable::{SearchTable, Session};

fn main() -> anyhow::Result<()> {
    let options = CliOpts::parse();
    options.validate()?;
    initialize_logger(options.log_level);

    let source = match &options.source {
        Some(path) => load_records(path)
            .with_context(|| format!("loading source records from {}", path.display()))?,
        None => default_records(),
    };

    let mut table = SearchTable::new();
    if !options.empty {
        let inserted = table.bulk_load(source.iter().cloned());
        info!("loaded {} of {} source records", inserted, source.len());
    }

    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout(), source, table);
    session.run()?;
    Ok(())
}
