mod error;
mod models;
mod network;
mod parser;
mod ui;
mod writer;

use clap::Parser;
use error::Result;
use network::fetch_sources;
use parser::{extract_euroix, extract_peeringdb};
use std::{error::Error, process};
use ui::{cli::Args, output};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("❌ Route server ASN collection failed: {}", e);
        let mut source = e.source();
        while let Some(cause) = source {
            eprintln!("\tcaused by: {}", cause);
            source = cause.source();
        }
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    println!("⏳ Downloading PeeringDB and Euro-IX datasets ...");
    let bodies = fetch_sources(&args.peeringdb_url, &args.euroix_url, &args.retry_policy())?;
    output::print_download_summary(bodies.peeringdb.len(), bodies.euroix.len());

    let peeringdb = extract_peeringdb(&bodies.peeringdb.join("\n"), args.json_policy())?;
    output::print_source_report("PeeringDB", &peeringdb);

    let euroix = extract_euroix(&bodies.euroix);
    output::print_source_report("Euro-IX", &euroix);

    let asns = writer::union(peeringdb.asns, euroix.asns);
    let today = chrono::Local::now().date_naive();
    let path = writer::write_asns(&args.output_dir, today, &asns)?;

    output::print_final_report(&asns, &path);
    Ok(())
}
