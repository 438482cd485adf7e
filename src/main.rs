#![allow(clippy::doc_markdown)]
#![doc = include_str!("../README.md")]

mod cli;
mod core;
mod fmt;
mod prelude;
mod quantity;
mod tables;

use clap::{Parser, crate_version};

use crate::{cli::Args, core::Evaluator, prelude::*};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    let args = Args::parse();
    tracing_subscriber::fmt()
        .without_time()
        .compact()
        .with_max_level(args.log_level())
        .with_writer(std::io::stderr)
        .init();
    info!(version = crate_version!(), "starting…");

    let evaluator = Evaluator::new(args.dataset.load()?);
    args.command.run(&evaluator)?;

    info!("done!");
    Ok(())
}
