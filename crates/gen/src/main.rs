// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
use clap::Parser;
use log::error;
use std::{path::PathBuf, process::ExitCode};

#[derive(Debug, Parser)]
struct Cli {
    /// The hand sizes to generate.
    #[clap(long, short, value_delimiter = ',', default_values_t = [2, 3, 4, 5],
           value_parser = clap::value_parser!(u8).range(2..=5))]
    sizes: Vec<u8>,
    /// The output directory.
    #[clap(long, short, default_value = ".")]
    output: PathBuf,
    /// Check every hand against the generated tables.
    #[clap(long)]
    verify: bool,
}

fn main() -> ExitCode {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let config = pokerank_gen::Config {
        sizes: cli.sizes.into_iter().map(usize::from).collect(),
        output: cli.output,
        verify: cli.verify,
    };

    if let Err(e) = pokerank_gen::run(&config) {
        error!("{e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
