// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Pokerank lookup tables generator.
//!
//! Generates the evaluator tables for the configured hand sizes and saves each
//! hand size tables to `tables{size}.bin` in the output directory, the files
//! can be loaded with [TableSet::from_bytes] and installed with
//! [tables::install].
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Result, anyhow, bail};
use log::info;
use std::{
    fs,
    path::{Path, PathBuf},
};

use pokerank_eval::{
    Variant,
    tables::{self, TableSet},
};

/// Generator config.
#[derive(Debug)]
pub struct Config {
    /// The hand sizes to generate.
    pub sizes: Vec<usize>,
    /// The output directory.
    pub output: PathBuf,
    /// Check every hand against the generated tables.
    pub verify: bool,
}

/// Returns the tables file path for a hand size.
pub fn tables_path(dir: &Path, hand_size: usize) -> PathBuf {
    dir.join(format!("tables{hand_size}.bin"))
}

/// Generator entry point.
pub fn run(config: &Config) -> Result<()> {
    if config.sizes.is_empty() {
        bail!("No hand sizes to generate");
    }

    fs::create_dir_all(&config.output)
        .map_err(|e| anyhow!("Cannot create {}: {e}", config.output.display()))?;

    for &hand_size in &config.sizes {
        if !(2..=5).contains(&hand_size) {
            bail!("Invalid hand size {hand_size}");
        }

        let set = TableSet::generate(hand_size);
        for variant in Variant::ALL {
            let t = set.tables(variant);
            info!("{hand_size} cards {variant:?}: {} classes", t.classes());
            for (min, rank) in t.boundaries() {
                info!("  {rank:?} >= {min}");
            }
        }

        if config.verify {
            let checked = set.verify()?;
            info!("Verified {checked} hands");
        }

        let path = tables_path(&config.output, hand_size);
        let bytes = set.to_bytes()?;
        fs::write(&path, &bytes).map_err(|e| anyhow!("Cannot write {}: {e}", path.display()))?;

        // Make sure the saved tables load back.
        let loaded = TableSet::from_bytes(&fs::read(&path)?)?;
        if loaded.hand_size() != hand_size {
            bail!("Bad hand size in {}", path.display());
        }

        info!("Saved {} ({} bytes)", path.display(), bytes.len());
    }

    Ok(())
}

/// Loads and installs the tables saved in a directory, returns the number of
/// installed hand sizes.
pub fn install_dir(dir: &Path) -> Result<usize> {
    let mut installed = 0;
    for hand_size in 2..=5 {
        let path = tables_path(dir, hand_size);
        if !path.exists() {
            continue;
        }

        let set = TableSet::from_bytes(&fs::read(&path)?)?;
        tables::install(set)?;
        installed += 1;
    }

    Ok(installed)
}
