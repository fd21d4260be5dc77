/*
 * Copyright (C) the Skippy SVG contributors
 *
 * This file is part of Skippy SVG.
 *
 * Skippy SVG is free software: you can redistribute it and/or modify
 * it under the terms of the GNU Affero General Public License as published
 * by the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * Skippy SVG is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU Affero General Public License for more details.
 *
 * You should have received a copy of the GNU Affero General Public License
 * along with Skippy SVG. If not, see <https://www.gnu.org/licenses/>.
 */

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use tracing::{info, trace, Level};

use skippy_svg::list::DEFAULT_MAX_LEVEL;
use skippy_svg::source::{sample_list, sample_words};
use skippy_svg::{render, DumpNode, Geometry, RenderOptions};

#[derive(Parser)]
#[command(name = "skippy-svg", version)]
#[command(about = "Draw the towers and links of a skip list as SVG")]
struct Cli {
    /// Words to insert, in order; defaults to a sample sentence
    words: Vec<String>,

    /// Seed for tower heights
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Tallest tower the list may grow
    #[arg(long, default_value_t = DEFAULT_MAX_LEVEL)]
    max_level: usize,

    /// Render a JSON node dump instead of building a list
    #[arg(long, value_name = "FILE", conflicts_with = "words")]
    dump: Option<PathBuf>,

    /// Write the node dump as JSON instead of drawing it
    #[arg(long)]
    emit_dump: bool,

    /// Edge length of one tower box
    #[arg(long, default_value_t = 100.0, value_parser = parse_box_size)]
    box_size: f64,

    /// Write to FILE instead of standard output
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Log more; repeat for more detail
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }

    fn nodes(&self) -> Result<Vec<DumpNode>> {
        if let Some(path) = &self.dump {
            let json = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            return serde_json::from_str(&json)
                .with_context(|| format!("parsing {}", path.display()));
        }
        let list = if self.words.is_empty() {
            sample_list(sample_words(), self.seed, self.max_level)
        } else {
            sample_list(&self.words, self.seed, self.max_level)
        };
        Ok(list.dump())
    }
}

fn parse_box_size(arg: &str) -> std::result::Result<f64, String> {
    let size: f64 = arg.parse().map_err(|e| format!("{e}"))?;
    if size.is_finite() && size > 0.0 {
        Ok(size)
    } else {
        Err(format!("box size must be a positive number, got {arg}"))
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(io::stderr)
        .init();

    let nodes = cli.nodes()?;
    trace!(?nodes, "node dump");

    let output = if cli.emit_dump {
        let mut json = serde_json::to_string_pretty(&nodes)?;
        json.push('\n');
        json
    } else {
        let options = RenderOptions {
            geometry: Geometry::with_box_size(cli.box_size),
            ..RenderOptions::default()
        };
        let document =
            render(&nodes, &options).context("cannot draw node dump")?;
        info!(shapes = document.shapes.len(), "rendered diagram");
        document.to_string()
    };

    match &cli.output {
        Some(path) => fs::write(path, output)
            .with_context(|| format!("writing {}", path.display()))?,
        None => io::stdout().lock().write_all(output.as_bytes())?,
    }
    Ok(())
}
