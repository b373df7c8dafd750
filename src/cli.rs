// src/cli.rs
use std::{path::PathBuf, time::Duration};

use clap::{Parser, Subcommand};

use crate::{
    config::{consts::*, options::{AppOptions, BackendOptions}},
    core::{Backend, HttpBackend},
    data::AnalysisResult,
    error::AnalysisError,
    file,
    panel::{InputMode, InputPanel},
    progress::Progress,
    results::{Preview, Summary},
};

#[derive(Debug, Parser)]
#[command(name = "cli", version, about = "Submit URLs or feature CSVs to the phishing classifier")]
pub struct Cli {
    /// Backend base URL
    #[arg(long, env = ENV_BACKEND_URL, default_value = DEFAULT_BACKEND_URL)]
    pub backend: String,

    /// Give up after N seconds (default: wait as long as it takes)
    #[arg(long, env = ENV_TIMEOUT_SECS)]
    pub timeout_secs: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Classify a single URL
    Url {
        url: String,
        #[command(flatten)]
        out: OutputArgs,
    },
    /// Classify every row of a 30-feature CSV
    Csv {
        file: PathBuf,
        #[command(flatten)]
        out: OutputArgs,
    },
    /// Ask the backend to retrain its model
    Train,
}

#[derive(Debug, clap::Args)]
pub struct OutputArgs {
    /// Write the full results as CSV (a trailing '/' means directory)
    #[arg(short, long)]
    pub out: Option<String>,

    /// Print the whole table instead of the preview
    #[arg(long)]
    pub full: bool,
}

pub fn run() -> Result<(), AnalysisError> {
    run_with(Cli::parse())
}

pub fn run_with(cli: Cli) -> Result<(), AnalysisError> {
    let mut opts = AppOptions::default();
    opts.backend = BackendOptions::new(
        &cli.backend,
        cli.timeout_secs.filter(|&n| n > 0).map(Duration::from_secs),
    );
    let backend = HttpBackend::new(&opts.backend)?;
    logf!("CLI: backend={} command={:?}", backend.base_url(), cli.command);

    let mut panel = InputPanel::new();
    let out = match cli.command {
        Command::Train => {
            let body = backend.train()?;
            println!("{}", body.trim());
            return Ok(());
        }
        Command::Url { url, out } => {
            panel.mode = InputMode::Url;
            panel.url_input = url;
            out
        }
        Command::Csv { file, out } => {
            panel.mode = InputMode::Csv;
            panel.csv_path = Some(file);
            out
        }
    };

    let mut prog = CliProgress;
    let result = panel.submit(&backend, Some(&mut prog))?;

    print!("{}", render_summary(&result));
    println!();
    if out.full {
        let (headers, rows) = crate::export::export_table(&result);
        print!("{}", render_table(&headers, &rows));
    } else {
        let preview = Preview::of(&result);
        let rows: Vec<Vec<String>> = preview.rows.iter().map(|r| r.cells.clone()).collect();
        print!("{}", render_table(&preview.headers, &rows));
        if preview.more_features > 0 {
            println!("... and {} more features", preview.more_features);
        }
    }

    if let Some(o) = out.out {
        opts.export.set_path(&o);
        let written = file::write_export(opts.export.out_path(), &result)?;
        eprintln!("Wrote {}", written.display());
    }
    Ok(())
}

struct CliProgress;
impl Progress for CliProgress {
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
}

/// Stat lines, same numbers as the GUI cards.
pub fn render_summary(result: &AnalysisResult) -> String {
    let s = Summary::of(result);
    match result {
        AnalysisResult::Single(u) => format!(
            "URL:        {}\nPrediction: {}\nConfidence: {}\n",
            u.url,
            u.prediction(),
            u.confidence
        ),
        AnalysisResult::Batch(_) => {
            let mut txt = format!(
                "Total Analyzed:    {}\nPhishing Detected: {} ({:.1}%)\nLegitimate:        {} ({:.1}%)\n",
                s.total,
                s.phishing,
                s.phishing_pct(),
                s.legitimate,
                s.legitimate_pct()
            );
            if s.unrecognized() > 0 {
                txt.push_str(&format!("Unrecognized:      {}\n", s.unrecognized()));
            }
            txt
        }
    }
}

/// Plain left-aligned text table.
pub fn render_table(headers: &[String], rows: &[Vec<String>]) -> String {
    let cols = headers.len().max(rows.iter().map(Vec::len).max().unwrap_or(0));
    let mut widths = vec![0usize; cols];
    for r in std::iter::once(headers).chain(rows.iter().map(Vec::as_slice)) {
        for (i, c) in r.iter().enumerate() {
            widths[i] = widths[i].max(c.chars().count());
        }
    }

    let line = |r: &[String]| -> String {
        let cells: Vec<String> = (0..cols)
            .map(|i| {
                let c = r.get(i).map(String::as_str).unwrap_or("");
                format!("{:<w$}", c, w = widths[i])
            })
            .collect();
        join!(cells.join("  ").trim_end(), "\n")
    };

    let mut out = line(headers);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&join!(rule.join("  ").as_str(), "\n"));
    for r in rows {
        out.push_str(&line(r));
    }
    out
}
