use anyhow::{Context, Result};
use clap::ArgMatches;
use colored::Colorize;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use surfrank_core::analysis::{GraphSummary, PageRankSetup};
use surfrank_core::rank::{rank_values, top_n};
use surfrank_core::report::{
    RankMetric, ReportData, ReportFormat, RunInfo, render_report, save_report,
};
use surfrank_core::simulate::{SimulateOptions, SimulateProgressCallback, execute_simulation};
use surfrank_engine::loader::parse_edge_list;
use surfrank_engine::{AdjacencyList, CsrGraph, EngineError};
use tracing::info;

// Helper functions for the rank and stats handlers

/// Joins the data directory and file name, expanding `~` in both.
/// An absolute file name ignores the data directory.
pub fn resolve_input_path(data_dir: &str, file: &str) -> PathBuf {
    let data_dir = shellexpand::tilde(data_dir);
    let file = shellexpand::tilde(file);
    Path::new(data_dir.as_ref()).join(file.as_ref())
}

/// Load and parse an edge-list file into an adjacency list
pub fn load_graph_from_file(path: &Path) -> Result<AdjacencyList, EngineError> {
    let file = File::open(path).map_err(|source| EngineError::FileUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    let edges = parse_edge_list(BufReader::new(file))?;
    let graph = AdjacencyList::build(edges);
    info!(
        "Loaded {}: {} source nodes, {} edges",
        path.display(),
        graph.node_count(),
        graph.edge_count()
    );
    Ok(graph)
}

fn source_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Loads the graph, runs the surfer and ranks the most visited nodes
pub fn run_rank(
    path: &Path,
    options: SimulateOptions,
    top: usize,
    progress_callback: Option<SimulateProgressCallback>,
) -> Result<ReportData> {
    let graph = load_graph_from_file(path)?;
    let csr = CsrGraph::from_adjacency(&graph);
    let result = execute_simulation(&csr, options, progress_callback)
        .with_context(|| format!("Random surf over {} failed", path.display()))?;

    Ok(ReportData {
        source: source_name(path),
        summary: GraphSummary::from_csr(&csr),
        run: Some(RunInfo::from(&result)),
        metric: RankMetric::Visits,
        rankings: top_n(&result.visits, top),
    })
}

/// Loads the graph and reports its structural setup, ranking by in-degree
pub fn run_stats(path: &Path, top: usize) -> Result<ReportData> {
    let graph = load_graph_from_file(path)?;
    if graph.is_empty() {
        return Err(anyhow::Error::new(EngineError::EmptyGraph)
            .context(format!("{} contains no edges", path.display())));
    }

    let setup = PageRankSetup::prepare(&graph);

    Ok(ReportData {
        source: source_name(path),
        summary: setup.summary(),
        run: None,
        metric: RankMetric::InDegree,
        rankings: rank_values(&setup.in_degrees(), top),
    })
}

struct InputArgs {
    path: PathBuf,
    top: usize,
    format: ReportFormat,
    output: Option<PathBuf>,
}

impl InputArgs {
    fn from_matches(sub_matches: &ArgMatches) -> Self {
        let file = sub_matches
            .get_one::<String>("FILE")
            .map(String::as_str)
            .unwrap_or("p2p-Gnutella08-mod.txt");
        let data_dir = sub_matches
            .get_one::<String>("data-dir")
            .map(String::as_str)
            .unwrap_or("PageRankExampleData");
        let format = sub_matches
            .get_one::<String>("format")
            .and_then(|f| ReportFormat::from_str(f))
            .unwrap_or(ReportFormat::Text);

        Self {
            path: resolve_input_path(data_dir, file),
            top: *sub_matches.get_one::<usize>("top").unwrap_or(&10),
            format,
            output: sub_matches.get_one::<PathBuf>("output").cloned(),
        }
    }
}

fn emit_report(data: &ReportData, format: &ReportFormat, output: Option<&Path>) -> Result<()> {
    let report = render_report(data, format).context("Failed to render report")?;

    match output {
        Some(path) => {
            save_report(&report, path)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            println!(
                "{} Report saved to {}",
                "✓".green().bold(),
                path.display().to_string().bright_white()
            );
        }
        None => print!("{}", report),
    }
    Ok(())
}

pub fn handle_rank(sub_matches: &ArgMatches, quiet: bool) -> Result<()> {
    let input = InputArgs::from_matches(sub_matches);
    let options = SimulateOptions {
        damping: *sub_matches.get_one::<f64>("damping").unwrap_or(&0.15),
        steps: *sub_matches.get_one::<u64>("steps").unwrap_or(&10_000),
        seed: sub_matches.get_one::<u64>("seed").copied(),
        workers: *sub_matches.get_one::<usize>("threads").unwrap_or(&1),
        show_progress_bars: !quiet && !sub_matches.get_flag("no-progress"),
    };

    if !quiet {
        println!(
            "{} File: {}",
            "→".blue(),
            input.path.display().to_string().bright_white()
        );
    }

    let progress_callback: Option<SimulateProgressCallback> = if quiet {
        None
    } else {
        Some(Arc::new(|msg: String| {
            println!("{} {}", "→".blue(), msg);
        }))
    };

    let data = run_rank(&input.path, options, input.top, progress_callback)?;
    if !quiet {
        println!("{} Random surf complete\n", "✓".green().bold());
    }

    emit_report(&data, &input.format, input.output.as_deref())
}

pub fn handle_stats(sub_matches: &ArgMatches, quiet: bool) -> Result<()> {
    let input = InputArgs::from_matches(sub_matches);

    if !quiet {
        println!(
            "{} File: {}",
            "→".blue(),
            input.path.display().to_string().bright_white()
        );
    }

    let data = run_stats(&input.path, input.top)?;
    emit_report(&data, &input.format, input.output.as_deref())
}
