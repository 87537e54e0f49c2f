// Report generation from rankings

use crate::analysis::GraphSummary;
use crate::rank::RankedNode;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use surfrank_engine::SurfResult;

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ReportFormat {
    Text,
    Json,
    Csv,
    Markdown,
}

impl ReportFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" => Some(ReportFormat::Text),
            "json" => Some(ReportFormat::Json),
            "csv" => Some(ReportFormat::Csv),
            "markdown" | "md" => Some(ReportFormat::Markdown),
            _ => None,
        }
    }
}

/// What the ranked values count
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankMetric {
    Visits,
    InDegree,
}

impl RankMetric {
    pub fn label(&self) -> &'static str {
        match self {
            RankMetric::Visits => "Count",
            RankMetric::InDegree => "In-degree",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunInfo {
    pub damping: f64,
    pub total_steps: u64,
    pub seed: u64,
    pub workers: usize,
    pub elapsed_ms: u64,
}

impl From<&SurfResult> for RunInfo {
    fn from(result: &SurfResult) -> Self {
        Self {
            damping: result.damping,
            total_steps: result.total_steps,
            seed: result.seed,
            workers: result.workers,
            elapsed_ms: result.elapsed.as_millis() as u64,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportData {
    pub source: String,
    pub summary: GraphSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run: Option<RunInfo>,
    pub metric: RankMetric,
    pub rankings: Vec<RankedNode>,
}

pub fn generate_text_report(data: &ReportData) -> String {
    let mut report = String::new();

    report.push_str(RULE);
    report.push('\n');
    match data.metric {
        RankMetric::Visits => report.push_str("                     RANDOM SURFER VISITS\n"),
        RankMetric::InDegree => report.push_str("                     GRAPH STRUCTURE\n"),
    }
    report.push_str(RULE);
    report.push_str("\n\n");

    report.push_str(&format!("File:         {}\n", data.source));
    report.push_str(&format!(
        "Graph order:  {} nodes, size: {} edges\n",
        data.summary.node_count, data.summary.edge_count
    ));
    report.push_str(&format!("Dangling:     {}\n", data.summary.dangling_count));
    report.push_str(&format!(
        "Branching:    max {}, mean {:.2}\n",
        data.summary.max_out_degree, data.summary.mean_branching_factor
    ));
    report.push_str(&format!("Max in-deg:   {}\n", data.summary.max_in_degree));

    if let Some(ref run) = data.run {
        report.push_str(&format!("m:            {}\n", run.damping));
        report.push_str(&format!("Steps:        {}\n", run.total_steps));
        report.push_str(&format!("Seed:         {}\n", run.seed));
        report.push_str(&format!("Workers:      {}\n", run.workers));
        report.push_str(&format!("Elapsed:      {} ms\n", run.elapsed_ms));
    }
    report.push('\n');

    report.push_str(RULE);
    report.push('\n');
    report.push_str(&format!("TOP {}\n", data.rankings.len()));
    report.push_str(RULE);
    report.push_str("\n\n");

    report.push_str(&format!(
        "{:<8}{:>12}{:>16}{:>12}\n",
        "Rank",
        "Node",
        data.metric.label(),
        "Share"
    ));
    for entry in &data.rankings {
        report.push_str(&format!(
            "{:<8}{:>12}{:>16}{:>11.4}%\n",
            entry.rank,
            entry.node,
            entry.value,
            entry.share * 100.0
        ));
    }
    report.push('\n');

    report
}

pub fn generate_json_report(data: &ReportData) -> Result<String, serde_json::Error> {
    let json_report = serde_json::json!({
        "report": {
            "metadata": {
                "generator": "surfrank",
                "version": env!("CARGO_PKG_VERSION"),
                "generated_at": chrono::Utc::now().to_rfc3339(),
                "format": "json"
            },
            "source": data.source,
            "graph": data.summary,
            "run": data.run,
            "metric": data.metric,
            "rankings": data.rankings
        }
    });

    serde_json::to_string_pretty(&json_report)
}

pub fn generate_csv_report(data: &ReportData) -> String {
    let mut report = String::from("rank,node,value,share\n");
    for entry in &data.rankings {
        report.push_str(&format!(
            "{},{},{},{:.6}\n",
            entry.rank, entry.node, entry.value, entry.share
        ));
    }
    report
}

pub fn generate_markdown_report(data: &ReportData) -> String {
    let mut report = String::new();

    report.push_str(&format!("# surfrank report: {}\n\n", data.source));
    report.push_str(&format!(
        "- **Nodes:** {}\n- **Edges:** {}\n- **Dangling:** {}\n",
        data.summary.node_count, data.summary.edge_count, data.summary.dangling_count
    ));
    if let Some(ref run) = data.run {
        report.push_str(&format!(
            "- **m:** {}\n- **Steps:** {}\n- **Seed:** {}\n",
            run.damping, run.total_steps, run.seed
        ));
    }
    report.push('\n');

    report.push_str(&format!("| Rank | Node | {} | Share |\n", data.metric.label()));
    report.push_str("|-----:|-----:|------:|------:|\n");
    for entry in &data.rankings {
        report.push_str(&format!(
            "| {} | {} | {} | {:.4}% |\n",
            entry.rank,
            entry.node,
            entry.value,
            entry.share * 100.0
        ));
    }

    report
}

pub fn render_report(
    data: &ReportData,
    format: &ReportFormat,
) -> Result<String, serde_json::Error> {
    match format {
        ReportFormat::Text => Ok(generate_text_report(data)),
        ReportFormat::Json => generate_json_report(data),
        ReportFormat::Csv => Ok(generate_csv_report(data)),
        ReportFormat::Markdown => Ok(generate_markdown_report(data)),
    }
}

pub fn save_report(content: &str, path: &Path) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}
