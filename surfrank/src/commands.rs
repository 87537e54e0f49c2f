use crate::CLAP_STYLING;
use clap::{arg, command};

fn input_args(cmd: clap::Command) -> clap::Command {
    cmd.arg(
        arg!([FILE])
            .required(false)
            .help("Edge-list file, relative to --data-dir unless absolute")
            .default_value("p2p-Gnutella08-mod.txt"),
    )
    .arg(
        arg!(-d --"data-dir" <PATH>)
            .required(false)
            .help("Directory holding the edge-list files")
            .default_value("PageRankExampleData"),
    )
    .arg(
        arg!(-n --"top" <COUNT>)
            .required(false)
            .help("Number of nodes to list")
            .value_parser(clap::value_parser!(usize))
            .default_value("10"),
    )
    .arg(
        arg!(-o --"output" <PATH>)
            .required(false)
            .help("Save report to file (default: display to screen)")
            .value_parser(clap::value_parser!(std::path::PathBuf)),
    )
    .arg(
        arg!(-f --"format" <FORMAT>)
            .required(false)
            .help("Report format: text, json, csv, markdown")
            .value_parser(["text", "json", "csv", "markdown"])
            .default_value("text"),
    )
}

pub(crate) fn command_argument_builder() -> clap::Command {
    clap::Command::new("surfrank")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("surfrank")
        .styles(CLAP_STYLING)
        .arg(arg!(-q --"quiet" "Suppress banner and non-essential output").required(false))
        .arg(
            arg!(-v --"verbose" "Enable debug logging (RUST_LOG overrides)")
                .required(false)
                .global(true),
        )
        .subcommand_required(false)
        .subcommand(
            input_args(
                command!("rank").about(
                    "Estimate node importance with a random surfer walk and list the most \
                visited nodes.",
                ),
            )
            .arg(
                arg!(-m --"damping" <PROBABILITY>)
                    .required(false)
                    .help("Probability of a random jump at each step")
                    .value_parser(clap::value_parser!(f64))
                    .default_value("0.15"),
            )
            .arg(
                arg!(-s --"steps" <STEPS>)
                    .required(false)
                    .help("Number of steps the surfer takes")
                    .value_parser(clap::value_parser!(u64))
                    .default_value("10000"),
            )
            .arg(
                arg!(--"seed" <SEED>)
                    .required(false)
                    .help("Seed for a reproducible walk (default: wall clock)")
                    .value_parser(clap::value_parser!(u64)),
            )
            .arg(
                arg!(-t --"threads" <NUM_WORKERS>)
                    .required(false)
                    .help("Number of independent surfers sharing the step budget")
                    .value_parser(clap::value_parser!(usize))
                    .default_value("1"),
            )
            .arg(
                arg!(--"no-progress")
                    .required(false)
                    .help("Hide the progress bar")
                    .action(clap::ArgAction::SetTrue),
            ),
        )
        .subcommand(input_args(command!("stats").about(
            "Print the structural setup of the graph: dangling nodes, branching factors and \
            the nodes with the most in-links.",
        )))
}
