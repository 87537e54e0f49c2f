pub mod analysis;
pub mod rank;
pub mod report;
pub mod simulate;

use colored::Colorize;

pub use analysis::{GraphSummary, PageRankSetup};
pub use rank::{RankedNode, top_n};
pub use simulate::{SimulateOptions, execute_simulation};

pub fn print_banner() {
    println!(
        "{} {}",
        "surfrank".bright_cyan().bold(),
        env!("CARGO_PKG_VERSION").bright_black()
    );
    println!("{}", "random surfer PageRank estimation".bright_black());
    println!();
}
