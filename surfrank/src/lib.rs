pub mod handlers;

// Re-export commonly used handler functions for convenience
pub use handlers::{load_graph_from_file, resolve_input_path, run_rank, run_stats};

// Re-export run and report types from surfrank-core
pub use surfrank_core::report::{ReportData, ReportFormat};
pub use surfrank_core::simulate::SimulateOptions;
