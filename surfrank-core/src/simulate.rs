use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Arc;
use surfrank_engine::surfer::{DEFAULT_DAMPING, DEFAULT_STEPS};
use surfrank_engine::{CsrGraph, EngineError, RandomSurfer, SurfResult};
use tracing::{debug, info};

/// Options for configuring a simulation run
#[derive(Debug, Clone)]
pub struct SimulateOptions {
    /// Teleportation probability
    pub damping: f64,
    pub steps: u64,
    /// Fixed seed; `None` seeds from the wall clock
    pub seed: Option<u64>,
    pub workers: usize,
    pub show_progress_bars: bool,
}

impl Default for SimulateOptions {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            steps: DEFAULT_STEPS,
            seed: None,
            workers: 1,
            show_progress_bars: true,
        }
    }
}

/// Callback for reporting run status messages
pub type SimulateProgressCallback = Arc<dyn Fn(String) + Send + Sync>;

/// Returns the explicit seed, or one derived from the current time
pub fn resolve_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(|| {
        let now = chrono::Utc::now();
        now.timestamp_nanos_opt()
            .map(|nanos| nanos as u64)
            .unwrap_or_else(|| now.timestamp_micros() as u64)
    })
}

fn steps_progress_bar(total_steps: u64) -> ProgressBar {
    let pb = ProgressBar::new(total_steps);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.cyan} [{bar:40.cyan/blue}] {human_pos}/{human_len} steps ({eta})")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> "),
    );
    pb
}

/// Execute a random surfer run with the given options
/// Returns the visit counts plus run metadata
pub fn execute_simulation(
    graph: &CsrGraph,
    options: SimulateOptions,
    progress_callback: Option<SimulateProgressCallback>,
) -> Result<SurfResult, EngineError> {
    let SimulateOptions {
        damping,
        steps,
        seed,
        workers,
        show_progress_bars,
    } = options;

    let seed = resolve_seed(seed);
    debug!("Resolved seed {}", seed);

    if let Some(ref callback) = progress_callback {
        callback(format!(
            "Walking {} steps over {} nodes (m = {}, seed = {})",
            steps,
            graph.node_count(),
            damping,
            seed
        ));
    }

    let mut surfer = RandomSurfer::new()
        .with_damping(damping)
        .with_steps(steps)
        .with_seed(seed)
        .with_workers(workers);

    let progress_bar = if show_progress_bars {
        let pb = steps_progress_bar(surfer.walked_steps());
        let pb_clone = pb.clone();
        surfer = surfer.with_progress_callback(Arc::new(move |_worker_id: usize, batch: u64| {
            pb_clone.inc(batch);
        }));
        Some(pb)
    } else {
        None
    };

    let outcome = surfer.run(graph);

    if let Some(pb) = progress_bar {
        pb.finish_and_clear();
    }

    let result = outcome?;
    info!(
        "Simulation complete: {} visits across {} nodes",
        result.visits.total(),
        result.visits.len()
    );

    if let Some(ref callback) = progress_callback {
        callback(format!(
            "Finished {} steps in {:.2?}",
            result.total_steps, result.elapsed
        ));
    }

    Ok(result)
}
