// Monte-Carlo random surfer

use crate::csr::CsrGraph;
use crate::error::{EngineError, Result};
use crate::graph::NodeId;
use crate::result::{SurfResult, VisitCounts};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// Receives `(worker_id, steps_completed_since_last_call)`.
pub type ProgressCallback = Arc<dyn Fn(usize, u64) + Send + Sync>;

/// Steps between progress callbacks.
const PROGRESS_BATCH: u64 = 1 << 16;

pub const DEFAULT_DAMPING: f64 = 0.15;
pub const DEFAULT_STEPS: u64 = 10_000;

/// Runs the chain for `total_steps` steps from a uniformly chosen start.
///
/// The start node counts as a visit, so the returned counts always sum to
/// `total_steps + 1`.
///
/// # Errors
/// [`EngineError::EmptyGraph`] when the graph has no nodes and
/// [`EngineError::InvalidDampingFactor`] when `damping` is outside `[0, 1]`.
pub fn simulate<R: Rng>(
    graph: &CsrGraph,
    damping: f64,
    total_steps: u64,
    rng: &mut R,
) -> Result<VisitCounts> {
    validate(graph, damping)?;
    let start = random_node(graph.node_count(), rng);
    Ok(walk(graph, damping, total_steps, start, rng, None))
}

/// Same as [`simulate`] but starting from `start` instead of a random node.
///
/// # Errors
/// Everything [`simulate`] rejects, plus [`EngineError::NodeOutOfRange`].
pub fn simulate_from<R: Rng>(
    graph: &CsrGraph,
    damping: f64,
    total_steps: u64,
    start: NodeId,
    rng: &mut R,
) -> Result<VisitCounts> {
    validate(graph, damping)?;
    if !graph.contains(start) {
        return Err(EngineError::NodeOutOfRange {
            node: start,
            node_count: graph.node_count(),
        });
    }
    Ok(walk(graph, damping, total_steps, start, rng, None))
}

fn validate(graph: &CsrGraph, damping: f64) -> Result<()> {
    if graph.is_empty() {
        return Err(EngineError::EmptyGraph);
    }
    if !(0.0..=1.0).contains(&damping) {
        return Err(EngineError::InvalidDampingFactor(damping));
    }
    Ok(())
}

#[inline]
fn random_node<R: Rng>(node_count: usize, rng: &mut R) -> NodeId {
    rng.random_range(0..node_count) as NodeId
}

fn walk<R: Rng>(
    graph: &CsrGraph,
    damping: f64,
    steps: u64,
    start: NodeId,
    rng: &mut R,
    progress: Option<(&ProgressCallback, usize)>,
) -> VisitCounts {
    let node_count = graph.node_count();
    let mut visits = VisitCounts::zeroed(node_count);
    let mut current = start;
    visits.record(current);

    let mut pending = 0u64;
    for _ in 0..steps {
        let r: f64 = rng.random();
        current = if r < damping || graph.is_dangling(current) {
            random_node(node_count, rng)
        } else {
            let out = graph.neighbors(current);
            out[rng.random_range(0..out.len())]
        };
        visits.record(current);

        if let Some((callback, worker_id)) = progress {
            pending += 1;
            if pending == PROGRESS_BATCH {
                callback(worker_id, pending);
                pending = 0;
            }
        }
    }

    if let Some((callback, worker_id)) = progress {
        if pending > 0 {
            callback(worker_id, pending);
        }
    }

    visits
}

/// Generator for one worker: the run seed on the worker's own stream.
pub fn worker_rng(seed: u64, worker_id: usize) -> ChaCha8Rng {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.set_stream(worker_id as u64);
    rng
}

/// Splits `total_visits` across `workers` chains, each getting at least one.
pub fn shard_visits(total_visits: u64, workers: usize) -> Vec<u64> {
    let workers = (workers.max(1) as u64).min(total_visits.max(1));
    let base = total_visits / workers;
    let remainder = total_visits % workers;
    (0..workers)
        .map(|i| if i < remainder { base + 1 } else { base })
        .collect()
}

pub struct RandomSurfer {
    damping: f64,
    total_steps: u64,
    seed: u64,
    workers: usize,
    progress_callback: Option<ProgressCallback>,
}

impl RandomSurfer {
    pub fn new() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            total_steps: DEFAULT_STEPS,
            seed: 0,
            workers: 1,
            progress_callback: None,
        }
    }

    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_steps(mut self, total_steps: u64) -> Self {
        self.total_steps = total_steps;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    pub fn with_progress_callback(mut self, callback: ProgressCallback) -> Self {
        self.progress_callback = Some(callback);
        self
    }

    /// Steps the workers walk and report through the progress callback.
    ///
    /// Each chain's start visit is not a step, so this is
    /// `total_steps + 1 - workers` once the worker count is clamped.
    pub fn walked_steps(&self) -> u64 {
        let shards = shard_visits(self.total_steps.saturating_add(1), self.workers);
        shards.iter().map(|shard| shard - 1).sum()
    }

    /// Runs independent chains in parallel and sums their visits.
    ///
    /// Each chain's start counts as one of the `total_steps + 1` visits, so
    /// the merged counts keep the single-chain total. Results depend only on
    /// the seed and the worker count.
    pub fn run(&self, graph: &CsrGraph) -> Result<SurfResult> {
        validate(graph, self.damping)?;

        let node_count = graph.node_count();
        let shards = shard_visits(self.total_steps.saturating_add(1), self.workers);
        info!(
            "Starting random surf: {} nodes, {} steps, damping {}, {} worker(s)",
            node_count,
            self.total_steps,
            self.damping,
            shards.len()
        );

        let started = Instant::now();
        let visits = shards
            .par_iter()
            .enumerate()
            .map(|(worker_id, &shard)| {
                debug!("Worker {} walking {} steps", worker_id, shard - 1);
                let mut rng = worker_rng(self.seed, worker_id);
                let start = random_node(node_count, &mut rng);
                let progress = self.progress_callback.as_ref().map(|cb| (cb, worker_id));
                walk(graph, self.damping, shard - 1, start, &mut rng, progress)
            })
            .reduce(
                || VisitCounts::zeroed(node_count),
                |mut acc, shard| {
                    acc += &shard;
                    acc
                },
            );
        let elapsed = started.elapsed();

        info!("Random surf finished in {:?}", elapsed);

        Ok(SurfResult {
            visits,
            damping: self.damping,
            total_steps: self.total_steps,
            seed: self.seed,
            workers: shards.len(),
            elapsed,
        })
    }
}

impl Default for RandomSurfer {
    fn default() -> Self {
        Self::new()
    }
}
