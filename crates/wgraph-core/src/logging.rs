use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Work counters for one algorithm run.
///
/// Each run owns its own instance; nothing is shared across calls.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TraversalMetrics {
    heap_pushes: u64,
    stale_pops: u64,
    accepted: u64,
    rejected: u64,
    relaxations: u64,
}

impl TraversalMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a priority-queue insertion
    pub fn record_push(&mut self) {
        self.heap_pushes += 1;
    }

    /// Record a popped entry discarded because its vertex was already done
    pub fn record_stale_pop(&mut self) {
        self.stale_pops += 1;
    }

    /// Record an edge accepted into a tree or a vertex finalized
    pub fn record_accept(&mut self) {
        self.accepted += 1;
    }

    /// Record an edge rejected because it would close a cycle
    pub fn record_reject(&mut self) {
        self.rejected += 1;
    }

    /// Record a successful distance improvement
    pub fn record_relaxation(&mut self) {
        self.relaxations += 1;
    }

    pub fn heap_pushes(&self) -> u64 {
        self.heap_pushes
    }

    pub fn stale_pops(&self) -> u64 {
        self.stale_pops
    }

    pub fn accepted(&self) -> u64 {
        self.accepted
    }

    pub fn rejected(&self) -> u64 {
        self.rejected
    }

    pub fn relaxations(&self) -> u64 {
        self.relaxations
    }

    /// Share of popped entries that were stale, as a percentage (0.0-100.0)
    pub fn stale_rate(&self) -> f64 {
        let total = self.stale_pops + self.accepted;
        if total == 0 {
            0.0
        } else {
            (self.stale_pops as f64 / total as f64) * 100.0
        }
    }
}

/// Log traversal metrics at debug level.
///
/// Usage:
/// ```rust,ignore
/// let mut metrics = TraversalMetrics::new();
/// // ... run the algorithm ...
/// log_traversal_metrics!(&metrics, "prim");
/// ```
#[macro_export]
macro_rules! log_traversal_metrics {
    ($metrics:expr, $name:expr) => {
        tracing::debug!(
            algorithm = $name,
            heap_pushes = $metrics.heap_pushes(),
            stale_pops = $metrics.stale_pops(),
            accepted = $metrics.accepted(),
            rejected = $metrics.rejected(),
            relaxations = $metrics.relaxations(),
            stale_rate = $metrics.stale_rate(),
            "traversal_metrics"
        );
    };
}

/// Helper macro for logging elapsed time at trace level.
///
/// Usage:
/// ```rust,ignore
/// let start = Instant::now();
/// // ... some work ...
/// trace_time!(start, "operation_name");
/// // Or with additional fields:
/// trace_time!(start, "operation_name", edges = tree.len());
/// ```
#[macro_export]
macro_rules! trace_time {
    ($start:expr, $name:expr) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $name);
    };
    ($start:expr, $name:expr $(, $field:ident = $value:expr)*) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $($field = $value),*, $name);
    };
}

/// Initialize structured logging based on CLI arguments
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
    log_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let level = match (verbose, log_level) {
        (true, None) => "debug",
        (false, None) => "warn",
        (_, Some(level)) => level,
    };

    init_with_level(level, log_json)
}

/// Directive used when neither `RUST_LOG` nor `WGRAPH_LOG` is set.
///
/// A bare level applies to both of our crates; anything containing `=` is
/// taken as a full filter directive.
fn default_directive(level: &str) -> String {
    if level.contains('=') {
        level.to_string()
    } else {
        format!("wgraph={level},wgraph_core={level}")
    }
}

fn init_with_level(level: &str, log_json: bool) -> Result<(), Box<dyn std::error::Error>> {
    // Support WGRAPH_LOG environment variable override
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env("WGRAPH_LOG"))
        .unwrap_or_else(|_| EnvFilter::new(default_directive(level)));

    let registry = tracing_subscriber::registry().with(filter);

    if log_json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_ansi(false)
                    .with_span_events(
                        tracing_subscriber::fmt::format::FmtSpan::NEW
                            | tracing_subscriber::fmt::format::FmtSpan::CLOSE,
                    ),
            )
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    Ok(())
}
