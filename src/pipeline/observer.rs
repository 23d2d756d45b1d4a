use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Pipeline stages, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    Filter,
    Totals,
    Group,
    Sort,
    Paginate,
}

/// Events emitted while a [`super::DataTable`] recomputes.
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineEvent {
    RunStarted { input_rows: usize },
    StageFinished { stage: PipelineStage, rows: usize },
    PageReset { from: usize, to: usize },
    AutoSelected { index: usize },
    RunFinished { elapsed: Duration, stats: PipelineStats },
}

/// Observer hook for pipeline events.
pub trait PipelineObserver: Send + Sync {
    fn on_event(&self, event: &PipelineEvent);
}

/// Forwards pipeline events to `tracing`.
#[derive(Debug, Default)]
pub struct LogObserver;

impl PipelineObserver for LogObserver {
    fn on_event(&self, event: &PipelineEvent) {
        match event {
            PipelineEvent::RunStarted { input_rows } => {
                tracing::trace!(input_rows, "pipeline run started");
            }
            PipelineEvent::StageFinished { stage, rows } => {
                tracing::trace!(stage = ?stage, rows, "pipeline stage finished");
            }
            PipelineEvent::PageReset { from, to } => {
                tracing::debug!(from, to, "current page out of range; reset");
            }
            PipelineEvent::AutoSelected { index } => {
                tracing::debug!(index, "row selected automatically");
            }
            PipelineEvent::RunFinished { elapsed, stats } => {
                tracing::debug!(elapsed = ?elapsed, %stats, "pipeline run finished");
            }
        }
    }
}

/// Fans events out to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn PipelineObserver>>,
}

impl CompositeObserver {
    pub fn new(observers: Vec<Arc<dyn PipelineObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl PipelineObserver for CompositeObserver {
    fn on_event(&self, event: &PipelineEvent) {
        for o in &self.observers {
            o.on_event(event);
        }
    }
}

/// Row counts of one pipeline run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineStats {
    pub input_rows: usize,
    pub filtered_rows: usize,
    /// Group rows at every nesting level.
    pub group_rows: usize,
    pub page_rows: usize,
    pub rendered_rows: usize,
}

impl fmt::Display for PipelineStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "input_rows={}, filtered_rows={}, group_rows={}, page_rows={}, rendered_rows={}",
            self.input_rows, self.filtered_rows, self.group_rows, self.page_rows, self.rendered_rows
        )
    }
}
