use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

/// Terminal state of one photo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhotoOutcome {
    Success,
    Skipped,
    Errored,
}

/// Counter snapshot delivered after every photo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSnapshot {
    pub total_photos: usize,
    pub processed_photos: usize,
    pub remaining_photos: usize,
    pub successful_photos: usize,
    pub skipped_photos: usize,
    pub error_photos: usize,
    /// 0..=100, truncated
    pub percentage: u8,
    /// successful / total, 0.0..=100.0
    pub success_rate: f64,
}

#[derive(Debug, Clone, Default)]
pub struct ProcessingCounters {
    total: usize,
    successful: usize,
    skipped: usize,
    errored: usize,
}

impl ProcessingCounters {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            ..Self::default()
        }
    }

    pub fn record(&mut self, outcome: PhotoOutcome) {
        match outcome {
            PhotoOutcome::Success => self.successful += 1,
            PhotoOutcome::Skipped => self.skipped += 1,
            PhotoOutcome::Errored => self.errored += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn processed(&self) -> usize {
        self.successful + self.skipped + self.errored
    }

    pub fn successful(&self) -> usize {
        self.successful
    }

    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn errored(&self) -> usize {
        self.errored
    }

    pub fn success_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.successful as f64 / self.total as f64 * 100.0
        }
    }

    pub fn percentage(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        (self.processed() as f64 / self.total as f64 * 100.0).min(100.0) as u8
    }

    pub fn snapshot(&self) -> ProgressSnapshot {
        ProgressSnapshot {
            total_photos: self.total,
            processed_photos: self.processed(),
            remaining_photos: self.total.saturating_sub(self.processed()),
            successful_photos: self.successful,
            skipped_photos: self.skipped,
            error_photos: self.errored,
            percentage: self.percentage(),
            success_rate: self.success_rate(),
        }
    }
}

/// Receiver side of progress reporting.
///
/// Implementations must not block the batch: the worker calls `report`
/// synchronously between photos.
pub trait ProgressSink {
    fn report(&self, snapshot: &ProgressSnapshot);
}

/// Hands snapshots to another thread; a dropped receiver is ignored.
impl ProgressSink for mpsc::UnboundedSender<ProgressSnapshot> {
    fn report(&self, snapshot: &ProgressSnapshot) {
        let _ = self.send(snapshot.clone());
    }
}

/// No-op sink
impl ProgressSink for () {
    fn report(&self, _snapshot: &ProgressSnapshot) {}
}
