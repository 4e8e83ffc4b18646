//! Fire-and-forget render progress notifications.

use std::sync::atomic::{AtomicU32, Ordering};

/// Receives a notification each time a column finishes.
///
/// Called from worker threads, in completion order. Reporting never
/// influences the rendered image.
pub trait RenderProgress: Sync {
    fn column_finished(&self, column: u32, completed: u32, total: u32);
}

/// Discards all notifications.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl RenderProgress for NoProgress {
    fn column_finished(&self, _column: u32, _completed: u32, _total: u32) {}
}

impl<F> RenderProgress for F
where
    F: Fn(u32, u32, u32) + Sync,
{
    fn column_finished(&self, column: u32, completed: u32, total: u32) {
        self(column, completed, total)
    }
}

/// Logs every finished column at debug level and each `step` percent at info level.
pub struct LogProgress {
    step: u32,
    last_reported: AtomicU32,
}

impl LogProgress {
    pub fn new(step: u32) -> Self {
        Self {
            step: step.clamp(1, 100),
            last_reported: AtomicU32::new(0),
        }
    }
}

impl Default for LogProgress {
    fn default() -> Self {
        Self::new(10)
    }
}

impl RenderProgress for LogProgress {
    fn column_finished(&self, column: u32, completed: u32, total: u32) {
        log::debug!("Done: column {}", column);

        let percent = (completed as u64 * 100 / total.max(1) as u64) as u32;
        let milestone = percent / self.step * self.step;
        // Only the thread that advances the milestone logs it
        let previous = self.last_reported.fetch_max(milestone, Ordering::Relaxed);
        if milestone > previous {
            log::info!("Rendered {}% ({}/{} columns)", milestone, completed, total);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn test_closure_progress() {
        let seen = Mutex::new(Vec::new());
        let progress = |column: u32, completed: u32, total: u32| {
            seen.lock().unwrap().push((column, completed, total));
        };

        progress.column_finished(4, 1, 8);
        progress.column_finished(2, 2, 8);

        assert_eq!(*seen.lock().unwrap(), vec![(4, 1, 8), (2, 2, 8)]);
    }

    #[test]
    fn test_log_progress_milestones() {
        let progress = LogProgress::new(25);
        for completed in 1..=8 {
            progress.column_finished(completed - 1, completed, 8);
        }
        assert_eq!(progress.last_reported.load(Ordering::Relaxed), 100);
    }
}
