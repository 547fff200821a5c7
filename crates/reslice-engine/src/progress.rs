//! Progress reporting for resample runs.
//!
//! Callbacks are side-effect-only hooks with no influence on results.

/// Per-slice progress notifications.
pub trait ProgressCallback {
    /// Called once before any slice is resampled.
    fn on_start(&self, total_slices: usize) {
        let _ = total_slices;
    }

    /// Called before each output slice is resampled.
    fn on_slice(&self, index: usize) {
        let _ = index;
    }

    /// Called once after the last slice is written.
    fn on_complete(&self) {}
}

/// Console progress callback that logs through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleProgress;

impl ProgressCallback for ConsoleProgress {
    fn on_start(&self, total_slices: usize) {
        tracing::info!(total_slices, "transforming slices");
    }

    fn on_slice(&self, index: usize) {
        tracing::debug!(slice = index, "transforming slice");
    }

    fn on_complete(&self) {
        tracing::info!("transforming slices done");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        events: RefCell<Vec<String>>,
    }

    impl ProgressCallback for Recorder {
        fn on_start(&self, total: usize) {
            self.events.borrow_mut().push(format!("start {total}"));
        }

        fn on_slice(&self, index: usize) {
            self.events.borrow_mut().push(format!("slice {index}"));
        }

        fn on_complete(&self) {
            self.events.borrow_mut().push("done".into());
        }
    }

    #[test]
    fn test_callback_sequencing() {
        let rec = Recorder::default();
        rec.on_start(2);
        rec.on_slice(0);
        rec.on_slice(1);
        rec.on_complete();
        assert_eq!(
            *rec.events.borrow(),
            vec!["start 2", "slice 0", "slice 1", "done"]
        );
    }
}
