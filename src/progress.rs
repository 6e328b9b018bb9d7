// src/progress.rs

//! Defines a trait for reporting progress of batch runs over many files.
#[cfg(feature = "progress")]
use indicatif::{ProgressBar, ProgressStyle};

/// A trait for reporting progress, abstracting over specific implementations like `indicatif`.
///
/// # Examples
///
/// ```
/// use tokenshift::progress::ProgressReporter;
/// use std::sync::Mutex;
///
/// // A mock reporter that records the last position.
/// struct MockProgress {
///     position: Mutex<u64>,
/// }
/// impl ProgressReporter for MockProgress {
///     fn set_length(&self, _len: u64) {}
///     fn set_position(&self, pos: u64) {
///         *self.position.lock().unwrap() = pos;
///     }
///     fn set_message(&self, _msg: String) {}
///     fn finish(&self) {}
/// }
///
/// let reporter = MockProgress { position: Mutex::new(0) };
/// reporter.set_position(3);
/// assert_eq!(*reporter.position.lock().unwrap(), 3);
/// ```
pub trait ProgressReporter: Send + Sync {
    /// Sets the total number of files to process.
    fn set_length(&self, len: u64);
    /// Sets the number of files processed so far.
    fn set_position(&self, pos: u64);
    /// Sets a descriptive message, usually the file being processed.
    fn set_message(&self, msg: String);
    /// Finishes the progress reporting, hiding the progress bar.
    fn finish(&self);
}

/// A `ProgressReporter` that does nothing.
pub struct NoOpProgress;

impl ProgressReporter for NoOpProgress {
    fn set_length(&self, _len: u64) {}
    fn set_position(&self, _pos: u64) {}
    fn set_message(&self, _msg: String) {}
    fn finish(&self) {}
}

/// An implementation of `ProgressReporter` using the `indicatif` crate.
#[cfg(feature = "progress")]
#[derive(Clone)]
pub struct IndicatifProgress {
    bar: ProgressBar,
}

#[cfg(feature = "progress")]
impl IndicatifProgress {
    /// Creates a new progress bar (drawn on stderr) with a default style.
    pub fn new() -> Self {
        let pb = ProgressBar::new(0);
        let style = ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");
        pb.set_style(style);
        Self { bar: pb }
    }
}

#[cfg(feature = "progress")]
impl Default for IndicatifProgress {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "progress")]
impl ProgressReporter for IndicatifProgress {
    fn set_length(&self, len: u64) {
        self.bar.set_length(len);
    }

    fn set_position(&self, pos: u64) {
        self.bar.set_position(pos);
    }

    fn set_message(&self, msg: String) {
        self.bar.set_message(msg);
    }

    fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

/// Returns a progress bar when stderr is a terminal and the `progress` feature is on.
pub fn stderr_reporter() -> Option<Box<dyn ProgressReporter>> {
    #[cfg(feature = "progress")]
    {
        if atty::is(atty::Stream::Stderr) {
            return Some(Box::new(IndicatifProgress::new()));
        }
    }
    None
}
