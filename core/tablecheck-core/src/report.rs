//! Where check outcomes go. The validator only talks to a [`Reporter`], so
//! callers decide whether failures end up in logs, on the console, or in a
//! test buffer.

use crate::error::CheckError;

pub trait Reporter {
    /// Called once for every error the validator gives up on.
    fn failure(&self, err: &CheckError);

    /// Called when every record in a document passed.
    fn passed(&self, records: usize);
}

/// Sends outcomes to the `tracing` subscriber only.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn failure(&self, err: &CheckError) {
        tracing::error!("{err}");
    }

    fn passed(&self, records: usize) {
        tracing::info!(records, "all records valid");
    }
}

/// Prints failures on stdout and mirrors them to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleReporter {
    log: TracingReporter,
}

impl Reporter for ConsoleReporter {
    fn failure(&self, err: &CheckError) {
        println!("{err}");
        self.log.failure(err);
    }

    fn passed(&self, records: usize) {
        self.log.passed(records);
    }
}
