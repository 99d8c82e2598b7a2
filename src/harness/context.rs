use std::fmt;
use std::panic::Location;
use tracing::{error, info};

/// Counts checks and failures for one run. Each run owns its own context,
/// so independent runs never share counters.
#[derive(Debug)]
pub struct TestContext {
    checks: u32,
    failures: u32,
    verbose: bool,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            checks: 0,
            failures: 0,
            verbose: true,
        }
    }

    pub fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Records one check of `observed` against `expected`. A mismatch is
    /// logged with the caller's location.
    #[track_caller]
    pub fn check_eq<V: PartialEq + fmt::Debug>(&mut self, expected: V, observed: V) -> bool {
        self.checks += 1;
        if expected == observed {
            return true;
        }

        self.failures += 1;
        let at = Location::caller();
        error!(
            file = at.file(),
            line = at.line(),
            "expected {:?} got {:?}",
            expected,
            observed
        );
        false
    }

    #[track_caller]
    pub fn check(&mut self, condition: bool) -> bool {
        self.check_eq(true, condition)
    }

    /// Diagnostic line, shown only when verbose.
    pub fn message(&self, text: &str) {
        if self.verbose {
            info!("{}", text);
        }
    }

    pub fn summary(&self) -> Summary {
        Summary {
            checks: self.checks,
            failures: self.failures,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub checks: u32,
    pub failures: u32,
}

impl Summary {
    #[inline]
    pub fn passed(&self) -> bool {
        self.failures == 0
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} tests {} fails", self.checks, self.failures)
    }
}
