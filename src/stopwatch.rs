use std::time::Instant;

/// Elapsed wall-clock milliseconds. Display forwards to the inner `f64`,
/// so formatting matches the host's default float representation.
#[derive(
    Debug, Clone, Copy, PartialEq, PartialOrd, derive_more::Deref, derive_more::Display,
)]
pub struct Millis(f64);

// Instant is monotonic, so a later reading never precedes an earlier one
#[derive(Debug)]
pub struct Stopwatch(Instant);

impl Stopwatch {
    pub fn start() -> Self {
        Self(Instant::now())
    }

    pub fn elapsed(&self) -> Millis {
        Millis(self.0.elapsed().as_secs_f64() * 1e3)
    }
}

/// Runs `task` to completion inside a single measurement window: one clock
/// read before, one after, nothing in between but the call itself.
pub fn time<T>(task: impl FnOnce() -> T) -> (T, Millis) {
    let stopwatch = Stopwatch::start();
    let output = task();
    (output, stopwatch.elapsed())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fib::fib;

    #[test]
    fn elapsed_is_finite_and_nonnegative() {
        let (_, elapsed) = time(|| fib(16));
        assert!(elapsed.is_finite());
        assert!(*elapsed >= 0.0)
    }

    #[test]
    fn elapsed_does_not_decrease() {
        let stopwatch = Stopwatch::start();
        let first = stopwatch.elapsed();
        let second = stopwatch.elapsed();
        assert!(second >= first)
    }

    // soft property: a ~50x larger workload should not time under a much
    // smaller one, comparing minima over a few runs to absorb noise
    #[test]
    fn larger_input_takes_at_least_as_long() {
        let min_elapsed = |n| {
            (0..5)
                .map(|_| *time(|| fib(n)).1)
                .fold(f64::INFINITY, f64::min)
        };
        assert!(min_elapsed(28) >= min_elapsed(20))
    }
}
