/// The n-th Fibonacci number by direct recursion on the defining
/// recurrence: fib(0) = 0, fib(1) = 1, fib(n) = fib(n - 1) + fib(n - 2).
///
/// Intentionally unmemoized. The recomputation of overlapping subproblems
/// is the workload being timed, so this must stay exponential; a cached or
/// iterative rewrite would measure something else.
pub fn fib(n: u64) -> u64 {
    if n < 2 {
        n
    } else {
        fib(n - 2) + fib(n - 1)
    }
}
