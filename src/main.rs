pub mod fib;
pub mod stopwatch;

use std::io::{stderr, stdout, Write};

use fib::fib;

#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_writer(stderr).init();
    tracing::debug!("start");
    let (result, elapsed) = stopwatch::time(|| fib(40));
    // the term itself never reaches stdout, only the timing does
    tracing::debug!("fib(40) = {result}");
    writeln!(stdout(), "{elapsed}")?;
    Ok(())
}
