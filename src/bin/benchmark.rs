//! Step throughput: serial versus rayon-parallel row evaluation

use std::time::Instant;
use life_grid::{BoundaryMode, Engine, EngineError, StepStrategy};
use rand::{SeedableRng, rngs::StdRng};

fn benchmark(size: usize, mode: BoundaryMode, strategy: StepStrategy, iterations: u32) -> Result<f64, EngineError> {
    let mut engine = Engine::new(size, size)?;
    engine.randomize_with(30, &mut StdRng::seed_from_u64(size as u64))?;
    engine.set_boundary_mode(mode);
    engine.set_step_strategy(strategy);

    let start = Instant::now();
    for _ in 0..iterations {
        engine.step();
    }
    Ok(start.elapsed().as_secs_f64() * 1000.0 / iterations as f64)
}

fn main() -> Result<(), EngineError> {
    println!("=== Game of Life Step Benchmark ===\n");

    let sizes = [75, 256, 512, 1024, 2048];
    let iterations = 20;

    println!("{:>10} {:>9} {:>12} {:>12} {:>10}", "Size", "Edges", "Serial", "Parallel", "Speedup");
    println!("{:-<58}", "");

    for size in sizes {
        for mode in BoundaryMode::all() {
            let serial_ms = benchmark(size, mode, StepStrategy::Serial, iterations)?;
            let parallel_ms = benchmark(size, mode, StepStrategy::Parallel, iterations)?;

            println!(
                "{:>10} {:>9} {:>10.3}ms {:>10.3}ms {:>9.1}x",
                format!("{}x{}", size, size),
                mode.name(),
                serial_ms,
                parallel_ms,
                serial_ms / parallel_ms
            );
        }
    }

    let cells = 2048 * 2048;
    let parallel_ms = benchmark(2048, BoundaryMode::Wrapped, StepStrategy::Parallel, iterations)?;
    println!(
        "\nParallel at 2048x2048: {:.2} ms/gen, {:.1}M cells/sec",
        parallel_ms,
        (cells as f64) / (parallel_ms / 1000.0) / 1_000_000.0
    );
    Ok(())
}
