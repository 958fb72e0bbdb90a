//! Performance benchmark comparing the serial and parallel sparse strategies

use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::StdRng;
use sparse_life::{Algorithm, CellSet, LifeEngine, PatternLoader, presets};

fn soup_board(size: i32, seed: u64) -> CellSet {
    let mut rng = StdRng::seed_from_u64(seed);
    PatternLoader::load(&presets::soup(size, size, 0.3, &mut rng))
}

/// Average milliseconds per generation, plus the final population
fn benchmark(algorithm: Algorithm, board: &CellSet, generations: u32) -> (f64, usize) {
    let engine = LifeEngine::new(algorithm);
    let mut board = board.clone();

    let start = Instant::now();
    for _ in 0..generations {
        board = engine.advance(&board);
    }
    let per_gen = start.elapsed().as_secs_f64() * 1000.0 / generations as f64;
    (per_gen, board.len())
}

fn main() {
    println!("=== Sparse Life Performance Benchmark ===\n");

    let sizes = [64, 128, 256, 512, 1024];
    let generations = 20;

    println!(
        "{:>10} {:>12} {:>12} {:>12} {:>10}",
        "Soup", "Live", "Serial", "Parallel", "Speedup"
    );
    println!("{:-<62}", "");

    for size in sizes {
        let board = soup_board(size, size as u64);
        let (serial_ms, serial_pop) = benchmark(Algorithm::Sparse, &board, generations);
        let (parallel_ms, parallel_pop) = benchmark(Algorithm::SparseParallel, &board, generations);
        assert_eq!(serial_pop, parallel_pop, "strategies diverged");

        println!(
            "{:>10} {:>12} {:>10.2}ms {:>10.2}ms {:>9.1}x",
            format!("{}x{}", size, size),
            board.len(),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }

    println!("\n=== Gosper Glider Gun, 1000 generations ===\n");

    let gun = PatternLoader::load(&presets::glider_gun());
    for algorithm in Algorithm::all() {
        let (ms, population) = benchmark(algorithm, &gun, 1000);
        println!("{:<12} {:>8.3} ms/gen, {} live at the end", algorithm.name(), ms, population);
    }
}
