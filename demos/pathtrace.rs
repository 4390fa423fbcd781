//! Terminal demo: scatter obstacles over a grid, run one or every search and
//! print where each ended up.
//!
//! Run: cargo run --bin pathtrace-demo -- [algorithm|all] [size] [density] [seed]

use pathtrace_core::{DEFAULT_GRID_SIZE, Grid, scatter_obstacles};
use pathtrace_search::{Algorithm, Mark, PlaybackConfig, Replay};
use rand::SeedableRng;
use rand_pcg::Pcg64;

const DEFAULT_DENSITY: f64 = 0.25;
const DEFAULT_SEED: u64 = 1;

struct Options {
    algorithms: Vec<Algorithm>,
    size: i32,
    density: f64,
    seed: u64,
}

fn parse_args() -> Result<Options, Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);

    let algorithms = match args.next() {
        None => vec![Algorithm::default()],
        Some(a) if a.eq_ignore_ascii_case("all") => Algorithm::ALL.to_vec(),
        Some(a) => vec![a.parse()?],
    };
    let size = match args.next() {
        Some(s) => s.parse()?,
        None => DEFAULT_GRID_SIZE,
    };
    if size < 2 {
        return Err(format!("grid size must be at least 2, got {size}").into());
    }
    let density = match args.next() {
        Some(s) => s.parse()?,
        None => DEFAULT_DENSITY,
    };
    let seed = match args.next() {
        Some(s) => s.parse()?,
        None => DEFAULT_SEED,
    };

    Ok(Options {
        algorithms,
        size,
        density,
        seed,
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let opts = parse_args()?;

    let mut grid = Grid::with_layout(opts.size);
    let blocked = scatter_obstacles(&mut grid, opts.density, &mut Pcg64::seed_from_u64(opts.seed));
    println!(
        "{0}x{0} grid, {blocked} obstacles (density {1:.2}, seed {2})",
        opts.size, opts.density, opts.seed
    );

    for algorithm in opts.algorithms {
        let result = algorithm.search(&grid);
        let replay = Replay::new(&grid, &result);
        let frames = replay.frame_count();
        let frame = replay.final_frame();

        println!();
        println!("== {} ==", algorithm.label());
        println!("{}", frame.render(&grid));

        let playback = PlaybackConfig::for_algorithm(algorithm);
        match result.path_len() {
            Some(moves) => println!(
                "path: {moves} moves ({} cells on screen), explored {} cells in {} steps",
                frame.count(Mark::Path),
                result.explored(),
                result.exploration_steps.len(),
            ),
            None => println!(
                "no path: explored {} cells in {} steps",
                result.explored(),
                result.exploration_steps.len(),
            ),
        }
        println!(
            "playback: {frames} frames, {} ms",
            playback.total_duration(&result).as_millis()
        );
    }
    Ok(())
}
