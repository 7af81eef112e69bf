use std::time::Instant;

use mazecarve::{Algorithm, Generator, MazeError, Solver, logging};

fn main() -> std::io::Result<()> {
    let _guard = logging::init("profile.log");

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let size = args
        .next()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(1000);
    let seed = args.next().and_then(|s| s.parse::<u64>().ok()).unwrap_or(0);
    let invalid_input = |e: MazeError| std::io::Error::new(std::io::ErrorKind::InvalidInput, e);

    for algorithm in [Algorithm::HuntAndKill, Algorithm::RecursiveBacktracker] {
        let start = Instant::now();
        let generator = Generator::new(algorithm, size, size, seed).map_err(invalid_input)?;
        let maze = generator.run_to_completion();
        let elapsed = start.elapsed();
        tracing::info!(
            "[profile] {} generated {}x{} in {:?}",
            algorithm,
            size,
            size,
            elapsed
        );
        println!(
            "{algorithm}: {size}x{size} with {} doors in {elapsed:?}",
            maze.door_count()
        );
    }

    let half = (size / 2).max(1);
    let maze = Generator::new(Algorithm::RecursiveBacktracker, half, half, seed)
        .map_err(invalid_input)?
        .run_to_completion();

    for solver in [Solver::Bfs, Solver::Dfs] {
        let start = Instant::now();
        let outcome = solver.solve(&maze);
        let elapsed = start.elapsed();
        tracing::info!(
            "[profile] {} solved {}x{} in {:?} ({} iterations)",
            solver,
            half,
            half,
            elapsed,
            outcome.iterations()
        );
        match outcome.path() {
            Some(path) => println!(
                "{solver}: route of {} moves, {} iterations, {elapsed:?}",
                path.len(),
                outcome.iterations()
            ),
            None => println!("{solver}: no route, {} iterations", outcome.iterations()),
        }
    }
    Ok(())
}
