use std::{
    io::{Stdout, Write},
    time::Duration,
};

use crossterm::{
    cursor, queue,
    style::{self, Color, Stylize},
    terminal::{self, ClearType},
};

use mazecarve::{
    Algorithm, GenerationStep, Generator, Grid, MazeError, Path, SearchStep, Solver, TextStyle,
    logging, render_text,
};

const USAGE: &str = "usage: mazecarve [columns rows] [backtracker|hunt] [bfs|dfs] [seed]";

/// Knobs of the terminal demo.
#[derive(Debug)]
struct DemoConfig {
    columns: usize,
    rows: usize,
    algorithm: Algorithm,
    solver: Solver,
    /// Random when not given; logged so a run can be replayed
    seed: Option<u64>,
    /// Roughly how many frames each of generation and solving is spread over
    frames: usize,
    /// Pause between frames
    frame_delay: Duration,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            columns: 30,
            rows: 15,
            algorithm: Algorithm::HuntAndKill,
            solver: Solver::Bfs,
            seed: None,
            frames: 200,
            frame_delay: Duration::from_millis(15),
        }
    }
}

impl DemoConfig {
    /// Overrides the defaults with positional arguments: columns, rows, generator, solver, seed.
    fn from_args(args: impl IntoIterator<Item = String>) -> Result<Self, String> {
        let mut config = DemoConfig::default();
        let args = args.into_iter().collect::<Vec<_>>();

        if let Some(columns) = args.first() {
            config.columns = columns
                .parse()
                .map_err(|_| format!("invalid column count: {columns}"))?;
        }
        if let Some(rows) = args.get(1) {
            config.rows = rows
                .parse()
                .map_err(|_| format!("invalid row count: {rows}"))?;
        }
        if config.columns == 0 || config.rows == 0 {
            return Err(MazeError::InvalidDimensions {
                columns: config.columns,
                rows: config.rows,
            }
            .to_string());
        }
        if let Some(algorithm) = args.get(2) {
            config.algorithm = match algorithm.as_str() {
                "backtracker" => Algorithm::RecursiveBacktracker,
                "hunt" => Algorithm::HuntAndKill,
                other => return Err(format!("unknown generator: {other}")),
            };
        }
        if let Some(solver) = args.get(3) {
            config.solver = match solver.as_str() {
                "bfs" => Solver::Bfs,
                "dfs" => Solver::Dfs,
                other => return Err(format!("unknown solver: {other}")),
            };
        }
        if let Some(seed) = args.get(4) {
            config.seed = Some(seed.parse().map_err(|_| format!("invalid seed: {seed}"))?);
        }
        Ok(config)
    }

    /// Elementary operations to run between two frames so generation takes about `frames` frames.
    fn generation_batch(&self) -> usize {
        let cells = self.columns * self.rows;
        let total = match self.algorithm {
            Algorithm::RecursiveBacktracker => 2 * cells - 1,
            Algorithm::HuntAndKill => cells,
        };
        (total / self.frames.max(1)).max(1)
    }

    fn search_batch(&self) -> usize {
        (self.columns * self.rows / self.frames.max(1)).max(1)
    }
}

/// Clears the screen and draws `grid`, highlighting `route`.
fn draw(
    stdout: &mut Stdout,
    grid: &Grid,
    route: Option<&Path>,
    text_style: &TextStyle,
) -> std::io::Result<()> {
    queue!(
        stdout,
        terminal::Clear(ClearType::All),
        cursor::MoveTo(0, 0)
    )?;
    for line in render_text(grid, text_style, route).lines() {
        for glyph in line.chars() {
            if glyph == text_style.route() {
                queue!(stdout, style::PrintStyledContent(glyph.with(Color::Yellow)))?;
            } else {
                queue!(stdout, style::Print(glyph))?;
            }
        }
        queue!(stdout, style::Print("\n"))?;
    }
    stdout.flush()
}

fn main() -> std::io::Result<()> {
    let _guard = logging::init("mazecarve.log");

    let config = match DemoConfig::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("{message}");
            eprintln!("{USAGE}");
            return Ok(());
        }
    };
    let seed = config.seed.unwrap_or_else(rand::random);
    tracing::info!(
        "[demo] {}x{} maze, {} then {}, seed {}",
        config.columns,
        config.rows,
        config.algorithm,
        config.solver,
        seed
    );

    let invalid_input = |e: MazeError| std::io::Error::new(std::io::ErrorKind::InvalidInput, e);
    let text_style = TextStyle::new('█', ' ', '•').map_err(invalid_input)?;
    let mut generator = match Generator::new(config.algorithm, config.columns, config.rows, seed)
    {
        Ok(generator) => generator,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("{USAGE}");
            return Ok(());
        }
    };
    let mut stdout = std::io::stdout();

    let batch = config.generation_batch();
    let mut maze = loop {
        match generator.step_by(batch) {
            GenerationStep::InProgress(view) => {
                draw(&mut stdout, &view, None, &text_style)?;
                std::thread::sleep(config.frame_delay);
            }
            GenerationStep::Done(maze) => break maze,
        }
    };
    draw(&mut stdout, &maze, None, &text_style)?;

    let batch = config.search_batch();
    let mut search = config.solver.search(&mut maze);
    let solution = 'search: loop {
        let mut route = None;
        for _ in 0..batch {
            match search.step() {
                SearchStep::InProgress(path) => route = Some(path),
                SearchStep::Done(path) => break 'search Some(path),
                SearchStep::NoPathFound => break 'search None,
            }
        }
        draw(&mut stdout, search.grid(), route.as_ref(), &text_style)?;
        std::thread::sleep(config.frame_delay);
    };
    let iterations = search.iterations();

    draw(&mut stdout, &maze, solution.as_ref(), &text_style)?;
    match solution {
        Some(path) => println!(
            "{} ({} steps), {}: route of {} moves after {} iterations (seed {})",
            config.algorithm,
            generator.steps(),
            config.solver,
            path.len(),
            iterations,
            seed
        ),
        None => println!("No path found after {iterations} iterations."),
    }
    Ok(())
}
