use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;
use std::time::{Duration, Instant};

use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use simple_logger::SimpleLogger;

use sapador_core::{
    CellCount, CellFace, Coord, Game, GameClock, GameConfig, GameStatus, RandomDeployer,
};

#[derive(Parser, Debug)]
#[command(name = "sapador", about = "Terminal minesweeper", version)]
struct Args {
    /// Difficulty preset
    #[arg(long, value_enum, default_value_t = Preset::Beginner)]
    preset: Preset,
    /// Board rows, overrides the preset
    #[arg(long)]
    rows: Option<Coord>,
    /// Board columns, overrides the preset
    #[arg(long)]
    cols: Option<Coord>,
    /// Number of mines, overrides the preset
    #[arg(long)]
    mines: Option<CellCount>,
    /// Seed for mine placement (random if omitted)
    #[arg(long)]
    seed: Option<u64>,
    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, clap::ValueEnum)]
enum Preset {
    Beginner,
    Intermediate,
    Expert,
}

impl Preset {
    fn config(self) -> GameConfig {
        match self {
            Self::Beginner => GameConfig::beginner(),
            Self::Intermediate => GameConfig::intermediate(),
            Self::Expert => GameConfig::expert(),
        }
    }
}

#[derive(Default)]
struct StopwatchState {
    started_at: Option<Instant>,
    frozen: Option<Duration>,
}

/// Timer collaborator: the session tells it when counting starts and stops,
/// the render loop reads the elapsed time from the shared state.
struct Stopwatch {
    state: Rc<RefCell<StopwatchState>>,
}

impl GameClock for Stopwatch {
    fn start_counting(&mut self) {
        self.state.borrow_mut().started_at = Some(Instant::now());
    }

    fn stop_counting(&mut self) {
        let mut state = self.state.borrow_mut();
        state.frozen = state.started_at.map(|started_at| started_at.elapsed());
    }
}

/// How many seconds have passed since the game started, 0 if it hasn't
fn elapsed_secs(state: &Rc<RefCell<StopwatchState>>) -> u64 {
    let state = state.borrow();
    match (state.frozen, state.started_at) {
        (Some(frozen), _) => frozen.as_secs(),
        (None, Some(started_at)) => started_at.elapsed().as_secs(),
        (None, None) => 0,
    }
}

fn glyph(face: CellFace) -> char {
    match face {
        CellFace::Concealed => '.',
        CellFace::Clear => ' ',
        CellFace::Numbered(count) => char::from_digit(count.into(), 10).unwrap_or('?'),
        CellFace::Mine => '*',
    }
}

fn render(game: &Game, timer: &Rc<RefCell<StopwatchState>>) {
    let (rows, cols) = game.size();
    let tens = (0..cols).fold(String::new(), |acc, col| acc + &(col / 10).to_string());
    let units = (0..cols).fold(String::new(), |acc, col| acc + &(col % 10).to_string());

    println!();
    if cols > 10 {
        println!("   {tens}");
    }
    println!("   {units}");
    for row in 0..rows {
        print!("{row:>2} ");
        for col in 0..cols {
            print!("{}", glyph(game.face_at((row, col))));
        }
        println!();
    }
    println!(
        "mines: {}  revealed: {}  remaining: {}  time: {}s",
        game.mines_deployed(),
        game.cells_revealed(),
        game.cells_remaining(),
        elapsed_secs(timer)
    );
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    SimpleLogger::new()
        .with_level(args.verbosity.log_level_filter())
        .init()?;

    let base = args.preset.config();
    let rows = args.rows.unwrap_or(base.size.0);
    let cols = args.cols.unwrap_or(base.size.1);
    let mines = args.mines.unwrap_or(base.mines);
    let config = GameConfig::new(rows, cols, mines)?;

    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!(
        "Board {}x{} with {} mines, seed {}",
        rows,
        cols,
        config.mines,
        seed
    );

    let mut game = Game::new(RandomDeployer::new(seed), config)?;
    let timer = Rc::new(RefCell::new(StopwatchState::default()));
    game.attach_clock(Box::new(Stopwatch {
        state: Rc::clone(&timer),
    }));

    println!("Reveal with `r ROW COL` (zero-based), quit with `q`.");

    let stdin = io::stdin();
    let mut input = String::new();
    loop {
        render(&game, &timer);
        if game.ended() {
            if game.status() == GameStatus::Won {
                println!("You cleared the board in {}s!", elapsed_secs(&timer));
            } else {
                println!("Boom! You hit a mine after {}s.", elapsed_secs(&timer));
            }
            break;
        }

        print!("> ");
        io::stdout().flush()?;
        input.clear();
        if stdin.read_line(&mut input)? == 0 {
            break;
        }
        let line = input.trim();
        if line.is_empty() {
            continue;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        match parts[0] {
            "q" | "quit" => break,
            "r" | "reveal" => {
                if parts.len() != 3 {
                    println!("Usage: r ROW COL");
                    continue;
                }
                let Ok(row) = parts[1].parse::<Coord>() else {
                    println!("Invalid row");
                    continue;
                };
                let Ok(col) = parts[2].parse::<Coord>() else {
                    println!("Invalid col");
                    continue;
                };
                if row >= rows || col >= cols {
                    println!(
                        "Cell ({}, {}) is off the board, max is ({}, {})",
                        row,
                        col,
                        rows - 1,
                        cols - 1
                    );
                    continue;
                }
                match game.reveal((row, col)) {
                    Ok(outcome) if !outcome.has_update() => {
                        println!("Nothing to reveal there.")
                    }
                    Ok(_) => {}
                    Err(err) => println!("{err}"),
                }
            }
            "f" | "flag" => println!("Flagging is not part of this rule set."),
            other => println!("Unknown command {other:?}, use `r ROW COL` or `q`."),
        }
    }

    Ok(())
}
