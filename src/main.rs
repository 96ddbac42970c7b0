use std::io::{self, BufRead, Write};
use std::str::FromStr;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use rust_territory::{
    Coord, Game, GameConfig, GameError, GameResult, GameState, MinimaxSearch, Move, MoveError,
    MoveSource, Player, PlyOutcome, SearchConfig,
};

/// Play the territory game against a minimax opponent.
#[derive(Parser)]
#[command(name = "territory", about = "Two-player territory game with a minimax opponent")]
struct Cli {
    /// Board side length
    #[arg(long, default_value_t = 7)]
    size: usize,

    /// Pieces per player (prompted for when omitted)
    #[arg(long)]
    pieces: Option<usize>,

    /// Turns per player (prompted for when omitted)
    #[arg(long)]
    turns: Option<u32>,

    /// Play as player 1 (X) or 2 (O) (prompted for when omitted)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=2))]
    human: Option<u8>,

    /// Maximum search depth for the computer
    #[arg(long, default_value_t = 5)]
    depth: u32,

    /// Time limit per computer move, in milliseconds
    #[arg(long)]
    time_limit_ms: Option<u64>,

    /// Seed for the opening placement
    #[arg(long)]
    seed: Option<u64>,

    /// Let the computer play both sides
    #[arg(long)]
    autoplay: bool,
}

/// Line-oriented stdin reader that also supplies the human's moves.
struct Console<R> {
    input: R,
}

impl<R: BufRead> Console<R> {
    fn new(input: R) -> Self {
        Self { input }
    }

    /// Print `prompt` and read one line. `None` at end of input.
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        print!("{prompt}");
        io::stdout().flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Ask until the answer parses.
    fn ask_value<T: FromStr>(&mut self, prompt: &str) -> Result<T> {
        loop {
            let Some(answer) = self.ask(prompt)? else {
                bail!("input closed before the game started");
            };
            match answer.parse() {
                Ok(value) => return Ok(value),
                Err(_) => println!("Please enter a number."),
            }
        }
    }

    fn ask_coord(&mut self, prompt: &str) -> Option<Coord> {
        loop {
            let answer = self.ask(prompt).ok()??;
            match answer.parse::<Coord>() {
                Ok(at) => return Some(at),
                Err(err) => println!("Invalid move ({err}). Please try again."),
            }
        }
    }
}

impl<R: BufRead> MoveSource for Console<R> {
    fn propose(&mut self, _state: &GameState) -> Option<Move> {
        let from = self.ask_coord("Choose piece to move (e.g., b2): ")?;
        let to = self.ask_coord(&format!("Choose the new position for {from} (e.g., c2): "))?;
        Some(Move::new(from, to))
    }

    fn rejected(&mut self, _mv: Move, error: &MoveError) {
        println!("Invalid move ({error}). Please try again.");
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let mut console = Console::new(io::stdin().lock());

    let pieces = match cli.pieces {
        Some(pieces) => pieces,
        None => console.ask_value("Enter the number of pieces for each player: ")?,
    };
    let turns = match cli.turns {
        Some(turns) => turns,
        None => console.ask_value("Enter the turn limit for the game: ")?,
    };
    let human = match cli.human {
        Some(n) => n,
        None => loop {
            let n: u8 = console.ask_value("Do you want to be Player 1 or 2? (Enter 1 or 2): ")?;
            if n == 1 || n == 2 {
                break n;
            }
            println!("Please enter 1 or 2.");
        },
    };
    let human = if human == 1 { Player::A } else { Player::B };

    let mut config = GameConfig::new()
        .with_board_size(cli.size)
        .with_pieces(pieces)
        .with_turn_limit(turns)
        .with_human(human);
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    let mut search = SearchConfig::default().with_max_depth(cli.depth);
    if let Some(ms) = cli.time_limit_ms {
        search = search.with_time_limit(Duration::from_millis(ms));
    }

    if cli.autoplay {
        let opponent = MinimaxSearch::new(search.clone());
        let game = Game::new(&config, opponent, search).context("setting up the game")?;
        run(game)
    } else {
        let game = Game::new(&config, console, search).context("setting up the game")?;
        run(game)
    }
}

fn run<S: MoveSource>(mut game: Game<S>) -> Result<()> {
    while !game.is_over() {
        let state = game.state();
        println!("\n{}", state.board());
        println!(
            "Player {} to move, {} plies left",
            state.current_player().symbol(),
            state.remaining_turns()
        );

        match game.play_ply() {
            Ok(PlyOutcome::Moved { player, mv }) => {
                println!(
                    "Player {} moves the piece at {} to {}",
                    player.symbol(),
                    mv.from,
                    mv.to
                );
            }
            Ok(PlyOutcome::Skipped { player }) => {
                println!("Player {} has no valid moves. Skipping turn.", player.symbol());
            }
            Err(GameError::InputClosed(_)) => {
                println!("\nInput closed, leaving the game.");
                return Ok(());
            }
            Err(err) => return Err(err.into()),
        }
    }

    println!("\n{}", game.state().board());
    match game.result() {
        Some(result @ GameResult::Winner(player)) => {
            println!("Winner: Player {}", player.symbol());
            if result.is_winner(game.human_player()) {
                println!("You win!");
            }
        }
        Some(GameResult::Draw) | None => println!("The game is a draw."),
    }

    let stats = game.search().stats();
    tracing::info!(
        nodes = stats.nodes,
        depth = stats.completed_depth,
        nps = stats.nodes_per_second(),
        "last computer search"
    );
    Ok(())
}
