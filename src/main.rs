use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use connect_four_ai::ai::{Agent, RandomAgent, Strategy};
use connect_four_ai::config::AppConfig;
use connect_four_ai::game::{GameState, LegalMask, Outcome, Player, COLS};

/// Play Connect Four against a rule-based or minimax AI.
#[derive(Parser)]
#[command(name = "connect-four-ai", about = "Play Connect Four against the AI")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect4.toml")]
    config: PathBuf,

    /// Move selection strategy: rule-based or minimax
    #[arg(long)]
    strategy: Option<Strategy>,

    /// Override minimax search depth
    #[arg(long)]
    depth: Option<usize>,

    /// Seed for reproducible random choices
    #[arg(long)]
    seed: Option<u64>,

    /// Let the AI make the first move
    #[arg(long)]
    ai_first: bool,

    /// Who plays against the AI: human or random
    #[arg(long, default_value = "human")]
    opponent: String,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    match cli.opponent.as_str() {
        "human" | "random" => {}
        other => bail!("unknown opponent '{}' (expected 'human' or 'random')", other),
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(strategy) = cli.strategy {
        config.strategy = strategy;
    }
    if let Some(depth) = cli.depth {
        config.search.depth = depth;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    config.validate().context("invalid configuration")?;

    let ai_player = if cli.ai_first { Player::A } else { Player::B };
    let mut selector = config.selector();
    let mut random = match config.seed {
        Some(seed) => RandomAgent::with_seed(seed.wrapping_add(1)),
        None => RandomAgent::new(),
    };

    println!(
        "Connect Four: you are {} ({}), the AI is {} ({}, {})",
        ai_player.other().name(),
        symbol(ai_player.other()),
        ai_player.name(),
        symbol(ai_player),
        config.strategy,
    );

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut state = GameState::initial();

    while !state.is_terminal() {
        print_board(&state);
        let player = state.current_player();

        let column = if player == ai_player {
            let selection = selector
                .select_explained(state.board(), &state.legal_mask(), player, config.strategy)
                .context("AI failed to select a move")?;
            println!(
                "[{}] plays column {} ({})",
                player.name(),
                selection.column,
                selection.reason
            );
            selection.column
        } else if cli.opponent == "random" {
            let column = random.select_action(&state)?;
            println!("[{}] plays column {} (random)", player.name(), column);
            column
        } else {
            read_human_move(&mut input, &state.legal_mask())?
        };

        state = state
            .apply_move(column)
            .with_context(|| format!("applying column {column}"))?;
    }

    print_board(&state);
    println!("{}", "=".repeat(30));
    match state.outcome() {
        Outcome::Win(winner) if winner == ai_player => println!("{} (AI) wins!", winner.name()),
        Outcome::Win(winner) => println!("{} wins!", winner.name()),
        Outcome::Draw => println!("Draw!"),
        Outcome::InProgress => unreachable!("loop exits only on a terminal state"),
    }
    println!("{}", "=".repeat(30));

    Ok(())
}

fn symbol(player: Player) -> char {
    match player {
        Player::A => 'X',
        Player::B => 'O',
    }
}

fn print_board(state: &GameState) {
    println!();
    print!("{}", state.board());
    let labels: Vec<String> = (0..COLS).map(|col| col.to_string()).collect();
    println!("{}", labels.join(" "));
}

/// Prompt until the human enters a playable column.
fn read_human_move(input: &mut impl BufRead, mask: &LegalMask) -> Result<usize> {
    loop {
        print!("Choose a column (0-6): ");
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            bail!("input closed before the game finished");
        }

        match line.trim().parse::<usize>() {
            Ok(col) if col < COLS && mask[col] => return Ok(col),
            _ => println!("Invalid move, try again."),
        }
    }
}
