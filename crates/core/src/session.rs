use crate::{Frontend, Player, PlayerSetup, RngState, Round, RoundConfig, RoundError, Strategy};
use tracing::debug;

pub const AI_NAMES: [&str; 8] = [
    "Angela", "Bart", "Charly", "Dorothy", "John", "Paul", "Ringo", "George",
];

/// Display prefix for heuristic computer players.
pub const HEURISTIC_PREFIX: &str = "Smart ";

/// Asks for the human seats and fills the rest of the table with computer
/// players named from [`AI_NAMES`] without repetition.
pub fn collect_players(
    frontend: &mut dyn Frontend,
    rng: &mut RngState,
    config: &RoundConfig,
) -> Vec<PlayerSetup> {
    let max_players = config.max_players;
    frontend.message("");
    frontend.message(&format!("How many human players [1-{max_players}]:"));
    let humans = prompt_count(frontend, 1, max_players);

    let mut setups = Vec::with_capacity(max_players);
    for seat in 1..=humans {
        frontend.message(&format!("Please enter the name of player {seat}:"));
        let entered = frontend.prompt_line();
        let name = match entered.trim() {
            "" => format!("Player {seat}"),
            name => name.to_string(),
        };
        setups.push(PlayerSetup::new(Strategy::Human, name));
    }

    let max_ai = max_players.saturating_sub(humans);
    let min_ai = config.min_players.saturating_sub(humans).min(max_ai);
    frontend.message("");
    frontend.message(&format!("How many ai players [{min_ai}-{max_ai}]:"));
    let computers = prompt_count(frontend, min_ai, max_ai);

    let mut pool: Vec<&str> = AI_NAMES.to_vec();
    for _ in 0..computers {
        if pool.is_empty() {
            break;
        }
        let name = pool.remove(rng.index(pool.len()));
        let setup = if rng.coin_flip() {
            PlayerSetup::new(Strategy::Random, name)
        } else {
            PlayerSetup::new(Strategy::Heuristic, format!("{HEURISTIC_PREFIX}{name}"))
        };
        setups.push(setup);
    }
    debug!(?setups, "players collected");
    setups
}

/// Menu loop: start rounds until the user chooses to exit. Returns the number
/// of rounds played.
pub fn run_game(
    frontend: &mut dyn Frontend,
    rng: &mut RngState,
    config: RoundConfig,
) -> Result<usize, RoundError> {
    frontend.message(&format!("Welcome to Switch v{}", env!("CARGO_PKG_VERSION")));
    let mut played = 0;
    loop {
        frontend.message("");
        frontend.message("Please select from one of the following options: [1-2]");
        frontend.message("1 - New Game");
        frontend.message("2 - Exit");
        if frontend.prompt_int(1, 2) != 1 {
            break;
        }
        let players: Vec<Player> = collect_players(frontend, rng, &config)
            .into_iter()
            .map(Player::from)
            .collect();
        let mut round = Round::new(players, config, rng.fork())?;
        round.run_round(frontend);
        played += 1;
    }
    frontend.message("Goodbye!");
    Ok(played)
}

fn prompt_count(frontend: &mut dyn Frontend, min: usize, max: usize) -> usize {
    let value = frontend.prompt_int(min as i64, max as i64);
    value.clamp(min as i64, max as i64) as usize
}
