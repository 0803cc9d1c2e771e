use crate::{
    AutoplayConfig, AutoplayError, AutoplayResult, RecordingFrontend, RoundRecord, RoundStatus,
    SeatSummary, SummaryStats,
};
use std::time::Instant;
use switch_core::{Deck, Player, RngState, Round, Strategy, TurnOutcome};
use tracing::{debug, info};

pub fn seat_name(seat: usize, strategy: Strategy) -> String {
    format!("Seat {} ({})", seat + 1, strategy.label())
}

/// Plays one computer-only round, checking card conservation after each turn.
pub fn simulate_round(
    config: &AutoplayConfig,
    round_no: u32,
) -> Result<RoundRecord, AutoplayError> {
    if let Some(seat) = config.strategies.iter().position(|s| !s.is_ai()) {
        return Err(AutoplayError::HumanSeat(seat));
    }
    let seed = config.seed.wrapping_add(u64::from(round_no));
    let players = config
        .strategies
        .iter()
        .enumerate()
        .map(|(seat, strategy)| Player::new(*strategy, seat_name(seat, *strategy)))
        .collect();
    let mut round = Round::new(players, config.round, RngState::from_seed(seed))?;
    let mut frontend = RecordingFrontend::default();
    round.setup_round(&mut frontend);
    check_conservation(&round)?;

    let mut turns = 0;
    let mut winner = None;
    while turns < config.max_turns {
        turns += 1;
        let outcome = round.play_turn(&mut frontend);
        check_conservation(&round)?;
        if let TurnOutcome::Won(seat) = outcome {
            winner = Some(seat);
            break;
        }
    }

    let status = if winner.is_some() {
        RoundStatus::Won
    } else {
        RoundStatus::MaxTurns
    };
    let event_count = frontend.events.len();
    let events = if config.record_events {
        frontend.events.drain().collect()
    } else {
        Vec::new()
    };
    debug!(round_no, seed, turns, ?status, "autoplay round finished");
    Ok(RoundRecord {
        round: round_no,
        seed,
        status,
        winner,
        winner_name: winner.map(|seat| round.players()[seat].name.clone()),
        winner_strategy: winner.map(|seat| round.players()[seat].strategy),
        turns,
        final_hand_sizes: round.players().iter().map(|p| p.hand.len()).collect(),
        event_count,
        events,
    })
}

pub fn run_autoplay(config: &AutoplayConfig) -> Result<AutoplayResult, AutoplayError> {
    let started = Instant::now();
    let mut rounds = Vec::with_capacity(config.rounds as usize);
    for round_no in 0..config.rounds {
        rounds.push(simulate_round(config, round_no)?);
    }

    let mut seats: Vec<SeatSummary> = config
        .strategies
        .iter()
        .enumerate()
        .map(|(seat, strategy)| SeatSummary {
            seat,
            strategy: *strategy,
            wins: 0,
        })
        .collect();
    let mut completed = 0;
    let mut total_turns: u64 = 0;
    for record in &rounds {
        total_turns += u64::from(record.turns);
        if let Some(winner) = record.winner {
            completed += 1;
            if let Some(seat) = seats.get_mut(winner) {
                seat.wins += 1;
            }
        }
    }
    let average_turns = if rounds.is_empty() {
        0.0
    } else {
        total_turns as f64 / rounds.len() as f64
    };
    let summary = SummaryStats {
        rounds: config.rounds,
        completed,
        max_turns_hit: config.rounds - completed,
        average_turns,
        seats,
        wall_time_ms: started.elapsed().as_millis() as u64,
    };
    info!(
        rounds = summary.rounds,
        completed = summary.completed,
        "autoplay finished"
    );
    Ok(AutoplayResult { rounds, summary })
}

fn check_conservation(round: &Round) -> Result<(), AutoplayError> {
    let found = round.card_count();
    if found != Deck::SIZE {
        return Err(AutoplayError::Conservation {
            expected: Deck::SIZE,
            found,
        });
    }
    Ok(())
}
