use crate::AutoplayError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use switch_core::{Event, Strategy};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RoundStatus {
    Won,
    MaxTurns,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundRecord {
    pub round: u32,
    pub seed: u64,
    pub status: RoundStatus,
    pub winner: Option<usize>,
    #[serde(default)]
    pub winner_name: Option<String>,
    #[serde(default)]
    pub winner_strategy: Option<Strategy>,
    pub turns: u32,
    pub final_hand_sizes: Vec<usize>,
    pub event_count: usize,
    #[serde(default)]
    pub events: Vec<Event>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeatSummary {
    pub seat: usize,
    pub strategy: Strategy,
    pub wins: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryStats {
    pub rounds: u32,
    pub completed: u32,
    pub max_turns_hit: u32,
    pub average_turns: f64,
    pub seats: Vec<SeatSummary>,
    pub wall_time_ms: u64,
}

impl SummaryStats {
    pub fn wins_for(&self, strategy: Strategy) -> u32 {
        self.seats
            .iter()
            .filter(|seat| seat.strategy == strategy)
            .map(|seat| seat.wins)
            .sum()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutoplayResult {
    pub rounds: Vec<RoundRecord>,
    pub summary: SummaryStats,
}

impl AutoplayResult {
    pub fn to_text_report(&self) -> String {
        let summary = &self.summary;
        let mut lines = vec![
            format!(
                "rounds: {} completed: {} max_turns: {} avg_turns: {:.1} wall_ms: {}",
                summary.rounds,
                summary.completed,
                summary.max_turns_hit,
                summary.average_turns,
                summary.wall_time_ms
            ),
            String::new(),
            "seats:".to_string(),
        ];
        for seat in &summary.seats {
            lines.push(format!(
                "  seat {:>2} {:<9} wins {:>4} ({:.1}%)",
                seat.seat + 1,
                seat.strategy.label(),
                seat.wins,
                percent(seat.wins, summary.completed)
            ));
        }
        lines.push(String::new());
        lines.push("strategies:".to_string());
        for strategy in [Strategy::Heuristic, Strategy::Random] {
            let seats = summary
                .seats
                .iter()
                .filter(|seat| seat.strategy == strategy)
                .count();
            if seats == 0 {
                continue;
            }
            let wins = summary.wins_for(strategy);
            lines.push(format!(
                "  {:<9} seats {} wins {:>4} ({:.1}%)",
                strategy.label(),
                seats,
                wins,
                percent(wins, summary.completed)
            ));
        }
        lines.push(String::new());
        lines.push("rounds:".to_string());
        for record in &self.rounds {
            let outcome = match (record.status, record.winner_name.as_ref()) {
                (RoundStatus::Won, Some(name)) => format!("won by {name}"),
                _ => "turn limit".to_string(),
            };
            lines.push(format!(
                "  round {:>4} seed {:>20} turns {:>5} hands {:?} {}",
                record.round, record.seed, record.turns, record.final_hand_sizes, outcome
            ));
            for event in &record.events {
                lines.push(format!("    {event}"));
            }
        }
        lines.join("\n")
    }
}

fn percent(part: u32, whole: u32) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 * 100.0 / whole as f64
    }
}

pub fn write_json(path: &Path, result: &AutoplayResult) -> Result<(), AutoplayError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let body = serde_json::to_string_pretty(result)?;
    fs::write(path, body)?;
    Ok(())
}

pub fn write_text(path: &Path, result: &AutoplayResult) -> Result<(), AutoplayError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, result.to_text_report())?;
    Ok(())
}
