use crate::domain::model::{BattleReport, Creature, Round, TIE};
use serde::{Deserialize, Serialize};

/// Which stats take part in a battle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatRules {
    /// All six base stats.
    #[default]
    Standard,
    /// hp, attack and speed only.
    Quick,
}

const STANDARD_STATS: [&str; 6] = [
    "hp",
    "attack",
    "defense",
    "speed",
    "special-attack",
    "special-defense",
];

const QUICK_STATS: [&str; 3] = ["hp", "attack", "speed"];

impl StatRules {
    pub fn stats(self) -> &'static [&'static str] {
        match self {
            StatRules::Standard => &STANDARD_STATS,
            StatRules::Quick => &QUICK_STATS,
        }
    }
}

/// Scores `first` against `second`, one round per compared stat.
///
/// A round goes to the side with the strictly higher base value; equal values
/// are a tie and count for nobody. `first` wins the battle only with strictly
/// more rounds, so a drawn count goes to `second`.
pub fn score(first: &Creature, second: &Creature, rules: StatRules) -> BattleReport {
    let mut rounds = Vec::with_capacity(rules.stats().len());
    let (mut wins1, mut wins2) = (0usize, 0usize);
    let (mut total_stats1, mut total_stats2) = (0u32, 0u32);

    for &stat in rules.stats() {
        let value1 = first.stat(stat);
        let value2 = second.stat(stat);
        total_stats1 += value1;
        total_stats2 += value2;

        let winner = if value1 > value2 {
            wins1 += 1;
            first.name.as_str()
        } else if value2 > value1 {
            wins2 += 1;
            second.name.as_str()
        } else {
            TIE
        };

        rounds.push(Round {
            stat: stat.to_string(),
            pokemon1_value: value1,
            pokemon2_value: value2,
            winner: winner.to_string(),
        });
    }

    let (winner, loser) = if wins1 > wins2 {
        (first, second)
    } else {
        (second, first)
    };

    tracing::debug!(
        "{} vs {}: {}-{} over {} rounds, winner {}",
        first.name,
        second.name,
        wins1,
        wins2,
        rounds.len(),
        winner.name
    );

    BattleReport {
        winner: winner.name.clone(),
        loser: loser.name.clone(),
        rounds,
        wins1,
        wins2,
        total_stats1,
        total_stats2,
    }
}
