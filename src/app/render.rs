use crate::core::{BattleOutcome, RosterMember};
use crate::domain::model::{BattleRecord, CatalogPage, Creature, RosterEntry, TIE};
use crate::domain::services::roster::MAX_ROSTER_SIZE;
use std::fmt::Write;

pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn types_label(types: &[String]) -> String {
    if types.is_empty() {
        "-".to_string()
    } else {
        types.join("/")
    }
}

pub fn page(page: &CatalogPage, search: Option<&str>) -> String {
    let mut out = String::new();
    if page.creatures.is_empty() {
        match search {
            Some(term) => {
                let _ = writeln!(out, "No creatures matching '{}' on this page", term);
            }
            None => out.push_str("No creatures on this page\n"),
        }
    }
    for creature in &page.creatures {
        let _ = writeln!(
            out,
            "#{:<4} {:<14} {}",
            creature.id,
            capitalize(&creature.name),
            types_label(&creature.types)
        );
    }
    let _ = write!(out, "Page {} of {}", page.page, page.total_pages);
    out
}

pub fn creature(creature: &Creature) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "#{} {}", creature.id, capitalize(&creature.name));
    let _ = writeln!(out, "Types:     {}", types_label(&creature.types));
    let _ = writeln!(
        out,
        "Height:    {:.1} m   Weight: {:.1} kg",
        creature.height as f64 / 10.0,
        creature.weight as f64 / 10.0
    );
    for stat in &creature.stats {
        let _ = writeln!(out, "  {:<16} {:>3}", stat.name, stat.base_stat);
    }
    if !creature.abilities.is_empty() {
        let _ = writeln!(out, "Abilities: {}", creature.abilities.join(", "));
    }
    if let Some(image) = creature.image() {
        let _ = writeln!(out, "Image:     {}", image);
    }
    out.trim_end().to_string()
}

pub fn roster(entries: &[RosterEntry]) -> String {
    if entries.is_empty() {
        return "Your roster is empty. Add creatures from the catalog!".to_string();
    }
    let mut out = String::new();
    for entry in entries {
        let _ = writeln!(
            out,
            "[{}] {} (#{}) {}",
            entry.id,
            capitalize(&entry.name),
            entry.pokemon_id,
            types_label(&entry.types)
        );
    }
    let _ = write!(out, "{}/{} slots used", entries.len(), MAX_ROSTER_SIZE);
    out
}

pub fn members(members: &[RosterMember]) -> String {
    if members.is_empty() {
        return roster(&[]);
    }
    let mut out = String::new();
    for member in members {
        let c = &member.creature;
        let total: u32 = c.stats.iter().map(|s| s.base_stat).sum();
        let _ = writeln!(
            out,
            "[{}] {} (#{}) {}  hp {} atk {} def {} spd {}  total {}",
            member.entry.id,
            capitalize(&c.name),
            c.id,
            types_label(&c.types),
            c.stat("hp"),
            c.stat("attack"),
            c.stat("defense"),
            c.stat("speed"),
            total
        );
    }
    let _ = write!(out, "{}/{} slots used", members.len(), MAX_ROSTER_SIZE);
    out
}

pub fn team(team: &[Creature]) -> String {
    team.iter()
        .enumerate()
        .map(|(i, c)| {
            format!(
                "{}. {} (#{}) {}",
                i + 1,
                capitalize(&c.name),
                c.id,
                types_label(&c.types)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn battle(outcome: &BattleOutcome) -> String {
    let report = &outcome.report;
    let first = capitalize(&outcome.challenger.name);
    let second = capitalize(&outcome.opponent.name);

    let mut out = String::new();
    let _ = writeln!(out, "{} vs {}", first, second);
    for round in &report.rounds {
        let winner = if round.winner == TIE {
            "tie".to_string()
        } else {
            capitalize(&round.winner)
        };
        let _ = writeln!(
            out,
            "  {:<16} {:>3} - {:<3}  {}",
            round.stat, round.pokemon1_value, round.pokemon2_value, winner
        );
    }
    let _ = writeln!(
        out,
        "Rounds {}-{}, totals {}-{}",
        report.wins1, report.wins2, report.total_stats1, report.total_stats2
    );
    let _ = write!(
        out,
        "Winner: {}  Loser: {}",
        capitalize(&report.winner),
        capitalize(&report.loser)
    );
    out
}

pub fn history(battles: &[BattleRecord]) -> String {
    if battles.is_empty() {
        return "No battles recorded yet".to_string();
    }
    battles
        .iter()
        .map(|b| {
            format!(
                "{}  {} vs {}  winner: {}",
                b.timestamp.format("%Y-%m-%d %H:%M:%S"),
                capitalize(&b.pokemon1),
                capitalize(&b.pokemon2),
                capitalize(&b.winner)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
