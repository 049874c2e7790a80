use colored::Colorize;
use gobi_game::{Command, EventOutcome, ResultSummary, StatusReport, TurnReport};
use std::io::{self, Write};

pub fn header(out: &mut impl Write, title: &str) -> io::Result<()> {
    let rule = "=".repeat(title.chars().count());
    writeln!(out)?;
    writeln!(out, "{}", rule.cyan())?;
    writeln!(out, "{}", title.bright_cyan().bold())?;
    writeln!(out, "{}", rule.cyan())
}

/// Map, vitals and the action menu shown at the top of every day.
pub fn day_panel(out: &mut impl Write, status: &StatusReport) -> io::Result<()> {
    header(out, &format!("Day {} - Choose your action", status.day))?;
    writeln!(out, "{}", status.progress_bar)?;
    writeln!(
        out,
        "Player Health: {}/100 | Thirst: {}/5 | Water: {}",
        status.health, status.thirst, status.water
    )?;
    writeln!(
        out,
        "Camel Stamina (fatigue): {}% | Camel Health: {}/100",
        status.camel_stamina, status.camel_health
    )?;
    writeln!(
        out,
        "Officers are {} km behind you.",
        status.officers_behind.trunc()
    )?;
    writeln!(out)?;
    writeln!(out, "Actions:")?;
    for command in Command::ALL {
        writeln!(out, " {command}")?;
    }
    Ok(())
}

pub fn status(out: &mut impl Write, status: &StatusReport) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "----- STATUS -----".bold())?;
    writeln!(
        out,
        "Distance: {}/{} km",
        status.distance, status.total_distance
    )?;
    writeln!(out, "Player Health: {}/100", status.health)?;
    writeln!(out, "Thirst: {}/5", status.thirst)?;
    let sick = if status.camel_sick { " (sick)" } else { "" };
    writeln!(
        out,
        "Camel: Stamina {}% | Health {}/100{sick}",
        status.camel_stamina, status.camel_health
    )?;
    writeln!(
        out,
        "Water: {} | Bandage: {}",
        status.water, status.bandages
    )?;
    writeln!(out, "Score so far: {}", status.score)?;
    writeln!(out, "Achievements: {}", achievement_list(&status.achievements))
}

fn achievement_list(labels: &[impl AsRef<str>]) -> String {
    if labels.is_empty() {
        return String::from("(none)");
    }
    labels
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(", ")
}

fn event_line(event: EventOutcome) -> String {
    let message = event.message();
    match event {
        EventOutcome::Oasis | EventOutcome::SupplyCache { .. } => message.green().to_string(),
        EventOutcome::Sandstorm { .. } | EventOutcome::CamelSickness { .. } => {
            message.yellow().to_string()
        }
        EventOutcome::Bandits { .. } => message.red().to_string(),
    }
}

pub fn turn(out: &mut impl Write, report: &TurnReport) -> io::Result<()> {
    if let Some(narration) = &report.narration {
        writeln!(out, "{narration}")?;
    }
    if let Some(event) = report.event {
        writeln!(out)?;
        writeln!(out, "{}", event_line(event))?;
    }
    for achievement in &report.unlocked {
        writeln!(
            out,
            "{}",
            format!("Achievement unlocked: {achievement}").bright_yellow()
        )?;
    }
    if let Some(ending) = report.ending {
        writeln!(out)?;
        let headline = if ending.is_victory() {
            ending.headline().bright_green().bold()
        } else {
            ending.headline().bright_red().bold()
        };
        writeln!(out, "{headline}")?;
    }
    Ok(())
}

pub fn summary(out: &mut impl Write, summary: &ResultSummary) -> io::Result<()> {
    header(out, "GAME OVER / SUMMARY")?;
    writeln!(out, "Difficulty: {}", summary.difficulty)?;
    writeln!(out, "Days on the trail: {}", summary.days)?;
    writeln!(
        out,
        "Distance traveled: {}/{} km",
        summary.distance,
        gobi_game::TOTAL_DISTANCE
    )?;
    writeln!(out, "Final Player Health: {}/100", summary.health)?;
    writeln!(
        out,
        "Final Camel Stamina: {}% | Camel Health: {}/100",
        summary.camel_stamina, summary.camel_health
    )?;
    writeln!(out, "Water left: {}", summary.water)?;
    writeln!(out, "Oases found: {}", summary.oases)?;
    writeln!(out)?;
    writeln!(out, "Achievements unlocked:")?;
    if summary.achievements.is_empty() {
        writeln!(out, " (none)")?;
    }
    for label in &summary.achievements {
        writeln!(out, " - {label}")?;
    }
    writeln!(out)?;
    let breakdown = &summary.breakdown;
    writeln!(
        out,
        "Score: ({} distance + {} water + {} health + {} camel + {} oasis + {} achievements) x {}",
        breakdown.distance,
        breakdown.water,
        breakdown.health,
        breakdown.camel,
        breakdown.oasis,
        breakdown.achievements,
        breakdown.multiplier
    )?;
    writeln!(
        out,
        "{}",
        format!("Final Score: {}", summary.score).bright_cyan().bold()
    )
}
