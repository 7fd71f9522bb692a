use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use malady_sim::{Scenario, SimEvent, SimEventKind, Simulation, Tone};
use tracing::debug;

pub fn run(path: &Path, ticks: u64, seed: Option<u64>, verbose: bool) -> Result<(), String> {
    let mut scenario = Scenario::load(path).map_err(|e| e.to_string())?;
    if let Some(seed) = seed {
        scenario.seed = seed;
    }
    let seed = scenario.seed;
    debug!(path = %path.display(), ticks, seed, "running scenario");

    let mut sim = scenario
        .into_simulation()
        .map_err(|e| format!("invalid scenario: {e}"))?;
    let ran = sim
        .run(ticks)
        .map_err(|e| format!("simulation error: {e}"))?;

    // Header
    println!(
        "  {} '{}' {}",
        "Simulation".bold(),
        sim.actor().name,
        format!("({ran} of {ticks} ticks, seed={seed})").dimmed()
    );
    println!(
        "  {} active conditions, {} events logged, turn {}",
        sim.actor().conditions.len(),
        sim.events().len(),
        sim.clock().turn()
    );
    println!();

    // Events
    if verbose {
        println!("  {}", "Event Log".bold().underline());
        println!();
        for event in sim.events().events() {
            print_event(event);
        }
        if sim.events().is_empty() {
            println!("  {}", "(no events)".dimmed());
        }
        println!();
    } else {
        let notable: Vec<_> = sim
            .events()
            .events()
            .iter()
            .filter(|e| {
                matches!(
                    e.kind,
                    SimEventKind::Died { .. } | SimEventKind::Transitioned { .. } | SimEventKind::Memorial
                )
            })
            .collect();
        if !notable.is_empty() {
            println!("  {}", "Notable Events".bold().underline());
            for event in notable {
                print_event(event);
            }
            println!();
        }
    }

    print_conditions(&sim);
    print_attributes(&sim);

    if sim.actor().is_dead() {
        println!("  {} {}", "DEAD".red().bold(), sim.actor().name);
        println!();
    }

    Ok(())
}

fn print_event(event: &SimEvent) {
    let tick_label = format!("[tick {:>4}]", event.tick).dimmed();
    println!("  {tick_label} {}", colorize_event(&event.kind, &event.description));
}

fn print_conditions(sim: &Simulation) {
    println!("  {}", "Conditions".bold().underline());
    println!();
    if sim.actor().conditions.is_empty() {
        println!("  {}", "(none)".dimmed());
        println!();
        return;
    }

    let catalog = sim.catalog();
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Condition", "Status", "Region", "Duration", "Intensity"]);
    for inst in sim.actor().conditions.iter() {
        let label = catalog.label(inst, sim.actor());
        table.add_row(vec![
            inst.kind.key().to_string(),
            if label.is_empty() { "—".to_string() } else { label },
            super::region_cell(inst.region),
            inst.duration.to_string(),
            inst.intensity.to_string(),
        ]);
    }
    println!("{table}");
    println!();
}

fn print_attributes(sim: &Simulation) {
    let actor = sim.actor();
    let (base, effective) = (actor.base, actor.effective);
    let rows = [
        ("Strength", base.strength, effective.strength),
        ("Dexterity", base.dexterity, effective.dexterity),
        ("Intelligence", base.intelligence, effective.intelligence),
        ("Perception", base.perception, effective.perception),
        ("Speed", actor.base_speed, actor.speed),
    ];

    println!("  {}", "Attributes".bold().underline());
    println!();
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Stat", "Base", "Effective"]);
    for (name, base, now) in rows {
        table.add_row(vec![name.to_string(), base.to_string(), format_delta(base, now)]);
    }
    table.add_row(vec!["Pain".to_string(), "0".to_string(), actor.pain.to_string()]);
    table.add_row(vec!["Fatigue".to_string(), "—".to_string(), actor.fatigue.to_string()]);
    println!("{table}");
    println!();
}

fn format_delta(base: i32, now: i32) -> String {
    match now.cmp(&base) {
        std::cmp::Ordering::Less => now.to_string().red().to_string(),
        std::cmp::Ordering::Greater => now.to_string().green().to_string(),
        std::cmp::Ordering::Equal => now.to_string(),
    }
}

fn colorize_event(kind: &SimEventKind, description: &str) -> colored::ColoredString {
    match kind {
        SimEventKind::Died { .. } => description.red().bold(),
        SimEventKind::Message { tone } => match tone {
            Tone::Good => description.green(),
            Tone::Bad => description.red(),
            Tone::Warning => description.yellow(),
            Tone::Info => description.cyan(),
            Tone::Neutral => description.normal(),
        },
        SimEventKind::Memorial => description.magenta(),
        SimEventKind::Gained { .. } | SimEventKind::Transitioned { .. } => description.yellow(),
        SimEventKind::Lost { .. } => description.green(),
        SimEventKind::Spawned { .. } | SimEventKind::Teleported { .. } => description.blue(),
        SimEventKind::Dream => description.italic(),
    }
}
