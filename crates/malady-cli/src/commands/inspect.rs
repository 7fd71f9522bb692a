use colored::Colorize;
use malady_core::{Actor, BodyRegion, InflictMode};
use malady_sim::Catalog;

pub fn run(key: &str, duration: i32, intensity: i32, region: Option<&str>) -> Result<(), String> {
    let kind = super::parse_kind(key)?;
    let region = region.and_then(BodyRegion::parse_or_whole);

    let mut actor = Actor::default();
    actor
        .conditions
        .inflict(kind, duration, intensity, region, InflictMode::Replace);
    let inst = actor
        .conditions
        .iter()
        .next()
        .ok_or_else(|| format!("could not place {key}"))?;

    let catalog = Catalog::global();
    let label = catalog.label(inst, &actor);
    println!("  {} {}", catalog.name(kind).bold(), format!("({})", kind.key()).dimmed());
    println!();
    println!(
        "  {:<10} {}",
        "Status:",
        if label.is_empty() { "(hidden)".dimmed().to_string() } else { label }
    );
    println!("  {:<10} {}", "Region:", super::region_cell(inst.region));
    println!("  {:<10} {}", "Duration:", inst.duration);
    println!("  {:<10} {}", "Intensity:", inst.intensity);

    let speed = catalog.speed_modifier(inst);
    let speed = match speed.signum() {
        -1 => speed.to_string().red().to_string(),
        1 => format!("+{speed}").green().to_string(),
        _ => "0".to_string(),
    };
    println!("  {:<10} {speed}", "Speed:");
    println!();

    let description = catalog.description(inst);
    if !description.trim().is_empty() {
        for line in description.lines() {
            println!("  {}", line.trim_end());
        }
        println!();
    }

    Ok(())
}
