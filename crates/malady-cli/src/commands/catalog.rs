use comfy_table::{ContentArrangement, Table};
use malady_core::{ConditionKind, Scope};
use malady_sim::Catalog;

pub fn run(filter: Option<&str>) -> Result<(), String> {
    let catalog = Catalog::global();
    let needle = filter.map(str::to_lowercase);

    let kinds: Vec<_> = ConditionKind::all()
        .filter(|kind| match &needle {
            Some(needle) => {
                kind.key().contains(needle.as_str())
                    || catalog.name(*kind).to_lowercase().contains(needle.as_str())
            }
            None => true,
        })
        .collect();

    if kinds.is_empty() {
        println!("  No conditions found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Key", "Name", "Scope", "Handler", "Summary"]);

    for kind in &kinds {
        let descriptor = catalog.descriptor(*kind);
        let scope = match kind.scope() {
            Scope::Singleton => "whole body",
            Scope::PerRegion => "per region",
        };
        let first_line = descriptor.summary.lines().next().unwrap_or_default().trim();
        let summary = if first_line.chars().count() > 60 {
            let cut: String = first_line.chars().take(57).collect();
            format!("{cut}...")
        } else if first_line.is_empty() {
            "—".to_string()
        } else {
            first_line.to_string()
        };
        table.add_row(vec![
            kind.key(),
            descriptor.name.unwrap_or("—"),
            scope,
            if catalog.is_registered(*kind) { "yes" } else { "no" },
            summary.as_str(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} conditions", kinds.len());

    Ok(())
}
