use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use vw_simulation::{Alert, Phase, SimEventKind, Simulation};

use super::WorldArgs;

pub fn run(
    args: &WorldArgs,
    turns: u64,
    smart: bool,
    verbose: bool,
    json: bool,
) -> Result<(), String> {
    let mut sim = super::build(args, smart)?;

    while sim.phase() == Phase::Running && sim.current_turn() < turns {
        sim.turn();
    }

    if json {
        return print_json(&sim);
    }

    // Header
    println!(
        "  {} {}",
        "Vacuum World".bold(),
        format!("({}, {} turns max)", args.describe(), turns).dimmed()
    );
    let played = sim.current_turn();
    if sim.is_clean() {
        println!("  {} after {played} turns.", "The room is clean".green().bold());
    } else {
        println!("  Stopped after {played} turns with dirt left.");
    }
    println!();

    print!("{}", sim.render());
    println!();

    // Events
    if verbose {
        println!("  {}", "Event Log".bold().underline());
        println!();
        for event in sim.events().events() {
            let turn_label = format!("[turn {:>3}]", event.turn).dimmed();
            let desc = super::colorize_event(&event.kind, &event.description);
            println!("  {turn_label} {desc}");
        }
        if sim.events().is_empty() {
            println!("  {}", "(no events)".dimmed());
        }
        println!();
    } else {
        print_notable_events(&sim);
    }

    println!("  {}", "Summary".bold().underline());
    println!();
    let stats = sim.stats();
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Metric", "Value"]);
    table.add_row(vec!["Turns played".to_string(), stats.turn.to_string()]);
    table.add_row(vec!["Steps".to_string(), stats.steps.to_string()]);
    table.add_row(vec![
        "Battery".to_string(),
        format!("{}/{}", stats.battery, stats.battery_capacity),
    ]);
    table.add_row(vec![
        "Bag".to_string(),
        format!("{}/{}", stats.bag_fill, stats.bag_capacity),
    ]);
    table.add_row(vec![
        "Remaining dirt".to_string(),
        format!("{} units in {} cells", stats.remaining_dirt, stats.dirty_cells),
    ]);
    table.add_row(vec![
        "Obstacles".to_string(),
        sim.grid().obstacle_count().to_string(),
    ]);
    table.add_row(vec!["Mode".to_string(), stats.mode.to_string()]);
    println!("{table}");
    println!();

    for alert in sim.alerts() {
        let line = match alert {
            Alert::AllClean => alert.to_string().green().bold(),
            Alert::BatteryEmpty | Alert::BagFull => alert.to_string().yellow().bold(),
        };
        println!("  {line}");
    }

    Ok(())
}

fn print_notable_events(sim: &Simulation) {
    let count = |pred: fn(&SimEventKind) -> bool| {
        sim.events()
            .events()
            .iter()
            .filter(|e| pred(&e.kind))
            .count()
    };
    let cleaned = count(|k| matches!(k, SimEventKind::Cleaned { .. }));
    let cats = count(|k| matches!(k, SimEventKind::DisruptorAppeared { .. }));
    let dirtied = count(|k| {
        matches!(
            k,
            SimEventKind::Dirtied { .. } | SimEventKind::DirtIncreased { .. }
        )
    });
    let trapped = count(|k| matches!(k, SimEventKind::CleanerTrapped { .. }));

    println!("  {}", "Notable Events".bold().underline());
    println!("  {cleaned} units of dirt picked up");
    println!("  {cats} cat visits, {dirtied} cells messed up");
    if trapped > 0 {
        println!("  {}   cleaner trapped {trapped} times", "WARN".yellow().bold());
    }
    if let Some(event) = sim
        .events()
        .events()
        .iter()
        .rev()
        .find(|e| matches!(e.kind, SimEventKind::CleanerInert { .. }))
    {
        println!("  {}   {}", "WARN".yellow().bold(), event.description);
    }
    println!();
}

fn print_json(sim: &Simulation) -> Result<(), String> {
    let export = serde_json::json!({
        "clean": sim.is_clean(),
        "stats": sim.stats(),
        "events": sim.events().events(),
    });
    let text = serde_json::to_string_pretty(&export)
        .map_err(|e| format!("JSON serialization error: {e}"))?;
    println!("{text}");
    Ok(())
}
