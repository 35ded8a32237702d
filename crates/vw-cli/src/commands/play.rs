//! Interactive console loop: one command per line on standard input.

use std::io::{self, BufRead, Write};

use colored::Colorize;

use vw_simulation::{Alert, Command, Phase, Simulation};

use super::WorldArgs;

pub fn run(args: &WorldArgs, smart: bool) -> Result<(), String> {
    let mut sim = super::build(args, smart)?;

    println!(
        "  {} {}",
        "Vacuum World".bold(),
        format!("({})", args.describe()).dimmed()
    );
    println!("  {}", "Commands".bold().underline());
    for help in Command::help() {
        println!("    {help}");
    }
    println!();
    show(&sim);

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let command = Command::parse(&line);
        let redraw = matches!(command, Command::Advance | Command::Move(_));

        let mark = sim.events().pushed();
        sim.apply(command);
        for event in sim.events().since(mark) {
            println!("{}", super::colorize_event(&event.kind, &event.description));
        }
        if redraw {
            show(&sim);
        }

        if sim.phase() == Phase::Terminated {
            if sim.is_clean() {
                println!("{}", Alert::AllClean.to_string().green().bold());
                println!("Total steps: {}", sim.cleaner().steps());
                print!("{}", sim.render());
            }
            break;
        }
        for alert in sim.alerts() {
            let hint = match alert {
                Alert::BatteryEmpty => "Press 'r' to recharge it or 'q' to quit.",
                Alert::BagFull => "Press 'v' to empty it or 'q' to quit.",
                Alert::AllClean => continue,
            };
            println!("{} {hint}", alert.to_string().yellow());
        }
    }

    println!("\nSimulation over.");
    Ok(())
}

fn show(sim: &Simulation) {
    print!("{}", sim.render());
    println!("{}\n", sim.stats());
}
