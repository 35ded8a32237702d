pub mod play;
pub mod run;

use clap::Args;
use colored::{ColoredString, Colorize};

use vw_simulation::{DirectionSearch, SimConfig, SimEventKind, Simulation};

/// Options describing the room and the actors, shared by every subcommand.
#[derive(Args, Debug)]
pub struct WorldArgs {
    /// Grid height
    #[arg(long, default_value = "10")]
    rows: usize,

    /// Grid width
    #[arg(long, default_value = "20")]
    cols: usize,

    /// RNG seed for deterministic runs
    #[arg(short, long, default_value = "42")]
    seed: u64,

    /// Percentage of cells drawn for obstacles
    #[arg(long, default_value = "5")]
    obstacles: u32,

    /// Percentage of cells drawn for dirt
    #[arg(long, default_value = "30")]
    dirt: u32,

    /// Battery capacity of the cleaner
    #[arg(long, default_value = "100")]
    battery: u32,

    /// Bag capacity of the cleaner
    #[arg(long, default_value = "50")]
    bag: u32,

    /// Chance per turn, in percent, that a cat shows up
    #[arg(long, default_value = "10")]
    cat_chance: u32,

    /// Try every direction once instead of eight random draws
    #[arg(long)]
    shuffle: bool,
}

impl WorldArgs {
    fn config(&self) -> SimConfig {
        let search = if self.shuffle {
            DirectionSearch::Shuffle
        } else {
            DirectionSearch::RandomDraws
        };
        SimConfig::default()
            .with_seed(self.seed)
            .with_size(self.rows, self.cols)
            .with_obstacle_percent(self.obstacles)
            .with_dirt_percent(self.dirt)
            .with_battery_capacity(self.battery)
            .with_bag_capacity(self.bag)
            .with_spawn_percent(self.cat_chance)
            .with_search(search)
    }

    fn describe(&self) -> String {
        format!(
            "{}x{}, seed={}, {}% obstacles, {}% dirt",
            self.rows, self.cols, self.seed, self.obstacles, self.dirt
        )
    }
}

/// Build the simulation described by `args`.
fn build(args: &WorldArgs, smart: bool) -> Result<Simulation, String> {
    let mut sim =
        Simulation::new(args.config()).map_err(|e| format!("simulation setup failed: {e}"))?;
    if smart {
        sim.toggle_goal_seeking();
    }
    Ok(sim)
}

fn colorize_event(kind: &SimEventKind, description: &str) -> ColoredString {
    match kind {
        SimEventKind::TurnStarted => description.bold(),
        SimEventKind::Cleaned { .. } => description.green(),
        SimEventKind::Dirtied { .. } | SimEventKind::DirtIncreased { .. } => description.yellow(),
        SimEventKind::CleanerTrapped { .. }
        | SimEventKind::CleanerInert { .. }
        | SimEventKind::MoveBlocked { .. } => description.red(),
        SimEventKind::DisruptorAppeared { .. } | SimEventKind::DisruptorLeft { .. } => {
            description.magenta()
        }
        SimEventKind::ModeChanged { .. }
        | SimEventKind::BatteryRecharged
        | SimEventKind::BagEmptied => description.cyan(),
        SimEventKind::MoveIgnored { .. }
        | SimEventKind::AwaitingManualMove
        | SimEventKind::StopRequested
        | SimEventKind::UnknownCommand { .. } => description.normal(),
    }
}
