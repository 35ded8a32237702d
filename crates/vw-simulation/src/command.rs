//! Textual control surface for driving a simulation.

use vw_world::Direction;

/// A parsed control command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Advance one turn.
    Advance,
    /// Switch between automatic and manual control.
    ToggleAutomatic,
    /// Switch automatic moves between random and goal-seeking.
    ToggleGoalSeeking,
    /// Move the cleaner by hand.
    Move(Direction),
    /// Recharge the cleaner's battery.
    Recharge,
    /// Empty the cleaner's bag.
    EmptyBag,
    /// Stop the simulation.
    Quit,
    /// Unknown command.
    Unknown(String),
}

impl Command {
    /// Parse one line of input. An empty line advances a turn.
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        match trimmed.to_lowercase().as_str() {
            "" | "t" | "turn" | "next" => Self::Advance,
            "m" | "mode" | "manual" => Self::ToggleAutomatic,
            "i" | "smart" | "seek" => Self::ToggleGoalSeeking,
            "r" | "recharge" => Self::Recharge,
            "v" | "empty" => Self::EmptyBag,
            "q" | "quit" | "exit" => Self::Quit,
            other => match Direction::parse_cardinal(other) {
                Some(direction) => Self::Move(direction),
                None => Self::Unknown(trimmed.to_string()),
            },
        }
    }

    /// Help lines listing every command, for interactive callers.
    pub fn help() -> &'static [&'static str] {
        &[
            "ENTER   advance one turn",
            "m       toggle automatic/manual mode",
            "i       toggle goal-seeking (head for the dirtiest cell)",
            "w/a/s/d move the cleaner by hand (manual mode)",
            "r       recharge the battery",
            "v       empty the bag",
            "q       quit",
        ]
    }
}
