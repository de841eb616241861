//! Command-line arguments.

use clap::Parser;

use twenty48_core::GameConfig;
use twenty48_core::board::DEFAULT_SIZE;
use twenty48_core::config::DEFAULT_SWIPE_THRESHOLD;
use twenty48_core::spawn::DEFAULT_FOUR_PROBABILITY;

use crate::theme::Theme;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Slide and merge tiles to reach 2048", long_about = None)]
pub struct Args {
    /// RNG seed, for a reproducible game.
    #[clap(long)]
    pub seed: Option<u64>,

    /// Board side length (2 to 8).
    #[clap(short, long, default_value_t = DEFAULT_SIZE)]
    pub size: usize,

    /// Probability that a new tile is a 4.
    #[clap(short = 'p', long, default_value_t = DEFAULT_FOUR_PROBABILITY)]
    pub four_probability: f64,

    /// Minimum mouse drag, in cells, that counts as a swipe.
    #[clap(long, default_value_t = DEFAULT_SWIPE_THRESHOLD)]
    pub swipe_threshold: i32,

    #[clap(short, long, value_enum, default_value_t = Theme::Light)]
    pub theme: Theme,

    /// Do not capture the mouse.
    #[clap(long, action = clap::ArgAction::SetTrue)]
    pub no_mouse: bool,
}

impl Args {
    /// The session configuration. Ranges are checked when the session
    /// starts.
    pub fn game_config(&self) -> GameConfig {
        GameConfig {
            size: self.size,
            four_probability: self.four_probability,
            swipe_threshold: self.swipe_threshold,
            seed: self.seed,
            ..GameConfig::default()
        }
    }
}
