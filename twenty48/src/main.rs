//! twenty48: slide and merge tiles to reach 2048.

use clap::Parser;

use twenty48_lib::cli::Args;
use twenty48_lib::{GameModel, UI_HEIGHT, UI_WIDTH};
use twenty48_term::{App, AppConfig, CrosstermDriver};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let model = GameModel::new(args.game_config(), args.theme)?;
    let driver = CrosstermDriver::new().with_mouse(!args.no_mouse);
    let mut app = App::new(AppConfig {
        model,
        driver,
        width: UI_WIDTH,
        height: UI_HEIGHT,
    });
    app.run()?;
    Ok(())
}
