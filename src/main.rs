// A map measurement tool for field work areas, made with the Bevy game
// engine.

use clap::Parser;
use fieldmark::core::{create_app, CliArgs};
use fieldmark::logger::init_custom_logger;

fn main() -> anyhow::Result<()> {
    let cli_args = CliArgs::parse();
    init_custom_logger(cli_args.debug);

    let mut app = create_app(cli_args)?;
    app.run();
    Ok(())
}
