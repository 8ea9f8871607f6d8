use clap::{CommandFactory, Parser};
use log::*;
use std::process;

use scribe::{Args, Result, command};

fn initialize_logger(debug: bool) -> Result<()> {
    let filter = if debug {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Info
    };

    let config = simplelog::ConfigBuilder::new()
        .add_filter_allow_str("scribe")
        .build();

    simplelog::TermLogger::init(
        filter,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    Ok(())
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    initialize_logger(args.debug)?;

    if let Err(err) = command::release::execute(&args).await {
        error!("{err}");

        if err.is_config() {
            eprintln!("{}", Args::command().render_help());
        }

        process::exit(1);
    }

    Ok(())
}
