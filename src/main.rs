use clap::Parser;
use std::error::Error;
use std::io;
use std::process::ExitCode;
use vlsm_planner::app;
use vlsm_planner::cli::Cli;
use vlsm_planner::config::Config;
use vlsm_planner::logging;

fn main() -> Result<ExitCode, Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    logging::init(cli.verbose);
    log::info!("#Start main()");

    let config = Config::from_env()?.with_cli(&cli);
    if config.no_color {
        colored::control::set_override(false);
    }

    let stdin = io::stdin();
    let result = app::run(&cli, &config, stdin.lock(), io::stdout(), &mut io::stderr())?;

    log::info!("#End main()");
    Ok(match result {
        Some(_) => ExitCode::SUCCESS,
        None => ExitCode::FAILURE,
    })
}
