use clap::Parser;
use ticklist::cli::commands::Cli;
use ticklist::cli::handlers::{self, Session};
use ticklist::io::{config_io, logging};
use ticklist::model::Config;
use ticklist::tui::{self, RunOptions};
use ticklist::tui::theme::Theme;

fn main() {
    let cli = Cli::parse();

    let config = match config_io::load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        // No subcommand → launch TUI
        None => run_tui(&cli, &config),
        Some(_) => {
            logging::init_cli_logging();
            handlers::dispatch(cli, &config)
        }
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run_tui(cli: &Cli, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let session = Session::resolve(cli, config)?;
    logging::init_tui_logging(&session.data_dir);
    tui::run(RunOptions {
        data_dir: session.data_dir,
        key: session.key,
        route: session.route,
        mouse: config.ui.mouse,
        theme: Theme::from_config(&config.ui),
    })
}
