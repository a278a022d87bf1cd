use clap::Parser;
use taskos::cli::commands::Cli;
use taskos::cli::handlers;
use taskos::io::config_io;
use taskos::logging;

fn main() {
    let cli = Cli::parse();

    let config = match handlers::load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };
    let data_path = config_io::resolve_storage_path(&config, cli.data.as_deref());

    match cli.command {
        None => {
            // No subcommand → launch TUI; stderr is the screen, so log to a file
            if let Err(e) = logging::init_file(cli.verbose, &logging::log_path_for(&data_path)) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
            let store = handlers::open_store(&config, &data_path);
            if let Err(e) = taskos::tui::run(store, &config) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        Some(_) => {
            if let Err(e) = logging::init_stderr(cli.verbose) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
            if let Err(e) = handlers::dispatch(cli, &config, &data_path) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    }
}
