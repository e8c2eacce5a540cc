use clap::Parser;
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};

use typetee::cli::{self, Args, Command, PaletteAction};
use typetee::config::Config;

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    let config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .build();
    // Only fails when a logger is already installed.
    let _ = TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto);
}

#[tokio::main]
async fn main() {
    // dotenv::dotenv() returns Err if .env doesn't exist, which is fine
    let _ = dotenv::dotenv();

    let args = Args::parse();
    init_logging(args.verbose);

    let config = match Config::load(args.config.as_deref()) {
        Ok(config) => config.with_env(),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let result = match &args.command {
        Command::Convert(convert) => cli::convert(convert, &config).await,
        Command::Render(render) => cli::render(render, &config).await,
        Command::Export(export) => cli::export(export, &config).await,
        Command::Palette {
            action: PaletteAction::List,
        } => cli::list_palettes(),
        Command::Config { action } => {
            cli::handle_config_action(action.clone(), args.config.as_deref(), &config);
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        if e.needs_reupload() {
            eprintln!("Upload a different image and try again.");
        }
        std::process::exit(1);
    }
}
