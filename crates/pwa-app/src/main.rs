mod cli;
mod commands;

use std::process::ExitCode;

use cli::Command;
use tracing_subscriber::EnvFilter;

/// Crates whose logs `--log-level` controls. `RUST_LOG` can add more.
const LOG_TARGETS: [&str; 5] = ["pwactl", "pwa_controls", "pwa_xapi", "pwa_config", "pwa_common"];

fn init_logging(level: &str) {
    let mut filter = EnvFilter::from_default_env();
    for target in LOG_TARGETS {
        let directive = format!("{target}={level}")
            .parse()
            .unwrap_or_else(|_| format!("{target}=info").parse().expect("static directive"));
        filter = filter.add_directive(directive);
    }
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = cli::parse();
    let command = args.command();

    if command == Command::Init {
        init_logging(args.log_level.as_deref().unwrap_or("info"));
        return match commands::init(args.config.as_deref()) {
            Ok(path) => {
                println!("Wrote {}", path.display());
                ExitCode::SUCCESS
            }
            Err(e) => {
                tracing::error!("{e}");
                ExitCode::FAILURE
            }
        };
    }

    let loaded = pwa_config::load_config(args.config.as_deref());
    let level = match (&args.log_level, &loaded) {
        (Some(level), _) => level.clone(),
        (None, Ok(config)) => config.logging.level.as_str().to_string(),
        (None, Err(_)) => "info".to_string(),
    };
    init_logging(&level);

    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Config load failed: {e}");
            return ExitCode::FAILURE;
        }
    };

    let outcome = match command {
        Command::Check => {
            println!("{}", commands::check(&config));
            Ok(())
        }
        Command::Render => commands::render(config).map(|xml| println!("{xml}")),
        Command::Run | Command::Init => {
            tracing::info!("pwactl v{} starting", env!("CARGO_PKG_VERSION"));
            commands::run(config).await
        }
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
