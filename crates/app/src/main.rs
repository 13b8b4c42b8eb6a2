mod cli;
mod terminal;

use std::sync::Arc;

use clap::Parser;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::EngineConfig;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use ui::{App, UiApp, build_app_context};

use crate::cli::{Cli, Command};

const APP_NAME: &str = "Num Crunch";

struct DesktopApp {
    engine_config: EngineConfig,
}

impl UiApp for DesktopApp {
    fn app_name(&self) -> &str {
        APP_NAME
    }

    fn engine_config(&self) -> EngineConfig {
        self.engine_config
    }
}

fn init_tracing() {
    // stderr keeps log lines out of the terminal drill's stdout.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing();

    let engine_config = cli.engine.engine_config();
    tracing::info!(
        command = ?cli.command_or_default(),
        seed = ?engine_config.seed,
        answers = %engine_config.answer_policy,
        "starting"
    );

    match cli.command_or_default() {
        Command::Ui => {
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp { engine_config });
            let context = build_app_context(&app);

            // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title(APP_NAME)
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Drill { json } => {
            let mut engine = engine_config.build_engine();
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout().lock();
            terminal::run_drill(&mut engine, stdin.lock(), &mut stdout, json)?;
            tracing::info!(stats = ?engine.stats(), "drill finished");
            Ok(())
        }
    }
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
