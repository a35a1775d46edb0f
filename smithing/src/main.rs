#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::if_then_some_else_none)]
#![expect(clippy::missing_panics_doc)]
#![expect(clippy::missing_errors_doc)]
#![expect(clippy::module_name_repetitions)]

use log::LevelFilter;

use server::Server;
use std::io::{self};
use tokio::io::{AsyncBufReadExt, BufReader};
#[cfg(not(unix))]
use tokio::signal::ctrl_c;
#[cfg(unix)]
use tokio::signal::unix::{signal, SignalKind};

use std::sync::Arc;

use error::SmithingError;
use smithing_config::SMITHING_CONFIG;
use smithing_core::text::{color::NamedColor, TextComponent};
use smithing_world::item::CatalogFile;
use std::time::Instant;

pub mod command;
pub mod error;
pub mod server;

fn init_logger() {
    if SMITHING_CONFIG.logging.enabled {
        let mut logger = simple_logger::SimpleLogger::new();
        logger = logger.with_timestamp_format(time::macros::format_description!(
            "[year]-[month]-[day] [hour]:[minute]:[second]"
        ));

        if !SMITHING_CONFIG.logging.timestamp {
            logger = logger.without_timestamps();
        }

        if SMITHING_CONFIG.logging.env {
            logger = logger.env();
        }

        logger = logger.with_level(convert_logger_filter(SMITHING_CONFIG.logging.level));

        logger = logger.with_colors(SMITHING_CONFIG.logging.color);
        logger = logger.with_threads(SMITHING_CONFIG.logging.threads);
        if let Err(err) = logger.init() {
            eprintln!("Failed to set up logging: {err}");
        }
    }
}

const fn convert_logger_filter(level: smithing_config::logging::LevelFilter) -> LevelFilter {
    match level {
        smithing_config::logging::LevelFilter::Off => LevelFilter::Off,
        smithing_config::logging::LevelFilter::Error => LevelFilter::Error,
        smithing_config::logging::LevelFilter::Warn => LevelFilter::Warn,
        smithing_config::logging::LevelFilter::Info => LevelFilter::Info,
        smithing_config::logging::LevelFilter::Debug => LevelFilter::Debug,
        smithing_config::logging::LevelFilter::Trace => LevelFilter::Trace,
    }
}

const CARGO_PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() {
    let time = Instant::now();
    init_logger();

    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        default_panic(info);
        std::process::exit(1);
    }));

    log::info!("Starting Smithing {CARGO_PKG_VERSION}");

    log::debug!(
        "Build info: FAMILY: \"{}\", OS: \"{}\", ARCH: \"{}\", BUILD: \"{}\"",
        std::env::consts::FAMILY,
        std::env::consts::OS,
        std::env::consts::ARCH,
        if cfg!(debug_assertions) {
            "Debug"
        } else {
            "Release"
        }
    );

    tokio::spawn(async {
        if let Err(err) = setup_sighandler().await {
            log::error!("Unable to setup signal handlers: {err}");
        }
    });

    // a catalog that exists but cannot be parsed is a startup error, like smithing.toml
    let catalog = CatalogFile::read(&SMITHING_CONFIG.catalog_path).unwrap_or_else(|err| {
        err.log();
        panic!("Failed to load the item catalog: {err}");
    });
    log::info!(
        "Item catalog loaded ({} items). Initializing recipes...",
        catalog.len()
    );

    let server = Arc::new(Server::new(
        &SMITHING_CONFIG.namespace,
        SMITHING_CONFIG.recipes_path.clone(),
        catalog,
    ));

    match server.reload_recipes() {
        Ok(report) => log::info!(
            "Loaded {} smithing recipes ({} failed)",
            report.registered(),
            report.failed()
        ),
        Err(err) => err.log(),
    }

    log::info!("Started in {}ms", time.elapsed().as_millis());

    if SMITHING_CONFIG.commands.use_console {
        setup_console(server).await;
    }

    // keep running until a signal stops the process
    std::future::pending::<()>().await;
}

fn handle_interrupt() {
    log::warn!(
        "{}",
        TextComponent::text("Received interrupt signal; stopping...")
            .color_named(NamedColor::Red)
            .to_pretty_console()
    );
    std::process::exit(0);
}

// Non-UNIX Ctrl-C handling
#[cfg(not(unix))]
async fn setup_sighandler() -> io::Result<()> {
    if ctrl_c().await.is_ok() {
        handle_interrupt();
    }

    Ok(())
}

// Unix signal handling
#[cfg(unix)]
async fn setup_sighandler() -> io::Result<()> {
    let mut interrupt = signal(SignalKind::interrupt())?;
    let mut hangup = signal(SignalKind::hangup())?;
    let mut terminate = signal(SignalKind::terminate())?;

    tokio::select! {
        _ = interrupt.recv() => {}
        _ = hangup.recv() => {}
        _ = terminate.recv() => {}
    }
    handle_interrupt();

    Ok(())
}

async fn setup_console(server: Arc<Server>) {
    let stdin = tokio::io::stdin();
    let mut reader = BufReader::new(stdin);
    loop {
        let mut out = String::new();

        match reader.read_line(&mut out).await {
            Ok(0) => {
                log::info!("Console input closed");
                return;
            }
            Ok(_) => {}
            Err(err) => {
                log::error!("Failed to read console line: {err}");
                return;
            }
        }

        if !out.trim().is_empty() {
            let dispatcher = server.command_dispatcher.clone();
            dispatcher
                .handle_command(&mut command::CommandSender::Console, &server, &out)
                .await;
        }
    }
}
