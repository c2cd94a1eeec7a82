//=========================================================================
// Arcadia: Process Entry
//
// Usage: arcadia [TITLE]
//
// Logging is configured through RUST_LOG (default: info).
//
//=========================================================================

use std::process::ExitCode;

use arcadia_engine::EngineBuilder;
use env_logger::{Builder, Env};
use log::error;

fn main() -> ExitCode {
    Builder::from_env(Env::default().default_filter_or("info"))
        .filter_module("winit", log::LevelFilter::Warn)
        .init();

    let mut builder = EngineBuilder::new();
    if let Some(title) = std::env::args().nth(1) {
        builder = builder.with_title(title);
    }

    let result = builder.build().and_then(|engine| engine.run());

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
