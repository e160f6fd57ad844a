//=========================================================================
// solo-pong
//=========================================================================
//
// Opens the game window. Log verbosity follows `RUST_LOG` (default: info).
//
//=========================================================================

use std::process::ExitCode;

use env_logger::Env;
use log::error;

use solo_pong::EngineBuilder;

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    match EngineBuilder::new().build().run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
