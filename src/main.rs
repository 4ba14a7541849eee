use std::process::ExitCode;

mod app;
mod config;
mod error;
mod landing;
mod logging;
mod motion;
mod palette;
mod player;
mod runtime;
mod timer;
mod ui;
mod visualizer;

fn main() -> ExitCode {
    match runtime::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("vinyl: {e}");
            ExitCode::FAILURE
        }
    }
}
