mod app;

use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    match app::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("[ERROR] {:#}", err);
            ExitCode::FAILURE
        }
    }
}
