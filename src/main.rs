use pseudoloc::cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Select the display language for the tool's own messages.
    pseudoloc::init();

    match cli::run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
