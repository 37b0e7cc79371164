use std::process::ExitCode;

fn main() -> ExitCode {
    match sparkline::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
