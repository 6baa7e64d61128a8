//! `quadfit` binary: fit the embedded data set, print the polynomial, show the chart.

use std::process::ExitCode;

fn main() -> ExitCode {
    match quadfit::app::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}
