use std::io;
use std::process::ExitCode;

use algo_kernels::cli::run_knapsack;

fn main() -> ExitCode {
    match run_knapsack(io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("knapsack: {}", err);
            ExitCode::FAILURE
        }
    }
}
