use std::io;
use std::process::ExitCode;

use algo_kernels::cli::run_merge_sort;

fn main() -> ExitCode {
    let stdin = io::stdin();
    let stdout = io::stdout();
    match run_merge_sort(stdin.lock(), stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("mergesort: {}", err);
            ExitCode::FAILURE
        }
    }
}
