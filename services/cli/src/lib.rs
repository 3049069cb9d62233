mod cli;
mod demo;
mod infra;

use prevention_ai::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
