mod cli;
mod simulate;

use hiring_pipeline::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
