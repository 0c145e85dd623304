use std::process::ExitCode;

use anyhow::Result;

use cmddoc_validator::config::Config;
use cmddoc_validator::{runner, summary};

fn main() -> Result<ExitCode> {
    env_logger::init();

    let config = Config::from_args_and_env()?;

    let results = match runner::run_validation(&config) {
        Ok(results) => results,
        Err(e) => {
            eprintln!("Error: {e}");
            return Ok(ExitCode::FAILURE);
        }
    };

    if config.file.is_none() {
        println!("Validating {} command files...", results.len());
    }

    print!("{}", summary::render_results(&results, config.summary_only));

    let code = runner::exit_code(&results, config.strict);
    if code != 0 && config.strict && results.iter().all(|r| r.passed()) {
        println!("\n❌ STRICT MODE: Warnings treated as errors");
    }

    Ok(if code == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
