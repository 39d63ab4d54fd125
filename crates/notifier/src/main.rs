use std::fs;
use std::io::{self, Read};

use median::measure_time;

use crate::config::Config;
use crate::error::NotifierError;
use crate::notifications::activity_notifications;

mod config;
mod error;
mod input;
mod notifications;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    let config = Config::from_env()?;
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(config.level()?)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let raw = read_input(&config)?;
    let problem = input::parse(&raw)?;
    let window = config.window.unwrap_or(problem.window);
    tracing::debug!(days = problem.expenditure.len(), window, "Parsed expenditure");

    let (notifications, elapsed) =
        measure_time!({ activity_notifications(&problem.expenditure, window) });
    let notifications = notifications?;
    tracing::info!(notifications, window, ?elapsed, "Counted activity notifications");

    println!("{notifications}");
    Ok(())
}

fn read_input(config: &Config) -> Result<String, NotifierError> {
    match &config.input {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut raw = String::new();
            io::stdin().read_to_string(&mut raw)?;
            Ok(raw)
        }
    }
}
