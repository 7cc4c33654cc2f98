use training_stats::config::Config;
use training_stats_cli::{SAMPLE_PACKAGES, init_tracing, run};

fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    init_tracing(&config.log_level);
    tracing::info!("training_stats: log filter: {}", config.log_level);

    let stdout = std::io::stdout();
    run(&SAMPLE_PACKAGES, config.format, stdout.lock())?;

    tracing::info!(
        "training_stats: reported {} workouts",
        SAMPLE_PACKAGES.len()
    );
    Ok(())
}
