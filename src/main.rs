use clap::Parser;
use scorecache::utils::{logger, validation::Validate};
use scorecache::{CacheRefresher, Config, FsArtifactStore, HttpFetcher, ModelBuilder};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut config = Config::parse();
    if let Some(path) = config.config.take() {
        config = Config::from_file(&path)?;
    }

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting scorecache");
    if config.verbose {
        tracing::debug!("Config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let store = FsArtifactStore::new(&config.cache_dir);
    let fetcher = HttpFetcher::new(config.fetch_timeout(), config.fetch_retries)?;
    let refresher = CacheRefresher::new(fetcher, store.clone(), &config);

    match refresher.refresh_all().await {
        Ok(report) => {
            tracing::info!(
                "Refresh complete: {} fetched, {} fresh, {} failed",
                report.fetched,
                report.fresh,
                report.failures.len()
            );
            for (artifact, err) in &report.failures {
                eprintln!("⚠️  {} could not be refreshed: {}", artifact, err);
            }
        }
        Err(e) => {
            tracing::error!("Cache refresh failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    let builder = ModelBuilder::new(store, &config);
    match builder.build() {
        Ok(model) => {
            println!(
                "✅ {} (v{}): {} leaderboards",
                model.profile.name,
                model.profile.version,
                model.leaderboards.len()
            );
            for board in &model.leaderboards {
                println!(
                    "  {} [{}]: {} highscores",
                    board.name,
                    board.id,
                    board.highscores.len()
                );
                if let Some(top) = board.highscores.first() {
                    println!("    top: {} by {}", top.display_text, top.user_name);
                }
            }
        }
        Err(e) => {
            tracing::error!("Model build failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
