use crate::config::{Config, FetchFailurePolicy};
use crate::core::endpoint::Endpoints;
use crate::core::freshness::is_stale;
use crate::domain::artifact::Artifact;
use crate::domain::documents::{GameProfileDoc, HighscoreListingDoc, LeaderboardListingDoc};
use crate::domain::ports::{ArtifactStore, Fetcher};
use crate::utils::error::{CacheError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::{Duration, SystemTime};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    Fetched,
    Fresh,
}

/// Summary of one refresh pass.
#[derive(Debug, Default)]
pub struct RefreshReport {
    pub fetched: usize,
    pub fresh: usize,
    pub failures: Vec<(Artifact, CacheError)>,
}

impl RefreshReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    fn record(&mut self, outcome: RefreshOutcome) {
        match outcome {
            RefreshOutcome::Fetched => self.fetched += 1,
            RefreshOutcome::Fresh => self.fresh += 1,
        }
    }
}

/// Brings every cache artifact up to date.
///
/// Order is fixed: game profile, then the leaderboard listing, then one
/// highscores artifact per leaderboard discovered in the stored listing.
/// The listing is re-read from the store so discovery always works from
/// durable state.
pub struct CacheRefresher<F, S> {
    fetcher: F,
    store: S,
    endpoints: Endpoints,
    game_id: String,
    ttl: Duration,
    on_fetch_failure: FetchFailurePolicy,
}

impl<F: Fetcher, S: ArtifactStore> CacheRefresher<F, S> {
    pub fn new(fetcher: F, store: S, config: &Config) -> Self {
        Self {
            fetcher,
            store,
            endpoints: Endpoints::new(&config.base_url, &config.game_id, &config.auth_url_suffix),
            game_id: config.game_id.clone(),
            ttl: config.ttl(),
            on_fetch_failure: config.on_fetch_failure,
        }
    }

    pub async fn refresh_all(&self) -> Result<RefreshReport> {
        tracing::info!("Refreshing cache for game {}", self.game_id);
        let mut report = RefreshReport::default();

        let profile = Artifact::GameProfile {
            game_id: self.game_id.clone(),
        };
        let outcome = self
            .refresh_one::<GameProfileDoc>(&profile, &self.endpoints.game_profile())
            .await?;
        report.record(outcome);

        let outcome = self
            .refresh_one::<LeaderboardListingDoc>(
                &Artifact::LeaderboardListing,
                &self.endpoints.leaderboard_listing(),
            )
            .await?;
        report.record(outcome);

        let listing: LeaderboardListingDoc = self.store.read(&Artifact::LeaderboardListing)?;
        for entry in &listing.leaderboards {
            let artifact = Artifact::Highscores {
                leaderboard_id: entry.id,
            };
            let url = self.endpoints.highscores(&entry.highscores_url);
            match self.refresh_one::<HighscoreListingDoc>(&artifact, &url).await {
                Ok(outcome) => report.record(outcome),
                Err(err) => match self.on_fetch_failure {
                    FetchFailurePolicy::FailFast => return Err(err),
                    FetchFailurePolicy::Continue => {
                        tracing::warn!("Failed to refresh {}: {}", artifact, err);
                        report.failures.push((artifact, err));
                    }
                },
            }
        }

        Ok(report)
    }

    async fn refresh_one<D>(&self, artifact: &Artifact, url: &str) -> Result<RefreshOutcome>
    where
        D: DeserializeOwned + Serialize,
    {
        let last_modified = if self.store.exists(artifact) {
            Some(self.store.last_modified(artifact)?)
        } else {
            None
        };

        if !is_stale(last_modified, self.ttl, SystemTime::now()) {
            tracing::debug!("{} is fresh, skipping fetch", artifact);
            return Ok(RefreshOutcome::Fresh);
        }

        tracing::debug!("Fetching {} from {}", artifact, url);
        let body = self.fetcher.fetch_text(url).await?;
        let document: D = quick_xml::de::from_str(&body)?;
        self.store.write(artifact, &document)?;
        Ok(RefreshOutcome::Fetched)
    }
}
