//! Interval sources.
//!
//! The analytics core never reads files itself; it asks an [`IntervalSource`]
//! for the three raw collections. Two sources ship with the crate:
//!
//! - [`JsonFixtures`]: reads JSON arrays from the paths in a
//!   [`SourceConfig`], all three files concurrently
//! - [`StaticSource`]: hands out collections already held in memory
//!
//! Both return records that passed validation, so the core can rely on
//! `start <= end` for every interval.

use crate::libs::config::SourceConfig;
use crate::libs::error::{AnalyticsError, AnalyticsResult};
use crate::libs::interval::{ProductionInterval, StatusInterval};
use serde::de::DeserializeOwned;
use std::path::Path;

/// The three raw collections the analytics operate on.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceData {
    pub status: Vec<StatusInterval>,
    pub manual_status: Vec<StatusInterval>,
    pub production: Vec<ProductionInterval>,
}

impl SourceData {
    /// Fails on the first malformed record.
    pub fn validate(&self) -> AnalyticsResult<()> {
        for entry in self.status.iter().chain(&self.manual_status) {
            entry.validate()?;
        }
        for run in &self.production {
            run.validate()?;
        }
        Ok(())
    }
}

/// Supplier of raw status and production records.
#[allow(async_fn_in_trait)]
pub trait IntervalSource {
    async fn load(&self) -> AnalyticsResult<SourceData>;
}

/// JSON files on disk, one array per collection.
#[derive(Debug, Clone)]
pub struct JsonFixtures {
    config: SourceConfig,
}

impl JsonFixtures {
    pub fn new(config: SourceConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SourceConfig {
        &self.config
    }
}

impl IntervalSource for JsonFixtures {
    async fn load(&self) -> AnalyticsResult<SourceData> {
        let (status, manual_status, production) = tokio::try_join!(
            read_array::<StatusInterval>(&self.config.status_path),
            read_array::<StatusInterval>(&self.config.manual_status_path),
            read_array::<ProductionInterval>(&self.config.production_path),
        )?;

        let data = SourceData {
            status,
            manual_status,
            production,
        };
        data.validate()?;

        tracing::debug!(
            status = data.status.len(),
            manual_status = data.manual_status.len(),
            production = data.production.len(),
            "loaded interval fixtures"
        );
        Ok(data)
    }
}

async fn read_array<T: DeserializeOwned>(path: &Path) -> AnalyticsResult<Vec<T>> {
    let raw = tokio::fs::read_to_string(path).await.map_err(|source| AnalyticsError::Source {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| AnalyticsError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// In-memory collections, validated on every load.
#[derive(Debug, Clone, Default)]
pub struct StaticSource(pub SourceData);

impl StaticSource {
    pub fn new(
        status: Vec<StatusInterval>,
        manual_status: Vec<StatusInterval>,
        production: Vec<ProductionInterval>,
    ) -> Self {
        Self(SourceData {
            status,
            manual_status,
            production,
        })
    }
}

impl IntervalSource for StaticSource {
    async fn load(&self) -> AnalyticsResult<SourceData> {
        self.0.validate()?;
        Ok(self.0.clone())
    }
}
