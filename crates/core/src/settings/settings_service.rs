use super::settings_model::*;
use super::SettingsRepositoryTrait;
use crate::errors::{DatabaseError, Error, Result};
use async_trait::async_trait;
use log::debug;
use std::str::FromStr;
use std::sync::Arc;

#[async_trait]
pub trait SettingsServiceTrait: Send + Sync {
    /// Reads every analytics setting, using defaults for keys never stored.
    fn get_analytics_settings(&self) -> Result<AnalyticsSettings>;

    async fn update_analytics_settings(&self, settings: &AnalyticsSettings) -> Result<()>;
}

pub struct SettingsService {
    settings_repository: Arc<dyn SettingsRepositoryTrait>,
}

impl SettingsService {
    pub fn new(settings_repository: Arc<dyn SettingsRepositoryTrait>) -> Self {
        SettingsService {
            settings_repository,
        }
    }

    fn read_setting<T: FromStr>(&self, key: &str, default: T) -> Result<T> {
        match self.settings_repository.get_setting(key) {
            Ok(value) => value.trim().parse().map_err(|_| {
                Error::InvalidConfigValue(format!("{} has an unparsable value '{}'", key, value))
            }),
            Err(Error::Database(DatabaseError::NotFound(_))) => {
                debug!("Setting {} not stored, using default", key);
                Ok(default)
            }
            Err(e) => Err(e),
        }
    }
}

fn validate(settings: &AnalyticsSettings) -> Result<()> {
    if !settings.xirr_guess.is_finite() || settings.xirr_guess <= -1.0 {
        return Err(Error::InvalidConfigValue(format!(
            "{} must be a finite rate above -1, got {}",
            XIRR_GUESS_KEY, settings.xirr_guess
        )));
    }
    if settings.xirr_max_iterations == 0 {
        return Err(Error::InvalidConfigValue(format!(
            "{} must be at least 1",
            XIRR_MAX_ITERATIONS_KEY
        )));
    }
    if !settings.xirr_tolerance.is_finite() || settings.xirr_tolerance <= 0.0 {
        return Err(Error::InvalidConfigValue(format!(
            "{} must be positive, got {}",
            XIRR_TOLERANCE_KEY, settings.xirr_tolerance
        )));
    }
    if settings.display_precision > MAX_DISPLAY_PRECISION {
        return Err(Error::InvalidConfigValue(format!(
            "{} must be at most {}, got {}",
            DISPLAY_PRECISION_KEY, MAX_DISPLAY_PRECISION, settings.display_precision
        )));
    }
    Ok(())
}

#[async_trait]
impl SettingsServiceTrait for SettingsService {
    fn get_analytics_settings(&self) -> Result<AnalyticsSettings> {
        let defaults = AnalyticsSettings::default();
        let settings = AnalyticsSettings {
            xirr_guess: self.read_setting(XIRR_GUESS_KEY, defaults.xirr_guess)?,
            xirr_max_iterations: self
                .read_setting(XIRR_MAX_ITERATIONS_KEY, defaults.xirr_max_iterations)?,
            xirr_tolerance: self.read_setting(XIRR_TOLERANCE_KEY, defaults.xirr_tolerance)?,
            display_precision: self
                .read_setting(DISPLAY_PRECISION_KEY, defaults.display_precision)?,
        };
        validate(&settings)?;
        Ok(settings)
    }

    async fn update_analytics_settings(&self, settings: &AnalyticsSettings) -> Result<()> {
        validate(settings)?;

        let values = [
            (XIRR_GUESS_KEY, settings.xirr_guess.to_string()),
            (
                XIRR_MAX_ITERATIONS_KEY,
                settings.xirr_max_iterations.to_string(),
            ),
            (XIRR_TOLERANCE_KEY, settings.xirr_tolerance.to_string()),
            (DISPLAY_PRECISION_KEY, settings.display_precision.to_string()),
        ];
        for (key, value) in values.iter() {
            self.settings_repository.update_setting(key, value).await?;
        }
        Ok(())
    }
}
