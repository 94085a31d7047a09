//! Celebration date configuration
//!
//! The fixed month/day pair that toggles the persona's celebratory block.

use chrono::NaiveDate;
use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::persona::PersonaComposer;

/// Celebration date configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CelebrationConfig {
    /// Month of the celebration: 1-12
    #[serde(default = "default_month")]
    pub month: u32,

    /// Day of the month: 1-31
    #[serde(default = "default_day")]
    pub day: u32,
}

impl CelebrationConfig {
    /// Validate that the month/day pair is a real calendar date
    pub fn validate(&self) -> Result<(), ValidationError> {
        // 2000 is a leap year, so Feb 29 is accepted
        if NaiveDate::from_ymd_opt(2000, self.month, self.day).is_none() {
            return Err(ValidationError::InvalidCelebrationDate {
                month: self.month,
                day: self.day,
            });
        }
        Ok(())
    }

    /// Build the persona composer for this date
    pub fn composer(&self) -> PersonaComposer {
        PersonaComposer::new(self.month, self.day)
    }
}

impl Default for CelebrationConfig {
    fn default() -> Self {
        Self {
            month: default_month(),
            day: default_day(),
        }
    }
}

fn default_month() -> u32 {
    12
}

fn default_day() -> u32 {
    25
}
