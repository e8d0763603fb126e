use crate::club::Club;
use crate::league::{SeasonContext, SeasonError, SeasonResult, SeasonSettings};
use crate::r#match::MatchSettings;
use crate::utils::Logging;

/// Runs a whole season in one call.
pub struct SeasonSimulator {
    settings: SeasonSettings,
    match_settings: MatchSettings,
}

impl Default for SeasonSimulator {
    fn default() -> Self {
        Self::new(SeasonSettings::default(), MatchSettings::default())
    }
}

impl SeasonSimulator {
    pub fn new(settings: SeasonSettings, match_settings: MatchSettings) -> Self {
        SeasonSimulator {
            settings,
            match_settings,
        }
    }

    pub fn settings(&self) -> &SeasonSettings {
        &self.settings
    }

    pub fn simulate(&self, clubs: &[Club]) -> Result<SeasonResult, SeasonError> {
        let mut context = SeasonContext::create(clubs, self.settings.clone(), self.match_settings.clone())?;

        Logging::estimate_result(
            || {
                while context.play_next_matchday().is_some() {}
            },
            "simulate season",
        );

        Ok(context.finish())
    }
}
