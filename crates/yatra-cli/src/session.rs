//! Session context passed to command handlers

use yatra::{ChatExchange, Location, WeatherReport};

use crate::guide::Guide;
use crate::temples::{Temple, TempleDirectory};

pub struct Session {
    guide: Guide,
    directory: TempleDirectory,
    selected: Option<&'static str>,
}

impl Session {
    pub fn new(guide: Guide, directory: TempleDirectory) -> Self {
        Self {
            guide,
            directory,
            selected: None,
        }
    }

    pub fn guide(&self) -> &Guide {
        &self.guide
    }

    pub fn directory(&self) -> &TempleDirectory {
        &self.directory
    }

    /// Select a temple by id; unknown ids leave the selection unchanged
    pub fn select(&mut self, id: &str) -> Option<&Temple> {
        let temple = self.directory.find(id)?;
        self.selected = Some(temple.id);
        Some(temple)
    }

    pub fn selected(&self) -> Option<&Temple> {
        self.selected.and_then(|id| self.directory.find(id))
    }

    /// Weather at an explicit location, or at the selected temple
    pub async fn weather(&self, location: Option<Location>) -> Option<WeatherReport> {
        let location = location.or_else(|| self.selected().map(Temple::location))?;
        Some(self.guide.weather_for(&location).await)
    }

    pub async fn ask(&self, message: &str) -> ChatExchange {
        self.guide.ask(message).await
    }
}
