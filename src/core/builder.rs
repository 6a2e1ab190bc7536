//! Engine builder for fluent configuration
//!
//! Collects the four collaborator bindings plus the engine configuration and
//! produces a [`MapEngine`]. All four collaborators are required; `build`
//! fails fast when one is missing.

use crate::{
    core::{
        config::{DeviceClass, EngineConfig, MarkerIcons},
        engine::MapEngine,
    },
    search::provider::SearchProvider,
    traits::{ListPanel, MapSurface, Notifier},
    EngineError, Result,
};

#[derive(Default)]
pub struct MapEngineBuilder {
    config: EngineConfig,
    surface: Option<Box<dyn MapSurface>>,
    notifier: Option<Box<dyn Notifier>>,
    list: Option<Box<dyn ListPanel>>,
    provider: Option<Box<dyn SearchProvider>>,
}

impl MapEngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind the map rendering collaborator
    pub fn with_surface(mut self, surface: Box<dyn MapSurface>) -> Self {
        self.surface = Some(surface);
        self
    }

    /// Bind the notification collaborator
    pub fn with_notifier(mut self, notifier: Box<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    /// Bind the list-view collaborator
    pub fn with_list_panel(mut self, list: Box<dyn ListPanel>) -> Self {
        self.list = Some(list);
        self
    }

    /// Bind the remote search collaborator
    pub fn with_provider(mut self, provider: Box<dyn SearchProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Replace the whole engine configuration
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the marker icon pair
    pub fn with_icons(mut self, icons: MarkerIcons) -> Self {
        self.config.icons = icons;
        self
    }

    /// Set the client device class
    pub fn with_device(mut self, device: DeviceClass) -> Self {
        self.config.device = device;
        self
    }

    pub fn build(self) -> Result<MapEngine> {
        let surface = self
            .surface
            .ok_or_else(|| EngineError::Builder("map surface not bound".to_string()))?;
        let notifier = self
            .notifier
            .ok_or_else(|| EngineError::Builder("notifier not bound".to_string()))?;
        let list = self
            .list
            .ok_or_else(|| EngineError::Builder("list panel not bound".to_string()))?;
        let provider = self
            .provider
            .ok_or_else(|| EngineError::Builder("search provider not bound".to_string()))?;

        Ok(MapEngine::new(surface, notifier, list, provider, self.config))
    }
}
