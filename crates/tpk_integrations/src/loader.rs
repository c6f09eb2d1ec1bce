//! Loading definition files from disk.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use tpk_engine::{ThirdPartyDefinition, ValidationStrength};

use crate::error::IntegrationResult;
use crate::Integration;

/// Loads third-party definitions from a directory of JSON files.
pub struct DefinitionLoader {
    definitions_path: PathBuf,
    strength: ValidationStrength,
}

impl DefinitionLoader {
    /// Create a loader for the given directory with strict validation.
    pub fn new(definitions_path: impl Into<PathBuf>) -> Self {
        Self {
            definitions_path: definitions_path.into(),
            strength: ValidationStrength::Strict,
        }
    }

    /// Set the validation strength applied to loaded definitions.
    pub fn with_strength(mut self, strength: ValidationStrength) -> Self {
        self.strength = strength;
        self
    }

    /// Load all definitions from the directory.
    ///
    /// Files that fail to parse or validate are skipped with a warning;
    /// only IO failures on the directory itself abort the load.
    pub fn load_all(&self) -> IntegrationResult<DefinitionRegistry> {
        let mut registry = DefinitionRegistry::new();

        if !self.definitions_path.exists() {
            warn!(
                "Definitions directory does not exist: {:?}",
                self.definitions_path
            );
            return Ok(registry);
        }

        for entry in fs::read_dir(&self.definitions_path)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            match self.load_definition(&path) {
                Ok(definition) => {
                    info!("Loaded definition: {}", definition.id);
                    registry.register(Integration::new(definition));
                }
                Err(e) => {
                    warn!("Failed to load definition from {:?}: {}", path, e);
                }
            }
        }

        Ok(registry)
    }

    /// Load a single definition file.
    pub fn load_definition(&self, path: &Path) -> IntegrationResult<ThirdPartyDefinition> {
        debug!("Loading definition from {:?}", path);
        let content = fs::read_to_string(path)?;
        let definition = ThirdPartyDefinition::from_json_with(&content, self.strength)?;
        Ok(definition)
    }
}

/// Registry of loaded integrations, keyed by definition id.
#[derive(Default)]
pub struct DefinitionRegistry {
    integrations: HashMap<String, Integration>,
}

impl DefinitionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an integration, replacing any previous entry with the same id.
    pub fn register(&mut self, integration: Integration) {
        self.integrations
            .insert(integration.id().to_string(), integration);
    }

    /// Look up an integration by id.
    pub fn get(&self, id: &str) -> Option<&Integration> {
        self.integrations.get(id)
    }

    /// Whether an integration with the given id is registered.
    pub fn exists(&self, id: &str) -> bool {
        self.integrations.contains_key(id)
    }

    /// Ids of all registered integrations, sorted.
    pub fn list(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.integrations.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}
