use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::error::CoreError;
use crate::flip::DEFAULT_SEPARATOR;
use crate::table::{CharacterPair, SubstitutionTable};
use crate::traits::Substitution;

/// Stratégie de recherche dans la table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LookupMode {
    /// Scan linéaire, premier trouvé gagne.
    #[default]
    Linear,
    /// Map directe construite une fois depuis la liste.
    Indexed,
}

/// Configuration complète du flip.
///
/// Chaque champ a une valeur par défaut saine.
///
/// # Example
/// ```
/// use ud_core::config::FlipConfig;
/// let config = FlipConfig::default();
/// assert_eq!(config.separator, " ");
/// assert!(config.use_builtin);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlipConfig {
    /// Text placed between flipped tokens.
    pub separator: String,
    /// Start from the built-in pairs.
    pub use_builtin: bool,
    pub lookup: LookupMode,
    /// Pairs placed ahead of the built-ins.
    pub extra_pairs: Vec<CharacterPair>,
    /// Characters whose pairs are removed, extra pairs included.
    pub disabled: Vec<char>,
}

impl Default for FlipConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            use_builtin: true,
            lookup: LookupMode::Linear,
            extra_pairs: Vec::new(),
            disabled: Vec::new(),
        }
    }
}

impl FlipConfig {
    /// Reject values the output line cannot carry.
    ///
    /// # Errors
    /// Returns [`CoreError::Config`] if the separator contains a line break.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.separator.contains(['\n', '\r']) {
            return Err(CoreError::Config(format!(
                "le séparateur ne peut pas contenir de retour à la ligne : {:?}",
                self.separator
            )));
        }
        Ok(())
    }

    /// Pair list described by this configuration.
    #[must_use]
    pub fn build_table(&self) -> SubstitutionTable {
        let base = if self.use_builtin {
            SubstitutionTable::builtin()
        } else {
            SubstitutionTable::empty()
        };
        base.with_overrides(&self.extra_pairs).without(&self.disabled)
    }

    /// Table wrapped for the configured lookup strategy.
    #[must_use]
    pub fn build_lookup(&self) -> Box<dyn Substitution> {
        let table = self.build_table();
        log::debug!("Table : {} paires, recherche {:?}", table.len(), self.lookup);
        match self.lookup {
            LookupMode::Linear => Box::new(table),
            LookupMode::Indexed => Box::new(table.to_indexed()),
        }
    }
}

/// Structure TOML intermédiaire pour désérialisation avec valeurs optionnelles.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    output: Option<OutputSection>,
    table: Option<TableSection>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct OutputSection {
    separator: Option<String>,
}

/// Table section of the TOML config, all fields optional for partial override.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TableSection {
    builtin: Option<bool>,
    lookup: Option<LookupMode>,
    pairs: Option<Vec<(char, char)>>,
    disabled: Option<Vec<char>>,
}

/// Charge un fichier TOML et fusionne avec les valeurs par défaut.
///
/// # Errors
/// Returns an error if the file is missing, cannot be read or parsed, or
/// holds an invalid value.
///
/// # Example
/// ```no_run
/// use ud_core::config::load_config;
/// use std::path::Path;
/// let config = load_config(Path::new("upsidedown.toml")).unwrap();
/// ```
pub fn load_config(path: &Path) -> Result<FlipConfig> {
    if !path.exists() {
        return Err(CoreError::FileNotFound {
            path: path.display().to_string(),
        }
        .into());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;

    let file: ConfigFile = toml::from_str(&content)
        .with_context(|| format!("Erreur de parsing TOML dans {}", path.display()))?;

    let mut config = FlipConfig::default();

    if let Some(o) = file.output {
        if let Some(v) = o.separator {
            config.separator = v;
        }
    }

    if let Some(t) = file.table {
        if let Some(v) = t.builtin {
            config.use_builtin = v;
        }
        if let Some(v) = t.lookup {
            config.lookup = v;
        }
        if let Some(v) = t.pairs {
            config.extra_pairs = v.into_iter().map(CharacterPair::from).collect();
        }
        if let Some(v) = t.disabled {
            config.disabled = v;
        }
    }

    config
        .validate()
        .with_context(|| format!("Valeur invalide dans {}", path.display()))?;

    log::info!(
        "Config chargée depuis {} ({} paires ajoutées, {} désactivées)",
        path.display(),
        config.extra_pairs.len(),
        config.disabled.len()
    );
    Ok(config)
}
