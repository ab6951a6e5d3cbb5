use std::path::PathBuf;

use clap::Parser;

/// Fichier de configuration lu quand `--config` est absent.
pub const DEFAULT_CONFIG: &str = "upsidedown.toml";

/// upsidedown — Retourne le texte à 180°.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Mots à retourner. L'ordre des mots est inversé lui aussi.
    ///
    /// Tout ce qui suit le premier mot est un mot, même `-5` ou `--x`.
    /// Placer `--` devant un premier mot qui ressemble à une option (`-h`).
    #[arg(allow_hyphen_values = true, trailing_var_arg = true)]
    pub words: Vec<String>,

    /// Fichier de configuration TOML. Défaut : upsidedown.toml s'il existe.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Séparateur entre les mots retournés (remplace la config).
    #[arg(long)]
    pub separator: Option<String>,

    /// Utiliser la table indexée au lieu du scan linéaire.
    #[arg(long, default_value_t = false)]
    pub indexed: bool,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Validate that there is something to flip.
    ///
    /// # Errors
    /// Returns an error if no word was given.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.words.is_empty() {
            return Err(ud_core::CoreError::InvalidInvocation.into());
        }
        Ok(())
    }

    /// Parsed `--log-level`, `Warn` when unrecognised.
    #[must_use]
    pub fn log_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Warn)
    }
}
