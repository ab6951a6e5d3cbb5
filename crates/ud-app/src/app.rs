use std::path::Path;

use anyhow::{Context, Result};
use ud_core::Flipper;
use ud_core::config::{FlipConfig, LookupMode, load_config};

use crate::cli::{Cli, DEFAULT_CONFIG};

/// Resolve config: explicit `--config` must exist, the default file is optional.
///
/// # Errors
/// Returns an error if the chosen file cannot be loaded.
pub fn resolve_config(cli: &Cli) -> Result<FlipConfig> {
    if let Some(ref path) = cli.config {
        return load_config(path);
    }
    let path = Path::new(DEFAULT_CONFIG);
    if path.exists() {
        load_config(path)
    } else {
        log::debug!("Pas de {DEFAULT_CONFIG}, utilisation des défauts.");
        Ok(FlipConfig::default())
    }
}

/// Apply CLI overrides to `config`, then flip the words into one output line.
///
/// # Errors
/// Returns an error if there is no word or the resulting config is invalid.
pub fn render(cli: &Cli, mut config: FlipConfig) -> Result<String> {
    if let Some(ref sep) = cli.separator {
        config.separator.clone_from(sep);
    }
    if cli.indexed {
        config.lookup = LookupMode::Indexed;
    }
    config.validate().context("Option --separator invalide")?;

    let lookup = config.build_lookup();
    let flipper = Flipper::with_separator(&*lookup, config.separator.as_str());
    let line = flipper.compose_output(cli.words.as_slice())?;
    log::debug!("{} mot(s) retourné(s)", cli.words.len());
    Ok(line)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use clap::Parser;
    use ud_core::CoreError;

    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("upsidedown").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn renders_words_in_reverse_order() {
        let cli = cli(&["hello", "world"]);
        let line = render(&cli, FlipConfig::default()).unwrap();
        assert_eq!(line, "p\u{a781}\u{0279}o\u{028d} o\u{a781}\u{a781}\u{0259}\u{0265}");
    }

    #[test]
    fn single_word() {
        let line = render(&cli(&["ab"]), FlipConfig::default()).unwrap();
        assert_eq!(line, "q\u{0250}");
    }

    #[test]
    fn indexed_flag_gives_same_output() {
        let words = ["Upside", "Down", "1984!"];
        let linear = render(&cli(&words), FlipConfig::default()).unwrap();
        let mut args = vec!["--indexed"];
        args.extend(words);
        let indexed = render(&cli(&args), FlipConfig::default()).unwrap();
        assert_eq!(linear, indexed);
    }

    #[test]
    fn cli_separator_overrides_config() {
        let config = FlipConfig {
            separator: "--".to_string(),
            ..FlipConfig::default()
        };
        assert_eq!(render(&cli(&["6", "9"]), config.clone()).unwrap(), "6--9");
        assert_eq!(
            render(&cli(&["--separator", "+", "6", "9"]), config).unwrap(),
            "6+9"
        );
    }

    #[test]
    fn newline_separator_from_cli_is_rejected() {
        let err = render(&cli(&["--separator", "\n", "a", "b"]), FlipConfig::default()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CoreError>(),
            Some(CoreError::Config(_))
        ));
    }

    #[test]
    fn no_words_is_invalid_invocation() {
        let err = render(&cli(&[]), FlipConfig::default()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CoreError>(),
            Some(CoreError::InvalidInvocation)
        ));
    }

    #[test]
    fn explicit_config_is_loaded() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[table]\ndisabled = [\"b\"]").unwrap();
        let path = file.path().to_string_lossy().into_owned();
        let cli = cli(&["--config", path.as_str(), "ab"]);
        let config = resolve_config(&cli).unwrap();
        assert_eq!(render(&cli, config).unwrap(), "b\u{0250}");
    }

    #[test]
    fn explicit_missing_config_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");
        let path = path.to_string_lossy().into_owned();
        let err = resolve_config(&cli(&["-c", path.as_str(), "a"])).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CoreError>(),
            Some(CoreError::FileNotFound { .. })
        ));
    }
}
