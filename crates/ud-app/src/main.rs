use anyhow::Result;
use clap::Parser;

pub mod app;
pub mod cli;

fn main() -> Result<()> {
    // 1. Parser CLI
    let cli = cli::Cli::parse();

    // 2. Initialiser le logging
    env_logger::Builder::new()
        .filter_level(cli.log_filter())
        .init();

    // 3. Valider les arguments
    cli.validate()?;

    // 4. Charger la config
    let config = app::resolve_config(&cli)?;

    // 5. Retourner et afficher
    let line = app::render(&cli, config)?;
    println!("{line}");
    Ok(())
}
