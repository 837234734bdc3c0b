//! rnatopo: helices, pseudoknots and junctions from an RNA structure file.

mod cli;
mod report;

use std::fs;
use clap::Parser;
use log::info;
use log::LevelFilter;

use rt_formats::read_input;
use rt_structure::StructureConfig;

use crate::cli::Cli;

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn load_config(cli: &Cli) -> Result<StructureConfig, Box<dyn std::error::Error>> {
    let mut config = match &cli.config {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => StructureConfig::default(),
    };
    if cli.isolated_pairs {
        config = config.with_isolated_pairs(true);
    }
    if let Some(tie) = cli.tie_break {
        config = config.with_tie_break(tie.into());
    }
    Ok(config)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let config = load_config(&cli)?;
    info!("Using {:?}.", config);

    let input = read_input(&cli.input, cli.format.map(Into::into))?;
    let ss = input
        .into_structure(&config)
        .with_source(cli.input.display().to_string());
    info!("{} helices, {} junctions, {} tertiary interactions.",
        ss.helices().len(), ss.junctions().len(), ss.tertiary_interactions().len());

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report::to_json(&ss))?);
    } else {
        print!("{}", report::TextReport(&ss));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rt_structure::TieBreak;
    use tempfile::TempDir;

    #[test]
    fn test_flags_override_config_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("rnatopo.json");
        fs::write(&path, r#"{ "isolated_pairs_as_helices": true, "pseudoknot_tie_break": "remove_earlier" }"#)
            .unwrap();
        let config_arg = path.to_str().unwrap();

        let cli = Cli::parse_from(["rnatopo", "x.dbn", "--config", config_arg]);
        let config = load_config(&cli).unwrap();
        assert!(config.isolated_pairs_as_helices);
        assert_eq!(config.pseudoknot_tie_break, TieBreak::RemoveEarlier);

        let cli = Cli::parse_from(["rnatopo", "x.dbn", "--config", config_arg, "--tie-break", "later"]);
        let config = load_config(&cli).unwrap();
        assert!(config.isolated_pairs_as_helices);
        assert_eq!(config.pseudoknot_tie_break, TieBreak::RemoveLater);
    }

    #[test]
    fn test_config_defaults_and_bad_file() {
        let cli = Cli::parse_from(["rnatopo", "x.dbn", "--isolated-pairs"]);
        let config = load_config(&cli).unwrap();
        assert_eq!(config, StructureConfig::default().with_isolated_pairs(true));

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();
        let cli = Cli::parse_from(["rnatopo", "x.dbn", "--config", path.to_str().unwrap()]);
        assert!(load_config(&cli).is_err());
    }
}
