//! Command-line arguments

use std::path::PathBuf;

use clap::Parser;

use discography_rs::config::AppConfig;

/// Browse a discography in the terminal: drill down with Enter, swipe with
/// the mouse or the arrow keys, rank albums and songs.
#[derive(Parser, Debug)]
#[command(name = "discography-rs", version, about)]
pub struct Cli {
    /// Path to a TOML config file. Without it `DISCOGRAPHY_CONFIG`, then
    /// `./discography.toml`, is tried.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory for the persisted rankings (overrides the config file)
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Swipe distance threshold in logical pixels (overrides the config file)
    #[arg(long)]
    pub threshold: Option<f64>,
}

impl Cli {
    /// Load the config file and apply command-line overrides on top.
    pub fn resolve_config(&self) -> discography_rs::Result<AppConfig> {
        let mut config = AppConfig::load(self.config.as_deref())?;
        if let Some(dir) = &self.data_dir {
            config.storage.data_dir = dir.clone();
        }
        if let Some(threshold) = self.threshold {
            config.gesture.threshold = threshold;
        }
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_flag_is_the_only_cli_source() {
        let cli = Cli::try_parse_from(["discography-rs"]).unwrap();
        assert_eq!(cli.config, None);

        let cli = Cli::try_parse_from(["discography-rs", "-c", "alt.toml", "--threshold", "70"])
            .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("alt.toml")));
        assert_eq!(cli.threshold, Some(70.0));
    }
}
