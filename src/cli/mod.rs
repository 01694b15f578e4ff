//! Command-line interface module.

mod args;
pub mod check;
pub mod init;
pub mod show;

pub use args::{CheckArgs, Cli, Commands, ShowArgs};

use crate::config::{ConfigHandle, SiteConfig};
use anyhow::Result;
use std::sync::Arc;

/// Run the parsed command, publishing the loaded config into `handle`.
pub fn run(cli: &Cli, handle: &ConfigHandle) -> Result<()> {
    match &cli.command {
        Commands::Init { name, force } => init::new_site(name.as_deref(), *force),
        Commands::Check { args } => {
            let config = load(cli, handle)?;
            check::check_site(&config, args)
        }
        Commands::Show { args } => {
            let config = load(cli, handle)?;
            show::show_config(&config, args)
        }
    }
}

/// Load, validate and publish the site config. Any failure aborts startup.
fn load(cli: &Cli, handle: &ConfigHandle) -> Result<Arc<SiteConfig>> {
    let config = handle.init(SiteConfig::load(cli)?)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigError, TEST_CONFIG};
    use clap::Parser;
    use std::fs;

    #[test]
    fn test_show_publishes_config() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("lumen.toml");
        let output = dir.path().join("site.json");
        fs::write(&config_path, TEST_CONFIG).unwrap();

        let cli = Cli::parse_from([
            "lumen",
            "-C",
            config_path.to_str().unwrap(),
            "show",
            "--output",
            output.to_str().unwrap(),
        ]);
        let handle = ConfigHandle::new();
        run(&cli, &handle).unwrap();

        let json = fs::read_to_string(&output).unwrap();
        assert!(json.contains("Kowshik Sundararajan"));
        assert_eq!(handle.get().unwrap().root, dir.path().canonicalize().unwrap());

        // a second load into the same handle is refused
        let err = run(&cli, &handle).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::AlreadyInitialized)
        ));
    }

    #[test]
    fn test_check_rejects_invalid_config() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("lumen.toml");
        fs::write(&config_path, TEST_CONFIG.replace("postsPerPage = 4", "postsPerPage = 0"))
            .unwrap();

        let cli = Cli::parse_from(["lumen", "--config", config_path.to_str().unwrap(), "check"]);
        let handle = ConfigHandle::new();
        let err = run(&cli, &handle).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::Validation(_))
        ));
        assert!(handle.get().is_none());
    }
}
