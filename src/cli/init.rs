use std::path::Path;

use clap::Parser;
use planner::Config;
use tracing::instrument;

#[derive(Debug, Parser)]
#[command(about = "Write a planner configuration file")]
pub struct Command {
    /// Replace an existing configuration file
    #[arg(long)]
    force: bool,
}

impl Command {
    /// Saves `config` to `config_path`, recording `file` as the default
    /// course source when one was given.
    #[instrument(level = "debug", skip(self, config))]
    pub fn run(
        self,
        file: Option<&Path>,
        config_path: &Path,
        config: &Config,
    ) -> anyhow::Result<()> {
        if config_path.exists() && !self.force {
            anyhow::bail!(
                "{} already exists (use --force to replace it)",
                config_path.display()
            );
        }

        let mut config = config.clone();
        if let Some(file) = file {
            config.set_default_source(file);
        }

        config
            .save(config_path)
            .map_err(|e| anyhow::anyhow!("Failed to create {}: {e}", config_path.display()))?;

        println!("Created {}", config_path.display());
        println!("  delimiter:      '{}'", config.delimiter());
        println!("  default source: {}", config.default_source().display());
        Ok(())
    }
}
