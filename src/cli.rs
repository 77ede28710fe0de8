use std::path::{Path, PathBuf};

mod init;
mod list;
mod render;
mod shell;
mod show;
mod terminal;

use anyhow::Context;
use clap::ArgAction;
use planner::{Config, CourseIndex, CourseSource};

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// The path to the planner configuration file
    #[arg(short, long, default_value = "planner.toml", global = true)]
    config: PathBuf,

    /// The course source file (defaults to the configured source)
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    /// The field delimiter, overriding the configured delimiter
    #[arg(short, long, global = true)]
    delimiter: Option<char>,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let mut config = Config::load_or_default(&self.config);
        if let Some(delimiter) = self.delimiter {
            config.set_delimiter(delimiter);
        }

        self.command
            .unwrap_or_default()
            .run(self.file.as_deref(), &self.config, &config)
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Run the interactive advising menu (default)
    Shell(shell::Command),

    /// List all courses in alphanumeric order
    List(list::Command),

    /// Show a course and its prerequisites
    Show(show::Command),

    /// Write the configuration file, using --file as the default source
    Init(init::Command),
}

impl Default for Command {
    fn default() -> Self {
        Self::Shell(shell::Command::default())
    }
}

impl Command {
    fn run(
        self,
        file: Option<&Path>,
        config_path: &Path,
        config: &Config,
    ) -> anyhow::Result<()> {
        match self {
            Self::Shell(command) => command.run(file, config)?,
            Self::List(command) => command.run(file, config)?,
            Self::Show(command) => command.run(file, config)?,
            Self::Init(command) => command.run(file, config_path, config)?,
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Pretty,
    Json,
}

/// Opens `file` (or the configured default source) and loads every course
/// into a new index.
fn load_index(file: Option<&Path>, config: &Config) -> anyhow::Result<CourseIndex> {
    let path = file.unwrap_or_else(|| config.default_source());
    let mut source = CourseSource::open(path, config.delimiter())?;

    let mut index = CourseIndex::new();
    source
        .load(&mut index)
        .with_context(|| format!("Failed to load courses from {}", path.display()))?;
    Ok(index)
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::*;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn shell_is_default_command() {
        let cli = Cli::try_parse_from(["planner"]).unwrap();
        assert!(cli.command.is_none());
        assert!(matches!(cli.command.unwrap_or_default(), Command::Shell(_)));
    }

    #[test]
    fn global_options_after_subcommand() {
        let cli =
            Cli::try_parse_from(["planner", "show", "CS200", "--file", "x.csv", "-d", "|"]).unwrap();
        assert_eq!(cli.file.as_deref(), Some(Path::new("x.csv")));
        assert_eq!(cli.delimiter, Some('|'));
        assert!(matches!(cli.command, Some(Command::Show(_))));
    }

    #[test]
    fn init_takes_global_options() {
        let cli = Cli::try_parse_from(["planner", "init", "--force", "-c", "alt.toml"]).unwrap();
        assert_eq!(cli.config, Path::new("alt.toml"));
        assert!(matches!(cli.command, Some(Command::Init(_))));
    }

    #[test]
    fn load_index_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("courses.csv");
        std::fs::write(&path, "CS101,Intro\nCS201,Data Structures,CS101\n").unwrap();

        let index = load_index(Some(path.as_path()), &Config::default()).unwrap();

        assert_eq!(index.len(), 2);
        assert_eq!(index.get("cs201").unwrap().prerequisites(), ["CS101"]);
    }

    #[test]
    fn load_index_reports_malformed_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("courses.csv");
        std::fs::write(&path, "CS101,Intro\nCS201\n").unwrap();

        let error = load_index(Some(path.as_path()), &Config::default()).unwrap_err();

        assert!(error.to_string().starts_with("Failed to load courses from"));
        assert_eq!(error.root_cause().to_string(), "course CS201 is missing a name");
    }
}
