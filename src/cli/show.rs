use std::path::Path;

use clap::Parser;
use planner::Config;
use tracing::instrument;

use super::{OutputFormat, render, terminal::Tone};

#[derive(Debug, Parser)]
#[command(about = "Display a course and its prerequisites")]
pub struct Command {
    /// The course number to display (case-insensitive)
    course: String,

    /// Output format
    #[arg(long, value_name = "FORMAT", default_value = "pretty")]
    output: OutputFormat,
}

impl Command {
    #[instrument(level = "debug", skip(self, config))]
    pub fn run(self, file: Option<&Path>, config: &Config) -> anyhow::Result<()> {
        let index = super::load_index(file, config)?;

        let Some(course) = index.get(&self.course) else {
            let mut message = Vec::new();
            render::not_found(&mut message, &self.course)?;
            eprint!("{}", String::from_utf8_lossy(&message).warning());
            std::process::exit(1);
        };

        let mut out = std::io::stdout().lock();
        match self.output {
            OutputFormat::Pretty => render::course_details(&mut out, course)?,
            OutputFormat::Json => render::json(&mut out, course)?,
        }
        Ok(())
    }
}
