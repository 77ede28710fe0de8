use std::path::Path;

use anyhow::Context;
use clap::Parser;
use planner::{Config, Course};
use regex::Regex;
use tracing::instrument;

use super::{OutputFormat, render};

#[derive(Debug, Parser)]
#[command(about = "List all courses in alphanumeric order")]
pub struct Command {
    /// Only list courses whose number or name matches this regular expression
    #[arg(long)]
    regex: Option<String>,

    /// Output format
    #[arg(long, value_name = "FORMAT", default_value = "pretty")]
    output: OutputFormat,
}

impl Command {
    #[instrument(level = "debug", skip_all)]
    pub fn run(self, file: Option<&Path>, config: &Config) -> anyhow::Result<()> {
        let filter = self
            .regex
            .as_deref()
            .map(Regex::new)
            .transpose()
            .context("Invalid --regex pattern")?;

        let index = super::load_index(file, config)?;
        let courses: Vec<&Course> = index
            .iter()
            .filter(|course| filter.as_ref().is_none_or(|re| is_match(re, course)))
            .collect();
        tracing::debug!("listing {} of {} courses", courses.len(), index.len());

        let mut out = std::io::stdout().lock();
        match self.output {
            OutputFormat::Pretty => render::course_list(&mut out, courses)?,
            OutputFormat::Json => render::json(&mut out, &courses)?,
        }
        Ok(())
    }
}

fn is_match(re: &Regex, course: &Course) -> bool {
    re.is_match(course.number()) || re.is_match(course.name())
}
