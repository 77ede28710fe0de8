//! The interactive advising menu.
//!
//! [`Command::run`] handles prompting; the menu actions themselves live on
//! [`Shell`], which writes to any [`Write`] so it can be driven in tests.

use std::{
    fmt,
    fs::File,
    io::{self, BufRead, BufReader, Seek, Write},
    path::{Path, PathBuf},
};

use clap::Parser;
use dialoguer::{Confirm, Input, Select};
use planner::{Config, CourseIndex, CourseSource};
use tracing::instrument;

use super::{render, terminal::Tone};

#[derive(Debug, Default, Parser)]
#[command(about = "Run the interactive advising menu")]
pub struct Command {}

impl Command {
    #[instrument(level = "debug", skip(self, config))]
    pub fn run(self, file: Option<&Path>, config: &Config) -> anyhow::Result<()> {
        let source = match file {
            Some(path) => CourseSource::open(path, config.delimiter())?,
            None => choose_source(config)?,
        };

        let mut shell = Shell::new(source, io::stdout());
        println!("\nWelcome to the course planner.");

        loop {
            println!();
            let choice = Select::new()
                .with_prompt("What would you like to do?")
                .items(MenuItem::ALL.as_slice())
                .default(0)
                .interact()?;

            match MenuItem::ALL[choice] {
                MenuItem::Load => shell.load()?,
                MenuItem::List => shell.list()?,
                MenuItem::Show => {
                    let number = prompt_course_number("What course do you want to know about?")?;
                    shell.show(&number)?;
                }
                MenuItem::Remove => {
                    let number = prompt_course_number("What course do you want to remove?")?;
                    shell.remove(&number)?;
                }
                MenuItem::Exit => break,
            }
        }

        println!("{}", "Thank you for using the course planner!".success());
        Ok(())
    }
}

/// Asks for a course source until one can be opened.
///
/// Failing to open a file is not fatal here; the user is asked again.
fn choose_source(config: &Config) -> anyhow::Result<CourseSource<BufReader<File>>> {
    let default = config.default_source();
    loop {
        let use_default = Confirm::new()
            .with_prompt(format!("Use default file ({})?", default.display()))
            .default(true)
            .interact()?;

        let path = if use_default {
            default.to_path_buf()
        } else {
            let name: String = Input::new()
                .with_prompt("Insert data filename")
                .interact_text()?;
            PathBuf::from(name)
        };

        match CourseSource::open(&path, config.delimiter()) {
            Ok(source) => {
                println!("{}", format!("Using file: {}", path.display()).dim());
                return Ok(source);
            }
            Err(e) => eprintln!("{}", e.to_string().warning()),
        }
    }
}

fn prompt_course_number(prompt: &str) -> anyhow::Result<String> {
    let number: String = Input::new().with_prompt(prompt).interact_text()?;
    Ok(number.trim().to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuItem {
    Load,
    List,
    Show,
    Remove,
    Exit,
}

impl MenuItem {
    const ALL: [Self; 5] = [Self::Load, Self::List, Self::Show, Self::Remove, Self::Exit];
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match self {
            Self::Load => "Load Data Structure",
            Self::List => "Print Course List",
            Self::Show => "Print Course",
            Self::Remove => "Remove Course",
            Self::Exit => "Exit",
        };
        f.write_str(label)
    }
}

/// The state behind the interactive menu: an opened source, the index it is
/// loaded into, and where to write results.
pub struct Shell<R, W> {
    source: CourseSource<R>,
    index: CourseIndex,
    loaded: bool,
    out: W,
}

impl<R: BufRead + Seek, W: Write> Shell<R, W> {
    pub const fn new(source: CourseSource<R>, out: W) -> Self {
        Self {
            source,
            index: CourseIndex::new(),
            loaded: false,
            out,
        }
    }

    /// Loads the source into the index, once.
    ///
    /// A malformed source is reported and the index is left as it was; a
    /// later attempt reads the source from the start again.
    pub fn load(&mut self) -> io::Result<()> {
        if self.loaded {
            return writeln!(self.out, "Course data is already loaded.");
        }
        match self.source.load(&mut self.index) {
            Ok(count) => {
                self.loaded = true;
                writeln!(self.out, "Loaded {count} courses.")
            }
            Err(e) => {
                tracing::warn!("load failed: {e}");
                writeln!(self.out, "Failed to load course data: {e}")
            }
        }
    }

    pub fn list(&mut self) -> io::Result<()> {
        if self.index.is_empty() {
            return if self.loaded {
                writeln!(self.out, "The course list is empty.")
            } else {
                writeln!(
                    self.out,
                    "No courses loaded. Choose \"{}\" first.",
                    MenuItem::Load
                )
            };
        }
        writeln!(self.out, "Here is a sample schedule:")?;
        writeln!(self.out)?;
        render::course_list(&mut self.out, &self.index)
    }

    pub fn show(&mut self, course_number: &str) -> io::Result<()> {
        match self.index.get(course_number) {
            Some(course) => render::course_details(&mut self.out, course),
            None => render::not_found(&mut self.out, course_number),
        }
    }

    pub fn remove(&mut self, course_number: &str) -> io::Result<()> {
        match self.index.remove(course_number) {
            Some(course) => writeln!(self.out, "Removed {course}."),
            None => render::not_found(&mut self.out, course_number),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    const CATALOG: &str = "\
CSCI300,Introduction to Algorithms,CSCI200,MATH201
CSCI100,Introduction to Computer Science
CSCI200,Data Structures,CSCI101
MATH201,Discrete Mathematics
";

    fn session(
        content: &str,
        actions: impl FnOnce(&mut Shell<Cursor<&str>, &mut Vec<u8>>),
    ) -> String {
        let source = CourseSource::new(Cursor::new(content), ',').unwrap();
        let mut out = Vec::new();
        let mut shell = Shell::new(source, &mut out);
        actions(&mut shell);
        drop(shell);
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn load_then_list() {
        let output = session(CATALOG, |shell| {
            shell.load().unwrap();
            shell.list().unwrap();
        });

        assert_eq!(
            output,
            "Loaded 4 courses.\n\
             Here is a sample schedule:\n\
             \n\
             CSCI100, Introduction to Computer Science\n\
             CSCI200, Data Structures\n\
             CSCI300, Introduction to Algorithms\n\
             MATH201, Discrete Mathematics\n"
        );
    }

    #[test]
    fn list_before_load() {
        let output = session(CATALOG, |shell| shell.list().unwrap());
        assert_eq!(
            output,
            "No courses loaded. Choose \"Load Data Structure\" first.\n"
        );
    }

    #[test]
    fn show_found_and_missing() {
        let output = session(CATALOG, |shell| {
            shell.load().unwrap();
            shell.show("csci300").unwrap();
            shell.show("CSCI200").unwrap();
            shell.show("CSCI999").unwrap();
        });

        // CSCI101 is not a course in the catalog, so it is not a prerequisite.
        assert_eq!(
            output,
            "Loaded 4 courses.\n\
             CSCI300, Introduction to Algorithms\n\
             Prerequisites: CSCI200, MATH201\n\
             CSCI200, Data Structures\n\
             Prerequisites: \n\
             Course Number CSCI999 not found.\n"
        );
    }

    #[test]
    fn remove_then_show() {
        let output = session(CATALOG, |shell| {
            shell.load().unwrap();
            shell.remove("csci200").unwrap();
            shell.show("CSCI200").unwrap();
            shell.remove("CSCI200").unwrap();
        });

        assert_eq!(
            output,
            "Loaded 4 courses.\n\
             Removed CSCI200, Data Structures.\n\
             Course Number CSCI200 not found.\n\
             Course Number CSCI200 not found.\n"
        );
    }

    #[test]
    fn second_load_reports_already_loaded() {
        let output = session(CATALOG, |shell| {
            shell.load().unwrap();
            shell.load().unwrap();
        });
        assert_eq!(output, "Loaded 4 courses.\nCourse data is already loaded.\n");
    }

    #[test]
    fn malformed_source_is_reported() {
        let output = session("CSCI100,Intro\nCSCI200\n", |shell| {
            shell.load().unwrap();
            shell.list().unwrap();
        });

        assert_eq!(
            output,
            "Failed to load course data: line 2: course CSCI200 is missing a name\n\
             No courses loaded. Choose \"Load Data Structure\" first.\n"
        );
    }

    #[test]
    fn load_after_removing_everything_is_still_already_loaded() {
        let output = session("CSCI100,Intro\n", |shell| {
            shell.load().unwrap();
            shell.remove("CSCI100").unwrap();
            shell.load().unwrap();
            shell.list().unwrap();
        });

        assert_eq!(
            output,
            "Loaded 1 courses.\n\
             Removed CSCI100, Intro.\n\
             Course data is already loaded.\n\
             The course list is empty.\n"
        );
    }

    #[test]
    fn empty_source_loads_zero_courses_once() {
        let output = session("", |shell| {
            shell.load().unwrap();
            shell.load().unwrap();
        });
        assert_eq!(output, "Loaded 0 courses.\nCourse data is already loaded.\n");
    }

    #[test]
    fn retrying_a_malformed_source_reports_the_same_row() {
        let output = session("CSCI100,Intro\nCSCI200\nCSCI300,Algorithms\n", |shell| {
            shell.load().unwrap();
            shell.load().unwrap();
            shell.show("CSCI300").unwrap();
        });

        assert_eq!(
            output,
            "Failed to load course data: line 2: course CSCI200 is missing a name\n\
             Failed to load course data: line 2: course CSCI200 is missing a name\n\
             Course Number CSCI300 not found.\n"
        );
    }

    #[test]
    fn menu_labels() {
        let labels: Vec<String> = MenuItem::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(
            labels,
            [
                "Load Data Structure",
                "Print Course List",
                "Print Course",
                "Remove Course",
                "Exit"
            ]
        );
    }
}
