//! Plain-text rendering of courses, shared by the commands and the shell.

use std::io::{self, Write};

use planner::Course;

/// Writes one `NUMBER, NAME` line per course.
pub fn course_list<'a, W: Write>(
    out: &mut W,
    courses: impl IntoIterator<Item = &'a Course>,
) -> io::Result<()> {
    for course in courses {
        writeln!(out, "{course}")?;
    }
    Ok(())
}

/// Writes the course line followed by its prerequisites.
pub fn course_details<W: Write>(out: &mut W, course: &Course) -> io::Result<()> {
    writeln!(out, "{course}")?;
    writeln!(out, "Prerequisites: {}", course.prerequisites().join(", "))
}

pub fn not_found<W: Write>(out: &mut W, course_number: &str) -> io::Result<()> {
    writeln!(out, "Course Number {course_number} not found.")
}

pub fn json<W: Write, T: serde::Serialize + ?Sized>(out: &mut W, value: &T) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn details_join_prerequisites() {
        let course = Course::new(
            "CS300",
            "Algorithms",
            vec!["CS101".to_string(), "CS201".to_string()],
        );
        assert_eq!(
            rendered(|out| course_details(out, &course)),
            "CS300, Algorithms\nPrerequisites: CS101, CS201\n"
        );
    }

    #[test]
    fn details_without_prerequisites() {
        let course = Course::new("CS101", "Intro to CS", Vec::new());
        assert_eq!(
            rendered(|out| course_details(out, &course)),
            "CS101, Intro to CS\nPrerequisites: \n"
        );
    }

    #[test]
    fn list_one_line_per_course() {
        let courses = [
            Course::new("CS101", "Intro to CS", Vec::new()),
            Course::new("CS201", "Data Structures", Vec::new()),
        ];
        assert_eq!(
            rendered(|out| course_list(out, &courses)),
            "CS101, Intro to CS\nCS201, Data Structures\n"
        );
    }

    #[test]
    fn not_found_message() {
        assert_eq!(
            rendered(|out| not_found(out, "cs999")),
            "Course Number cs999 not found.\n"
        );
    }

    #[test]
    fn json_course() {
        let course = Course::new("CS201", "Data Structures", vec!["CS101".to_string()]);
        let mut out = Vec::new();
        json(&mut out, &course).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["number"], "CS201");
        assert_eq!(value["prerequisites"][0], "CS101");
    }
}
