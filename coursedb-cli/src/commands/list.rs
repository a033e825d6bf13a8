use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use coursedb_catalog::Course;

use crate::CliError;

use super::open_store;

/// Print the catalog tree, or JSON with `--json`.
///
/// If the store fails partway, the courses read so far are still printed
/// before the error is returned.
pub(crate) fn run_list(db: Option<PathBuf>, json: bool, modules_only: bool) -> Result<(), CliError> {
    let store = open_store(db)?;

    let (courses, failure) = match store.find_all() {
        Ok(courses) => (courses, None),
        Err(partial) => {
            let (courses, source) = partial.into_parts();
            (courses, Some(source))
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&courses)?);
    } else {
        print_courses(&courses, modules_only);
    }

    match failure {
        None => Ok(()),
        Some(source) => {
            log::warn!("Stopped after {} courses", courses.len());
            Err(source.into())
        }
    }
}

fn print_courses(courses: &[Course], modules_only: bool) {
    if courses.is_empty() {
        log::info!(
            "{}",
            "No courses found".if_supports_color(Stdout, |t| t.dimmed()),
        );
        return;
    }

    for course in courses {
        let mut lines = render_course(course, modules_only).into_iter();
        if let Some(heading) = lines.next() {
            log::info!("{}", heading.if_supports_color(Stdout, |t| t.bold()));
        }
        for line in lines {
            log::info!("{}", line);
        }
        crate::log_blank();
    }

    let modules: usize = courses.iter().map(|c| c.modules.len()).sum();
    let clips: usize = courses.iter().map(Course::clip_count).sum();
    log::info!(
        "{} courses, {} modules, {} clips",
        courses.len(),
        modules,
        clips,
    );
}

/// Render one course as indented plain-text lines. The first line is the course.
fn render_course(course: &Course, modules_only: bool) -> Vec<String> {
    let mut lines = vec![course.to_string()];
    for module in &course.modules {
        lines.push(format!("  {} by {}", module, module.author_or_unknown()));
        if modules_only {
            continue;
        }
        for clip in &module.clips {
            lines.push(format!("      {}", clip));
        }
    }
    lines
}
