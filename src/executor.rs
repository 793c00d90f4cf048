use std::path::PathBuf;

use crate::actions::patch_file::PatchOutcome;
use crate::actions::{delete_file, patch_file, rename_file};
use crate::fs::file_label;
use crate::report::Report;

#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    DeleteFile { path: PathBuf },
    RenameFile { source: PathBuf, destination: PathBuf },
    PatchRoutes { path: PathBuf },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    pub steps: Vec<Step>,
}

impl Plan {
    pub fn display(&self) {
        println!("\n--- Proposed Plan ---");
        if self.steps.is_empty() {
            println!("No steps planned.");
            return;
        }
        for (i, step) in self.steps.iter().enumerate() {
            match step {
                Step::DeleteFile { path } => {
                    println!("{}. Delete file: '{}'", i + 1, path.display())
                }
                Step::RenameFile {
                    source,
                    destination,
                } => println!(
                    "{}. Rename file: '{}' → '{}'",
                    i + 1,
                    source.display(),
                    destination.display()
                ),
                Step::PatchRoutes { path } => {
                    println!("{}. Patch routes in: '{}'", i + 1, path.display())
                }
            }
        }
        println!("--------------------");
    }
}

impl Step {
    /// Failures become report lines, never errors, so one bad step cannot
    /// stop the steps after it.
    pub(crate) fn execute(&self, report: &mut Report) {
        match self {
            Step::DeleteFile { path } => {
                let name = file_label(path);
                match delete_file::execute(path) {
                    Ok(true) => report.done(format!("Deleted: {}", name)),
                    Ok(false) => report.skipped(format!("Not found: {}", name)),
                    Err(e) => report.failed(format!("Error deleting {}: {:#}", name, e)),
                }
            }
            Step::RenameFile {
                source,
                destination,
            } => match rename_file::execute(source, destination) {
                Ok(true) => report.done(format!(
                    "Renamed: {} → {}",
                    file_label(source),
                    file_label(destination)
                )),
                Ok(false) => {
                    report.failed(format!("Source file not found: {}", file_label(source)))
                }
                Err(e) => report.failed(format!("Error renaming file: {:#}", e)),
            },
            Step::PatchRoutes { path } => {
                let name = file_label(path);
                match patch_file::execute(path) {
                    Ok(PatchOutcome::Patched) => {
                        report.done(format!("Patched routes in {}", name))
                    }
                    Ok(PatchOutcome::Unchanged) => {
                        report.skipped(format!("Routes already up to date in {}", name))
                    }
                    Ok(PatchOutcome::NotFound) => report.skipped(format!("Not found: {}", name)),
                    Err(e) => report.failed(format!("Error patching {}: {:#}", name, e)),
                }
            }
        }
    }
}

pub fn execute_plan(plan: &Plan) -> Report {
    let mut report = Report::new();
    for step in &plan.steps {
        step.execute(&mut report);
    }
    report
}
