use anyhow::Result;
use std::path::PathBuf;

use crate::actions::list_directory;
use crate::report::Report;

#[derive(Debug, Clone, PartialEq)]
pub enum Check {
    Present { name: String },
    Removed { name: String },
    /// Like `Removed`, but for a file inside a subdirectory. The
    /// subdirectory is only inspected when the top-level listing lacks
    /// `name` and contains `dir` and `dir` is a directory; in every other
    /// case the check reports nothing.
    RemovedNested { dir: String, name: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Verification {
    pub dir: PathBuf,
    pub checks: Vec<Check>,
}

pub fn run(verification: &Verification) -> Result<Report> {
    let entries = list_directory::execute(&verification.dir)?;
    let mut report = Report::new();
    for check in &verification.checks {
        match check {
            Check::Present { name } => {
                if entries.contains(name) {
                    report.done(format!("{} exists", name));
                } else {
                    report.failed(format!("{} missing", name));
                }
            }
            Check::Removed { name } => {
                if entries.contains(name) {
                    report.failed(format!("{} still exists", name));
                } else {
                    report.done(format!("{} cleaned up", name));
                }
            }
            Check::RemovedNested { dir, name } => {
                if !entries.contains(name) && entries.contains(dir) {
                    let nested = verification.dir.join(dir);
                    if nested.is_dir() {
                        let nested_entries = list_directory::execute(&nested)?;
                        if nested_entries.contains(name) {
                            report.failed(format!("{} still exists", name));
                        } else {
                            report.done(format!("{} deleted", name));
                        }
                    }
                }
            }
        }
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{Line, Status};
    use std::fs;

    fn check_present(name: &str) -> Check {
        Check::Present {
            name: name.to_string(),
        }
    }

    fn check_removed(name: &str) -> Check {
        Check::Removed {
            name: name.to_string(),
        }
    }

    fn check_removed_nested(dir: &str, name: &str) -> Check {
        Check::RemovedNested {
            dir: dir.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_present_check_reports_both_ways() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("App.tsx"), "app").unwrap();

        let verification = Verification {
            dir: dir.path().to_path_buf(),
            checks: vec![check_present("App.tsx"), check_present("Other.tsx")],
        };
        let report = run(&verification).unwrap();

        assert_eq!(
            report.lines,
            vec![
                Line::done("App.tsx exists".to_string()),
                Line::failed("Other.tsx missing".to_string()),
            ]
        );
    }

    #[test]
    fn test_removed_check_reports_both_ways() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("App_FINAL.tsx"), "stale").unwrap();

        let verification = Verification {
            dir: dir.path().to_path_buf(),
            checks: vec![
                check_removed("App.tsx.new"),
                check_removed("App_FINAL.tsx"),
            ],
        };
        let report = run(&verification).unwrap();

        assert_eq!(
            report.lines,
            vec![
                Line::done("App.tsx.new cleaned up".to_string()),
                Line::failed("App_FINAL.tsx still exists".to_string()),
            ]
        );
    }

    #[test]
    fn test_nested_check_reports_deleted_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("pages")).unwrap();

        let verification = Verification {
            dir: dir.path().to_path_buf(),
            checks: vec![check_removed_nested("pages", "History.tsx")],
        };
        let report = run(&verification).unwrap();

        assert_eq!(
            report.lines,
            vec![Line::done("History.tsx deleted".to_string())]
        );
    }

    #[test]
    fn test_nested_check_reports_leftover_file() {
        let dir = tempfile::tempdir().unwrap();
        let pages = dir.path().join("pages");
        fs::create_dir(&pages).unwrap();
        fs::write(pages.join("History.tsx"), "page").unwrap();

        let verification = Verification {
            dir: dir.path().to_path_buf(),
            checks: vec![check_removed_nested("pages", "History.tsx")],
        };
        let report = run(&verification).unwrap();

        assert_eq!(
            report.lines,
            vec![Line::failed("History.tsx still exists".to_string())]
        );
    }

    #[test]
    fn test_nested_check_stays_silent_without_the_subdirectory() {
        let dir = tempfile::tempdir().unwrap();

        let verification = Verification {
            dir: dir.path().to_path_buf(),
            checks: vec![check_removed_nested("pages", "History.tsx")],
        };
        let report = run(&verification).unwrap();

        assert!(report.lines.is_empty());
    }

    #[test]
    fn test_nested_check_stays_silent_when_name_is_at_top_level() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("pages")).unwrap();
        fs::write(dir.path().join("History.tsx"), "page").unwrap();

        let verification = Verification {
            dir: dir.path().to_path_buf(),
            checks: vec![check_removed_nested("pages", "History.tsx")],
        };
        let report = run(&verification).unwrap();

        assert!(report.lines.is_empty());
    }

    #[test]
    fn test_nested_check_stays_silent_when_the_entry_is_a_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("pages"), "not a directory").unwrap();

        let verification = Verification {
            dir: dir.path().to_path_buf(),
            checks: vec![check_removed_nested("pages", "History.tsx")],
        };
        let report = run(&verification).unwrap();

        assert!(report.lines.is_empty());
    }

    #[test]
    fn test_run_fails_when_the_directory_cannot_be_listed() {
        let dir = tempfile::tempdir().unwrap();
        let verification = Verification {
            dir: dir.path().join("gone"),
            checks: vec![check_present("App.tsx")],
        };
        let result = run(&verification);

        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to read directory"));
    }

    #[test]
    fn test_report_lines_follow_check_order() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("App.tsx"), "app").unwrap();
        fs::create_dir(dir.path().join("pages")).unwrap();

        let verification = Verification {
            dir: dir.path().to_path_buf(),
            checks: vec![
                check_present("App.tsx"),
                check_removed_nested("pages", "History.tsx"),
                check_removed("App_CORRECT.tsx"),
                check_removed("App.tsx.new"),
                check_removed("App_FINAL.tsx"),
            ],
        };
        let report = run(&verification).unwrap();

        let texts: Vec<&str> = report.lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(
            texts,
            vec![
                "App.tsx exists",
                "History.tsx deleted",
                "App_CORRECT.tsx cleaned up",
                "App.tsx.new cleaned up",
                "App_FINAL.tsx cleaned up",
            ]
        );
        assert!(report.lines.iter().all(|l| l.status == Status::Done));
    }
}
