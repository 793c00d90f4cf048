use std::path::{Path, PathBuf};

use crate::executor::{Plan, Step};
use crate::verify::{Check, Verification};

// Fixed checkout location on the maintenance machine.
pub(crate) const SRC_DIR: &str = r"E:\Carbon-tracker\src";

pub(crate) const PAGES_DIR: &str = "pages";

pub(crate) const APP: &str = "App.tsx";
pub(crate) const APP_NEW: &str = "App_new.tsx";
pub(crate) const APP_CORRECT: &str = "App_CORRECT.tsx";
pub(crate) const APP_FINAL: &str = "App_FINAL.tsx";
pub(crate) const APP_TSX_NEW: &str = "App.tsx.new";
pub(crate) const HISTORY: &str = "History.tsx";

pub(crate) fn src_dir() -> PathBuf {
    PathBuf::from(SRC_DIR)
}

pub(crate) fn cleanup_plan() -> Plan {
    cleanup_plan_in(&src_dir())
}

pub(crate) fn cleanup_plan_in(dir: &Path) -> Plan {
    Plan {
        steps: vec![
            Step::DeleteFile {
                path: dir.join(PAGES_DIR).join(HISTORY),
            },
            Step::DeleteFile { path: dir.join(APP) },
            Step::DeleteFile {
                path: dir.join(APP_TSX_NEW),
            },
            Step::DeleteFile {
                path: dir.join(APP_FINAL),
            },
            Step::RenameFile {
                source: dir.join(APP_CORRECT),
                destination: dir.join(APP),
            },
        ],
    }
}

pub(crate) fn cleanup_verification() -> Verification {
    cleanup_verification_in(&src_dir())
}

pub(crate) fn cleanup_verification_in(dir: &Path) -> Verification {
    Verification {
        dir: dir.to_path_buf(),
        checks: vec![
            Check::Present {
                name: APP.to_string(),
            },
            Check::RemovedNested {
                dir: PAGES_DIR.to_string(),
                name: HISTORY.to_string(),
            },
            Check::Removed {
                name: APP_CORRECT.to_string(),
            },
            Check::Removed {
                name: APP_TSX_NEW.to_string(),
            },
            Check::Removed {
                name: APP_FINAL.to_string(),
            },
        ],
    }
}

pub(crate) fn replace_plan() -> Plan {
    replace_plan_in(&src_dir())
}

pub(crate) fn replace_plan_in(dir: &Path) -> Plan {
    Plan {
        steps: vec![Step::RenameFile {
            source: dir.join(APP_NEW),
            destination: dir.join(APP),
        }],
    }
}

pub(crate) fn patch_plan() -> Plan {
    patch_plan_in(&src_dir())
}

pub(crate) fn patch_plan_in(dir: &Path) -> Plan {
    Plan {
        steps: vec![Step::PatchRoutes {
            path: dir.join(APP),
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cleanup_plan_deletes_stale_files_then_promotes_the_corrected_app() {
        let plan = cleanup_plan();
        let dir = src_dir();

        assert_eq!(
            plan.steps,
            vec![
                Step::DeleteFile {
                    path: dir.join("pages").join("History.tsx"),
                },
                Step::DeleteFile {
                    path: dir.join("App.tsx"),
                },
                Step::DeleteFile {
                    path: dir.join("App.tsx.new"),
                },
                Step::DeleteFile {
                    path: dir.join("App_FINAL.tsx"),
                },
                Step::RenameFile {
                    source: dir.join("App_CORRECT.tsx"),
                    destination: dir.join("App.tsx"),
                },
            ]
        );
    }

    #[test]
    fn test_cleanup_verification_covers_every_swept_file() {
        let verification = cleanup_verification();

        assert_eq!(verification.dir, src_dir());
        assert_eq!(
            verification.checks,
            vec![
                Check::Present {
                    name: "App.tsx".to_string(),
                },
                Check::RemovedNested {
                    dir: "pages".to_string(),
                    name: "History.tsx".to_string(),
                },
                Check::Removed {
                    name: "App_CORRECT.tsx".to_string(),
                },
                Check::Removed {
                    name: "App.tsx.new".to_string(),
                },
                Check::Removed {
                    name: "App_FINAL.tsx".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_replace_plan_swaps_in_the_new_app_component() {
        let plan = replace_plan();

        assert_eq!(
            plan.steps,
            vec![Step::RenameFile {
                source: src_dir().join("App_new.tsx"),
                destination: src_dir().join("App.tsx"),
            }]
        );
    }

    #[test]
    fn test_patch_plan_targets_the_app_component() {
        let plan = patch_plan();

        assert_eq!(
            plan.steps,
            vec![Step::PatchRoutes {
                path: src_dir().join("App.tsx"),
            }]
        );
    }
}
