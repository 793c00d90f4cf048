use anyhow::Result;

use crate::executor::{Plan, Step};
use crate::paths;
use crate::report::{self, Report};
use crate::verify::{self, Verification};

pub struct CleanupReport {
    pub steps: Report,
    pub verification: Report,
}

pub fn run() -> Result<CleanupReport> {
    run_with(&paths::cleanup_plan(), &paths::cleanup_verification())
}

fn run_with(plan: &Plan, verification: &Verification) -> Result<CleanupReport> {
    let (deletions, renames): (Vec<&Step>, Vec<&Step>) = plan
        .steps
        .iter()
        .partition(|step| matches!(step, Step::DeleteFile { .. }));

    let mut steps = Report::new();
    println!("Starting cleanup...");
    report::separator();
    for step in deletions {
        step.execute(&mut steps);
    }
    report::separator();
    for step in renames {
        step.execute(&mut steps);
    }
    report::separator();
    println!("Cleanup complete!");

    println!("\nVerification:");
    let verification = verify::run(verification)?;
    Ok(CleanupReport {
        steps,
        verification,
    })
}
