use anyhow::{Context, Result};
use regex::Regex;
use std::fs;
use std::path::Path;

// Route line patterns tolerate the spacing variants that appear across
// revisions of the router block (`<History />}` vs `<History /> }`).
// CRLF mode (`R`) keeps the `$` anchor working on Windows line endings.
const HISTORY_ROUTE: &str =
    r#"(?m)^[ \t]*<Route path="/history" element=\{<History */> *\} */>[ \t]*\r?\n"#;
const DASHBOARD_ROUTE: &str =
    r#"(?mR)^([ \t]*)(<Route path="/dashboard" element=\{<Dashboard */> *\} */>)[ \t]*$"#;
const REFRESH_ROUTE: &str =
    r#"<Route path="/refresh-dashboard" element={<AdminRoute><RefreshDashboard /></AdminRoute>} />"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PatchOutcome {
    Patched,
    Unchanged,
    NotFound,
}

pub(crate) fn execute(path: &Path) -> Result<PatchOutcome> {
    if !path.exists() {
        return Ok(PatchOutcome::NotFound);
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;

    let history = Regex::new(HISTORY_ROUTE)?;
    let mut updated = history.replace(&content, "").into_owned();

    if !updated.contains(r#"path="/refresh-dashboard""#) {
        let dashboard = Regex::new(DASHBOARD_ROUTE)?;
        let replacement = format!("$1$2\n$1{}", REFRESH_ROUTE);
        updated = dashboard
            .replace(&updated, replacement.as_str())
            .into_owned();
    }

    if updated == content {
        return Ok(PatchOutcome::Unchanged);
    }
    fs::write(path, &updated)
        .with_context(|| format!("Failed to write file: {}", path.display()))?;
    Ok(PatchOutcome::Patched)
}
