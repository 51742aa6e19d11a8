//! Check command - dry run reporting pages that would change.
//!
//! Exits non-zero when any page is out of date or failed, so the command
//! can gate CI.

use anyhow::{Result, bail};

use super::RunArgs;
use crate::config::RelinkConfig;
use crate::logger::set_verbose;
use crate::rewrite;

/// Run the check command
pub fn run_check(config: &RelinkConfig, args: &RunArgs) -> Result<()> {
    set_verbose(args.verbose);
    let root = config.resolve_root(args.root.as_deref());

    let summary = rewrite::run(config, &root, true);
    summary.log_totals("check", true);

    if summary.has_failures() {
        bail!("{} file(s) could not be read", summary.failed());
    }
    if summary.has_changes() {
        bail!(
            "{} page(s) out of date (run `relink fix`)",
            summary.fixed()
        );
    }
    Ok(())
}
