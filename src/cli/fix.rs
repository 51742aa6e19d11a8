//! Fix command - apply the rewrite rule set and write pages in place.

use anyhow::{Result, bail};

use super::RunArgs;
use crate::config::RelinkConfig;
use crate::logger::set_verbose;
use crate::rewrite;

/// Run the fix command
pub fn run_fix(config: &RelinkConfig, args: &RunArgs) -> Result<()> {
    set_verbose(args.verbose);
    let root = config.resolve_root(args.root.as_deref());

    let summary = rewrite::run(config, &root, false);
    summary.log_totals("fix", false);

    if summary.has_failures() {
        bail!("{} file(s) could not be rewritten", summary.failed());
    }
    Ok(())
}
