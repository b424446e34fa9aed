use anyhow::Context;
use nkc_view::responses::ShowOutcome;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ShowArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `nkc show`.
pub fn handle(args: &ShowArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let outcome = ctx
        .controller()
        .show(args.uid)
        .context("failed to build institution detail")?;

    if let ShowOutcome::NotFound { reason } = &outcome {
        tracing::info!(uid = ?args.uid, %reason, "detail request not found");
    }
    output(&outcome, flags.format)
}
