use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ListArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `nkc list`.
pub fn handle(args: &ListArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let response = ctx
        .controller()
        .list(args.page, args.search.to_request(), flags.page_id)
        .context("failed to list institutions")?;
    output(&response, flags.format)
}
