use crate::cli::GlobalFlags;
use crate::cli::root_commands::RedirectArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `nkc redirect`.
pub fn handle(args: &RedirectArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(
        &ctx.controller().redirect(args.nkci.as_deref()),
        flags.format,
    )
}
