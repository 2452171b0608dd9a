mod expand;
mod export;

use expand::run_expand;
use export::run_export;

use anyhow::Result;

use crate::cli::Command;
use crate::display::Context;

pub fn dispatch(command: Command, ctx: Context) -> Result<()> {
    match command {
        Command::Export(args) => run_export(args, ctx),
        Command::Expand(args) => run_expand(args, ctx),
    }
}
