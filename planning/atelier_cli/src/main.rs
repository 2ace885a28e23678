use clap::Parser;

use crate::opts::{Command, Opts};

mod core;
mod opts;

fn main() -> anyhow::Result<()> {
    let args = argfile::expand_args(argfile::parse_fromfile, argfile::PREFIX).unwrap();

    let opts = Opts::parse_from(args);

    cli::tracing::configure_tracing(opts.trace.clone(), opts.verbose.clone())?;

    let mut session = match &opts.command {
        Command::Create => planning::session::Session::new(),
        _ => stores::snapshot::load(&opts.session)?,
    };

    let modified = core::execute(&mut session, &opts.command)?;

    // Saving after any mutating operation is implicit for the CLI.
    // FUTURE: Maybe it would be useful to have a 'dry-run' flag that doesn't trigger a save.
    if modified {
        stores::snapshot::save(&session, &opts.session)?;
    }

    Ok(())
}
