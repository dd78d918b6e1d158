use anyhow::{anyhow, bail};
use clap::Parser;
use crossbeam_channel::unbounded;
use spares_app::{Bicycle, Core, Effect, Event, SparesApp, SparesSource};
use tracing::trace;

use crate::opts::{Command, Opts};

mod opts;
mod report;

fn main() -> anyhow::Result<()> {
    let args = argfile::expand_args(argfile::parse_fromfile, argfile::PREFIX)?;

    let opts = Opts::parse_from(args);

    cli::tracing::configure_tracing(opts.trace.clone(), opts.verbose.clone())?;

    let core: Core<SparesApp> = Core::new();

    match opts.command {
        Command::Spares {
            size,
            parts_args,
            output,
        } => {
            let parts = parts_args
                .build_parts_selection()
                .map_err(|error| anyhow!("{}", error))?;

            let assembly = run_loop(&core, Event::Build {
                size,
                parts,
            })?;

            if let Some(output) = output {
                run_loop(&core, Event::StoreSpares {
                    output: SparesSource::from_path(output),
                })?;
            }

            print!("{}", report::build_spares_tree(&assembly));
        }
        Command::Parts {
            size,
            parts_args,
        } => {
            let parts = parts_args
                .build_parts_selection()
                .map_err(|error| anyhow!("{}", error))?;

            let assembly = run_loop(&core, Event::Build {
                size,
                parts,
            })?;

            print!("{}", report::build_parts_tree(&assembly));
        }
    }

    Ok(())
}

/// Processes the event, returns the assembly from the resulting view.
fn run_loop(core: &Core<SparesApp>, event: Event) -> Result<Bicycle, anyhow::Error> {
    let (tx, rx) = unbounded::<Effect>();

    trace!("event: {:?}", event);
    for effect in core.process_event(event) {
        tx.send(effect)
            .map_err(|e| anyhow!("{:?}", e))?;
    }
    drop(tx);

    let mut assembly = None;

    while let Ok(effect) = rx.recv() {
        trace!("run_loop. effect: {:?}", effect);
        match effect {
            _render @ Effect::Render(_) => {
                let view = core.view();

                if let Some(error) = view.error {
                    bail!(error)
                }

                assembly = view.assembly;
            }
        }
    }

    assembly.ok_or_else(|| anyhow!("No assembly"))
}
