//! Command-line surface: flags, usage text, and dispatch.

use crate::core::argv;
use crate::core::config::Config;
use crate::core::error::StateError;
use crate::core::types::{Flags, Plan};
use crate::transport::{self, Runner};
use clap::Parser;
use std::io::{self, Write};

pub const USAGE: &str = "\
usage: state [-cdgmqv] [-f FILE] action [args...]
state wraps the salt functions used day to day. By default it runs
salt-call --local, for testing and managing states on this machine.

Actions:
	sls		Apply a salt state. Needs at least one argument, the
			state to apply.
	up		Run a highstate.
	highstate	Run a highstate.
	sync		Refresh pillar, then sync salt and pillar data.
	clear		Clear the minion cache.

Flags:
	-c	Keep salt's coloured output.
	-d	Debug logging for this wrapper.
	-f FILE	Also write salt output to FILE.
	-g	Global command: use salt instead of salt-call. The first
		argument after the action is the target spec. Implies -m.
	-m	Use the salt master (no --local).
	-q	Quiet: only warning and error log messages from salt.
	-v	Full salt output instead of changes only.
";

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "state", version, override_help = USAGE)]
pub struct Cli {
    /// Turn on coloured output
    #[arg(short = 'c')]
    pub colour: bool,

    /// Debug logging for the wrapper
    #[arg(short = 'd')]
    pub debug: bool,

    /// Also write output to the named file
    #[arg(short = 'f', value_name = "FILE", allow_hyphen_values = true)]
    pub out_file: Option<String>,

    /// Global salt command (salt instead of salt-call)
    #[arg(short = 'g')]
    pub global: bool,

    /// Use the salt master
    #[arg(short = 'm')]
    pub use_master: bool,

    /// Only show warnings and errors in salt's logs
    #[arg(short = 'q')]
    pub quiet: bool,

    /// Show full output
    #[arg(short = 'v')]
    pub full: bool,

    /// Action followed by its arguments, passed through verbatim
    #[arg(value_name = "ACTION", trailing_var_arg = true)]
    pub args: Vec<String>,
}

impl Cli {
    pub fn flags(&self) -> Flags {
        Flags {
            colour: self.colour,
            debug: self.debug,
            full: self.full,
            global: self.global,
            quiet: self.quiet,
            use_master: self.use_master,
            out_file: self.out_file.clone(),
        }
    }
}

/// Result of a dispatch that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing to run; show usage on stdout.
    Usage,
    /// Every invocation succeeded.
    Completed,
}

/// Build the plan for `cli` and run it with `runner`.
pub fn dispatch<R: Runner + ?Sized>(
    cli: &Cli,
    config: &Config,
    runner: &mut R,
) -> Result<Outcome, StateError> {
    let flags = cli.flags();
    match argv::plan(&flags, &cli.args, config)? {
        Plan::Usage => Ok(Outcome::Usage),
        Plan::Run(invocations) => {
            transport::execute(&invocations, runner)?;
            Ok(Outcome::Completed)
        }
    }
}

pub fn print_usage<W: Write>(w: &mut W) -> io::Result<()> {
    w.write_all(USAGE.as_bytes())?;
    w.flush()
}
