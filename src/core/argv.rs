//! Argument-vector construction for salt-call / salt.
//!
//! Pure: takes flags, positional arguments, and binary names and returns a
//! [`Plan`]. Flag-derived arguments always come before the action segment,
//! and in global mode the target spec sits right after the program name.

use super::config::Config;
use super::error::StateError;
use super::types::{Action, Flags, Invocation, Plan, Purpose};

pub const LOCAL: &str = "--local";
pub const NO_COLOUR: &str = "--no-color";
pub const CHANGES_ONLY: [&str; 2] = ["--state-output", "changes"];
pub const FULL_OUTPUT: [&str; 2] = ["--state-output", "full"];
pub const LOG_QUIET: [&str; 2] = ["-l", "warning"];
pub const OUT_FILE: &str = "--out-file";

pub const STATE_SLS: &str = "state.sls";
pub const STATE_HIGHSTATE: &str = "state.highstate";
pub const REFRESH_PILLAR: &str = "saltutil.refresh_pillar";
pub const SYNC_ALL: &str = "saltutil.sync_all";
pub const CLEAR_CACHE: &str = "saltutil.clear_cache";

/// Decide what to run for `positional` (action first, then its arguments).
///
/// Returns `Plan::Usage` when there is no action or the action is unknown,
/// and `StateError::Usage` when global mode lacks a target or `sls` lacks a
/// state name.
pub fn plan(flags: &Flags, positional: &[String], config: &Config) -> Result<Plan, StateError> {
    let Some((word, mut rest)) = positional.split_first() else {
        return Ok(Plan::Usage);
    };

    let mut target = None;
    if flags.global {
        let Some((spec, after)) = rest.split_first() else {
            return Err(StateError::Usage);
        };
        target = Some(spec.as_str());
        rest = after;
    }

    let Some(action) = Action::parse(word) else {
        tracing::debug!(action = %word, "unknown action");
        return Ok(Plan::Usage);
    };

    let prefix = base_args(flags, target, config);
    let invocations = match action {
        Action::Sls => {
            if rest.is_empty() {
                return Err(StateError::Usage);
            }
            vec![command(&prefix, STATE_SLS, rest, Purpose::Command)]
        }
        Action::Highstate => vec![command(&prefix, STATE_HIGHSTATE, rest, Purpose::Command)],
        Action::Sync => vec![
            command(&prefix, REFRESH_PILLAR, rest, Purpose::RefreshPillar),
            command(&prefix, SYNC_ALL, rest, Purpose::SyncAll),
        ],
        Action::Clear => vec![command(&prefix, CLEAR_CACHE, &[], Purpose::Command)],
    };

    tracing::debug!(%action, steps = invocations.len(), "planned");
    Ok(Plan::Run(invocations))
}

/// Program name plus every flag-derived argument, in fixed order.
pub fn base_args(flags: &Flags, target: Option<&str>, config: &Config) -> Vec<String> {
    let mut args = Vec::new();

    match target {
        Some(spec) if flags.global => {
            args.push(config.salt.clone());
            args.push(spec.to_string());
        }
        _ => args.push(config.salt_call.clone()),
    }

    if !flags.master_mode() {
        args.push(LOCAL.to_string());
    }

    if !flags.colour {
        args.push(NO_COLOUR.to_string());
    }

    let output = if flags.full { FULL_OUTPUT } else { CHANGES_ONLY };
    args.extend(output.iter().map(|s| s.to_string()));

    if flags.quiet {
        args.extend(LOG_QUIET.iter().map(|s| s.to_string()));
    }

    if let Some(path) = flags.out_file.as_deref().filter(|p| !p.is_empty()) {
        args.push(OUT_FILE.to_string());
        args.push(path.to_string());
    }

    args
}

fn command(prefix: &[String], subcommand: &str, rest: &[String], purpose: Purpose) -> Invocation {
    let mut argv = Vec::with_capacity(prefix.len() + 1 + rest.len());
    argv.extend_from_slice(prefix);
    argv.push(subcommand.to_string());
    argv.extend_from_slice(rest);
    Invocation { purpose, argv }
}
