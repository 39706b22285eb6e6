//! Value types shared by the argument builder, dispatcher, and transport.
//!
//! Everything here lives for a single invocation of the wrapper and is
//! rebuilt from the process arguments on every run.

use std::fmt;

// ============================================================================
// Flags
// ============================================================================

/// Wrapper flags, as parsed from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flags {
    /// Keep salt's coloured output (`-c`)
    pub colour: bool,

    /// Debug diagnostics for the wrapper itself (`-d`)
    pub debug: bool,

    /// Show full state output instead of changes only (`-v`)
    pub full: bool,

    /// Target the cluster through `salt` instead of `salt-call` (`-g`)
    pub global: bool,

    /// Quiet salt logging, warnings and errors only (`-q`)
    pub quiet: bool,

    /// Talk to the salt master instead of running `--local` (`-m`)
    pub use_master: bool,

    /// Also write salt output to this file (`-f`)
    pub out_file: Option<String>,
}

impl Flags {
    /// Global mode always goes through the master.
    pub fn master_mode(&self) -> bool {
        self.global || self.use_master
    }
}

// ============================================================================
// Actions
// ============================================================================

/// The closed set of shorthand actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// `sls STATE [ARGS...]`
    Sls,
    /// `up` / `highstate [ARGS...]`
    Highstate,
    /// `sync [ARGS...]`: refresh pillar, then sync all
    Sync,
    /// `clear`
    Clear,
}

impl Action {
    /// Map an action keyword. Unknown keywords yield `None`.
    pub fn parse(word: &str) -> Option<Self> {
        match word {
            "sls" => Some(Action::Sls),
            "up" | "highstate" => Some(Action::Highstate),
            "sync" => Some(Action::Sync),
            "clear" => Some(Action::Clear),
            _ => None,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Sls => write!(f, "sls"),
            Action::Highstate => write!(f, "highstate"),
            Action::Sync => write!(f, "sync"),
            Action::Clear => write!(f, "clear"),
        }
    }
}

// ============================================================================
// Invocations
// ============================================================================

/// Why an invocation is being run. Sync steps are reported by name on failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Purpose {
    Command,
    RefreshPillar,
    SyncAll,
}

impl fmt::Display for Purpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Purpose::Command => write!(f, "run command"),
            Purpose::RefreshPillar => write!(f, "refresh pillar"),
            Purpose::SyncAll => write!(f, "sync salt"),
        }
    }
}

/// One external process to run. `argv[0]` is the program name to resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub purpose: Purpose,
    pub argv: Vec<String>,
}

impl Invocation {
    /// Program name as configured (not yet resolved on the search path).
    pub fn program(&self) -> &str {
        self.argv.first().map(String::as_str).unwrap_or_default()
    }

    /// Arguments after the program name.
    pub fn args(&self) -> &[String] {
        self.argv.get(1..).unwrap_or_default()
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.argv.join(" "))
    }
}

/// What the dispatcher decided to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Plan {
    /// Print usage to stdout and exit successfully.
    Usage,
    /// Run these invocations in order, stopping at the first failure.
    Run(Vec<Invocation>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_parse_known() {
        assert_eq!(Action::parse("sls"), Some(Action::Sls));
        assert_eq!(Action::parse("up"), Some(Action::Highstate));
        assert_eq!(Action::parse("highstate"), Some(Action::Highstate));
        assert_eq!(Action::parse("sync"), Some(Action::Sync));
        assert_eq!(Action::parse("clear"), Some(Action::Clear));
    }

    #[test]
    fn test_action_parse_unknown() {
        assert_eq!(Action::parse("apply"), None);
        assert_eq!(Action::parse("SLS"), None);
        assert_eq!(Action::parse(""), None);
    }

    #[test]
    fn test_flags_master_mode() {
        assert!(!Flags::default().master_mode());
        let m = Flags { use_master: true, ..Flags::default() };
        assert!(m.master_mode());
        // -g implies -m even when -m is absent
        let g = Flags { global: true, ..Flags::default() };
        assert!(g.master_mode());
    }

    #[test]
    fn test_invocation_program_and_args() {
        let inv = Invocation {
            purpose: Purpose::Command,
            argv: vec!["salt-call".into(), "--local".into(), "state.highstate".into()],
        };
        assert_eq!(inv.program(), "salt-call");
        assert_eq!(inv.args(), ["--local", "state.highstate"]);
        assert_eq!(inv.to_string(), "salt-call --local state.highstate");
    }

    #[test]
    fn test_invocation_empty_argv() {
        let inv = Invocation { purpose: Purpose::Command, argv: vec![] };
        assert_eq!(inv.program(), "");
        assert!(inv.args().is_empty());
    }

    #[test]
    fn test_purpose_display() {
        assert_eq!(Purpose::RefreshPillar.to_string(), "refresh pillar");
        assert_eq!(Purpose::SyncAll.to_string(), "sync salt");
    }
}
