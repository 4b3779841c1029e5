//! Tri-state scaffolding decisions and the rules that tie them together.
//!
//! Every optional step is governed by one [`Flag`]. A flag starts out
//! [`TriState::Unset`] and may be decided once per value: asking for the
//! value it already holds is a no-op, asking for the opposite value is a
//! [`DomainError::FlagConflict`]. Decisions made through the
//! [`IMPLICATIONS`] table are indistinguishable from explicit ones.

use std::fmt;

use tracing::trace;

use crate::domain::error::DomainError;

/// One yes/no scaffolding decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flag {
    /// Write `main.go`.
    MainSource,
    /// Write a `Makefile`.
    BuildFile,
    /// Run `git init`.
    VcsRepo,
    /// Write a `.gitignore`.
    IgnoreFile,
    /// Run `git remote add`.
    Remote,
}

impl Flag {
    pub const ALL: [Flag; 5] = [
        Flag::MainSource,
        Flag::BuildFile,
        Flag::VcsRepo,
        Flag::IgnoreFile,
        Flag::Remote,
    ];

    fn index(self) -> usize {
        match self {
            Self::MainSource => 0,
            Self::BuildFile => 1,
            Self::VcsRepo => 2,
            Self::IgnoreFile => 3,
            Self::Remote => 4,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::MainSource => "create main.go",
            Self::BuildFile => "create a Makefile",
            Self::VcsRepo => "create a git repository",
            Self::IgnoreFile => "create a .gitignore",
            Self::Remote => "add a git remote",
        }
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unset, forced on, or forced off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TriState {
    #[default]
    Unset,
    True,
    False,
}

impl TriState {
    /// The forced value, if any.
    pub fn value(self) -> Option<bool> {
        match self {
            Self::Unset => None,
            Self::True => Some(true),
            Self::False => Some(false),
        }
    }

    pub fn is_unset(self) -> bool {
        self == Self::Unset
    }
}

impl From<bool> for TriState {
    fn from(value: bool) -> Self {
        if value { Self::True } else { Self::False }
    }
}

/// Where a decision came from, used in conflict diagnostics.
///
/// Usually the command-line option that asked for it, e.g. `--no-do-git`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Origin(String);

impl Origin {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Origin of a decision forced by `flag` having been decided by `self`.
    pub fn implied(&self, flag: Flag) -> Self {
        Self(format!("{} (through `{flag}`)", self.0))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Origin {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for Origin {
    fn from(label: String) -> Self {
        Self(label)
    }
}

/// `when` decided as given forces `then` as given.
#[derive(Debug, Clone, Copy)]
pub struct Implication {
    pub when: (Flag, bool),
    pub then: (Flag, bool),
}

/// Two decisions that may never hold at the same time.
#[derive(Debug, Clone, Copy)]
pub struct Forbidden {
    pub first: (Flag, bool),
    pub second: (Flag, bool),
}

/// Decisions forced by other decisions. Applied transitively.
pub const IMPLICATIONS: &[Implication] = &[
    Implication {
        when: (Flag::IgnoreFile, true),
        then: (Flag::VcsRepo, true),
    },
    Implication {
        when: (Flag::IgnoreFile, false),
        then: (Flag::VcsRepo, false),
    },
    Implication {
        when: (Flag::Remote, true),
        then: (Flag::VcsRepo, true),
    },
];

/// Combinations rejected as soon as both sides are decided.
pub const FORBIDDEN: &[Forbidden] = &[
    Forbidden {
        first: (Flag::IgnoreFile, true),
        second: (Flag::VcsRepo, false),
    },
    Forbidden {
        first: (Flag::Remote, true),
        second: (Flag::VcsRepo, false),
    },
];

#[derive(Debug, Clone, Default)]
struct Slot {
    state: TriState,
    origin: Option<Origin>,
}

/// The five scaffolding decisions.
#[derive(Debug, Clone, Default)]
pub struct FlagSet {
    slots: [Slot; 5],
}

impl FlagSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, flag: Flag) -> TriState {
        self.slots[flag.index()].state
    }

    /// The origin of a decided flag.
    pub fn origin(&self, flag: Flag) -> Option<&Origin> {
        self.slots[flag.index()].origin.as_ref()
    }

    /// Decide `flag`, then everything it implies.
    ///
    /// Deciding a flag twice with the same value keeps the first origin.
    pub fn set(&mut self, flag: Flag, value: bool, origin: Origin) -> Result<(), DomainError> {
        let slot = &mut self.slots[flag.index()];
        match slot.state.value() {
            Some(current) if current == value => return Ok(()),
            Some(current) => {
                return Err(DomainError::FlagConflict {
                    flag,
                    requested: value,
                    requested_by: origin,
                    existing: current,
                    existing_by: slot.origin.clone().unwrap_or_else(|| Origin::new("unknown")),
                });
            }
            None => {
                trace!(%flag, value, %origin, "flag decided");
                slot.state = value.into();
                slot.origin = Some(origin.clone());
            }
        }

        self.check_forbidden(flag, value)?;

        for rule in IMPLICATIONS.iter().filter(|rule| rule.when == (flag, value)) {
            let (target, implied) = rule.then;
            self.set(target, implied, origin.implied(flag))?;
        }

        Ok(())
    }

    fn check_forbidden(&self, flag: Flag, value: bool) -> Result<(), DomainError> {
        for rule in FORBIDDEN {
            let other = if rule.first == (flag, value) {
                rule.second
            } else if rule.second == (flag, value) {
                rule.first
            } else {
                continue;
            };

            if self.get(other.0).value() == Some(other.1) {
                return Err(self.forbidden_error(rule));
            }
        }
        Ok(())
    }

    fn forbidden_error(&self, rule: &Forbidden) -> DomainError {
        let describe = |(flag, value): (Flag, bool)| {
            if value {
                format!("`{flag}`")
            } else {
                format!("not `{flag}`")
            }
        };
        let origin = |flag: Flag| {
            self.origin(flag)
                .cloned()
                .unwrap_or_else(|| Origin::new("unknown"))
        };

        DomainError::ForbiddenCombination {
            first: describe(rule.first),
            first_by: origin(rule.first.0),
            second: describe(rule.second),
            second_by: origin(rule.second.0),
        }
    }
}
