//! Domain layer: the option model, generated file templates, and the
//! console markup formatter. No I/O happens here.

pub mod artifact;
pub mod error;
pub mod flags;
pub mod markup;
pub mod options;
pub mod policy;

pub use artifact::{ATTRIBUTION, Artifact};
pub use error::DomainError;
pub use flags::{FORBIDDEN, Flag, FlagSet, Forbidden, IMPLICATIONS, Implication, Origin, TriState};
pub use options::{ScaffoldOptions, ScaffoldOptionsBuilder, executable_base_name};
pub use policy::WarningPolicy;

/// External programs the pipeline drives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolchain {
    /// Program used for `mod init`.
    pub go: String,
    /// Program used for `init` and `remote add`.
    pub git: String,
    /// Remote name offered when the operator does not name one.
    pub default_remote: String,
}

impl Default for Toolchain {
    fn default() -> Self {
        Self {
            go: "go".into(),
            git: "git".into(),
            default_remote: "origin".into(),
        }
    }
}
