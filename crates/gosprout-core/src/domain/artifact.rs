//! Fixed file templates written by the optional steps.

use std::fmt::Write as _;

/// Attribution stamped into every generated file.
pub const ATTRIBUTION: &str = "generated by gosprout";

/// A generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artifact {
    /// `main.go` printing a hello-world line.
    MainSource,
    /// `Makefile` building every non-test `.go` file into one binary.
    BuildFile,
    /// `.gitignore` excluding the built binary.
    IgnoreFile,
}

impl Artifact {
    pub fn file_name(self) -> &'static str {
        match self {
            Self::MainSource => "main.go",
            Self::BuildFile => "Makefile",
            Self::IgnoreFile => ".gitignore",
        }
    }

    /// Name used in progress and warning messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::MainSource => "main.go",
            Self::BuildFile => "Makefile",
            Self::IgnoreFile => "gitignore",
        }
    }

    /// Whether rendering needs the executable name.
    pub fn needs_executable_name(self) -> bool {
        matches!(self, Self::BuildFile | Self::IgnoreFile)
    }

    /// Render the file. `executable` is ignored by [`Artifact::MainSource`].
    pub fn render(self, executable: &str) -> String {
        match self {
            Self::MainSource => main_source(),
            Self::BuildFile => build_file(executable),
            Self::IgnoreFile => ignore_file(executable),
        }
    }
}

fn main_source() -> String {
    format!(
        "package main\n\
         \n\
         import \"fmt\"\n\
         \n\
         func main() {{\n\
         \tfmt.Println(\"{ATTRIBUTION}\")\n\
         }}\n"
    )
}

fn build_file(executable: &str) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "# {ATTRIBUTION}\n");
    out.push_str("GO_FILES := $(shell find . -name '*.go' ! -name '*_test.go' -type f)\n");
    let _ = writeln!(out, "OUTPUT_EXE := {executable}\n");
    out.push_str("ifdef OS\n");
    out.push_str("\tOUTPUT_EXE := $(OUTPUT_EXE).exe\n");
    out.push_str("endif\n\n");
    out.push_str("$(OUTPUT_EXE): $(GO_FILES)\n");
    out.push_str("\tgo build -o $(OUTPUT_EXE)\n");
    out
}

fn ignore_file(executable: &str) -> String {
    format!("# {ATTRIBUTION}\n\n/{executable}\n/{executable}.exe\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn main_source_is_a_hello_world_program() {
        let src = Artifact::MainSource.render("ignored");
        assert!(src.starts_with("package main\n"));
        assert!(src.contains("import \"fmt\""));
        assert!(src.contains("func main() {"));
        assert!(src.contains(ATTRIBUTION));
        assert!(!src.contains("ignored"));
    }

    #[test]
    fn build_file_names_the_executable_with_windows_suffix() {
        let makefile = Artifact::BuildFile.render("hello");
        assert!(makefile.starts_with(&format!("# {ATTRIBUTION}")));
        assert!(makefile.contains("OUTPUT_EXE := hello\n"));
        assert!(makefile.contains("! -name '*_test.go'"));
        assert!(makefile.contains("ifdef OS\n\tOUTPUT_EXE := $(OUTPUT_EXE).exe\nendif"));
        assert!(makefile.contains("$(OUTPUT_EXE): $(GO_FILES)\n\tgo build -o $(OUTPUT_EXE)\n"));
    }

    #[test]
    fn ignore_file_lists_both_binary_names() {
        let ignore = Artifact::IgnoreFile.render("hello");
        assert!(ignore.starts_with(&format!("# {ATTRIBUTION}")));
        assert!(ignore.ends_with("/hello\n/hello.exe\n"));
    }

    #[test]
    fn only_build_and_ignore_files_need_a_name() {
        assert!(!Artifact::MainSource.needs_executable_name());
        assert!(Artifact::BuildFile.needs_executable_name());
        assert!(Artifact::IgnoreFile.needs_executable_name());
    }
}
