//! Inline style directives for console messages.
//!
//! A message may embed `{name,name,...}` directives. When styling is on,
//! each known name becomes its terminal escape sequence; when it is off the
//! whole directive disappears. `\x` always emits `x` literally, and a `{`
//! that is never closed emits the text after it unchanged.
//!
//! ```
//! use gosprout_core::domain::markup::expand;
//!
//! assert_eq!(expand("{red}boom{reset}", false), "boom");
//! assert_eq!(expand("\\{red}", true), "{red}");
//! assert_eq!(expand("{bad", true), "bad");
//! ```

use std::borrow::Cow;
use std::fmt;

pub const YELLOW: &str = "\x1B[38;5;220m";
pub const BLUE: &str = "\x1B[38;5;12m";
pub const GREEN: &str = "\x1B[38;5;46m";
pub const RED: &str = "\x1B[38;5;1m";
pub const RESET: &str = "\x1B[0m";

/// Escape sequence for a directive name; unknown names map to nothing.
pub fn style_code(name: &str) -> &'static str {
    match name.trim_matches([' ', '\t']).to_ascii_lowercase().as_str() {
        "yellow" => YELLOW,
        "blue" => BLUE,
        "green" => GREEN,
        "red" => RED,
        "reset" => RESET,
        _ => "",
    }
}

/// Resolve every directive in `text`.
pub fn expand(text: &str, styled: bool) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();

    while let Some(c) = chars.next() {
        match c {
            '\\' => out.push(chars.next().unwrap_or('\\')),
            '{' => {
                let mut body = String::new();
                let mut closed = false;
                while let Some(d) = chars.next() {
                    match d {
                        '}' => {
                            closed = true;
                            break;
                        }
                        '\\' => body.push(chars.next().unwrap_or('\\')),
                        _ => body.push(d),
                    }
                }

                if !closed {
                    out.push_str(&body);
                } else if styled {
                    for name in body.split(',') {
                        out.push_str(style_code(name));
                    }
                }
            }
            _ => out.push(c),
        }
    }

    out
}

/// One element of a console line.
///
/// `Markup` text is scanned for directives; `Value`s are displayed as they
/// are, so paths and error messages containing braces survive intact.
#[derive(Clone, Copy)]
pub enum Piece<'a> {
    Markup(&'a str),
    Value(&'a dyn fmt::Display),
}

impl fmt::Debug for Piece<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Markup(text) => f.debug_tuple("Markup").field(text).finish(),
            Self::Value(value) => f.debug_tuple("Value").field(&value.to_string()).finish(),
        }
    }
}

/// A [`Piece`] after expansion.
pub enum Expanded<'a> {
    Text(Cow<'a, str>),
    Value(&'a dyn fmt::Display),
}

impl fmt::Debug for Expanded<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Value(value) => f.debug_tuple("Value").field(&value.to_string()).finish(),
        }
    }
}

impl fmt::Display for Expanded<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Value(value) => value.fmt(f),
        }
    }
}

/// Expand the markup pieces of a line, keeping order and values untouched.
pub fn expand_pieces<'a>(pieces: &[Piece<'a>], styled: bool) -> Vec<Expanded<'a>> {
    pieces
        .iter()
        .map(|piece| match *piece {
            Piece::Markup(text) => Expanded::Text(Cow::Owned(expand(text, styled))),
            Piece::Value(value) => Expanded::Value(value),
        })
        .collect()
}

/// Expand and join a line with single spaces.
pub fn render_line(pieces: &[Piece<'_>], styled: bool) -> String {
    expand_pieces(pieces, styled)
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_name_styled_yields_only_the_code() {
        assert_eq!(expand("{red}", true), RED);
    }

    #[test]
    fn directive_vanishes_when_unstyled() {
        assert_eq!(expand("{red}", false), "");
        assert_eq!(expand("{blue}Info:{reset} hi", false), "Info: hi");
    }

    #[test]
    fn escaped_brace_is_literal_either_way() {
        assert_eq!(expand("\\{red}", true), "{red}");
        assert_eq!(expand("\\{red}", false), "{red}");
    }

    #[test]
    fn unknown_name_is_empty() {
        assert_eq!(expand("{unknown}", true), "");
    }

    #[test]
    fn unclosed_directive_emits_raw_body() {
        assert_eq!(expand("{bad", true), "bad");
        assert_eq!(expand("{bad", false), "bad");
        assert_eq!(expand("a {red,bad", true), "a red,bad");
    }

    #[test]
    fn multiple_names_are_trimmed_and_case_insensitive() {
        assert_eq!(expand("{ Red ,\treset}", true), format!("{RED}{RESET}"));
    }

    #[test]
    fn trailing_backslash_survives() {
        assert_eq!(expand("C:\\", false), "C:\\");
    }

    #[test]
    fn values_are_not_scanned() {
        let path = "dir/{red}";
        let line = render_line(
            &[Piece::Markup("{red}Error:"), Piece::Value(&path), Piece::Markup("{reset}")],
            false,
        );
        assert_eq!(line, "Error: dir/{red} ");
    }

    #[test]
    fn pieces_keep_their_order_and_kind() {
        let n = 42;
        let expanded = expand_pieces(&[Piece::Value(&n), Piece::Markup("{green}ok")], true);
        assert!(matches!(expanded[0], Expanded::Value(_)));
        assert_eq!(expanded[0].to_string(), "42");
        assert_eq!(expanded[1].to_string(), format!("{GREEN}ok"));
    }

    #[test]
    fn channels_can_disagree_on_styling() {
        let pieces = [Piece::Markup("{yellow}Warning{reset}")];
        assert_eq!(render_line(&pieces, true), format!("{YELLOW}Warning{RESET}"));
        assert_eq!(render_line(&pieces, false), "Warning");
    }
}
