//! Classification of configuration lines.
//!
//! Only the two inclusion directives are understood. Every other
//! non-empty, non-comment line is an opaque setting and is passed through
//! exactly as written, minus surrounding whitespace.

use std::path::Path;

use crate::filter::DirectoryFilter;

/// Prefix of the single-file inclusion directive.
pub const CONF_FILE_PREFIX: &str = "conf-file=";

/// Prefix of the directory inclusion directive.
pub const CONF_DIR_PREFIX: &str = "conf-dir=";

/// First non-whitespace character of a comment line.
pub const COMMENT_MARKER: char = '#';

/// Marks a `conf-dir` modifier as an allow-list suffix.
pub const INCLUDE_MARKER: char = '*';

/// Separates the directory path and modifiers of a `conf-dir` value.
pub const MODIFIER_SEPARATOR: char = ',';

/// Characters that end a line. A lone `\r` counts, as do the other
/// Unicode line and record separators.
pub const LINE_BREAKS: [char; 10] = [
    '\n', '\r', '\u{0b}', '\u{0c}', '\u{1c}', '\u{1d}', '\u{1e}', '\u{85}', '\u{2028}',
    '\u{2029}',
];

/// Split file contents into lines on any of [`LINE_BREAKS`].
///
/// A `\r\n` pair yields an extra empty piece, which [`Directive::parse`]
/// treats as a blank line.
///
/// ```
/// let lines: Vec<_> = dnsflat::directive::lines("a=1\rb=2\r\nc=3").collect();
/// assert_eq!(lines, ["a=1", "b=2", "", "c=3"]);
/// ```
pub fn lines(contents: &str) -> impl Iterator<Item = &str> {
    contents.split(LINE_BREAKS)
}

/// Directory named by the first segment of a `conf-dir` or `CONFIG_DIR`
/// value. An empty segment means the working directory.
#[must_use]
pub fn directory_path(segment: &str) -> &Path {
    if segment.is_empty() {
        Path::new(".")
    } else {
        Path::new(segment)
    }
}

/// A `conf-dir` directive: the directory and its local filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfDir<'a> {
    /// Directory whose files are included.
    pub path: &'a Path,
    /// Local exclude/include suffixes.
    pub filter: DirectoryFilter,
}

/// One meaningful line of a configuration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive<'a> {
    /// `conf-file=PATH`
    ConfFile(&'a Path),
    /// `conf-dir=PATH[,MOD]*`
    ConfDir(ConfDir<'a>),
    /// Any other line, trimmed.
    Setting(&'a str),
}

impl<'a> Directive<'a> {
    /// Classify a raw line.
    ///
    /// Returns `None` for blank lines and comments.
    ///
    /// # Examples
    ///
    /// ```
    /// use dnsflat::Directive;
    /// use std::path::Path;
    ///
    /// assert_eq!(Directive::parse("  # comment"), None);
    /// assert_eq!(
    ///     Directive::parse("conf-file=/etc/dnsmasq.more.conf"),
    ///     Some(Directive::ConfFile(Path::new("/etc/dnsmasq.more.conf")))
    /// );
    /// assert_eq!(
    ///     Directive::parse("  server=1.1.1.1  "),
    ///     Some(Directive::Setting("server=1.1.1.1"))
    /// );
    /// ```
    #[must_use]
    pub fn parse(line: &'a str) -> Option<Self> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with(COMMENT_MARKER) {
            return None;
        }

        if let Some(value) = trimmed.strip_prefix(CONF_FILE_PREFIX) {
            return Some(Self::ConfFile(Path::new(value)));
        }

        if let Some(value) = trimmed.strip_prefix(CONF_DIR_PREFIX) {
            let mut segments = value.split(MODIFIER_SEPARATOR);
            let path = directory_path(segments.next().unwrap_or_default());
            return Some(Self::ConfDir(ConfDir {
                path,
                filter: DirectoryFilter::from_modifiers(segments),
            }));
        }

        Some(Self::Setting(trimmed))
    }
}
