//! Line classification for page sources.

use std::sync::LazyLock;

use regex::Regex;

/// Most boards a `[[BOARDS: ...]]` row shows.
pub const MAX_ROW_BOARDS: usize = 3;

/// Whole-line board marker, keyword case-insensitive.
static MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*\[\[\s*(BOARDS?)\s*:\s*([^\]]*?)\s*\]\]\s*$").unwrap()
});

/// What a single source line turns into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line<'a> {
    /// `---` on its own.
    Separator,
    /// `[[BOARD: name]]`.
    Board(&'a str),
    /// `[[BOARDS: a, b, c]]`, at most three names, possibly none.
    Boards(Vec<&'a str>),
    /// Anything else, emitted as written.
    Text,
}

impl<'a> Line<'a> {
    /// Classify a line without its terminator.
    pub fn classify(line: &'a str) -> Self {
        if line.trim_end() == "---" {
            return Self::Separator;
        }

        let Some(caps) = MARKER.captures(line) else {
            return Self::Text;
        };
        let (Some(keyword), Some(payload)) = (caps.get(1), caps.get(2)) else {
            return Self::Text;
        };
        let mut names = split_names(payload.as_str());

        if keyword.as_str().len() == "BOARDS".len() {
            Self::Boards(names.take(MAX_ROW_BOARDS).collect())
        } else {
            match names.next() {
                Some(name) => Self::Board(name),
                None => Self::Text,
            }
        }
    }

    /// Board file names this line loads.
    pub fn boards(&self) -> &[&'a str] {
        match self {
            Self::Board(name) => std::slice::from_ref(name),
            Self::Boards(names) => names,
            Self::Separator | Self::Text => &[],
        }
    }
}

fn split_names(payload: &str) -> impl Iterator<Item = &str> {
    payload.split(',').map(str::trim).filter(|n| !n.is_empty())
}
