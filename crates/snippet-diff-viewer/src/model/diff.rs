//! Diff data structures for a two-sided snippet comparison.

/// Result of comparing two snippets.
///
/// Both sides are kept exactly as received; the viewer never re-sorts or
/// re-derives lines. A new comparison replaces the whole value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffResult {
    /// The snippet being viewed.
    pub comparing: DiffSide,
    /// The snippet it is compared against.
    pub comparing_to: DiffSide,
}

impl DiffResult {
    /// Create a diff result from its two sides.
    pub fn new(comparing: DiffSide, comparing_to: DiffSide) -> Self {
        Self {
            comparing,
            comparing_to,
        }
    }

    /// Human readable title, e.g. `"Foo vs Bar"`.
    pub fn title(&self) -> String {
        format!("{} vs {}", self.comparing.name, self.comparing_to.name)
    }

    /// Total added lines across both sides.
    pub fn additions(&self) -> usize {
        self.comparing.count(LineType::Added) + self.comparing_to.count(LineType::Added)
    }

    /// Total removed lines across both sides.
    pub fn deletions(&self) -> usize {
        self.comparing.count(LineType::Removed) + self.comparing_to.count(LineType::Removed)
    }
}

/// One named side of a comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffSide {
    /// Display name of the snippet.
    pub name: String,
    /// Lines in display order.
    pub lines: Vec<DiffLine>,
}

impl DiffSide {
    /// Create a side with the given name and lines.
    pub fn new(name: impl Into<String>, lines: Vec<DiffLine>) -> Self {
        Self {
            name: name.into(),
            lines,
        }
    }

    /// Number of lines on this side.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether this side has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn count(&self, line_type: LineType) -> usize {
        self.lines
            .iter()
            .filter(|line| line.line_type == line_type)
            .count()
    }
}

/// A single line of one side.
///
/// `line_num` is a display label; alignment between the two columns is by
/// position in [`DiffSide::lines`], never by this number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffLine {
    pub line_num: u32,
    pub line_type: LineType,
    pub content: String,
}

impl DiffLine {
    /// Create an unchanged line.
    pub fn unchanged(line_num: u32, content: impl Into<String>) -> Self {
        Self::new(line_num, LineType::Unchanged, content)
    }

    /// Create an added line.
    pub fn added(line_num: u32, content: impl Into<String>) -> Self {
        Self::new(line_num, LineType::Added, content)
    }

    /// Create a removed line.
    pub fn removed(line_num: u32, content: impl Into<String>) -> Self {
        Self::new(line_num, LineType::Removed, content)
    }

    pub fn new(line_num: u32, line_type: LineType, content: impl Into<String>) -> Self {
        Self {
            line_num,
            line_type,
            content: content.into(),
        }
    }
}

/// Tag of a diff line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineType {
    Unchanged,
    Added,
    Removed,
}

impl LineType {
    /// CSS class applied to the rendered line, `None` for unchanged lines.
    pub fn css_class(&self) -> Option<&'static str> {
        match self {
            LineType::Unchanged => None,
            LineType::Added => Some("diff-line-added"),
            LineType::Removed => Some("diff-line-removed"),
        }
    }
}
