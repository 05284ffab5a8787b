//! Structured message content
//!
//! Messages never carry markup. Anything that needs emphasis or line breaks is built from
//! fragments, and the frontend decides how to present them.

/// A single piece of rich content
#[derive(Debug, Clone, PartialEq, Eq, strum_macros::EnumIs)]
pub enum Fragment {
    Plain(String),
    Emphasis(String),
    LineBreak,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RichText {
    fragments: Vec<Fragment>,
}

impl RichText {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Converts user provided text into plain fragments, keeping newlines as line breaks
    #[must_use]
    pub fn from_plain(text: &str) -> Self {
        let mut rich = Self::new();
        for (index, line) in text.split('\n').enumerate() {
            if index > 0 {
                rich = rich.line_break();
            }
            rich = rich.plain(line);
        }
        rich
    }

    #[must_use]
    pub fn plain(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        if !text.is_empty() {
            self.fragments.push(Fragment::Plain(text));
        }
        self
    }

    #[must_use]
    pub fn emphasis(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        if !text.is_empty() {
            self.fragments.push(Fragment::Emphasis(text));
        }
        self
    }

    #[must_use]
    pub fn line_break(mut self) -> Self {
        self.fragments.push(Fragment::LineBreak);
        self
    }

    /// Appends all fragments of `other`
    #[must_use]
    pub fn append(mut self, other: RichText) -> Self {
        self.fragments.extend(other.fragments);
        self
    }

    /// Joins blocks, putting `breaks` line breaks between each of them
    #[must_use]
    pub fn join(blocks: impl IntoIterator<Item = RichText>, breaks: usize) -> Self {
        blocks
            .into_iter()
            .enumerate()
            .fold(Self::new(), |acc, (index, block)| {
                let acc = if index > 0 {
                    (0..breaks).fold(acc, |acc, _| acc.line_break())
                } else {
                    acc
                };
                acc.append(block)
            })
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Splits the content on line breaks
    ///
    /// Always returns at least one (possibly empty) line.
    pub fn lines(&self) -> Vec<Vec<&Fragment>> {
        let mut lines = vec![Vec::new()];
        for fragment in &self.fragments {
            if fragment.is_line_break() {
                lines.push(Vec::new());
            } else if let Some(line) = lines.last_mut() {
                line.push(fragment);
            }
        }
        lines
    }

    /// Content without any emphasis, line breaks become newlines
    pub fn to_plain_text(&self) -> String {
        self.fragments
            .iter()
            .map(|fragment| match fragment {
                Fragment::Plain(text) | Fragment::Emphasis(text) => text.as_str(),
                Fragment::LineBreak => "\n",
            })
            .collect()
    }
}

impl From<&str> for RichText {
    fn from(text: &str) -> Self {
        Self::from_plain(text)
    }
}

impl From<String> for RichText {
    fn from(text: String) -> Self {
        Self::from_plain(&text)
    }
}
