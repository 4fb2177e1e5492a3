//! Ordered line storage for the netlist being rewritten.
//!
//! Insertion order is output order. Blank input lines carry no information in
//! this format and are dropped on ingestion; blank lines only appear in the
//! output as authored banner content prepended by the pipeline.

/// Growable indexed sequence of owned lines. No entry contains a newline.
#[derive(Debug, Clone, Default)]
pub struct LineStore {
    lines: Vec<String>,
}

impl LineStore {
    /// Ingest raw text, splitting on newlines and dropping empty lines.
    /// A trailing carriage return is stripped from each line.
    pub fn from_text(text: &str) -> Self {
        let lines = text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        Self { lines }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line(&self, idx: usize) -> &str {
        &self.lines[idx]
    }

    /// Replace the line at `idx` wholesale.
    pub fn replace(&mut self, idx: usize, line: String) {
        self.lines[idx] = line;
    }

    /// Insert a single line at the front.
    pub fn prepend(&mut self, line: impl Into<String>) {
        self.lines.insert(0, line.into());
    }

    /// Insert a block of lines at the front, preserving their order. Entries
    /// may be empty; authored banner blanks are emitted as-is.
    pub fn prepend_block(&mut self, block: &[&str]) {
        for line in block.iter().rev() {
            self.lines.insert(0, line.to_string());
        }
    }

    /// Insert a line directly after `idx`.
    pub fn insert_after(&mut self, idx: usize, line: String) {
        self.lines.insert(idx + 1, line);
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    /// Flatten to output text, one newline after every line including the
    /// last. An empty store produces empty output.
    pub fn to_text(&self) -> String {
        let mut text = String::with_capacity(self.lines.iter().map(|l| l.len() + 1).sum());
        for line in &self.lines {
            text.push_str(line);
            text.push('\n');
        }
        text
    }
}
