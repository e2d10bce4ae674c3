// log.rs - Committed terminal output

/// Download offer appended after `download-report`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportLink {
    pub filename: String,
    pub text: String,
}

impl ReportLink {
    pub fn label(&self) -> String {
        format!("[Download {}]", self.filename)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Entry {
    Line(String),
    Link(ReportLink),
}

/// Append-only until cleared wholesale
#[derive(Clone, Debug, Default)]
pub struct OutputLog {
    entries: Vec<Entry>,
}

impl OutputLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Text lines only, links skipped
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().filter_map(|e| match e {
            Entry::Line(s) => Some(s.as_str()),
            Entry::Link(_) => None,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
