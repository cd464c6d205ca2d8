//! Section parser: splits generated text into header-to-body sections.
//!
//! Single linear pass over the lines. A header line is one whose trimmed form
//! ends with ':' and is under `MAX_HEADER_CHARS` characters. Lines before the
//! first header are dropped. A repeated header resets its body in place.

/// Trimmed header lines must be strictly shorter than this.
pub const MAX_HEADER_CHARS: usize = 80;

/// Ordered header-to-body map. Order is first appearance in the source text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionMap {
    entries: Vec<(String, String)>,
}

impl SectionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts (or restarts) the section for `header`, returning its index.
    fn reset(&mut self, header: &str) -> usize {
        match self.entries.iter().position(|(h, _)| h == header) {
            Some(idx) => {
                self.entries[idx].1.clear();
                idx
            }
            None => {
                self.entries.push((header.to_string(), String::new()));
                self.entries.len() - 1
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(h, b)| (h.as_str(), b.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Returns the header label (trailing ':' removed) if `line` is a header line.
pub fn header_label(line: &str) -> Option<&str> {
    let trimmed = line.trim();
    if trimmed.chars().count() < MAX_HEADER_CHARS {
        trimmed.strip_suffix(':')
    } else {
        None
    }
}

pub fn parse_sections(raw_text: &str) -> SectionMap {
    let mut sections = SectionMap::new();
    let mut current: Option<usize> = None;

    for line in raw_text.lines() {
        if let Some(label) = header_label(line) {
            current = Some(sections.reset(label));
        } else if let Some(idx) = current {
            let body = &mut sections.entries[idx].1;
            body.push_str(line.trim());
            body.push('\n');
        }
    }

    sections
}
