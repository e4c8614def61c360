//! Built `index.html` template with named injection slots.
//!
//! The client build leaves two comment markers in `index.html`. The template
//! is parsed once into text segments and slots, and pages are produced by
//! filling the slots rather than by searching the raw text for each route.

/// Marker replaced by the serialized head tags.
pub const HEAD_MARKER: &str = "<!--app-head-->";

/// Marker replaced by the rendered page markup.
pub const BODY_MARKER: &str = "<!--app-html-->";

/// An injection point in the template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Head,
    Body,
}

impl Slot {
    pub fn marker(&self) -> &'static str {
        match self {
            Self::Head => HEAD_MARKER,
            Self::Body => BODY_MARKER,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Part {
    Text(String),
    Slot(Slot),
}

/// A parsed HTML template with exactly one head slot and one body slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlTemplate {
    parts: Vec<Part>,
}

/// Errors that can occur when parsing a template.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("missing {} placeholder", .0.marker())]
    MissingMarker(Slot),

    #[error("{} placeholder appears more than once", .0.marker())]
    DuplicateMarker(Slot),
}

impl HtmlTemplate {
    /// Parse template source. Both markers must appear exactly once.
    pub fn parse(source: &str) -> Result<Self, TemplateError> {
        let mut found: Vec<(usize, Slot)> = Vec::with_capacity(2);

        for slot in [Slot::Head, Slot::Body] {
            let mut positions = source.match_indices(slot.marker()).map(|(i, _)| i);
            let first = positions.next().ok_or(TemplateError::MissingMarker(slot))?;
            if positions.next().is_some() {
                return Err(TemplateError::DuplicateMarker(slot));
            }
            found.push((first, slot));
        }
        found.sort_by_key(|(pos, _)| *pos);

        let mut parts = Vec::with_capacity(5);
        let mut cursor = 0;
        for (pos, slot) in found {
            if pos > cursor {
                parts.push(Part::Text(source[cursor..pos].to_string()));
            }
            parts.push(Part::Slot(slot));
            cursor = pos + slot.marker().len();
        }
        if cursor < source.len() {
            parts.push(Part::Text(source[cursor..].to_string()));
        }

        Ok(Self { parts })
    }

    /// Produce a document with both slots filled.
    pub fn fill(&self, head: &str, body: &str) -> String {
        let capacity = self.parts.iter().fold(head.len() + body.len(), |n, p| match p {
            Part::Text(t) => n + t.len(),
            Part::Slot(_) => n,
        });

        let mut out = String::with_capacity(capacity);
        for part in &self.parts {
            match part {
                Part::Text(text) => out.push_str(text),
                Part::Slot(Slot::Head) => out.push_str(head),
                Part::Slot(Slot::Body) => out.push_str(body),
            }
        }
        out
    }
}
