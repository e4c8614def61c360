//! Head tag collection.
//!
//! Page components push tags while they render; the renderer drains the
//! collector once the body is done and serializes the tags as a single string
//! for the `<head>` slot of the HTML template.

use serde::Serialize;

/// A single tag destined for the document head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadTag {
    Title(String),
    Meta(Vec<(String, String)>),
    Link(Vec<(String, String)>),
    Script {
        attrs: Vec<(String, String)>,
        body: String,
    },
    NoScript(String),
}

impl HeadTag {
    /// `<title>`.
    pub fn title(text: impl Into<String>) -> Self {
        Self::Title(text.into())
    }

    /// `<meta name=.. content=..>`.
    pub fn meta_name(name: &str, content: impl Into<String>) -> Self {
        Self::Meta(vec![
            ("name".to_string(), name.to_string()),
            ("content".to_string(), content.into()),
        ])
    }

    /// `<meta property=.. content=..>`, used for Open Graph.
    pub fn meta_property(property: &str, content: impl Into<String>) -> Self {
        Self::Meta(vec![
            ("property".to_string(), property.to_string()),
            ("content".to_string(), content.into()),
        ])
    }

    /// `<link rel=.. href=..>`.
    pub fn link(rel: &str, href: impl Into<String>) -> Self {
        Self::Link(vec![
            ("rel".to_string(), rel.to_string()),
            ("href".to_string(), href.into()),
        ])
    }

    /// A JSON-LD structured data script.
    pub fn json_ld<T: Serialize>(value: &T) -> Result<Self, serde_json::Error> {
        let body = serde_json::to_string(value)?;
        Ok(Self::Script {
            attrs: vec![("type".to_string(), "application/ld+json".to_string())],
            body,
        })
    }

    /// `<noscript>` with raw inner markup.
    pub fn noscript(inner: impl Into<String>) -> Self {
        Self::NoScript(inner.into())
    }

    /// Key used to replace an earlier tag of the same identity.
    fn dedupe_key(&self) -> Option<String> {
        match self {
            Self::Title(_) => Some("title".to_string()),
            Self::Meta(attrs) => ["name", "property", "http-equiv", "charset"]
                .iter()
                .find_map(|key| {
                    attr(attrs, key).map(|value| format!("meta:{}={}", key, value))
                }),
            Self::Link(attrs) => match attr(attrs, "rel") {
                Some("canonical") => Some("link:canonical".to_string()),
                _ => None,
            },
            Self::Script { .. } | Self::NoScript(_) => None,
        }
    }

    fn group(&self) -> usize {
        match self {
            Self::Title(_) => 0,
            Self::Meta(_) => 1,
            Self::Link(_) => 2,
            Self::Script { .. } => 3,
            Self::NoScript(_) => 4,
        }
    }

    /// Serialize the tag as HTML.
    pub fn to_html(&self) -> String {
        match self {
            Self::Title(text) => format!("<title>{}</title>", escape_text(text)),
            Self::Meta(attrs) => format!("<meta{}>", render_attrs(attrs)),
            Self::Link(attrs) => format!("<link{}>", render_attrs(attrs)),
            Self::Script { attrs, body } => format!(
                "<script{}>{}</script>",
                render_attrs(attrs),
                body.replace("</", "<\\/")
            ),
            Self::NoScript(inner) => format!("<noscript>{}</noscript>", inner),
        }
    }
}

/// Collects head tags during a render pass.
#[derive(Debug, Default)]
pub struct HeadCollector {
    tags: Vec<HeadTag>,
}

impl HeadCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tag. A later tag with the same identity replaces the earlier one
    /// in place.
    pub fn push(&mut self, tag: HeadTag) {
        if let Some(key) = tag.dedupe_key() {
            if let Some(existing) = self
                .tags
                .iter_mut()
                .find(|t| t.dedupe_key().as_deref() == Some(key.as_str()))
            {
                *existing = tag;
                return;
            }
        }
        self.tags.push(tag);
    }

    pub fn extend(&mut self, tags: impl IntoIterator<Item = HeadTag>) {
        for tag in tags {
            self.push(tag);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Serialize all collected tags grouped as title, meta, link, script,
    /// noscript, and empty the collector.
    pub fn drain(&mut self) -> String {
        let mut tags = std::mem::take(&mut self.tags);
        // Stable sort keeps insertion order within a group.
        tags.sort_by_key(HeadTag::group);
        tags.iter()
            .map(HeadTag::to_html)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn attr<'a>(attrs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    attrs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

fn render_attrs(attrs: &[(String, String)]) -> String {
    attrs
        .iter()
        .map(|(k, v)| format!(" {}=\"{}\"", k, escape_attr(v)))
        .collect()
}

fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(s: &str) -> String {
    escape_text(s).replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn serializes_in_group_order() {
        let mut head = HeadCollector::new();
        head.push(HeadTag::link("canonical", "https://example.com/"));
        head.push(HeadTag::meta_name("description", "Hello"));
        head.push(HeadTag::title("Home"));
        head.push(HeadTag::noscript("<style>.js{display:none}</style>"));

        assert_eq!(
            head.drain(),
            "<title>Home</title>\n\
             <meta name=\"description\" content=\"Hello\">\n\
             <link rel=\"canonical\" href=\"https://example.com/\">\n\
             <noscript><style>.js{display:none}</style></noscript>"
        );
        assert!(head.is_empty());
    }

    #[test]
    fn later_title_and_meta_replace_earlier() {
        let mut head = HeadCollector::new();
        head.push(HeadTag::title("Site"));
        head.push(HeadTag::meta_property("og:title", "Site"));
        head.push(HeadTag::meta_name("robots", "index"));
        head.push(HeadTag::title("Pricing"));
        head.push(HeadTag::meta_property("og:title", "Pricing"));

        let html = head.drain();

        assert_eq!(html.matches("<title>").count(), 1);
        assert!(html.contains("<title>Pricing</title>"));
        assert!(html.contains("content=\"Pricing\""));
        assert!(!html.contains("content=\"Site\""));
        assert!(html.contains("name=\"robots\""));
    }

    #[test]
    fn escapes_attribute_values() {
        let tag = HeadTag::meta_name("description", "Scenes \"&\" <datasets>");

        assert_eq!(
            tag.to_html(),
            "<meta name=\"description\" content=\"Scenes &quot;&amp;&quot; &lt;datasets&gt;\">"
        );
    }

    #[test]
    fn json_ld_cannot_close_script() {
        #[derive(Serialize)]
        struct Payload {
            name: &'static str,
        }

        let tag = HeadTag::json_ld(&Payload { name: "</script>" }).unwrap();

        assert_eq!(tag.to_html().matches("</script>").count(), 1);
        assert!(tag.to_html().starts_with("<script type=\"application/ld+json\">"));
    }
}
