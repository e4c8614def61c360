//! In-memory request location.

/// The location a render pass is pinned to. Built from a URL string without
/// any navigation or network access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    /// Path component, always starting with `/`
    pub pathname: String,

    /// Query string including the leading `?`, or empty
    pub search: String,

    /// Fragment including the leading `#`, or empty
    pub hash: String,
}

impl Location {
    /// Parse a path (`/pricing?ref=x#plans`) or an absolute URL
    /// (`https://tryblueprint.io/pricing`).
    pub fn parse(url: &str) -> Self {
        let url = url.trim();

        // Drop scheme and authority from absolute URLs.
        let rest = match url.split_once("://") {
            Some((_, after_scheme)) => match after_scheme.find(['/', '?', '#']) {
                Some(idx) => &after_scheme[idx..],
                None => "",
            },
            None => url,
        };

        let (rest, hash) = match rest.find('#') {
            Some(idx) => (&rest[..idx], &rest[idx..]),
            None => (rest, ""),
        };
        let (path, search) = match rest.find('?') {
            Some(idx) => (&rest[..idx], &rest[idx..]),
            None => (rest, ""),
        };

        let pathname = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{}", path)
        };

        Self {
            pathname,
            search: search.to_string(),
            hash: hash.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_path() {
        let loc = Location::parse("/pricing");

        assert_eq!(loc.pathname, "/pricing");
        assert_eq!(loc.search, "");
        assert_eq!(loc.hash, "");
    }

    #[test]
    fn splits_query_and_fragment() {
        let loc = Location::parse("/pricing?ref=nav#plans");

        assert_eq!(loc.pathname, "/pricing");
        assert_eq!(loc.search, "?ref=nav");
        assert_eq!(loc.hash, "#plans");
    }

    #[test]
    fn strips_origin_from_absolute_url() {
        assert_eq!(
            Location::parse("https://tryblueprint.io/marketplace/scenes").pathname,
            "/marketplace/scenes"
        );
        assert_eq!(Location::parse("https://tryblueprint.io").pathname, "/");
        assert_eq!(Location::parse("https://tryblueprint.io?x=1").pathname, "/");
    }

    #[test]
    fn empty_and_relative_paths_become_rooted() {
        assert_eq!(Location::parse("").pathname, "/");
        assert_eq!(Location::parse("about").pathname, "/about");
    }
}
