//! Search bar: text direction of the input and the submission URL.

use url::Url;

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ltr,
    Rtl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
}

impl Direction {
    pub fn alignment(&self) -> Alignment {
        match self {
            Direction::Ltr => Alignment::Left,
            Direction::Rtl => Alignment::Right,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }
}

/// Hebrew, Arabic and related blocks plus their presentation forms.
pub fn is_rtl_char(c: char) -> bool {
    matches!(c as u32, 0x0590..=0x08FF | 0xFB1D..=0xFEFC)
}

/// Direction of the search input, decided by the first character of the
/// trimmed value or, if that is empty, of the placeholder.
///
/// With neither the input defaults to right-to-left.
pub fn detect_direction(value: &str, placeholder: &str) -> Direction {
    let value = value.trim();
    let source = if value.is_empty() {
        placeholder.trim()
    } else {
        value
    };

    match source.chars().next() {
        Some(c) if !is_rtl_char(c) => Direction::Ltr,
        _ => Direction::Rtl,
    }
}

#[derive(Debug, Clone)]
pub struct SearchEngine {
    base: Url,
}

impl Default for SearchEngine {
    fn default() -> Self {
        SearchEngine {
            base: Url::parse(Self::DEFAULT_URL).expect("default search url is valid"),
        }
    }
}

impl SearchEngine {
    pub const DEFAULT_URL: &'static str = "https://www.google.com/search";

    pub fn new(base: &str) -> Result<Self> {
        Ok(SearchEngine {
            base: Url::parse(base)?,
        })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// URL to open for `query`, or `None` for a blank query.
    pub fn submit(&self, query: &str) -> Option<Url> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }

        let mut url = self.base.clone();
        url.query_pairs_mut().append_pair("q", query);

        log::info!("Searching for '{}'", query);
        Some(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rtl_ranges() {
        assert!(is_rtl_char('ج'));
        assert!(is_rtl_char('ש'));
        assert!(is_rtl_char('\u{FB1D}'));
        assert!(!is_rtl_char('a'));
        assert!(!is_rtl_char('1'));
        assert!(!is_rtl_char('\u{FEFF}'));
    }

    #[test]
    fn direction_follows_value_then_placeholder() {
        assert_eq!(detect_direction("  hello", "جستجو"), Direction::Ltr);
        assert_eq!(detect_direction("سلام", "search"), Direction::Rtl);
        assert_eq!(detect_direction("   ", "جستجو"), Direction::Rtl);
        assert_eq!(detect_direction("", "search"), Direction::Ltr);
        assert_eq!(detect_direction("", ""), Direction::Rtl);
        assert_eq!(Direction::Rtl.alignment(), Alignment::Right);
    }

    #[test]
    fn blank_queries_are_not_submitted() {
        let engine = SearchEngine::default();
        assert_eq!(engine.submit(""), None);
        assert_eq!(engine.submit("  \t"), None);
    }

    #[test]
    fn queries_are_encoded() {
        let engine = SearchEngine::default();
        let url = engine.submit(" rust & chrono ").unwrap();

        assert_eq!(url.as_str(), "https://www.google.com/search?q=rust+%26+chrono");
        assert_eq!(
            url.query_pairs().next().map(|(_, v)| v.into_owned()),
            Some("rust & chrono".to_owned())
        );
    }

    #[test]
    fn custom_engine() {
        let engine = SearchEngine::new("https://duckduckgo.com/").unwrap();
        assert_eq!(
            engine.submit("perch").unwrap().as_str(),
            "https://duckduckgo.com/?q=perch"
        );
        assert!(SearchEngine::new("not a url").is_err());
    }
}
