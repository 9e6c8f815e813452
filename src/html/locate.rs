//! Tag locator
//!
//! Finds elements by tag name and attribute filter below a root element. A
//! missing tag is a hard error: it means the scraped site changed its markup.

use crate::ScrapeError;
use regex::Regex;
use scraper::node::Element;
use scraper::ElementRef;
use std::fmt;

/// How a single attribute value is matched
#[derive(Debug, Clone)]
pub enum AttrMatch {
    /// Equal value; for `class`, every listed class must be present
    Exact(String),
    /// Regex search over the value
    Pattern(Regex),
}

impl AttrMatch {
    fn matches(&self, name: &str, element: &Element) -> bool {
        match self {
            AttrMatch::Exact(expected) if name == "class" => expected
                .split_whitespace()
                .all(|class| element.classes().any(|c| c == class)),
            AttrMatch::Exact(expected) => element.attr(name) == Some(expected.as_str()),
            AttrMatch::Pattern(pattern) => element
                .attr(name)
                .map(|value| pattern.is_match(value))
                .unwrap_or(false),
        }
    }
}

/// Attribute filter, all entries must match
#[derive(Debug, Clone, Default)]
pub struct Attrs {
    filters: Vec<(String, AttrMatch)>,
}

impl Attrs {
    /// No attribute constraints
    pub fn any() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, value: &str) -> Self {
        self.filters
            .push((name.to_string(), AttrMatch::Exact(value.to_string())));
        self
    }

    pub fn matching(mut self, name: &str, pattern: Regex) -> Self {
        self.filters
            .push((name.to_string(), AttrMatch::Pattern(pattern)));
        self
    }

    pub fn id(value: &str) -> Self {
        Self::any().with("id", value)
    }

    pub fn class(value: &str) -> Self {
        Self::any().with("class", value)
    }

    fn matches(&self, element: &Element) -> bool {
        self.filters
            .iter()
            .all(|(name, filter)| filter.matches(name, element))
    }
}

impl fmt::Display for Attrs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (name, filter)) in self.filters.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            match filter {
                AttrMatch::Exact(value) => write!(f, "{}={:?}", name, value)?,
                AttrMatch::Pattern(pattern) => write!(f, "{}=/{}/", name, pattern.as_str())?,
            }
        }
        write!(f, "}}")
    }
}

fn strict_descendants(root: ElementRef<'_>) -> impl Iterator<Item = ElementRef<'_>> {
    // descendants() yields the root first; only strict descendants count
    root.descendants().skip(1).filter_map(ElementRef::wrap)
}

fn is_match(element: &ElementRef<'_>, tag: &str, attrs: &Attrs) -> bool {
    element.value().name().eq_ignore_ascii_case(tag) && attrs.matches(element.value())
}

/// Returns the first descendant of `root` in document order matching `tag` and `attrs`
///
/// # Returns
///
/// * `Ok(ElementRef)` - The first match
/// * `Err(ScrapeError::TagNotFound)` - No match; carries the tag and filter
///
/// # Example
///
/// ```
/// use doc_scraper::html::{find_tag, Attrs};
/// use scraper::Html;
///
/// let doc = Html::parse_document(r#"<div id="a"><p>x</p></div>"#);
/// let div = find_tag(doc.root_element(), "div", &Attrs::id("a")).unwrap();
/// assert!(find_tag(div, "span", &Attrs::any()).is_err());
/// ```
pub fn find_tag<'a>(
    root: ElementRef<'a>,
    tag: &str,
    attrs: &Attrs,
) -> Result<ElementRef<'a>, ScrapeError> {
    let found = strict_descendants(root).find(|el| is_match(el, tag, attrs));
    found.ok_or_else(|| ScrapeError::TagNotFound {
        tag: tag.to_string(),
        attrs: attrs.to_string(),
    })
}

/// Returns every matching descendant of `root` in document order
pub fn find_all<'a>(root: ElementRef<'a>, tag: &str, attrs: &Attrs) -> Vec<ElementRef<'a>> {
    strict_descendants(root)
        .filter(|el| is_match(el, tag, attrs))
        .collect()
}

/// Reads a required attribute
pub fn attr<'a>(element: ElementRef<'a>, name: &str) -> Result<&'a str, ScrapeError> {
    element
        .value()
        .attr(name)
        .ok_or_else(|| ScrapeError::MissingAttribute {
            tag: element.value().name().to_string(),
            attr: name.to_string(),
        })
}
