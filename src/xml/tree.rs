use chrono::{DateTime, FixedOffset};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::core::CatalogError;

/// An owned XML element tree, built once per decode and then queried
/// read-only. Queries never fail on absence: a missing element yields an
/// empty string, `None`, or an empty match list, so callers can probe
/// optional paths without guarding every lookup.
#[derive(Debug, Clone, Default)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Element>,
    /// Concatenated text content of the element itself (not descendants).
    pub text: String,
}

impl Element {
    /// Parse a complete document into its root element.
    pub fn parse(xml: &str) -> Result<Element, CatalogError> {
        let mut reader = Reader::from_str(xml);
        reader.config_mut().trim_text(true);

        let mut stack: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;

        loop {
            match reader.read_event() {
                Ok(Event::Start(ref e)) => stack.push(Element::from_start(e)),
                Ok(Event::Empty(ref e)) => {
                    let elem = Element::from_start(e);
                    attach(&mut stack, &mut root, elem)?;
                }
                Ok(Event::Text(ref e)) => {
                    if let Some(top) = stack.last_mut() {
                        top.text.push_str(&e.unescape().unwrap_or_default());
                    }
                }
                Ok(Event::CData(ref e)) => {
                    if let Some(top) = stack.last_mut() {
                        top.text.push_str(&String::from_utf8_lossy(e.as_ref()));
                    }
                }
                Ok(Event::End(_)) => {
                    let elem = stack.pop().ok_or_else(|| {
                        CatalogError::MalformedXml("closing tag without opening tag".into())
                    })?;
                    attach(&mut stack, &mut root, elem)?;
                }
                Ok(Event::Eof) => break,
                Ok(_) => {} // declaration, doctype, comments, PIs
                Err(e) => return Err(CatalogError::MalformedXml(e.to_string())),
            }
        }

        if !stack.is_empty() {
            return Err(CatalogError::MalformedXml("unclosed element".into()));
        }
        root.ok_or_else(|| CatalogError::MalformedXml("no root element".into()))
    }

    fn from_start(e: &BytesStart<'_>) -> Element {
        let mut elem = Element {
            name: String::from_utf8_lossy(e.name().as_ref()).into_owned(),
            ..Element::default()
        };
        for attr in e.attributes().flatten() {
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = attr.unescape_value().unwrap_or_default().into_owned();
            elem.attributes.push((key, value));
        }
        elem
    }

    /// First element matching the `/`-separated relative `path`, searched
    /// depth-first. The empty path addresses the node itself.
    pub fn first(&self, path: &str) -> Option<&Element> {
        if path.is_empty() {
            return Some(self);
        }
        let (head, rest) = path.split_once('/').unwrap_or((path, ""));
        self.children
            .iter()
            .filter(|c| c.name == head)
            .find_map(|c| c.first(rest))
    }

    /// Every element matching `path`, in depth-first document order.
    /// Cheap to call repeatedly; each call runs a fresh traversal.
    pub fn all<'a>(&'a self, path: &str) -> Vec<&'a Element> {
        let mut out = Vec::new();
        self.collect_matches(path, &mut out);
        out
    }

    fn collect_matches<'a>(&'a self, path: &str, out: &mut Vec<&'a Element>) {
        let (head, rest) = path.split_once('/').unwrap_or((path, ""));
        for child in self.children.iter().filter(|c| c.name == head) {
            if rest.is_empty() {
                out.push(child);
            } else {
                child.collect_matches(rest, out);
            }
        }
    }

    /// Text content of the first match, or `""` if there is none.
    pub fn text(&self, path: &str) -> String {
        self.first(path).map(|e| e.text.clone()).unwrap_or_default()
    }

    /// Value of attribute `name` on the first match, or `""` if the
    /// element or the attribute is absent.
    pub fn attr(&self, path: &str, name: &str) -> String {
        self.first(path)
            .and_then(|e| {
                e.attributes
                    .iter()
                    .find(|(k, _)| k == name)
                    .map(|(_, v)| v.clone())
            })
            .unwrap_or_default()
    }

    /// Integer at `path`; `Ok(None)` when the element is absent or empty,
    /// an error when text is present but not an integer.
    pub fn int(&self, path: &str) -> Result<Option<i64>, CatalogError> {
        let text = self.text(path);
        if text.trim().is_empty() {
            return Ok(None);
        }
        text.trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|_| malformed(path, "integer", text))
    }

    /// Decimal at `path`; same absence tolerance as [`Self::int`].
    pub fn decimal(&self, path: &str) -> Result<Option<Decimal>, CatalogError> {
        let text = self.text(path);
        if text.trim().is_empty() {
            return Ok(None);
        }
        Decimal::from_str(text.trim())
            .map(Some)
            .map_err(|_| malformed(path, "decimal", text))
    }

    /// RFC 3339 timestamp at `path`; same absence tolerance as
    /// [`Self::int`].
    pub fn datetime(&self, path: &str) -> Result<Option<DateTime<FixedOffset>>, CatalogError> {
        let text = self.text(path);
        if text.trim().is_empty() {
            return Ok(None);
        }
        DateTime::parse_from_rfc3339(text.trim())
            .map(Some)
            .map_err(|_| malformed(path, "timestamp", text))
    }
}

fn attach(
    stack: &mut [Element],
    root: &mut Option<Element>,
    elem: Element,
) -> Result<(), CatalogError> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(elem);
    } else if root.is_none() {
        *root = Some(elem);
    } else {
        return Err(CatalogError::MalformedXml("multiple root elements".into()));
    }
    Ok(())
}

fn malformed(path: &str, kind: &'static str, text: String) -> CatalogError {
    CatalogError::MalformedValue {
        path: path.to_string(),
        kind,
        text,
    }
}
