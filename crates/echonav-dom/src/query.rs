//! Element Query
//!
//! Compound selectors for `querySelectorAll`: a tag (or `*`), `#id`, and
//! `[attr]` / `[attr=value]` conditions, joined into comma-separated lists.
//! Combinators are not supported.

use crate::{DomError, DomResult, ElementData};

/// Attribute condition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrMatch {
    /// `[name]`
    Present(String),
    /// `[name=value]`, value compared ASCII case-insensitively
    Equals(String, String),
}

impl AttrMatch {
    fn matches(&self, elem: &ElementData) -> bool {
        match self {
            Self::Present(name) => elem.has_attr(name),
            Self::Equals(name, value) => elem.get_attr(name)
                .is_some_and(|v| v.eq_ignore_ascii_case(value)),
        }
    }
}

/// Compound selector, e.g. `input[type="radio"]`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimpleSelector {
    /// Lowercase tag, `None` for universal
    pub tag: Option<String>,
    pub id: Option<String>,
    pub attrs: Vec<AttrMatch>,
}

impl SimpleSelector {
    /// Parse one compound selector
    pub fn parse(s: &str) -> DomResult<Self> {
        let s = s.trim();
        let invalid = || DomError::InvalidSelector(s.to_string());
        if s.is_empty() || s.contains(char::is_whitespace) && !s.contains('[') {
            return Err(invalid());
        }

        let mut selector = Self::default();
        let tag_end = s.find(['[', '#']).unwrap_or(s.len());
        let tag = &s[..tag_end];
        if !tag.is_empty() && tag != "*" {
            if !tag.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
                return Err(invalid());
            }
            selector.tag = Some(tag.to_ascii_lowercase());
        }

        let mut rest = &s[tag_end..];
        while !rest.is_empty() {
            if let Some(body) = rest.strip_prefix('[') {
                let close = body.find(']').ok_or_else(invalid)?;
                selector.attrs.push(Self::parse_attr(&body[..close]).ok_or_else(invalid)?);
                rest = &body[close + 1..];
            } else if let Some(body) = rest.strip_prefix('#') {
                let end = body.find(['[', '#']).unwrap_or(body.len());
                if end == 0 {
                    return Err(invalid());
                }
                selector.id = Some(body[..end].to_string());
                rest = &body[end..];
            } else {
                return Err(invalid());
            }
        }
        Ok(selector)
    }

    fn parse_attr(body: &str) -> Option<AttrMatch> {
        match body.split_once('=') {
            None => {
                let name = body.trim();
                (!name.is_empty()).then(|| AttrMatch::Present(name.to_ascii_lowercase()))
            }
            Some((name, value)) => {
                let name = name.trim();
                let value = value.trim().trim_matches(|c| c == '"' || c == '\'');
                (!name.is_empty()).then(|| AttrMatch::Equals(name.to_ascii_lowercase(), value.to_string()))
            }
        }
    }

    /// Check if an element matches
    pub fn matches(&self, elem: &ElementData) -> bool {
        self.tag.as_deref().is_none_or(|t| elem.tag == t)
            && self.id.as_deref().is_none_or(|id| elem.id() == Some(id))
            && self.attrs.iter().all(|a| a.matches(elem))
    }
}

/// Comma-separated selector list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorList(pub Vec<SimpleSelector>);

impl SelectorList {
    pub fn parse(s: &str) -> DomResult<Self> {
        s.split(',')
            .map(SimpleSelector::parse)
            .collect::<DomResult<Vec<_>>>()
            .map(Self)
    }

    pub fn matches(&self, elem: &ElementData) -> bool {
        self.0.iter().any(|sel| sel.matches(elem))
    }
}
