//! Element Scanner
//!
//! Discovers the interactive elements of a container and resolves the
//! accessible name, role and state of each one.

use crate::config::Phrasebook;
use crate::host::ElementHost;

/// The three interactive kinds the simulator navigates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementRole {
    Button,
    Link,
    Radio,
}

impl ElementRole {
    /// Spoken role word
    pub fn phrase<'a>(&self, phrases: &'a Phrasebook) -> &'a str {
        match self {
            Self::Button => &phrases.button,
            Self::Link => &phrases.link,
            Self::Radio => &phrases.radio,
        }
    }
}

/// Toggle state; only radios carry one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ElementState {
    #[default]
    None,
    Checked,
    Unchecked,
}

impl ElementState {
    pub fn phrase<'a>(&self, phrases: &'a Phrasebook) -> &'a str {
        match self {
            Self::None => "",
            Self::Checked => &phrases.checked,
            Self::Unchecked => &phrases.unchecked,
        }
    }
}

/// An interactive element captured by a scan
#[derive(Debug, Clone, PartialEq)]
pub struct FocusableElement<N> {
    pub node: N,
    pub role: ElementRole,
    pub label: String,
    pub state: ElementState,
}

/// Stateless scanning and description over an [`ElementHost`]
pub struct ElementScanner;

impl ElementScanner {
    /// Ordered interactive elements below `container`; empty without one
    pub fn scan<H: ElementHost>(host: &H, container: Option<&H::Node>) -> Vec<FocusableElement<H::Node>> {
        let Some(container) = container else {
            tracing::debug!("No container to scan");
            return Vec::new();
        };

        let elements: Vec<_> = host.descendants(container)
            .into_iter()
            .filter_map(|node| {
                let role = Self::classify(host, &node)?;
                Some(Self::describe(host, node, role))
            })
            .collect();

        tracing::debug!("Scanned {} focusable elements", elements.len());
        elements
    }

    /// Anchors with `href`, buttons, and radio inputs; everything else is skipped
    pub fn classify<H: ElementHost>(host: &H, node: &H::Node) -> Option<ElementRole> {
        match host.tag_name(node).as_str() {
            "button" => Some(ElementRole::Button),
            "a" if host.attribute(node, "href").is_some() => Some(ElementRole::Link),
            "input" if host.attribute(node, "type").is_some_and(|t| t.eq_ignore_ascii_case("radio")) => {
                Some(ElementRole::Radio)
            }
            _ => None,
        }
    }

    fn describe<H: ElementHost>(host: &H, node: H::Node, role: ElementRole) -> FocusableElement<H::Node> {
        let label = Self::resolve_label(host, &node, role);
        let state = Self::read_state(host, &node, role);
        FocusableElement { node, role, label, state }
    }

    /// `aria-label`, then (radios) the associated `<label for>`, then own text
    pub fn resolve_label<H: ElementHost>(host: &H, node: &H::Node, role: ElementRole) -> String {
        if let Some(aria) = host.attribute(node, "aria-label") {
            let aria = aria.trim();
            if !aria.is_empty() {
                return aria.to_string();
            }
        }

        if role == ElementRole::Radio {
            let label_text = host.attribute(node, "id")
                .filter(|id| !id.is_empty())
                .and_then(|id| host.label_for(&id))
                .map(|label| host.text_content(&label).trim().to_string())
                .filter(|text| !text.is_empty());
            if let Some(text) = label_text {
                return text;
            }
        }

        host.text_content(node).trim().to_string()
    }

    pub fn read_state<H: ElementHost>(host: &H, node: &H::Node, role: ElementRole) -> ElementState {
        match role {
            ElementRole::Radio if host.is_checked(node) => ElementState::Checked,
            ElementRole::Radio => ElementState::Unchecked,
            _ => ElementState::None,
        }
    }

    /// Re-read label and state, which the host may have changed since the scan
    pub fn refresh<H: ElementHost>(host: &H, element: &mut FocusableElement<H::Node>) {
        element.label = Self::resolve_label(host, &element.node, element.role);
        element.state = Self::read_state(host, &element.node, element.role);
    }
}
