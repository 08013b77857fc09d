//! Document - High-level document API

use crate::{DomResult, DomTree, ElementData, NodeId, SelectorList};

/// Native activation performed by [`Document::click`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// A radio input became checked; `unchecked` lists group members that lost it
    RadioChecked { node: NodeId, unchecked: Vec<NodeId> },
    /// A button was pressed
    ButtonPressed { node: NodeId },
    /// A link was followed
    LinkFollowed { node: NodeId, href: String },
    /// Nothing native happens for this element
    None,
}

/// HTML Document
#[derive(Debug)]
pub struct Document {
    /// The DOM tree
    pub tree: DomTree,
    url: String,
    html_element: NodeId,
    head_element: NodeId,
    body_element: NodeId,
    activations: Vec<Activation>,
}

impl Document {
    /// Create a new document with `<html>`, `<head>` and `<body>`
    pub fn new(url: &str) -> Self {
        let mut tree = DomTree::new();

        let html = tree.create_element("html");
        let head = tree.create_element("head");
        let body = tree.create_element("body");

        let root = tree.root();
        for (parent, child) in [(root, html), (html, head), (html, body)] {
            let linked = tree.append_child(parent, child);
            debug_assert!(linked.is_ok(), "document skeleton: {:?}", linked);
        }

        Self {
            tree,
            url: url.to_string(),
            html_element: html,
            head_element: head,
            body_element: body,
            activations: Vec::new(),
        }
    }

    /// Get document URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get `<html>` element
    pub fn document_element(&self) -> NodeId {
        self.html_element
    }

    /// Get `<head>` element
    pub fn head(&self) -> NodeId {
        self.head_element
    }

    /// Get `<body>` element
    pub fn body(&self) -> NodeId {
        self.body_element
    }

    /// Access the DOM tree
    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Access the DOM tree mutably
    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }

    /// Element data for a node, if it is an element
    pub fn element(&self, node: NodeId) -> Option<&ElementData> {
        self.tree.get(node).and_then(|n| n.as_element())
    }

    fn element_mut(&mut self, node: NodeId) -> Option<&mut ElementData> {
        self.tree.get_mut(node).and_then(|n| n.as_element_mut())
    }

    /// Create an element with attributes and append it to `parent`
    pub fn append_element(&mut self, parent: NodeId, tag: &str, attrs: &[(&str, &str)]) -> DomResult<NodeId> {
        let id = self.tree.create_element(tag);
        if let Some(elem) = self.element_mut(id) {
            for (name, value) in attrs {
                elem.set_attr(name, *value);
            }
        }
        self.tree.append_child(parent, id)
    }

    /// Append a text node to `parent`
    pub fn append_text(&mut self, parent: NodeId, text: &str) -> DomResult<NodeId> {
        let id = self.tree.create_text(text);
        self.tree.append_child(parent, id)
    }

    /// Get element by ID
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.tree.descendants(self.tree.root())
            .find(|(_, node)| node.as_element().and_then(ElementData::id) == Some(id))
            .map(|(node_id, _)| node_id)
    }

    /// All descendant elements of `root` matching `selector`, in document order
    pub fn query_selector_all(&self, root: NodeId, selector: &str) -> DomResult<Vec<NodeId>> {
        let list = SelectorList::parse(selector)?;
        Ok(self.tree.descendants(root)
            .filter(|(_, node)| node.as_element().is_some_and(|e| list.matches(e)))
            .map(|(id, _)| id)
            .collect())
    }

    /// First `<label for=control_id>` in the document
    pub fn label_for(&self, control_id: &str) -> Option<NodeId> {
        self.tree.descendants(self.tree.root())
            .find(|(_, node)| node.as_element()
                .is_some_and(|e| e.tag == "label" && e.get_attr("for") == Some(control_id)))
            .map(|(id, _)| id)
    }

    /// Checkedness of a radio/checkbox input
    pub fn is_checked(&self, node: NodeId) -> bool {
        self.element(node).is_some_and(|e| e.checked)
    }

    /// Set checkedness directly (no activation recorded)
    pub fn set_checked(&mut self, node: NodeId, checked: bool) {
        if let Some(elem) = self.element_mut(node) {
            elem.checked = checked;
        }
    }

    /// Run the element's native activation behavior, as a user click would
    pub fn click(&mut self, node: NodeId) -> Activation {
        let Some(elem) = self.element(node) else {
            return Activation::None;
        };

        let activation = if elem.has_attr("disabled") && matches!(elem.tag.as_str(), "button" | "input") {
            Activation::None
        } else if elem.is_radio() {
            let group = elem.get_attr("name").map(str::to_string);
            let unchecked = match group {
                Some(name) => self.radio_group(&name)
                    .into_iter()
                    .filter(|&other| other != node && self.is_checked(other))
                    .collect(),
                None => Vec::new(),
            };
            for &other in &unchecked {
                self.set_checked(other, false);
            }
            self.set_checked(node, true);
            Activation::RadioChecked { node, unchecked }
        } else if elem.tag == "button" {
            Activation::ButtonPressed { node }
        } else if elem.tag == "a" {
            match elem.get_attr("href") {
                Some(href) => Activation::LinkFollowed { node, href: href.to_string() },
                None => Activation::None,
            }
        } else {
            Activation::None
        };

        tracing::debug!("click on {:?}: {:?}", node, activation);
        if activation != Activation::None {
            self.activations.push(activation.clone());
        }
        activation
    }

    fn radio_group(&self, name: &str) -> Vec<NodeId> {
        self.tree.descendants(self.tree.root())
            .filter(|(_, node)| node.as_element()
                .is_some_and(|e| e.is_radio() && e.get_attr("name") == Some(name)))
            .map(|(id, _)| id)
            .collect()
    }

    /// Drain the activations recorded since the last call
    pub fn take_activations(&mut self) -> Vec<Activation> {
        std::mem::take(&mut self.activations)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new("about:blank")
    }
}
