//! DOM Host
//!
//! Exposes an [`echonav_dom::Document`] to the engine as an [`ElementHost`].

use echonav_a11y::ElementHost;
use echonav_dom::{Activation, Document, NodeId};

/// A document the simulator can scan and click
#[derive(Debug, Default)]
pub struct DomHost {
    document: Document,
}

impl DomHost {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    /// Activations performed through the engine since the last call
    pub fn take_activations(&mut self) -> Vec<Activation> {
        self.document.take_activations()
    }
}

impl ElementHost for DomHost {
    type Node = NodeId;

    fn descendants(&self, container: &NodeId) -> Vec<NodeId> {
        self.document.tree()
            .descendants(*container)
            .filter(|(_, node)| node.is_element())
            .map(|(id, _)| id)
            .collect()
    }

    fn tag_name(&self, node: &NodeId) -> String {
        self.document.element(*node)
            .map(|e| e.tag.clone())
            .unwrap_or_default()
    }

    fn attribute(&self, node: &NodeId, name: &str) -> Option<String> {
        self.document.element(*node)?
            .get_attr(name)
            .map(str::to_string)
    }

    fn text_content(&self, node: &NodeId) -> String {
        self.document.tree().text_content(*node)
    }

    fn label_for(&self, id: &str) -> Option<NodeId> {
        self.document.label_for(id)
    }

    fn is_checked(&self, node: &NodeId) -> bool {
        self.document.is_checked(*node)
    }

    fn click(&mut self, node: &NodeId) {
        self.document.click(*node);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn host() -> (DomHost, NodeId) {
        let mut doc = Document::new("about:blank");
        let body = doc.body();
        let form = doc.append_element(body, "form", &[]).unwrap();
        let radio = doc.append_element(form, "input", &[("type", "radio"), ("id", "r"), ("name", "g")]).unwrap();
        let label = doc.append_element(form, "label", &[("for", "r")]).unwrap();
        doc.append_text(label, "Option").unwrap();
        (DomHost::new(doc), radio)
    }

    #[test]
    fn test_descendants_skip_text() {
        let (host, radio) = host();
        let body = host.document().body();
        let nodes = host.descendants(&body);
        assert_eq!(nodes.len(), 3);
        assert_eq!(nodes[1], radio);
    }

    #[test]
    fn test_label_and_attributes() {
        let (host, radio) = host();
        assert_eq!(host.tag_name(&radio), "input");
        assert_eq!(host.attribute(&radio, "type").as_deref(), Some("radio"));
        assert_eq!(host.attribute(&radio, "aria-label"), None);
        let label = host.label_for("r").unwrap();
        assert_eq!(host.text_content(&label), "Option");
    }

    #[test]
    fn test_click_checks_radio() {
        let (mut host, radio) = host();
        assert!(!host.is_checked(&radio));
        host.click(&radio);
        assert!(host.is_checked(&radio));
        assert_eq!(host.take_activations().len(), 1);
    }
}
