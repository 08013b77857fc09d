//! Element Host Port
//!
//! Read access to the host's element tree plus native activation. The
//! simulator never mutates host content itself; `click` hands control back
//! to the host's own behavior for the element.

use std::fmt::Debug;

/// Host element tree capability
pub trait ElementHost {
    /// Host-side element reference
    type Node: Clone + PartialEq + Debug;

    /// Every element below `container`, excluding it, in document order
    fn descendants(&self, container: &Self::Node) -> Vec<Self::Node>;

    /// Lowercase tag name
    fn tag_name(&self, node: &Self::Node) -> String;

    /// Attribute value, `None` when absent
    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;

    /// Concatenated descendant text, untrimmed
    fn text_content(&self, node: &Self::Node) -> String;

    /// `<label for=id>` anywhere in the document
    fn label_for(&self, id: &str) -> Option<Self::Node>;

    /// Checkedness of a radio input
    fn is_checked(&self, node: &Self::Node) -> bool;

    /// Native activation, as a user click would trigger
    fn click(&mut self, node: &Self::Node);
}
