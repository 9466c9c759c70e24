use crate::{
	dom::{Document, NodeId},
	error::{DomError, DomResult},
	vdom::{Element, Node},
};
use tracing::instrument;

/// Builds a fresh live subtree from `description`, with no memory of any prior state.
///
/// Attributes are set first, then children are built and appended in order. The returned subtree is
/// unattached; the caller decides where (and whether) to attach it.
///
/// # Errors
///
/// [`DomError::InvalidDescription`] if an element description carries an empty tag name.
#[instrument(skip(document, description))]
pub fn build(document: &mut Document, description: &Node) -> DomResult<NodeId> {
	match description {
		Node::Text(value) => Ok(document.create_text(value)),
		Node::Element(Element { name, attributes, children }) => {
			if name.is_empty() {
				return Err(DomError::InvalidDescription("element tag name must not be empty"));
			}
			let element = document.create_element(name);
			for (name, value) in attributes {
				document.set_attribute(element, name, value)?;
			}
			for child in children {
				let child = build(document, child)?;
				document.append_child(element, child)?;
			}
			Ok(element)
		}
	}
}
