use crate::{
	dom::{Document, LiveData, NodeId},
	error::{DomError, DomResult},
	vdom::{Element, Node},
};

pub fn load_node(document: &Document, id: NodeId) -> DomResult<Node> {
	match document.get(id)?.data() {
		LiveData::Text(value) => Ok(Node::Text(value.clone())),
		LiveData::Element { .. } => Ok(Node::Element(load_element(document, id)?)),
	}
}

pub fn load_element(document: &Document, id: NodeId) -> DomResult<Element> {
	let node = document.get(id)?;
	match node.data() {
		LiveData::Element { tag, attributes } => Ok(Element {
			name: tag.clone(),
			attributes: attributes.clone(),
			children: load_children(document, id)?,
		}),
		LiveData::Text(_) => Err(DomError::WrongNodeKind { node: id, expected: "element" }),
	}
}

pub fn load_children(document: &Document, id: NodeId) -> DomResult<Vec<Node>> {
	document
		.get(id)?
		.children()
		.iter()
		.map(|&child| load_node(document, child))
		.collect()
}
