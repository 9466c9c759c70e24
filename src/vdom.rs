use hashbrown::HashMap;

/// An immutable description of desired tree structure.
///
/// Descriptions are created by the caller per update cycle and are never mutated by this crate.
/// "No node here" is expressed as `Option<&Node>` at the [`reconcile`](crate::diff::reconcile) boundary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
	Text(String),
	Element(Element),
}

/// An element description: a tag name, a set of uniquely-named attributes and an ordered child sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
	pub name: String,
	pub attributes: HashMap<String, String>,
	pub children: Vec<Node>,
}

impl Element {
	#[must_use]
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			attributes: HashMap::new(),
			children: Vec::new(),
		}
	}

	#[must_use]
	pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.attributes.insert(name.into(), value.into());
		self
	}

	#[must_use]
	pub fn child(mut self, child: impl Into<Node>) -> Self {
		self.children.push(child.into());
		self
	}
}

impl Node {
	#[must_use]
	pub fn text(value: impl Into<String>) -> Self {
		Node::Text(value.into())
	}
}

impl From<Element> for Node {
	fn from(element: Element) -> Self {
		Node::Element(element)
	}
}

impl From<&str> for Node {
	fn from(text: &str) -> Self {
		Node::Text(text.to_string())
	}
}

impl From<String> for Node {
	fn from(text: String) -> Self {
		Node::Text(text)
	}
}
