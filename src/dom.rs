use crate::error::{DomError, DomResult};
use generational_arena::{Arena, Index};
use hashbrown::HashMap;
use tracing::{instrument, trace};

/// Stable handle to a node owned by a [`Document`].
///
/// A handle is invalidated when its node leaves the tree (see [`Document::detach`]); using a stale
/// handle afterwards yields [`DomError::MissingLiveNode`] rather than touching a recycled slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(Index);

/// Payload of a live node: an element with a tag and mutable attribute set, or a text value.
#[derive(Debug)]
pub enum LiveData {
	Element {
		tag: String,
		attributes: HashMap<String, String>,
	},
	Text(String),
}

/// A mutable realized node. Owned by its parent in the live tree, except roots, which are owned by
/// whoever holds their [`NodeId`].
#[derive(Debug)]
pub struct LiveNode {
	data: LiveData,
	parent: Option<NodeId>,
	children: Vec<NodeId>,
}

impl LiveNode {
	#[must_use]
	pub fn data(&self) -> &LiveData {
		&self.data
	}

	#[must_use]
	pub fn parent(&self) -> Option<NodeId> {
		self.parent
	}

	#[must_use]
	pub fn children(&self) -> &[NodeId] {
		&self.children
	}
}

/// The live document: an arena of element and text nodes forming any number of trees.
///
/// This is the "live document" collaborator the reconciler mutates through, offering the usual
/// capability set: node creation, attribute get/set/remove, child append/insert/remove/replace and
/// text value get/set. Detaching a node disposes of the whole detached subtree; no dangling
/// references are retained anywhere.
#[derive(Debug)]
pub struct Document {
	arena: Arena<LiveNode>,
	mutations: u64,
}

impl Default for Document {
	fn default() -> Self {
		Self::new()
	}
}

impl Document {
	#[must_use]
	pub fn new() -> Self {
		Self {
			arena: Arena::new(),
			mutations: 0,
		}
	}

	/// Number of nodes currently alive in this document, attached or not.
	#[must_use]
	pub fn len(&self) -> usize {
		self.arena.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.arena.is_empty()
	}

	/// Running count of mutation primitives applied to this document.
	///
	/// Node creation is not a mutation; everything that changes an existing node is. Two equal
	/// readings around a reconciliation pass mean the pass touched nothing.
	#[must_use]
	pub fn mutations(&self) -> u64 {
		self.mutations
	}

	#[must_use]
	pub fn contains(&self, id: NodeId) -> bool {
		self.arena.contains(id.0)
	}

	pub fn create_element(&mut self, tag: &str) -> NodeId {
		let id = NodeId(self.arena.insert(LiveNode {
			data: LiveData::Element {
				tag: tag.to_owned(),
				attributes: HashMap::new(),
			},
			parent: None,
			children: Vec::new(),
		}));
		trace!(?id, tag, "created element");
		id
	}

	pub fn create_text(&mut self, value: &str) -> NodeId {
		let id = NodeId(self.arena.insert(LiveNode {
			data: LiveData::Text(value.to_owned()),
			parent: None,
			children: Vec::new(),
		}));
		trace!(?id, "created text node");
		id
	}

	pub fn get(&self, id: NodeId) -> DomResult<&LiveNode> {
		self.node(id)
	}

	pub fn parent(&self, id: NodeId) -> DomResult<Option<NodeId>> {
		Ok(self.node(id)?.parent)
	}

	pub fn children(&self, id: NodeId) -> DomResult<&[NodeId]> {
		Ok(&self.node(id)?.children)
	}

	pub fn tag(&self, id: NodeId) -> DomResult<&str> {
		match &self.node(id)?.data {
			LiveData::Element { tag, .. } => Ok(tag),
			LiveData::Text(_) => Err(DomError::WrongNodeKind { node: id, expected: "element" }),
		}
	}

	pub fn text_value(&self, id: NodeId) -> DomResult<&str> {
		match &self.node(id)?.data {
			LiveData::Text(value) => Ok(value),
			LiveData::Element { .. } => Err(DomError::WrongNodeKind { node: id, expected: "text" }),
		}
	}

	pub fn attribute(&self, id: NodeId, name: &str) -> DomResult<Option<&str>> {
		match &self.node(id)?.data {
			LiveData::Element { attributes, .. } => Ok(attributes.get(name).map(String::as_str)),
			LiveData::Text(_) => Err(DomError::WrongNodeKind { node: id, expected: "element" }),
		}
	}

	#[instrument(level = "trace", skip(self))]
	pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) -> DomResult<()> {
		match &mut self.node_mut(id)?.data {
			LiveData::Element { attributes, .. } => {
				attributes.insert(name.to_owned(), value.to_owned());
			}
			LiveData::Text(_) => return Err(DomError::WrongNodeKind { node: id, expected: "element" }),
		}
		self.mutations += 1;
		Ok(())
	}

	/// Removing an attribute the element does not carry is a no-op, not an error.
	#[instrument(level = "trace", skip(self))]
	pub fn remove_attribute(&mut self, id: NodeId, name: &str) -> DomResult<()> {
		match &mut self.node_mut(id)?.data {
			LiveData::Element { attributes, .. } => {
				attributes.remove(name);
			}
			LiveData::Text(_) => return Err(DomError::WrongNodeKind { node: id, expected: "element" }),
		}
		self.mutations += 1;
		Ok(())
	}

	#[instrument(level = "trace", skip(self))]
	pub fn set_text_value(&mut self, id: NodeId, value: &str) -> DomResult<()> {
		match &mut self.node_mut(id)?.data {
			LiveData::Text(text) => *text = value.to_owned(),
			LiveData::Element { .. } => return Err(DomError::WrongNodeKind { node: id, expected: "text" }),
		}
		self.mutations += 1;
		Ok(())
	}

	#[instrument(level = "trace", skip(self))]
	pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<()> {
		self.insert_child_before(parent, child, None)
	}

	/// Inserts `child` into `parent`'s child list ahead of `reference`, or at the end when
	/// `reference` is `None`. A `child` already attached elsewhere is moved, not duplicated.
	/// `child` must not be an ancestor of `parent`.
	#[instrument(level = "trace", skip(self))]
	pub fn insert_child_before(&mut self, parent: NodeId, child: NodeId, reference: Option<NodeId>) -> DomResult<()> {
		self.node(parent)?;
		self.node(child)?;
		self.unlink(child)?;
		let position = match reference {
			Some(reference) => self
				.node(parent)?
				.children
				.iter()
				.position(|&c| c == reference)
				.ok_or(DomError::NotAChild { parent, child: reference })?,
			None => self.node(parent)?.children.len(),
		};
		self.node_mut(child)?.parent = Some(parent);
		self.node_mut(parent)?.children.insert(position, child);
		self.mutations += 1;
		trace!(?parent, ?child, position, "inserted child");
		Ok(())
	}

	/// Removes `child` from `parent` and disposes of the detached subtree.
	#[instrument(level = "trace", skip(self))]
	pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<()> {
		let position = self
			.node(parent)?
			.children
			.iter()
			.position(|&c| c == child)
			.ok_or(DomError::NotAChild { parent, child })?;
		self.node_mut(parent)?.children.remove(position);
		self.dispose(child);
		self.mutations += 1;
		Ok(())
	}

	/// Replaces `old_child` with `new_child` in `old_child`'s position and disposes of the subtree
	/// under `old_child`.
	#[instrument(level = "trace", skip(self))]
	pub fn replace_child(&mut self, parent: NodeId, new_child: NodeId, old_child: NodeId) -> DomResult<()> {
		self.node(parent)?;
		self.node(new_child)?;
		self.unlink(new_child)?;
		let position = self
			.node(parent)?
			.children
			.iter()
			.position(|&c| c == old_child)
			.ok_or(DomError::NotAChild { parent, child: old_child })?;
		self.node_mut(new_child)?.parent = Some(parent);
		self.node_mut(parent)?.children[position] = new_child;
		self.dispose(old_child);
		self.mutations += 1;
		Ok(())
	}

	/// Detaches `node` from its parent (if it has one) and disposes of the whole detached subtree,
	/// invalidating every handle into it.
	#[instrument(level = "trace", skip(self))]
	pub fn detach(&mut self, node: NodeId) -> DomResult<()> {
		match self.node(node)?.parent {
			Some(parent) => self.remove_child(parent, node),
			None => {
				self.dispose(node);
				self.mutations += 1;
				Ok(())
			}
		}
	}

	fn node(&self, id: NodeId) -> DomResult<&LiveNode> {
		self.arena
			.get(id.0)
			.ok_or(DomError::MissingLiveNode("node id does not refer to a live node in this document"))
	}

	fn node_mut(&mut self, id: NodeId) -> DomResult<&mut LiveNode> {
		self.arena
			.get_mut(id.0)
			.ok_or(DomError::MissingLiveNode("node id does not refer to a live node in this document"))
	}

	fn unlink(&mut self, child: NodeId) -> DomResult<()> {
		if let Some(old_parent) = self.node(child)?.parent {
			self.node_mut(old_parent)?.children.retain(|&c| c != child);
			self.node_mut(child)?.parent = None;
		}
		Ok(())
	}

	fn dispose(&mut self, node: NodeId) {
		if let Some(removed) = self.arena.remove(node.0) {
			trace!(id = ?node, "disposed node");
			for child in removed.children {
				self.dispose(child);
			}
		}
	}
}
