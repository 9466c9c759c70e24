use crate::{
	builder::build,
	dom::{Document, NodeId},
	error::{DomError, DomResult},
	vdom::{Element, Node},
};
use tracing::{instrument, trace_span};

/// Reconciles `live`, the realization of the `old` description, with the `new` description,
/// mutating the live tree in place so it matches `new` exactly, while preserving unaffected
/// subtrees by reference instead of rebuilding them.
///
/// The decision order is a contract:
///
/// 1. both text, distinct → update the text value in place, return `None`
/// 2. both text, equal → no mutation, return `None`
/// 3. `old` absent, `new` present → build a fresh subtree and **return it**; the caller (or the
///    parent recursion level) attaches it
/// 4. `old` present, `new` absent → detach `live` from its parent, return `None`
/// 5. variants differ, or both elements with different tags → build a fresh subtree and splice it
///    into `live`'s position. Without a parent to splice into (a caller-owned root), the
///    replacement is returned like a creation and the old root is disposed of.
/// 6. both elements with equal tags → reconcile attributes, then children, return `None`
///
/// # Errors
///
/// [`DomError::MissingLiveNode`] whenever `old` is present but `live` is not: callers must pass the
/// live counterpart of whatever description they pass as `old`.
#[instrument(skip(document, old, new))]
pub fn reconcile(document: &mut Document, old: Option<&Node>, new: Option<&Node>, live: Option<NodeId>) -> DomResult<Option<NodeId>> {
	match (old, new) {
		(Some(Node::Text(old_text)), Some(Node::Text(new_text))) => {
			let span = trace_span!("Diffing text node", old_text = old_text.as_str(), new_text = new_text.as_str());
			let _enter = span.enter();
			let live = live.ok_or(DomError::MissingLiveNode("a text update requires the live text node"))?;
			if old_text != new_text {
				document.set_text_value(live, new_text)?;
			}
			Ok(None)
		}

		(None, Some(new)) => {
			let span = trace_span!("Creating");
			let _enter = span.enter();
			build(document, new).map(Some)
		}

		(Some(_), None) => {
			let span = trace_span!("Removing");
			let _enter = span.enter();
			let live = live.ok_or(DomError::MissingLiveNode("a removal requires the live node to detach"))?;
			document.detach(live)?;
			Ok(None)
		}

		(Some(old), Some(new)) => {
			let live = live.ok_or(DomError::MissingLiveNode("an in-place update requires the live node"))?;
			match (old, new) {
				(Node::Element(old), Node::Element(new)) if old.name == new.name => {
					let span = trace_span!("Diffing element", tag = old.name.as_str());
					let _enter = span.enter();
					update_attributes(document, old, new, live)?;
					update_children(document, old, new, live)?;
					Ok(None)
				}

				// Mismatching variants or tags: destroy and rebuild.
				(_, new) => {
					let span = trace_span!("Replacing mismatching");
					let _enter = span.enter();
					let fresh = build(document, new)?;
					match document.parent(live)? {
						Some(parent) => {
							document.replace_child(parent, fresh, live)?;
							Ok(None)
						}
						None => {
							// A root has no slot to splice into; hand the replacement back like a
							// creation and let the caller adopt it.
							document.detach(live)?;
							Ok(Some(fresh))
						}
					}
				}
			}
		}

		(None, None) => Ok(None),
	}
}

/// Sets every attribute `new` carries that the live element does not already hold with that exact
/// value, then removes every attribute only `old` carries. Attributes named by neither description
/// are untouched.
fn update_attributes(document: &mut Document, old: &Element, new: &Element, live: NodeId) -> DomResult<()> {
	for (name, value) in &new.attributes {
		if document.attribute(live, name)? != Some(value.as_str()) {
			document.set_attribute(live, name, value)?;
		}
	}
	for name in old.attributes.keys() {
		if !new.attributes.contains_key(name) {
			document.remove_attribute(live, name)?;
		}
	}
	Ok(())
}

/// Positional, unkeyed child reconciliation: children are paired by index, never by identity, so a
/// reorder is seen as a run of in-place updates rather than moves.
fn update_children(document: &mut Document, old: &Element, new: &Element, live: NodeId) -> DomResult<()> {
	// The recursion below mutates the live child list; a snapshot keeps index `i` pointing at the
	// same live node for every iteration.
	let live_children: Vec<NodeId> = document.children(live)?.to_vec();

	for index in 0..old.children.len().max(new.children.len()) {
		let fresh = reconcile(
			document,
			old.children.get(index),
			new.children.get(index),
			live_children.get(index).copied(),
		)?;

		if let Some(fresh) = fresh {
			// Splice the freshly created child in at its logical position: ahead of whatever the
			// snapshot holds at this index, at the end otherwise.
			let reference = match live_children.get(index) {
				Some(&sibling) if document.contains(sibling) => {
					if document.parent(sibling)? == Some(live) {
						Some(sibling)
					} else {
						None
					}
				}
				_ => None,
			};
			document.insert_child_before(live, fresh, reference)?;
		}
	}
	Ok(())
}
