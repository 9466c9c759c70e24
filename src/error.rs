use crate::dom::NodeId;
use thiserror::Error;

/// Contract violations raised by this crate.
///
/// None of these are recoverable runtime conditions: each one means the caller broke an invariant,
/// and continuing would leave the live tree inconsistent with its description. They are propagated
/// immediately and never swallowed.
#[derive(Debug, Error)]
pub enum DomError {
	/// Malformed input to [`build`](crate::builder::build).
	#[error("invalid description: {0}")]
	InvalidDescription(&'static str),

	/// An operation required an existing live counterpart but received none,
	/// or a stale [`NodeId`] whose node has already been disposed of.
	#[error("missing live node: {0}")]
	MissingLiveNode(&'static str),

	/// A child-list operation named a node that is not a child of the given parent.
	#[error("node {child:?} is not a child of {parent:?}")]
	NotAChild { parent: NodeId, child: NodeId },

	/// An attribute operation on a text node, or a text operation on an element.
	#[error("expected {expected} node at {node:?}")]
	WrongNodeKind { node: NodeId, expected: &'static str },
}

pub type DomResult<T> = Result<T, DomError>;
