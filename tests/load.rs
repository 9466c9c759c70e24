use cambium_dom::{
	build,
	dom::Document,
	error::DomError,
	load::{load_children, load_element, load_node},
	vdom::{Element, Node},
};

mod logging_;

#[test]
fn round_trip() {
	logging_::init();
	let mut document = Document::new();
	let description = Node::from(
		Element::new("footer")
			.attribute("class", "small")
			.child("Copyright 2025")
			.child(Element::new("a").attribute("href", "#top").child("Back to top")),
	);
	let root = build(&mut document, &description).unwrap();

	assert_eq!(load_node(&document, root).unwrap(), description);
}

#[test]
fn children_only() {
	logging_::init();
	let mut document = Document::new();
	let root = build(
		&mut document,
		&Element::new("p").child("before ").child(Element::new("em").child("within")).into(),
	)
	.unwrap();

	assert_eq!(
		load_children(&document, root).unwrap(),
		vec![
			Node::text("before "),
			Element::new("em").child("within").into(),
		],
	);
}

#[test]
fn load_element_rejects_text_nodes() {
	logging_::init();
	let mut document = Document::new();
	let text = build(&mut document, &Node::text("just text")).unwrap();

	assert!(matches!(
		load_element(&document, text).unwrap_err(),
		DomError::WrongNodeKind { .. },
	));
}

#[test]
fn stale_handles_are_rejected() {
	logging_::init();
	let mut document = Document::new();
	let node = build(&mut document, &Node::text("gone soon")).unwrap();
	document.detach(node).unwrap();

	assert!(matches!(load_node(&document, node).unwrap_err(), DomError::MissingLiveNode(_)));
}
