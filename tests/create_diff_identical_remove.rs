use cambium_dom::{
	build,
	dom::Document,
	load, reconcile,
	vdom::{Element, Node},
};

mod logging_;

#[test]
fn text() {
	test_create_diff_identical_remove(Node::text("Hello cambium-dom text!"));
}

#[test]
fn minimal_element() {
	test_create_diff_identical_remove(Element::new("div").into());
}

#[test]
fn element_with_attributes() {
	test_create_diff_identical_remove(
		Element::new("button")
			.attribute("class", "primary")
			.attribute("disabled", "true")
			.child("Click me")
			.into(),
	);
}

#[test]
fn nested_elements() {
	test_create_diff_identical_remove(
		Element::new("header")
			.child(Element::new("h1").child("My Site"))
			.child(
				Element::new("nav").child(
					Element::new("ul")
						.child(Element::new("li").child(Element::new("a").attribute("href", "#home").child("Home")))
						.child(Element::new("li").child(Element::new("a").attribute("href", "#about").child("About"))),
				),
			)
			.into(),
	);
}

#[test]
fn creation_matches_fresh_build() {
	logging_::init();
	let description = Node::from(
		Element::new("main").child(
			Element::new("section")
				.attribute("class", "hero")
				.child(Element::new("h2").child("Welcome"))
				.child(Element::new("p").child("This is my website.")),
		),
	);

	let mut built = Document::new();
	let built_root = build(&mut built, &description).unwrap();

	let mut reconciled = Document::new();
	let reconciled_root = reconcile(&mut reconciled, None, Some(&description), None).unwrap().unwrap();

	assert_eq!(
		load::load_node(&built, built_root).unwrap(),
		load::load_node(&reconciled, reconciled_root).unwrap(),
	);
}

fn test_create_diff_identical_remove(description: Node) {
	logging_::init();
	let mut document = Document::new();

	let root = reconcile(&mut document, None, Some(&description), None)
		.unwrap()
		.expect("creation must return the freshly built subtree");
	assert_eq!(load::load_node(&document, root).unwrap(), description);

	let mutations = document.mutations();
	assert!(reconcile(&mut document, Some(&description), Some(&description), Some(root))
		.unwrap()
		.is_none());
	assert_eq!(
		document.mutations(),
		mutations,
		"an identical reconciliation must not mutate the live tree"
	);
	assert_eq!(load::load_node(&document, root).unwrap(), description);

	assert!(reconcile(&mut document, Some(&description), None, Some(root)).unwrap().is_none());
	assert!(document.is_empty(), "removal must dispose of the whole subtree");
}
