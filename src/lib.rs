#![doc(html_root_url = "https://docs.rs/cambium-dom/0.0.1")]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub use hashbrown;

#[cfg(doctest)]
pub mod readme {
	doc_comment::doctest!("../README.md");
}

pub mod builder;
pub mod diff;
pub mod dom;
pub mod error;
pub mod load;
pub mod vdom;

pub use self::{builder::build, diff::reconcile};
