//! Recommendation Feed
//!
//! The client side of the recommendation channel, independent of transport.
//!
//! ## Wire format
//!
//! - Client → server: the raw product identifier as a text frame
//! - Server → client: a JSON array of recommendation labels, e.g. `["Milk","Bread"]`
//!
//! ## Rendering rules
//!
//! Every received list replaces whatever was rendered before. A non-empty
//! list renders one entry per label, in order; an empty list renders a single
//! error entry reading [`NO_RECOMMENDATIONS`].
//!
//! ```rust
//! use recofeed::feed::{parse_recommendations, RenderedList};
//!
//! let list = parse_recommendations(r#"["Milk","Bread"]"#).unwrap();
//! let rendered = RenderedList::render(&list);
//! assert_eq!(rendered.texts(), vec!["Milk", "Bread"]);
//! ```

mod error;
mod message;
mod selection;
mod view;

pub use error::FeedError;
pub use message::{parse_recommendations, Recommendations};
pub use selection::{Selection, SendDecision, CHOOSE_PRODUCT_PROMPT};
pub use view::{EntryKind, ListEntry, RenderedList, NO_RECOMMENDATIONS};
