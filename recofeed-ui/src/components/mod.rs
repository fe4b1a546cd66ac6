//! UI Components

pub mod product_picker;
pub mod recommendation_list;
pub mod toast;

pub use product_picker::ProductPicker;
pub use recommendation_list::RecommendationList;
pub use toast::Toast;
