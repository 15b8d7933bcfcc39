pub mod nav;
pub mod responsive_image;
pub mod slide;
pub mod suite;

pub use nav::{NavLink, NavTarget};
pub use responsive_image::{
    Decoding, FetchPriority, ImageOptions, ImageSource, Loading, ResponsiveImage,
};
pub use slide::{Dish, Feature, Localized, Slide};
pub use suite::{HeaderSuite, Suite, SuiteDetail};
