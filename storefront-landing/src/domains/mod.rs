pub mod carousel;
pub mod page;
pub mod sections;

pub use page::{LandingPage, PageCommand, PageEvent, PageOptions};
