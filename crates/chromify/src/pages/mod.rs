//! Site pages: the colorization workspace, the example gallery, and
//! the marketing explainer.

mod gallery;
mod home;
mod how_it_works;

pub use gallery::Gallery;
pub use home::Home;
pub use how_it_works::HowItWorks;
