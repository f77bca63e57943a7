//! Page components for the Advitya landing.

mod games;
mod landing;

pub use games::Games;
pub use landing::Landing;
