//! The components module contains the views of the recommender page.

mod app;
mod icons;
mod mode_slider;
mod results;
mod song_inputs;

pub use app::*;
pub use icons::*;
pub use mode_slider::*;
pub use results::*;
pub use song_inputs::*;
