pub mod models;
mod recommender;

pub use models::*;
pub use recommender::*;
