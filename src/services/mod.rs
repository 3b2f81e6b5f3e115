pub mod picks;
pub mod posters;
pub mod ranker;
pub mod recommendations;
pub mod resolver;
