pub mod cities;
pub mod cycles;
pub mod dispatch;
pub mod output;
pub mod path;
pub mod sample;
pub mod tour;
pub mod traverse;
pub mod tree;
