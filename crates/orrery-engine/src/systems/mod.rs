pub mod render;
pub mod rng;
pub mod picking;
pub mod starfield;
