pub mod batch;
pub mod score;
