pub mod a001_promotion;
pub mod common;
