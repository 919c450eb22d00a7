pub mod a001_promotion;
