pub mod d001_promotion_calendar;
pub mod d002_rank_overlay;
