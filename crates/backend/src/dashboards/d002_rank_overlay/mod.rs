pub mod service;

pub use service::{OverlayCandidate, RankOverlay};
