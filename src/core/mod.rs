// Core rule exports
pub mod exchange;
pub mod matching;
pub mod review;
pub mod stats;

pub use exchange::{authorize_transition, TransitionError};
pub use matching::{classify, title_overlaps, MatchRole};
pub use review::{check_eligibility, ReviewError};
pub use stats::{average_rating, round2, success_rate};
