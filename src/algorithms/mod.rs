pub mod best_first;
pub mod breadth_first;
pub mod common;

pub use best_first::ScoredFrontier;
pub use breadth_first::FifoFrontier;
pub use common::{Frontier, Strategy, UnknownStrategy};
