mod assigner;
mod outline;
mod ruleset;


pub use assigner::{MAX_CATEGORY_DEPTH, assign_hierarchy, assign_hierarchy_in_place};
pub use outline::Outline;
pub use ruleset::Ruleset;
