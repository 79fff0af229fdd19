pub mod analyst;
pub mod deck;
pub mod slide;
pub mod topic;
