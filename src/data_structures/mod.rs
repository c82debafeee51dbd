pub mod index_priority_queue;

pub use index_priority_queue::{IndexedPriorityQueue, MinPriorityQueue};
