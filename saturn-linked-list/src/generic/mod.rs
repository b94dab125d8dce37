pub mod arena;
pub mod cursor;
pub mod iter;
pub mod push_pop;
#[cfg(feature = "serde")]
pub mod serde;
pub mod singly_linked_list;
