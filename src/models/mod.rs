mod category;
mod document;
pub mod quantity;

pub use category::Category;
#[allow(unused_imports)]
pub use document::{CategoryEntries, CustomItem, InventoryDocument};
