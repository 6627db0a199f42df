mod category;
mod inventory;
mod order;
mod supplier;

pub use category::{Category, CreateCategory};
pub use inventory::{InventoryItem, InventoryItemWithNames, UpsertInventoryItem, UpsertOutcome};
pub use order::{CreateOrder, Order, OrderLine};
pub use supplier::Supplier;
