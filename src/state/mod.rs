pub mod persistence;

pub use persistence::{load_inventory, load_plan, save_inventory, save_plan};
