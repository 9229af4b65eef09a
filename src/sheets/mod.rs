// src/sheets/mod.rs

// --- Public Interface ---
pub mod codec;
pub mod controller;
pub mod definitions;
pub mod events;
pub mod plugin;
pub mod resources;
pub mod store;

pub(crate) mod systems;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use controller::EditController;
pub use plugin::SheetsPlugin;
