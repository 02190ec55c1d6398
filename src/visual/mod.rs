pub mod cursor;
pub mod displacement;
pub mod layout;
pub mod plugin;
pub mod theme;
pub mod tracker;
pub mod utils;
