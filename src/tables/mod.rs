// Static reference data. Loaded once, shared by reference, never mutated.

pub mod combinations;
pub mod digits;
pub mod provinces;
pub mod stars;

pub use stars::{star_table, StarTable, TABLE_VERSION};
