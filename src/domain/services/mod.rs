pub mod battle;
pub mod catalog;
pub mod roster;
