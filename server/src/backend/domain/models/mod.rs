pub mod entry;
pub mod goal;
