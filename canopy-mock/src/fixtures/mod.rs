pub mod directory;
pub mod snapshots;
