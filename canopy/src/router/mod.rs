pub mod parent;

pub mod util;
