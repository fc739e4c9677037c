pub mod favorite;

pub use favorite::*;
