pub mod domain;
pub mod fixtures;
pub mod modules;
pub mod shared;
