pub mod common;
pub mod demangle;
pub mod map;
pub mod search;
pub mod selftest;
pub mod validate;
