pub mod error;
pub mod pair;
pub mod spanning;
pub mod ugraph;
pub mod union_find;
