pub mod error;
pub mod fs;
pub mod ncdu;
pub mod tree;
