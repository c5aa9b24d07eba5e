pub mod cat;
pub mod owner;
