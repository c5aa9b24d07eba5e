pub mod cat;
pub mod health;
pub mod owner;
