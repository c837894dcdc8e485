pub mod health;
pub mod languages;
pub mod page;
pub mod speech;
