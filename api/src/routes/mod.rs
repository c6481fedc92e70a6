pub mod health;
pub mod personas;
pub mod query;
