pub mod auth;
pub mod games;
pub mod health;
pub mod players;
pub mod routes;
pub mod stats;
