pub mod aliens;
pub mod collision;
pub mod compute;
pub mod config;
pub mod entities;
pub mod mode;
pub mod projectiles;
pub mod schedule;
