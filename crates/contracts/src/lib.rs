pub mod health;
pub mod menu;
pub mod reservation;
pub mod restaurant;
