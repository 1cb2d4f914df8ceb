// Services module
pub mod catalog;
pub mod config_service;
pub mod destination_service;
pub mod move_service;
pub mod picking_service;
