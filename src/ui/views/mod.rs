// Views module, one per screen
pub mod confirmation;
pub mod main_menu;
pub mod picking;
pub mod result;
pub mod scan_destination;
pub mod select_mode;
