pub mod deliveries;
pub mod delivery_progress;
pub mod enums;
