pub mod delivery_statuses;
pub mod delivery_times;
pub mod packaging_types;
