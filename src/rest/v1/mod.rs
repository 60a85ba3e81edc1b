pub mod delivery_locations;
pub mod locations;
pub mod orders;
pub mod products;
pub mod zones;
