pub mod amount;
pub mod error;
pub mod fixture;
pub mod invoice;
pub mod params;
pub mod primitives;
pub mod transaction;
