pub mod amount;
pub mod clock;
pub mod fee_calculator;
pub mod parking_session;
pub mod vehicle;

pub use amount::Amount;
pub use fee_calculator::{RateTable, ValidationError, calculate};
pub use parking_session::ParkingSession;
pub use vehicle::VehicleType;
