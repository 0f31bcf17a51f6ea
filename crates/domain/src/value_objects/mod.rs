//! Value objects for validated request parameters

mod constructor_id;
mod driver_id;
mod lap_number;
mod race_round;
mod season_year;
mod standings_kind;

pub use constructor_id::ConstructorId;
pub use driver_id::DriverId;
pub use lap_number::LapNumber;
pub use race_round::RaceRound;
pub use season_year::SeasonYear;
pub use standings_kind::StandingsKind;
