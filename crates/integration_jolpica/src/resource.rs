//! Upstream resource templates
//!
//! The proxy only ever requests a fixed vocabulary of upstream resources;
//! path construction is parameter substitution into these templates, never
//! free-form concatenation of client input.

use domain::value_objects::{ConstructorId, DriverId, LapNumber, RaceRound, SeasonYear, StandingsKind};

/// An addressable resource on the upstream API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resource {
    /// All seasons ever held
    Seasons,
    /// One season's race table (also serves the race listing)
    Season { year: SeasonYear },
    /// A single race
    Race { year: SeasonYear, round: RaceRound },
    /// Qualifying results for a race
    Qualifying { year: SeasonYear, round: RaceRound },
    /// Lap times for a race, optionally narrowed to one lap
    Laps {
        year: SeasonYear,
        round: RaceRound,
        lap: Option<LapNumber>,
    },
    /// Pit stops for a race
    PitStops { year: SeasonYear, round: RaceRound },
    /// Drivers who took part in a season
    Drivers { year: SeasonYear },
    /// A single driver within a season
    Driver {
        year: SeasonYear,
        driver_id: DriverId,
    },
    /// Constructors who took part in a season
    Constructors { year: SeasonYear },
    /// A single constructor within a season
    Constructor {
        year: SeasonYear,
        constructor_id: ConstructorId,
    },
    /// Championship standings for a season
    Standings {
        year: SeasonYear,
        kind: StandingsKind,
    },
    /// Race results
    Results { year: SeasonYear, round: RaceRound },
}

impl Resource {
    /// The upstream request path for this resource
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Seasons => "/seasons.json".to_string(),
            Self::Season { year } => format!("/{year}.json"),
            Self::Race { year, round } => format!("/{year}/{round}.json"),
            Self::Qualifying { year, round } => format!("/{year}/{round}/qualifying.json"),
            Self::Laps {
                year,
                round,
                lap: Some(lap),
            } => format!("/{year}/{round}/laps/{lap}.json"),
            Self::Laps {
                year,
                round,
                lap: None,
            } => format!("/{year}/{round}/laps.json"),
            Self::PitStops { year, round } => format!("/{year}/{round}/pitstops.json"),
            Self::Drivers { year } => format!("/{year}/drivers.json"),
            Self::Driver { year, driver_id } => format!("/{year}/drivers/{driver_id}.json"),
            Self::Constructors { year } => format!("/{year}/constructors.json"),
            Self::Constructor {
                year,
                constructor_id,
            } => format!("/{year}/constructors/{constructor_id}.json"),
            Self::Standings { year, kind } => format!("/{year}/{}.json", kind.path_segment()),
            Self::Results { year, round } => format!("/{year}/{round}/results.json"),
        }
    }
}
