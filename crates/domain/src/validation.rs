//! Declarative endpoint parameter validation
//!
//! Each endpoint type carries a static rule table. Validation applies every
//! rule independently and collects all violations, so a client can correct
//! its request in a single round trip. Optional fields absent from the input
//! receive their declared defaults, but only on the success path.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::value_objects::{
    ConstructorId, DriverId, LapNumber, RaceRound, SeasonYear, StandingsKind,
};

/// A single field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// The parameter name the failure refers to
    pub field: String,
    /// Human-readable description of the constraint that was violated
    pub message: String,
}

impl FieldError {
    fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

/// Raw request parameters merged from path and query sources.
///
/// Later insertions win on key collision, so callers insert query
/// parameters first and path parameters last to give paths precedence.
#[derive(Debug, Clone, Default)]
pub struct RawParams(BTreeMap<String, String>);

impl RawParams {
    /// Create an empty parameter map
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a parameter, overwriting any earlier value for the same key
    #[must_use]
    pub fn with(mut self, name: &str, value: impl Into<String>) -> Self {
        self.0.insert(name.to_string(), value.into());
        self
    }

    /// Look up a parameter by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }
}

/// Which typed constraint applies to a field
#[derive(Debug, Clone, Copy)]
enum FieldKind {
    Year,
    Round,
    Lap,
    DriverId,
    ConstructorId,
    StandingsType,
}

impl FieldKind {
    /// The message reported when a present value violates the constraint
    const fn violation_message(self) -> &'static str {
        match self {
            Self::Year => "Year must be a 4-digit year or \"current\"",
            Self::Round => "Round must be a positive integer",
            Self::Lap => "Lap must be a positive integer",
            Self::DriverId => "Driver ID cannot be empty",
            Self::ConstructorId => "Constructor ID cannot be empty",
            Self::StandingsType => "Type must be \"drivers\" or \"constructors\"",
        }
    }
}

/// One row of a schema's rule table
#[derive(Debug, Clone, Copy)]
struct FieldRule {
    name: &'static str,
    kind: FieldKind,
    required: bool,
    default: Option<&'static str>,
}

impl FieldRule {
    const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: true,
            default: None,
        }
    }

    const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
            default: None,
        }
    }

    const fn defaulted(name: &'static str, kind: FieldKind, default: &'static str) -> Self {
        Self {
            name,
            kind,
            required: false,
            default: Some(default),
        }
    }
}

const YEAR: FieldRule = FieldRule::required("year", FieldKind::Year);
const ROUND: FieldRule = FieldRule::required("round", FieldKind::Round);
const YEAR_DEFAULT_CURRENT: FieldRule = FieldRule::defaulted("year", FieldKind::Year, "current");

const NO_RULES: &[FieldRule] = &[];
const YEAR_ONLY: &[FieldRule] = &[YEAR];
const YEAR_AND_ROUND: &[FieldRule] = &[YEAR, ROUND];
const LAP_TIMES_RULES: &[FieldRule] = &[YEAR, ROUND, FieldRule::optional("lap", FieldKind::Lap)];
const DRIVERS_RULES: &[FieldRule] = &[YEAR_DEFAULT_CURRENT];
const DRIVER_RULES: &[FieldRule] = &[YEAR, FieldRule::required("driverId", FieldKind::DriverId)];
const CONSTRUCTORS_RULES: &[FieldRule] = &[YEAR_DEFAULT_CURRENT];
const CONSTRUCTOR_RULES: &[FieldRule] = &[
    YEAR,
    FieldRule::required("constructorId", FieldKind::ConstructorId),
];
const STANDINGS_RULES: &[FieldRule] = &[
    YEAR,
    FieldRule::defaulted("type", FieldKind::StandingsType, "drivers"),
];

/// Validation schema for a single endpoint type.
///
/// Schemas are a closed enum rather than a runtime string-keyed registry, so
/// an unknown schema is a compile error instead of a startup failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointSchema {
    /// `/seasons` — no parameters
    Seasons,
    /// `/seasons/:year`
    Season,
    /// `/races/:year`
    Races,
    /// `/races/:year/:round`
    Race,
    /// `/qualifying/:year/:round`
    Qualifying,
    /// `/laps/:year/:round` with optional lap
    LapTimes,
    /// `/pitstops/:year/:round`
    PitStops,
    /// `/drivers` with optional year defaulting to `current`
    Drivers,
    /// `/drivers/:year/:driverId`
    Driver,
    /// `/constructors` with optional year defaulting to `current`
    Constructors,
    /// `/constructors/:year/:constructorId`
    Constructor,
    /// `/standings/:year` with optional type defaulting to `drivers`
    Standings,
    /// `/results/:year/:round`
    Results,
}

impl EndpointSchema {
    fn rules(self) -> &'static [FieldRule] {
        match self {
            Self::Seasons => NO_RULES,
            Self::Season | Self::Races => YEAR_ONLY,
            Self::Race | Self::Qualifying | Self::PitStops | Self::Results => YEAR_AND_ROUND,
            Self::LapTimes => LAP_TIMES_RULES,
            Self::Drivers => DRIVERS_RULES,
            Self::Driver => DRIVER_RULES,
            Self::Constructors => CONSTRUCTORS_RULES,
            Self::Constructor => CONSTRUCTOR_RULES,
            Self::Standings => STANDINGS_RULES,
        }
    }

    /// Validate raw parameters against this schema.
    ///
    /// All field violations are collected; defaults are applied for absent
    /// optional fields before the validated set is returned.
    pub fn validate(self, raw: &RawParams) -> Result<ValidatedParams, Vec<FieldError>> {
        let mut errors = Vec::new();
        let mut params = ValidatedParams::default();

        for rule in self.rules() {
            let value = raw.get(rule.name).or(rule.default);
            match value {
                Some(value) => {
                    if params.apply(rule.kind, value).is_err() {
                        errors.push(FieldError::new(rule.name, rule.kind.violation_message()));
                    }
                }
                None if rule.required => errors.push(FieldError::new(rule.name, "Required")),
                None => {}
            }
        }

        if errors.is_empty() { Ok(params) } else { Err(errors) }
    }
}

/// Typed, normalized parameter set produced by successful validation.
///
/// Handlers read the fields they registered rules for; re-validation never
/// happens downstream.
#[derive(Debug, Clone, Default)]
pub struct ValidatedParams {
    pub year: Option<SeasonYear>,
    pub round: Option<RaceRound>,
    pub lap: Option<LapNumber>,
    pub driver_id: Option<DriverId>,
    pub constructor_id: Option<ConstructorId>,
    pub standings_type: Option<StandingsKind>,
}

impl ValidatedParams {
    fn apply(&mut self, kind: FieldKind, value: &str) -> Result<(), crate::DomainError> {
        match kind {
            FieldKind::Year => self.year = Some(value.parse()?),
            FieldKind::Round => self.round = Some(value.parse()?),
            FieldKind::Lap => self.lap = Some(value.parse()?),
            FieldKind::DriverId => self.driver_id = Some(value.parse()?),
            FieldKind::ConstructorId => self.constructor_id = Some(value.parse()?),
            FieldKind::StandingsType => self.standings_type = Some(value.parse()?),
        }
        Ok(())
    }

    /// The normalized parameters as sorted name/value pairs.
    ///
    /// Used both for request signatures and for echoing parameters in the
    /// response envelope; names follow the public API's camelCase spelling.
    #[must_use]
    pub fn pairs(&self) -> BTreeMap<&'static str, String> {
        let mut pairs = BTreeMap::new();
        if let Some(year) = self.year {
            pairs.insert("year", year.to_string());
        }
        if let Some(round) = self.round {
            pairs.insert("round", round.to_string());
        }
        if let Some(lap) = self.lap {
            pairs.insert("lap", lap.to_string());
        }
        if let Some(driver_id) = &self.driver_id {
            pairs.insert("driverId", driver_id.to_string());
        }
        if let Some(constructor_id) = &self.constructor_id {
            pairs.insert("constructorId", constructor_id.to_string());
        }
        if let Some(kind) = self.standings_type {
            pairs.insert("type", kind.to_string());
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seasons_schema_accepts_empty_input() {
        let params = EndpointSchema::Seasons.validate(&RawParams::new()).unwrap();
        assert!(params.year.is_none());
    }

    #[test]
    fn season_schema_requires_year() {
        let errors = EndpointSchema::Season
            .validate(&RawParams::new())
            .unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "year");
        assert_eq!(errors[0].message, "Required");
    }

    #[test]
    fn season_schema_accepts_current() {
        let raw = RawParams::new().with("year", "current");
        let params = EndpointSchema::Season.validate(&raw).unwrap();
        assert_eq!(params.year, Some(SeasonYear::Current));
    }

    #[test]
    fn season_schema_rejects_bad_year_with_field_name() {
        let raw = RawParams::new().with("year", "invalid");
        let errors = EndpointSchema::Season.validate(&raw).unwrap_err();
        assert_eq!(errors[0].field, "year");
        assert_eq!(errors[0].message, "Year must be a 4-digit year or \"current\"");
    }

    #[test]
    fn race_schema_collects_all_violations() {
        let raw = RawParams::new().with("year", "bad").with("round", "also-bad");
        let errors = EndpointSchema::Race.validate(&raw).unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["year", "round"]);
    }

    #[test]
    fn drivers_schema_defaults_year_to_current() {
        let params = EndpointSchema::Drivers.validate(&RawParams::new()).unwrap();
        assert_eq!(params.year, Some(SeasonYear::Current));
    }

    #[test]
    fn drivers_schema_keeps_explicit_year() {
        let raw = RawParams::new().with("year", "2019");
        let params = EndpointSchema::Drivers.validate(&raw).unwrap();
        assert_eq!(params.year, Some(SeasonYear::Year(2019)));
    }

    #[test]
    fn standings_schema_defaults_type_to_drivers() {
        let raw = RawParams::new().with("year", "2023");
        let params = EndpointSchema::Standings.validate(&raw).unwrap();
        assert_eq!(params.standings_type, Some(StandingsKind::Drivers));
    }

    #[test]
    fn standings_schema_rejects_unknown_type() {
        let raw = RawParams::new().with("year", "2023").with("type", "invalid");
        let errors = EndpointSchema::Standings.validate(&raw).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "type");
    }

    #[test]
    fn lap_times_schema_accepts_optional_lap() {
        let raw = RawParams::new().with("year", "2024").with("round", "5");
        let params = EndpointSchema::LapTimes.validate(&raw).unwrap();
        assert!(params.lap.is_none());

        let raw = raw.with("lap", "12");
        let params = EndpointSchema::LapTimes.validate(&raw).unwrap();
        assert_eq!(params.lap.map(LapNumber::value), Some(12));
    }

    #[test]
    fn lap_times_schema_rejects_bad_lap() {
        let raw = RawParams::new()
            .with("year", "2024")
            .with("round", "5")
            .with("lap", "abc");
        let errors = EndpointSchema::LapTimes.validate(&raw).unwrap_err();
        assert_eq!(errors[0].field, "lap");
        assert_eq!(errors[0].message, "Lap must be a positive integer");
    }

    #[test]
    fn driver_schema_rejects_empty_id() {
        let raw = RawParams::new().with("year", "2024").with("driverId", "");
        let errors = EndpointSchema::Driver.validate(&raw).unwrap_err();
        assert_eq!(errors[0].field, "driverId");
        assert_eq!(errors[0].message, "Driver ID cannot be empty");
    }

    #[test]
    fn later_insertion_wins_on_collision() {
        let raw = RawParams::new().with("year", "2020").with("year", "2021");
        assert_eq!(raw.get("year"), Some("2021"));
    }

    #[test]
    fn pairs_use_camel_case_names() {
        let raw = RawParams::new().with("year", "2024").with("driverId", "alonso");
        let params = EndpointSchema::Driver.validate(&raw).unwrap();
        let pairs = params.pairs();
        assert_eq!(pairs.get("driverId").map(String::as_str), Some("alonso"));
        assert_eq!(pairs.get("year").map(String::as_str), Some("2024"));
    }

    #[test]
    fn defaults_are_not_applied_on_failure() {
        let raw = RawParams::new().with("year", "2023").with("type", "nope");
        let result = EndpointSchema::Standings.validate(&raw);
        assert!(result.is_err());
    }
}
