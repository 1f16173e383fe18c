//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Event, Service, Venue};
use crate::planner::PlanVerdict;

/// Query for a point-to-point reachability check.
#[derive(Debug, Deserialize)]
pub struct ReachRequest {
    /// Departure venue name
    pub from: String,

    /// Session spent at the departure venue
    pub from_session: u32,

    /// Arrival venue name
    pub to: String,

    /// Session to be at the arrival venue for
    pub to_session: u32,
}

/// Response for a reachability check.
#[derive(Debug, Serialize)]
pub struct ReachResponse {
    pub reachable: bool,
}

/// Query for the venues one shuttle away.
#[derive(Debug, Deserialize)]
pub struct DestinationsRequest {
    pub venue: String,
    pub session: u32,
}

/// Response listing direct destinations.
#[derive(Debug, Serialize)]
pub struct DestinationsResponse {
    pub venue: String,
    pub session: u32,
    pub destinations: Vec<String>,
}

/// A shuttle service.
#[derive(Debug, Serialize)]
pub struct ServiceResult {
    pub source: String,
    pub destination: String,
    pub session: u32,
}

impl From<&Service> for ServiceResult {
    fn from(service: &Service) -> Self {
        Self {
            source: service.source().to_string(),
            destination: service.destination().to_string(),
            session: service.session().get(),
        }
    }
}

/// Response listing every service in the timetable.
#[derive(Debug, Serialize)]
pub struct ServicesResponse {
    pub services: Vec<ServiceResult>,
}

/// Response listing every venue in the timetable.
#[derive(Debug, Serialize)]
pub struct VenuesResponse {
    pub venues: Vec<String>,
}

impl<'a> FromIterator<&'a Venue> for VenuesResponse {
    fn from_iter<I: IntoIterator<Item = &'a Venue>>(iter: I) -> Self {
        Self {
            venues: iter.into_iter().map(ToString::to_string).collect(),
        }
    }
}

/// An event, as sent and received over the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventDto {
    /// Venue name
    pub venue: String,

    /// Session number
    pub session: u32,

    /// Act description
    pub act: String,
}

impl From<&Event> for EventDto {
    fn from(event: &Event) -> Self {
        Self {
            venue: event.venue().to_string(),
            session: event.session().get(),
            act: event.act().to_string(),
        }
    }
}

/// Response listing the loaded line-up.
#[derive(Debug, Serialize)]
pub struct LineUpResponse {
    pub events: Vec<EventDto>,
}

/// Request to check a plan of events.
#[derive(Debug, Deserialize)]
pub struct PlanCheckRequest {
    /// Events in the order they are to be attended
    pub events: Vec<EventDto>,
}

/// Response for a plan check.
#[derive(Debug, Serialize)]
pub struct PlanCheckResponse {
    /// Whether the plan can be attended in order
    pub compatible: bool,

    /// `compatible`, `same_session`, `out_of_order` or `unreachable`
    pub verdict: &'static str,

    /// Position of the first event that cannot be attended
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
}

impl From<PlanVerdict> for PlanCheckResponse {
    fn from(verdict: PlanVerdict) -> Self {
        let name = match verdict {
            PlanVerdict::Compatible => "compatible",
            PlanVerdict::SameSession { .. } => "same_session",
            PlanVerdict::OutOfOrder { .. } => "out_of_order",
            PlanVerdict::Unreachable { .. } => "unreachable",
        };

        Self {
            compatible: verdict.is_compatible(),
            verdict: name,
            index: verdict.index(),
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
