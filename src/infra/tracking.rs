//! `gettrack` response records.

use serde::Deserialize;

use crate::domain::TraceEvent;

use super::provider::{decode_records, lenient_string, ProviderError};

#[derive(Debug, Deserialize)]
struct ShipmentDto {
    details: Option<Vec<TrackDetailDto>>,
}

#[derive(Debug, Deserialize)]
struct TrackDetailDto {
    #[serde(default, deserialize_with = "lenient_string")]
    track_occur_date: String,
    #[serde(default, deserialize_with = "lenient_string")]
    track_location: String,
    #[serde(default, deserialize_with = "lenient_string")]
    track_description: String,
}

impl From<TrackDetailDto> for TraceEvent {
    fn from(dto: TrackDetailDto) -> Self {
        Self {
            occurred_at: dto.track_occur_date,
            location: dto.track_location,
            description: dto.track_description,
        }
    }
}

/// Flattens every shipment's details, shipments first then their events.
pub(crate) fn parse_tracking(body: &str) -> Result<Vec<TraceEvent>, ProviderError> {
    let shipments: Vec<ShipmentDto> = decode_records(body)?;
    Ok(shipments
        .into_iter()
        .flat_map(|shipment| shipment.details.unwrap_or_default())
        .map(TraceEvent::from)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_are_flattened_outer_then_inner() {
        let body = r#"{"data": [
            {"tracking_number": "HY1", "details": [
                {"track_occur_date": "2025-03-01 10:00", "track_location": "Shenzhen", "track_description": "a1"},
                {"track_occur_date": "2025-03-02 10:00", "track_location": "Hong Kong", "track_description": "a2"}
            ]},
            {"tracking_number": "HY2", "details": [
                {"track_occur_date": "2025-03-03", "track_location": "LAX", "track_description": "b1"},
                {"track_occur_date": "2025-03-04", "track_location": "LAX", "track_description": "b2"},
                {"track_occur_date": "2025-03-05", "track_location": "NYC", "track_description": "b3"}
            ]}
        ]}"#;

        let events = parse_tracking(body).unwrap();
        let order: Vec<_> = events.iter().map(|e| e.description.as_str()).collect();
        assert_eq!(order, vec!["a1", "a2", "b1", "b2", "b3"]);
        assert_eq!(events[1].location, "Hong Kong");
        assert_eq!(events[0].occurred_at, "2025-03-01 10:00");
    }

    #[test]
    fn shipments_without_details_contribute_nothing() {
        let body = r#"{"data": [{"tracking_number": "HY1"}, {"details": null}, {"details": []}]}"#;
        assert!(parse_tracking(body).unwrap().is_empty());
    }

    #[test]
    fn details_of_the_wrong_shape_are_rejected() {
        let body = r#"{"data": [{"details": "pending"}]}"#;
        assert!(matches!(parse_tracking(body), Err(ProviderError::Parse(_))));
    }
}
