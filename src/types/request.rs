use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::fields::{as_count, display_value, is_truthy, option_truthy, provided};
use crate::error::{Result, TravelError};

const DEFAULT_FLIGHT_CURRENCY: &str = "USD";

/// Travel details posted to the plan endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TravelRequest {
    pub origin: Option<String>,
    pub destination: Option<String>,
    /// Free text or a list of city names
    #[serde(default)]
    pub cities_to_visit: Option<Value>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    /// Opaque budget, either "2000 USD" or a bare number
    #[serde(default)]
    pub budget: Option<Value>,
    #[serde(default)]
    pub num_adults: Option<Value>,
    #[serde(default)]
    pub num_children: Option<Value>,
    #[serde(default)]
    pub children_ages: Option<Value>,
    pub food_preference: Option<String>,
    pub hotel_preference: Option<String>,
    #[serde(default)]
    pub additional_services: Option<Vec<String>>,
    pub travel_method: Option<String>,
    pub flight_class: Option<String>,
    #[serde(default)]
    pub cruise_details: Option<Value>,
    /// Rate sentence resolved earlier through the currency endpoint
    pub current_currency_rate: Option<String>,
}

/// A [`TravelRequest`] whose essential fields are known to be present.
#[derive(Debug, Clone, PartialEq)]
pub struct TripDetails<'a> {
    pub origin: &'a str,
    pub destination: &'a str,
    pub start_date: &'a str,
    pub end_date: &'a str,
    pub budget: String,
    pub adults: String,
    pub children: u32,
    pub children_ages: String,
    pub cities: Option<String>,
    pub food_preference: Option<&'a str>,
    pub hotel_preference: Option<&'a str>,
    pub travel_method: Option<&'a str>,
    pub flight_class: Option<&'a str>,
    pub cruise_details: Option<String>,
    pub additional_services: &'a [String],
    pub currency_rate: Option<&'a str>,
}

impl TravelRequest {
    /// Check the essential fields and borrow a validated view of the request.
    pub fn validate(&self) -> Result<TripDetails<'_>> {
        let essentials = [
            ("origin", provided(&self.origin).is_some()),
            ("destination", provided(&self.destination).is_some()),
            ("start_date", provided(&self.start_date).is_some()),
            ("end_date", provided(&self.end_date).is_some()),
            ("budget", option_truthy(self.budget.as_ref())),
            ("num_adults", option_truthy(self.num_adults.as_ref())),
        ];
        ensure_present(
            "Missing essential travel details (origin, destination, dates, budget, number of adults)",
            &essentials,
        )?;

        let num_adults = self.num_adults.as_ref().unwrap_or(&Value::Null);
        if let Some(adults) = as_count(num_adults) {
            if adults < 1 {
                return Err(TravelError::InvalidRequest(
                    "num_adults must be at least 1".to_string(),
                ));
            }
        }

        Ok(TripDetails {
            origin: provided(&self.origin).unwrap_or_default(),
            destination: provided(&self.destination).unwrap_or_default(),
            start_date: provided(&self.start_date).unwrap_or_default(),
            end_date: provided(&self.end_date).unwrap_or_default(),
            budget: self.budget.as_ref().map(display_value).unwrap_or_default(),
            adults: display_value(num_adults),
            children: self.child_count()?,
            children_ages: self
                .children_ages
                .as_ref()
                .map(display_value)
                .unwrap_or_default(),
            cities: self
                .cities_to_visit
                .as_ref()
                .filter(|cities| is_truthy(cities))
                .map(display_value),
            food_preference: provided(&self.food_preference),
            hotel_preference: provided(&self.hotel_preference),
            travel_method: provided(&self.travel_method),
            flight_class: provided(&self.flight_class),
            cruise_details: self
                .cruise_details
                .as_ref()
                .filter(|details| is_truthy(details))
                .map(display_value),
            additional_services: self.additional_services.as_deref().unwrap_or(&[]),
            currency_rate: provided(&self.current_currency_rate),
        })
    }

    fn child_count(&self) -> Result<u32> {
        let Some(raw) = self.num_children.as_ref() else {
            return Ok(0);
        };
        let count = as_count(raw).ok_or_else(|| {
            TravelError::InvalidRequest(format!(
                "num_children must be a whole number, got {}",
                raw
            ))
        })?;
        Ok(u32::try_from(count.max(0)).unwrap_or(u32::MAX))
    }
}

/// Flight search parameters posted by the client.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FlightSearchRequest {
    pub origin_iata: Option<String>,
    pub destination_iata: Option<String>,
    /// `YYYY-MM-DD`
    pub outbound_date: Option<String>,
    /// `YYYY-MM-DD`
    pub return_date: Option<String>,
    pub currency: Option<String>,
}

/// Validated flight query sent to the search provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightQuery {
    pub origin: String,
    pub destination: String,
    pub outbound_date: String,
    pub return_date: String,
    pub currency: String,
}

impl FlightSearchRequest {
    pub fn validate(&self) -> Result<FlightQuery> {
        ensure_present(
            "Missing flight search details (origin IATA, destination IATA, outbound_date, return_date)",
            &[
                ("origin_iata", provided(&self.origin_iata).is_some()),
                ("destination_iata", provided(&self.destination_iata).is_some()),
                ("outbound_date", provided(&self.outbound_date).is_some()),
                ("return_date", provided(&self.return_date).is_some()),
            ],
        )?;

        Ok(FlightQuery {
            origin: self.origin_iata.clone().unwrap_or_default(),
            destination: self.destination_iata.clone().unwrap_or_default(),
            outbound_date: self.outbound_date.clone().unwrap_or_default(),
            return_date: self.return_date.clone().unwrap_or_default(),
            currency: provided(&self.currency)
                .unwrap_or(DEFAULT_FLIGHT_CURRENCY)
                .to_uppercase(),
        })
    }
}

/// Origin/destination pair for travel-method suggestions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MethodSuggestionRequest {
    pub origin: Option<String>,
    pub destination: Option<String>,
}

impl MethodSuggestionRequest {
    pub fn validate(&self) -> Result<(&str, &str)> {
        match (provided(&self.origin), provided(&self.destination)) {
            (Some(origin), Some(destination)) => Ok((origin, destination)),
            _ => Err(TravelError::MissingFields(
                "Missing origin or destination for travel method suggestion.".to_string(),
            )),
        }
    }
}

/// City whose airport code should be looked up.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IataLookupRequest {
    pub city_name: Option<String>,
}

impl IataLookupRequest {
    pub fn validate(&self) -> Result<&str> {
        provided(&self.city_name).ok_or_else(|| {
            TravelError::MissingFields("Missing city_name for IATA code lookup.".to_string())
        })
    }
}

/// Currency pair posted to the live-rate endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CurrencyRateRequest {
    pub from_currency: Option<String>,
    pub to_currency: Option<String>,
}

/// Upper-cased currency codes ready for the rate provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyPair {
    pub from: String,
    pub to: String,
}

impl CurrencyRateRequest {
    pub fn validate(&self) -> Result<CurrencyPair> {
        match (provided(&self.from_currency), provided(&self.to_currency)) {
            (Some(from), Some(to)) => Ok(CurrencyPair {
                from: from.trim().to_uppercase(),
                to: to.trim().to_uppercase(),
            }),
            _ => Err(TravelError::MissingFields(
                "Missing from_currency or to_currency for rate lookup.".to_string(),
            )),
        }
    }
}

fn ensure_present(context: &str, fields: &[(&str, bool)]) -> Result<()> {
    let missing: Vec<&str> = fields
        .iter()
        .filter(|(_, present)| !present)
        .map(|(name, _)| *name)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(TravelError::MissingFields(format!(
            "{}. Missing: {}.",
            context,
            missing.join(", ")
        )))
    }
}
