//! Deep links into the hosted reservation engine

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::config::BookingConfig;
use crate::error::AppError;
use crate::i18n::Lang;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BookingRequest {
    pub arrive: NaiveDate,
    pub depart: NaiveDate,
    pub room: String,
    pub lang: Lang,
    pub adults: u32,
    pub children: u32,
    pub rooms: u32,
}

impl BookingRequest {
    /// Suggested stay for `room`: arrival after the configured lead days, for the configured nights
    pub fn default_stay(today: NaiveDate, room: &str, lang: Lang, config: &BookingConfig) -> Self {
        let arrive = today + Duration::days(i64::from(config.lead_days));
        let depart = arrive + Duration::days(i64::from(config.nights.max(1)));
        Self {
            arrive,
            depart,
            room: room.to_string(),
            lang,
            adults: 1,
            children: 0,
            rooms: 1,
        }
    }

    /// Whole-villa booking used by the header button
    pub fn villa(today: NaiveDate, lang: Lang, config: &BookingConfig) -> Self {
        Self::default_stay(today, &config.villa_room, lang, config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.depart <= self.arrive {
            return Err(AppError::Validation(
                "Departure must be after arrival".to_string(),
            ));
        }
        if self.adults == 0 {
            return Err(AppError::Validation(
                "At least one adult is required".to_string(),
            ));
        }
        if self.rooms == 0 {
            return Err(AppError::Validation(
                "At least one room is required".to_string(),
            ));
        }
        if self.room.trim().is_empty() {
            return Err(AppError::Validation("Room code is empty".to_string()));
        }
        Ok(())
    }

    pub fn nights(&self) -> i64 {
        (self.depart - self.arrive).num_days()
    }

    /// Reservation engine URL; parameters are emitted in alphabetical order
    pub fn url(&self, config: &BookingConfig) -> String {
        let params = [
            ("adult", self.adults.to_string()),
            ("arrive", self.arrive.format("%Y-%m-%d").to_string()),
            ("chain", config.chain.clone()),
            ("child", self.children.to_string()),
            ("currency", config.currency.clone()),
            ("depart", self.depart.format("%Y-%m-%d").to_string()),
            ("hotel", config.hotel.clone()),
            ("level", config.level.clone()),
            ("locale", self.lang.booking_locale().to_string()),
            ("productcurrency", config.currency.clone()),
            ("room", self.room.clone()),
            ("rooms", self.rooms.to_string()),
            ("src", config.source.clone()),
        ];
        let query = params
            .iter()
            .map(|(key, value)| format!("{}={}", key, encode_component(value)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{}", config.base_url, query)
    }
}

/// Percent-encode everything outside the RFC 3986 unreserved set
fn encode_component(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

/// Booking link for today's date in the visitor's local time zone
pub fn booking_url(room: &str, lang: Lang, config: &BookingConfig) -> String {
    let today = chrono::Local::now().date_naive();
    let request = BookingRequest::default_stay(today, room, lang, config);
    if let Err(e) = request.validate() {
        log::warn!("Booking request for room {} is invalid: {}", room, e);
    }
    request.url(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_default_stay_uses_lead_days_and_nights() {
        let config = BookingConfig::default();
        let request = BookingRequest::default_stay(date(2025, 12, 31), "RMS", Lang::En, &config);
        assert_eq!(request.arrive, date(2026, 1, 1));
        assert_eq!(request.depart, date(2026, 1, 2));
        assert_eq!(request.nights(), 1);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_url_parameter_order() {
        let config = BookingConfig::default();
        let request = BookingRequest::default_stay(date(2025, 3, 9), "SNI", Lang::Es, &config);
        assert_eq!(
            request.url(&config),
            "https://be.synxis.com/?adult=1&arrive=2025-03-10&chain=22402&child=0\
             &currency=USD&depart=2025-03-11&hotel=78821&level=hotel&locale=es-MX\
             &productcurrency=USD&room=SNI&rooms=1&src=24C"
        );
    }

    #[test]
    fn test_villa_uses_whole_house_room() {
        let config = BookingConfig::default();
        let request = BookingRequest::villa(date(2025, 6, 1), Lang::En, &config);
        assert_eq!(request.room, "ENS");
        assert!(request.url(&config).contains("&locale=en-US&"));
    }

    #[test]
    fn test_validate_rejects_bad_requests() {
        let config = BookingConfig::default();
        let good = BookingRequest::default_stay(date(2025, 6, 1), "TAL", Lang::En, &config);

        let mut same_day = good.clone();
        same_day.depart = same_day.arrive;
        assert!(matches!(same_day.validate(), Err(AppError::Validation(_))));

        let mut no_adults = good.clone();
        no_adults.adults = 0;
        assert!(no_adults.validate().is_err());

        let mut no_rooms = good;
        no_rooms.rooms = 0;
        assert!(no_rooms.validate().is_err());
    }

    #[test]
    fn test_zero_nights_config_still_books_one_night() {
        let config = BookingConfig {
            nights: 0,
            ..BookingConfig::default()
        };
        let request = BookingRequest::default_stay(date(2025, 6, 1), "CRE", Lang::En, &config);
        assert_eq!(request.nights(), 1);
    }

    #[test]
    fn test_encode_component() {
        assert_eq!(encode_component("ENS"), "ENS");
        assert_eq!(encode_component("a b&c"), "a%20b%26c");
    }
}
