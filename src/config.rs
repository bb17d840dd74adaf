use anyhow::{bail, Context, Result};
use reqwest::Url;
use std::env;

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/api/book_appointment/";

#[derive(Debug, Clone, PartialEq)]
pub struct BookingConfig {
    /// Booking-creation endpoint every submission is POSTed to
    pub endpoint: String,
    /// Slot ids the host screen offers for booking
    pub slots: Vec<String>,
    /// ISO code of the phone input's initial country
    pub phone_country: String,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            slots: vec![
                "slot-1".to_string(),
                "slot-2".to_string(),
                "slot-3".to_string(),
            ],
            phone_country: "in".to_string(),
        }
    }
}

impl BookingConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let endpoint = lookup("BOOKING_ENDPOINT")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.endpoint);
        let url = Url::parse(&endpoint)
            .with_context(|| format!("BOOKING_ENDPOINT is not a valid URL: {endpoint:?}"))?;
        if !matches!(url.scheme(), "http" | "https") || url.host().is_none() {
            bail!("BOOKING_ENDPOINT must be an http(s) URL with a host, got {endpoint:?}");
        }

        let slots = lookup("BOOKING_SLOTS")
            .map(|v| {
                v.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(String::from)
                    .collect::<Vec<_>>()
            })
            .filter(|slots| !slots.is_empty())
            .unwrap_or(defaults.slots);

        let phone_country = lookup("BOOKING_PHONE_COUNTRY")
            .map(|v| v.trim().to_lowercase())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.phone_country);

        Ok(Self {
            endpoint,
            slots,
            phone_country,
        })
    }
}
