//! Vehicle record and its builder

use serde::Serialize;
use tracing::{debug, warn};

use carlist_types::{Color, Error, Result};

use super::registration;
use super::IdSequence;

/// A single catalog entry.
///
/// Identity, model, brand and production year are fixed once built.
/// Color, price and registration number can be changed by the owner.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct VehicleRecord {
    id: u64,
    model: String,
    brand: String,
    manufacture_year: i32,
    color: Color,
    price: i64,
    registration_number: String,
}

impl VehicleRecord {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn manufacture_year(&self) -> i32 {
        self.manufacture_year
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn price(&self) -> i64 {
        self.price
    }

    pub fn registration_number(&self) -> &str {
        &self.registration_number
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Negative prices are stored as 0
    pub fn set_price(&mut self, price: i64) {
        self.price = clamp_price(price);
    }

    /// Replace the registration number with a freshly generated one
    pub fn regenerate_registration_number(&mut self) -> &str {
        self.registration_number = registration::generate();
        &self.registration_number
    }

    /// Years elapsed between production and `current_year`
    pub fn age_in(&self, current_year: i32) -> i64 {
        i64::from(current_year) - i64::from(self.manufacture_year)
    }
}

impl std::fmt::Display for VehicleRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "#{} {} '{}' year={} color={} price={} reg={}",
            self.id,
            self.brand,
            self.model,
            self.manufacture_year,
            self.color,
            self.price,
            self.registration_number
        )
    }
}

fn clamp_price(price: i64) -> i64 {
    if price < 0 {
        warn!(price, "negative price clamped to 0");
        0
    } else {
        price
    }
}

fn require_text(value: String, field: &str) -> Result<String> {
    if value.is_empty() {
        return Err(Error::invalid_argument(format!("{} is required", field)));
    }
    Ok(value)
}

/// Staged construction of a [`VehicleRecord`].
///
/// Required fields are checked in [`VehicleBuilder::new`]; the registration
/// number is checked when supplied and generated in [`VehicleBuilder::build`]
/// when it was not.
#[derive(Debug, Clone)]
pub struct VehicleBuilder {
    id: u64,
    model: String,
    brand: String,
    manufacture_year: i32,
    color: Color,
    price: i64,
    registration_number: Option<String>,
}

impl VehicleBuilder {
    /// Start a record, validating the production year against the local clock
    pub fn new(
        ids: &IdSequence,
        model: impl Into<String>,
        brand: impl Into<String>,
        manufacture_year: i32,
        color: Color,
    ) -> Result<Self> {
        Self::new_as_of(ids, model, brand, manufacture_year, color, crate::current_year())
    }

    /// Start a record, validating the production year against `current_year`.
    ///
    /// The id is drawn from `ids` before any check, so a rejected record still
    /// consumes one.
    pub fn new_as_of(
        ids: &IdSequence,
        model: impl Into<String>,
        brand: impl Into<String>,
        manufacture_year: i32,
        color: Color,
        current_year: i32,
    ) -> Result<Self> {
        let id = ids.next_id();
        let model = require_text(model.into(), "Model")?;
        let brand = require_text(brand.into(), "Brand")?;
        if manufacture_year > current_year {
            return Err(Error::invalid_argument("Invalid production year"));
        }

        Ok(Self {
            id,
            model,
            brand,
            manufacture_year,
            color,
            price: 0,
            registration_number: None,
        })
    }

    pub fn with_price(mut self, price: i64) -> Self {
        self.price = clamp_price(price);
        self
    }

    pub fn with_registration_number(mut self, value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if !registration::is_valid(&value) {
            return Err(Error::invalid_argument(format!(
                "Invalid registration number: {:?}",
                value
            )));
        }
        self.registration_number = Some(value);
        Ok(self)
    }

    pub fn build(self) -> VehicleRecord {
        let generated = self.registration_number.is_none();
        let registration_number = self
            .registration_number
            .unwrap_or_else(registration::generate);
        debug!(id = self.id, generated, "vehicle record built");

        VehicleRecord {
            id: self.id,
            model: self.model,
            brand: self.brand,
            manufacture_year: self.manufacture_year,
            color: self.color,
            price: self.price,
            registration_number,
        }
    }
}
