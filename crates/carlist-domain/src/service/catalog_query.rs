//! Read-only filters over a caller-owned catalog

use tracing::debug;

use crate::model::VehicleRecord;

/// Filters a borrowed catalog.
///
/// Every query walks the catalog once and returns references in catalog
/// order. Nothing matching yields an empty list.
#[derive(Debug, Clone, Copy)]
pub struct CatalogQuery<'a> {
    records: &'a [VehicleRecord],
    current_year: i32,
}

impl<'a> CatalogQuery<'a> {
    /// Query `records`, measuring ages against the local clock's year
    pub fn new(records: &'a [VehicleRecord]) -> Self {
        Self::with_current_year(records, crate::current_year())
    }

    pub fn with_current_year(records: &'a [VehicleRecord], current_year: i32) -> Self {
        Self {
            records,
            current_year,
        }
    }

    pub fn records(&self) -> &'a [VehicleRecord] {
        self.records
    }

    pub fn current_year(&self) -> i32 {
        self.current_year
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records whose brand equals `brand` exactly
    pub fn by_brand(&self, brand: &str) -> Vec<&'a VehicleRecord> {
        let found = self.filter(|car| car.brand() == brand);
        debug!(brand, matched = found.len(), "query by brand");
        found
    }

    /// Records of `model` that are more than `years` old
    pub fn by_model_older_than(&self, model: &str, years: i32) -> Vec<&'a VehicleRecord> {
        let current_year = self.current_year;
        let found = self.filter(|car| {
            car.model() == model && car.age_in(current_year) > i64::from(years)
        });
        debug!(model, years, matched = found.len(), "query by model and age");
        found
    }

    /// Records made in `year` priced strictly above `price`
    pub fn by_year_and_price_above(&self, year: i32, price: i64) -> Vec<&'a VehicleRecord> {
        let found = self.filter(|car| car.manufacture_year() == year && car.price() > price);
        debug!(year, price, matched = found.len(), "query by year and price");
        found
    }

    fn filter<P>(&self, predicate: P) -> Vec<&'a VehicleRecord>
    where
        P: Fn(&VehicleRecord) -> bool,
    {
        self.records.iter().filter(|car| predicate(car)).collect()
    }
}
