//! Query Service - catalog use cases
//!
//! Wraps the domain filters into titled reports for the CLI.

use carlist_domain::model::VehicleRecord;
use carlist_domain::service::CatalogQuery;
use serde::Serialize;

use crate::config::Config;

/// Titled result of a single catalog query
#[derive(Debug, Clone, Serialize)]
pub struct CatalogReport<'a> {
    pub title: String,
    pub records: Vec<&'a VehicleRecord>,
}

impl CatalogReport<'_> {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

pub fn all_records<'a>(query: &CatalogQuery<'a>) -> CatalogReport<'a> {
    CatalogReport {
        title: format!("Catalog ({} records)", query.len()),
        records: query.records().iter().collect(),
    }
}

pub fn by_brand<'a>(query: &CatalogQuery<'a>, brand: &str) -> CatalogReport<'a> {
    CatalogReport {
        title: format!("Brand: {}", brand),
        records: query.by_brand(brand),
    }
}

pub fn by_model_older_than<'a>(
    query: &CatalogQuery<'a>,
    model: &str,
    years: i32,
) -> CatalogReport<'a> {
    CatalogReport {
        title: format!("Model: {} older than {} years", model, years),
        records: query.by_model_older_than(model, years),
    }
}

pub fn by_year_and_price_above<'a>(
    query: &CatalogQuery<'a>,
    year: i32,
    price: i64,
) -> CatalogReport<'a> {
    CatalogReport {
        title: format!("Year: {} priced above {}", year, price),
        records: query.by_year_and_price_above(year, price),
    }
}

/// The three demo queries, in order, with parameters from `config`
pub fn demo_reports<'a>(query: &CatalogQuery<'a>, config: &Config) -> Vec<CatalogReport<'a>> {
    vec![
        by_brand(query, &config.demo_brand),
        by_model_older_than(query, &config.demo_model, config.demo_min_age_years),
        by_year_and_price_above(query, config.demo_year, config.demo_min_price),
    ]
}
