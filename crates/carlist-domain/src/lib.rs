//! Vehicle catalog domain: record construction and catalog queries

pub mod model;
pub mod service;

use chrono::Datelike;

/// Current calendar year from the local clock
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}
