//! Output formatting module

use carlist_app::query_service::CatalogReport;
use carlist_app::render::render_reports;
use carlist_types::{OutputFormat, Result};

pub fn output_reports(output_format: OutputFormat, reports: &[CatalogReport<'_>]) -> Result<()> {
    let content = render_reports(reports, output_format)?;
    println!("{}", content);
    Ok(())
}

pub fn output_plate_check(value: &str, valid: bool) {
    if valid {
        println!("{}: valid registration number", value);
    } else {
        println!(
            "{}: invalid (1-7 characters from 0-9 and A-Z required)",
            value
        );
    }
}
