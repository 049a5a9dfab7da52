//! Command handlers

use carlist_app::config::Config;
use carlist_app::query_service;
use carlist_app::sample::sample_catalog;
use carlist_domain::model::{registration, IdSequence};
use carlist_domain::service::CatalogQuery;
use carlist_types::{OutputFormat, Result};
use tracing::info;

use crate::cli::{Cli, Commands};
use crate::output::{output_plate_check, output_reports};

pub fn execute(cli: Cli) -> Result<()> {
    execute_with(cli, Config::load)
}

/// Run a command, reading configuration through `load_config` only when needed
fn execute_with<L>(cli: Cli, load_config: L) -> Result<()>
where
    L: FnOnce() -> Result<Config>,
{
    let Cli { command, format, .. } = cli;

    match command.unwrap_or(Commands::Demo) {
        Commands::CheckPlate { value } => {
            output_plate_check(&value, registration::is_valid(&value));
            Ok(())
        }
        Commands::Config { save } => {
            let config = load_config()?;
            if save {
                config.save()?;
                eprintln!("Configuration saved");
            }
            print!("{}", config);
            Ok(())
        }
        Commands::Demo => {
            let config = load_config()?;
            let format = format.unwrap_or(config.output_format);
            with_catalog(|query| {
                output_reports(format, &query_service::demo_reports(query, &config))
            })
        }
        Commands::List => {
            let format = resolve_format(format, load_config)?;
            with_catalog(|query| output_reports(format, &[query_service::all_records(query)]))
        }
        Commands::Brand { brand } => {
            let format = resolve_format(format, load_config)?;
            with_catalog(|query| {
                output_reports(format, &[query_service::by_brand(query, &brand)])
            })
        }
        Commands::Older { model, years } => {
            let format = resolve_format(format, load_config)?;
            with_catalog(|query| {
                output_reports(
                    format,
                    &[query_service::by_model_older_than(query, &model, years)],
                )
            })
        }
        Commands::Priced { year, above } => {
            let format = resolve_format(format, load_config)?;
            with_catalog(|query| {
                output_reports(
                    format,
                    &[query_service::by_year_and_price_above(query, year, above)],
                )
            })
        }
    }
}

/// Flag value wins; the config file is read only when no flag was given
fn resolve_format<L>(flag: Option<OutputFormat>, load_config: L) -> Result<OutputFormat>
where
    L: FnOnce() -> Result<Config>,
{
    match flag {
        Some(format) => Ok(format),
        None => Ok(load_config()?.output_format),
    }
}

/// Seed the sample catalog and hand a query over it to `run`
fn with_catalog<F>(run: F) -> Result<()>
where
    F: FnOnce(&CatalogQuery<'_>) -> Result<()>,
{
    let ids = IdSequence::new();
    let cars = sample_catalog(&ids)?;
    let query = CatalogQuery::new(&cars);
    info!(records = query.len(), year = query.current_year(), "sample catalog seeded");
    run(&query)
}
