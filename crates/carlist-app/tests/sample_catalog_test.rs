//! End-to-end demo queries against the sample catalog

use carlist_app::config::Config;
use carlist_app::query_service::demo_reports;
use carlist_app::render::render_reports;
use carlist_app::sample::sample_catalog;
use carlist_domain::model::IdSequence;
use carlist_domain::service::CatalogQuery;
use carlist_types::OutputFormat;

#[test]
fn test_aston_martin_listing_keeps_catalog_order() {
    let cars = sample_catalog(&IdSequence::new()).unwrap();
    let query = CatalogQuery::new(&cars);

    let models: Vec<&str> = query
        .by_brand("Aston Martin")
        .iter()
        .map(|car| car.model())
        .collect();
    assert_eq!(
        models,
        vec![
            "Valhalla",
            "DBX",
            "DBS Volante",
            "DB11",
            "DB11 AMR",
            "Vantage",
            "DBS Superleggera Volante",
            "Valkyrie",
        ]
    );
    assert!(query.by_brand("BMW").is_empty());
}

#[test]
fn test_old_caymans_as_of_2022() {
    let cars = sample_catalog(&IdSequence::new()).unwrap();
    let query = CatalogQuery::with_current_year(&cars, 2022);

    let old = query.by_model_older_than("Cayman", 3);
    assert_eq!(old.len(), 1);
    assert_eq!(old[0].manufacture_year(), 2015);
    assert_eq!(old[0].registration_number(), "R123NCV");
}

#[test]
fn test_old_caymans_against_clock() {
    let cars = sample_catalog(&IdSequence::new()).unwrap();
    let query = CatalogQuery::new(&cars);

    let old = query.by_model_older_than("Cayman", 3);
    assert!(old.iter().any(|car| car.manufacture_year() == 2015));
    assert!(old.iter().all(|car| car.model() == "Cayman"));
}

#[test]
fn test_expensive_2022_cars() {
    let cars = sample_catalog(&IdSequence::new()).unwrap();
    let query = CatalogQuery::new(&cars);

    let found = query.by_year_and_price_above(2022, 3_000_000);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].model(), "Valkyrie");
    assert_eq!(found[0].price(), 3_500_000);
}

#[test]
fn test_demo_reports_render() {
    let cars = sample_catalog(&IdSequence::new()).unwrap();
    let query = CatalogQuery::with_current_year(&cars, 2022);
    let reports = demo_reports(&query, &Config::default());

    let table = render_reports(&reports, OutputFormat::Table).unwrap();
    assert!(table.contains("Brand: Aston Martin"));
    assert!(table.contains("'Valkyrie'"));
    assert!(table.contains("reg=R123NCV"));

    let json = render_reports(&reports, OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 3);
    assert_eq!(value[2]["records"][0]["model"], "Valkyrie");
}

#[test]
fn test_mutation_after_build() {
    let mut cars = sample_catalog(&IdSequence::new()).unwrap();
    cars[17].set_price(-10);
    assert_eq!(cars[17].price(), 0);

    let query = CatalogQuery::new(&cars);
    assert!(query
        .by_year_and_price_above(2022, 1_000_000)
        .iter()
        .all(|car| car.model() != "Valhalla"));
}
