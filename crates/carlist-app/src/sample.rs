//! Demo catalog seeded by the CLI

use carlist_domain::model::{IdSequence, VehicleBuilder, VehicleRecord};
use carlist_types::{Color, Result};

/// (model, brand, year, color, price, registration number)
type SampleRow = (&'static str, &'static str, i32, Color, i64, Option<&'static str>);

const SAMPLE_ROWS: &[SampleRow] = &[
    ("Cayman", "Porsche", 2015, Color::Red, 50_000, Some("R123NCV")),
    ("Cayman", "Porsche", 2020, Color::Black, 75_000, None),
    ("GT4 RS", "Porsche", 2022, Color::Gray, 150_000, None),
    ("GT4", "Porsche", 2018, Color::Yellow, 80_000, Some("THEFIRS")),
    ("GT3 RS", "Porsche", 2019, Color::Blue, 200_000, None),
    ("Cayman Boxter", "Porsche", 2016, Color::White, 60_000, None),
    ("Cayman GTS", "Porsche", 2021, Color::Red, 100_000, Some("1326ADA")),
    ("918 Spyder", "Porsche", 2014, Color::White, 991_600, Some("918SPY")),
    ("Cayman Macan", "Porsche", 2018, Color::Black, 90_000, None),
    ("Model S", "Tesla", 2017, Color::Blue, 64_900, None),
    ("Model S", "Tesla", 2018, Color::Black, 76_900, None),
    ("Model 3", "Tesla", 2018, Color::Gray, 54_300, None),
    ("Model 3", "Tesla", 2020, Color::White, 55_700, None),
    ("Wagoneer", "Jeep", 2022, Color::Red, 58_995, None),
    ("Wrangler", "Jeep", 2022, Color::Red, 29_995, None),
    ("Compass", "Jeep", 2022, Color::DarkGray, 26_390, None),
    ("Stelvio Quadrifoglio", "Alpha Romeo", 2022, Color::Red, 90_000, None),
    ("Valhalla", "Aston Martin", 2022, Color::White, 1_260_000, None),
    ("DBX", "Aston Martin", 2022, Color::Black, 176_000, None),
    ("DBS Volante", "Aston Martin", 2022, Color::White, 334_000, None),
    ("DB11", "Aston Martin", 2022, Color::Red, 147_000, Some("R122NCV")),
    ("DB11 AMR", "Aston Martin", 2022, Color::Orange, 245_000, None),
    ("Vantage", "Aston Martin", 2022, Color::Green, 139_000, None),
    ("DBS Superleggera Volante", "Aston Martin", 2022, Color::DarkGray, 364_700, None),
    ("Valkyrie", "Aston Martin", 2022, Color::Cyan, 3_500_000, None),
];

/// Build the demo catalog, drawing ids from `ids`
pub fn sample_catalog(ids: &IdSequence) -> Result<Vec<VehicleRecord>> {
    SAMPLE_ROWS
        .iter()
        .map(|&(model, brand, year, color, price, registration)| -> Result<VehicleRecord> {
            let builder = VehicleBuilder::new(ids, model, brand, year, color)?.with_price(price);
            let builder = match registration {
                Some(value) => builder.with_registration_number(value)?,
                None => builder,
            };
            Ok(builder.build())
        })
        .collect()
}
