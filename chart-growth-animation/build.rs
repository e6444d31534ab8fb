use std::env;
use std::fs;
use std::path::Path;

/// Minimal pivoted fixture used when the real data file is absent.
const FALLBACK_PIVOTED: &str = "\
Country/Region,Continent,Date,Days,total_cases,new_cases,growth_rate,doubling_time
Netherlands,Europe,2020-03-01,0,10,10,1.0,
Netherlands,Europe,2020-03-02,1,18,8,1.8,2.3
China,Asia,2020-01-22,0,548,548,1.0,
China,Asia,2020-01-23,1,643,95,1.2,4.0
";

const PIVOTED_COLUMNS: usize = 8;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    let src = Path::new("../data/cases/result_pivoted.csv");
    let dest = Path::new(&out_dir).join("cases_result_pivoted.csv");

    if src.exists() {
        // Drop rows with the wrong column count while copying, so the
        // embedded data is clean before the WASM loader sees it.
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(src)
            .expect("Failed to open pivoted CSV");
        let headers = rdr.headers().expect("Missing header row").clone();
        assert_eq!(
            headers.get(0),
            Some("Country/Region"),
            "unexpected pivoted CSV header"
        );

        let mut wtr = csv::Writer::from_path(&dest).unwrap();
        wtr.write_record(&headers).unwrap();
        for record in rdr.records().flatten() {
            if record.len() == PIVOTED_COLUMNS {
                wtr.write_record(&record).unwrap();
            }
        }
        wtr.flush().unwrap();
    } else {
        fs::write(&dest, FALLBACK_PIVOTED).unwrap();
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=../data/cases/result_pivoted.csv");
}
