use std::env;
use std::fs;
use std::path::Path;

/// Minimal stacked fixture used when the real data file is absent.
const FALLBACK_STACKED: &str = "\
Country/Region,Continent,Date,Days,indicator,value
Netherlands,Europe,2020-03-01,0,Total cases,10
Netherlands,Europe,2020-03-02,1,Total cases,18
Netherlands,Europe,2020-03-01,0,New cases,10
Netherlands,Europe,2020-03-02,1,New cases,8
";

const STACKED_COLUMNS: usize = 6;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    let src = Path::new("../data/cases/result.csv");
    let dest = Path::new(&out_dir).join("cases_result.csv");

    if src.exists() {
        // Drop rows with the wrong column count while copying, so the
        // embedded data is clean before the WASM loader sees it.
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(src)
            .expect("Failed to open stacked CSV");
        let headers = rdr.headers().expect("Missing header row").clone();
        assert_eq!(
            headers.get(0),
            Some("Country/Region"),
            "unexpected stacked CSV header"
        );

        let mut wtr = csv::Writer::from_path(&dest).unwrap();
        wtr.write_record(&headers).unwrap();
        for record in rdr.records().flatten() {
            if record.len() == STACKED_COLUMNS {
                wtr.write_record(&record).unwrap();
            }
        }
        wtr.flush().unwrap();
    } else {
        fs::write(&dest, FALLBACK_STACKED).unwrap();
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=../data/cases/result.csv");
}
