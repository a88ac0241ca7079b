use std::env;
use std::fs;
use std::path::Path;

/// Tiny stand-in used when the fixture is missing, so the app still builds.
const FALLBACK_CSV: &str = "\
,Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
0,1,CCAFS LC-40,0,0.0,F9 v1.0  B0003,v1.0
1,29,VAFB SLC-4E,1,9600.0,F9 FT B1029.1,FT
2,31,KSC LC-39A,1,2490.0,F9 FT B1031.1,FT
";

const REQUIRED_COLUMNS: [&str; 4] = [
    "Launch Site",
    "Payload Mass (kg)",
    "Booster Version Category",
    "class",
];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest = Path::new(&out_dir).join("spacex_launch_dash.csv");

    // Copy the launch dataset to OUT_DIR for include_str, checking the
    // header up front so a broken fixture fails the build rather than the page.
    let src = Path::new("../fixtures/spacex_launch_dash.csv");
    if src.exists() {
        let mut rdr = csv::Reader::from_path(src).expect("Failed to open spacex_launch_dash.csv");
        let headers = rdr.headers().expect("Failed to read CSV header").clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h.trim() == column) {
                panic!("spacex_launch_dash.csv is missing column '{}'", column);
            }
        }
        fs::copy(src, &dest).unwrap();
    } else {
        println!("cargo:warning=fixtures/spacex_launch_dash.csv not found, embedding sample data");
        fs::write(&dest, FALLBACK_CSV).unwrap();
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=../fixtures/spacex_launch_dash.csv");
}
