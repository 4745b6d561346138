use std::io::Read;

use serde::Serialize;

use parcelsort::{Classification, PackageInput, PackageMeasurement, Value};

#[derive(Serialize)]
struct Report {
    classification: Classification,
    volume: f64,
    bulky: bool,
    heavy: bool,
}

impl Report {
    fn new(measurement: &PackageMeasurement) -> Self {
        Self {
            classification: measurement.classify(),
            volume: measurement.volume(),
            bulky: measurement.is_bulky(),
            heavy: measurement.is_heavy(),
        }
    }
}

fn print_usage() {
    eprintln!("Usage: parcelsort <width> <height> <length> <mass>");
    eprintln!("   or: echo '{{\"width\":100,\"height\":100,\"length\":100,\"mass\":10}}' | parcelsort");
    eprintln!();
    eprintln!("Width, height and length are in centimeters, mass in kilograms.");
    eprintln!("Values may be numbers or numeric strings; all must be non-negative.");
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let measurement = if !args.is_empty() {
        if args.len() != 4 {
            print_usage();
            std::process::exit(1);
        }
        PackageMeasurement::from_values(
            &Value::from(args[0].as_str()),
            &Value::from(args[1].as_str()),
            &Value::from(args[2].as_str()),
            &Value::from(args[3].as_str()),
        )?
    } else {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        let buffer = buffer.trim();

        if buffer.is_empty() {
            print_usage();
            std::process::exit(1);
        }

        let input: PackageInput = serde_json::from_str(buffer)?;
        input.validate()?
    };

    println!("{}", serde_json::to_string(&Report::new(&measurement))?);

    Ok(())
}
