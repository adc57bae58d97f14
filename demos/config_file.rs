use std::env;

use anyhow::Result;
use ox_convert::ConverterConfig;

const SAMPLE: &str = r#"
case_insensitive: true
list_separator: ";"
date_layout: "%d/%m/%Y"
aliases:
  int32: [port]
  text_list: [hosts]
"#;

fn main() -> Result<()> {
    env_logger::init();

    // Pass a .yaml/.json/.toml path to load it instead of the sample.
    let config = match env::args().nth(1) {
        Some(path) => ConverterConfig::from_file(path)?,
        None => ConverterConfig::from_yaml_str(SAMPLE)?,
    };
    let converter = config.build();

    println!("Registered aliases:");
    for (alias, logical_type) in converter.registry().aliases() {
        println!("  {:<10} -> {}", alias, logical_type);
    }

    let port: i32 = converter.convert_as("PORT", "8080")?;
    let hosts: Vec<String> = converter.convert_as("hosts", "alpha;beta")?;
    let day = converter.convert("date", "24/12/2022")?;

    println!("\nport = {}", port);
    println!("hosts = {:?}", hosts);
    println!("day = {}", converter.format(&day)?);
    Ok(())
}
