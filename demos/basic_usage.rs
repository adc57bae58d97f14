use ox_convert::{register_aliases, ConvertError, Converter, LogicalType, Value};

fn main() {
    env_logger::init();
    println!("=== Type Converter Basic Usage Example ===\n");

    let converter = Converter::new();

    // Query-string style inputs: (type name, raw text)
    let inputs = [
        ("int", "10"),
        ("int64", "0x7fffffff00"),
        ("double", "3.25"),
        ("bool", "T"),
        ("date", "2022-01-01"),
        ("datetime", "2022-01-01 12:00:00"),
        ("ints", "1,2,3,4"),
        ("strings", "red,green,blue"),
        ("ints", "1,x,3"),
        ("uuid", "ignored"),
    ];

    for (type_name, raw) in inputs {
        match converter.convert(type_name, raw) {
            Ok(value) => println!("{:>9} {:<24} -> {:?}", type_name, raw, value),
            Err(ConvertError::UnsupportedType { .. }) => {
                println!("{:>9} {:<24} -> no type registered", type_name, raw)
            }
            Err(e) => println!("{:>9} {:<24} -> {}", type_name, raw, e),
        }
    }

    println!("\nRegistering alias 'interage'...");
    register_aliases(LogicalType::Int32, &["interage"]);

    let mut limit = 0i32;
    match converter.convert_into("interage", "100", &mut limit) {
        Ok(()) => println!("limit = {}", limit),
        Err(e) => println!("failed: {}", e),
    }

    if let Ok(value) = converter.convert("dates", "2022-01-01,2022-01-02") {
        match converter.format(&value) {
            Ok(text) => println!("formatted back: {}", text),
            Err(e) => println!("format failed: {}", e),
        }
        if let Value::DateList(dates) = value {
            println!("{} dates parsed", dates.len());
        }
    }
}
