use crate::results::{
    BenchmarkSummary, OutputFormat, escape_field, format_float, render_csv, write_summaries,
};
use num_bigint::BigUint;
use pretty_assertions::assert_eq;

fn summary(name: &str) -> BenchmarkSummary {
    BenchmarkSummary {
        name: name.to_string(),
        mean: 5.0,
        stddev: 2.0,
        min: BigUint::from(2u32),
        max: BigUint::from(9u32),
        runs: BigUint::from(8u32),
        sum: BigUint::from(40u32),
        sum_squared: BigUint::from(232u32),
    }
}

#[test]
fn csv_has_fixed_header_and_one_row_per_summary() {
    // Arrange
    let summaries = vec![summary("samples"), summary("again")];

    // Act
    let csv = render_csv(&summaries);

    // Assert
    assert_eq!(
        csv,
        "name,mean,stddev,min,max,runs,sum,sum_squared\n\
         samples,5.0,2.0,2,9,8,40,232\n\
         again,5.0,2.0,2,9,8,40,232\n"
    );
}

#[test]
fn csv_without_summaries_is_header_only() {
    // Act
    let csv = render_csv(&[]);

    // Assert
    assert_eq!(csv, "name,mean,stddev,min,max,runs,sum,sum_squared\n");
}

#[test]
fn wide_integers_render_in_decimal() {
    // Arrange
    let mut s = summary("wide");
    s.sum_squared = BigUint::from(u64::MAX) + 1u32;
    s.sum = BigUint::from(1u32) << 130u32;

    // Act
    let csv = render_csv(&[s]);

    // Assert
    assert!(csv.ends_with(",2722258935367507707706996859454145691648,18446744073709551616\n"));
}

#[test]
fn floats_keep_round_trip_precision() {
    // Arrange
    let value = 1.25f64.sqrt();

    // Act
    let text = format_float(value);

    // Assert
    assert_eq!(text.parse::<f64>().unwrap(), value);
    assert!(text.starts_with("1.118033988749"));
}

#[test]
fn floats_use_signed_two_digit_exponents() {
    assert_eq!(format_float(2.5), "2.5");
    assert_eq!(format_float(0.0), "0.0");
    assert_eq!(format_float(0.0001), "0.0001");
    assert_eq!(format_float(0.000015), "1.5e-05");
    assert_eq!(format_float(1e16), "1e+16");
    assert_eq!(format_float(123456789012345680.0), "1.2345678901234568e+17");
    assert_eq!(format_float(1e-300), "1e-300");
    assert_eq!(format_float(9999999999999998.0), "9999999999999998.0");
}

#[test]
fn names_are_quoted_only_when_needed() {
    assert_eq!(escape_field("Signal low to Hi"), "Signal low to Hi");
    assert_eq!(escape_field("a,b"), "\"a,b\"");
    assert_eq!(escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
}

#[test]
fn json_output_lists_summaries() {
    // Arrange
    let summaries = vec![summary("samples")];
    let mut out = Vec::new();

    // Act
    write_summaries(&mut out, &summaries, OutputFormat::Json).unwrap();

    // Assert
    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value[0]["name"], "samples");
    assert_eq!(value[0]["mean"], 5.0);
    assert_eq!(value[0]["sum_squared"], 232);
}

#[test]
fn csv_writer_matches_renderer() {
    // Arrange
    let summaries = vec![summary("samples")];
    let mut out = Vec::new();

    // Act
    write_summaries(&mut out, &summaries, OutputFormat::Csv).unwrap();

    // Assert
    assert_eq!(String::from_utf8(out).unwrap(), render_csv(&summaries));
}

#[test]
fn json_writes_integers_past_128_bits_as_decimal_strings() {
    // Arrange
    let mut s = summary("wide");
    s.sum = BigUint::from(1u32) << 130u32;
    let mut out = Vec::new();

    // Act
    write_summaries(&mut out, &[s], OutputFormat::Json).unwrap();

    // Assert
    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value[0]["sum"], "1361129467683753853853498429727072845824");
    assert_eq!(value[0]["runs"], 8);
}
