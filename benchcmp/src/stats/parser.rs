//!
//! The Go benchmark output parser.
//!

use std::io::Read;

///
/// A single benchmark measurement.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    /// The package from the preceding `pkg:` line.
    pub package: Option<String>,
    /// The benchmark name without the `Benchmark` prefix.
    pub name: String,
    /// The measurement unit, e.g. `ns/op`.
    pub unit: String,
    /// The measured value.
    pub value: f64,
}

///
/// The Go benchmark output parser.
///
/// Lines other than `pkg:` headers and benchmark results are ignored.
///
#[derive(Debug, Clone)]
pub struct Parser {
    /// Matches `Benchmark<name> <iterations> <value> <unit>...` lines.
    benchmark: regex::Regex,
    /// Matches `pkg: <import path>` lines.
    package: regex::Regex,
}

impl Default for Parser {
    fn default() -> Self {
        Self {
            benchmark: regex::Regex::new(r"^Benchmark(\S*)\s+\d+\s+(.+)$").expect("Always valid"),
            package: regex::Regex::new(r"^pkg:\s*(\S+)").expect("Always valid"),
        }
    }
}

impl Parser {
    ///
    /// Parses every measurement in `reader`.
    ///
    pub fn parse(&self, reader: &mut dyn Read) -> anyhow::Result<Vec<Measurement>> {
        let mut bytes = Vec::new();
        reader
            .read_to_end(&mut bytes)
            .map_err(|error| anyhow::anyhow!("Benchmark output reading: {error}"))?;
        let text = String::from_utf8_lossy(bytes.as_slice());

        let mut package = None;
        let mut measurements = Vec::new();
        for line in text.lines() {
            let line = line.trim_end();
            if let Some(captures) = self.package.captures(line) {
                package = Some(captures[1].to_owned());
                continue;
            }
            if let Some(captures) = self.benchmark.captures(line) {
                measurements.extend(Self::parse_values(
                    package.as_deref(),
                    &captures[1],
                    &captures[2],
                ));
            }
        }
        Ok(measurements)
    }

    ///
    /// Parses the `<value> <unit>` pairs of a benchmark line, stopping at the first malformed one.
    ///
    fn parse_values(package: Option<&str>, name: &str, values: &str) -> Vec<Measurement> {
        let fields: Vec<&str> = values.split_whitespace().collect();
        fields
            .chunks_exact(2)
            .map_while(|pair| {
                pair[0].parse::<f64>().ok().map(|value| Measurement {
                    package: package.map(str::to_owned),
                    name: name.to_owned(),
                    unit: pair[1].to_owned(),
                    value,
                })
            })
            .collect()
    }
}
