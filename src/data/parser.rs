use anyhow::{Context, Result, bail};

use super::model::{AbsorptionLines, AbsorptionPoint, Series};

// ---------------------------------------------------------------------------
// Trace parser
// ---------------------------------------------------------------------------

/// Parse a spectroscopic trace from its line-oriented instrument format.
///
/// Layout:
/// * the first line is a header and is skipped
/// * a line starting with `*` terminates the series (trailer block)
/// * every other line is whitespace-separated; the frequency is the second
///   token and the amplitude the fifth
pub fn parse_trace(text: &str) -> Result<Series> {
    let mut frequency = Vec::new();
    let mut amplitude = Vec::new();

    for (line_no, line) in text.lines().enumerate().skip(1) {
        if line.starts_with('*') {
            break;
        }
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() < 5 {
            bail!(
                "line {}: expected at least 5 columns, found {}",
                line_no + 1,
                tokens.len()
            );
        }
        let freq: f64 = tokens[1]
            .parse()
            .with_context(|| format!("line {}: '{}' is not a number", line_no + 1, tokens[1]))?;
        let amp: f64 = tokens[4]
            .parse()
            .with_context(|| format!("line {}: '{}' is not a number", line_no + 1, tokens[4]))?;
        frequency.push(freq);
        amplitude.push(amp);
    }

    Series::new(frequency, amplitude).context("validating parsed trace")
}

// ---------------------------------------------------------------------------
// Absorption-line parser
// ---------------------------------------------------------------------------

/// Parse the absorption-line table.
///
/// Data lines are tab-separated `frequency\tamplitude\tflag` where `flag` is
/// the case-insensitive literal `true`/`false`. Lines without a tab, or
/// starting with `FREQ` or `*`, are ignored. An empty table parses
/// successfully; the sampler rejects it later.
pub fn parse_absorption_lines(text: &str) -> Result<AbsorptionLines> {
    let mut points = Vec::new();

    for (line_no, line) in text.lines().enumerate() {
        if !line.contains('\t') || line.starts_with("FREQ") || line.starts_with('*') {
            continue;
        }
        let fields: Vec<&str> = line.trim().split('\t').collect();
        if fields.len() != 3 {
            bail!(
                "line {}: expected 3 tab-separated fields, found {}",
                line_no + 1,
                fields.len()
            );
        }
        let frequency: f64 = fields[0]
            .parse()
            .with_context(|| format!("line {}: '{}' is not a number", line_no + 1, fields[0]))?;
        let amplitude: f64 = fields[1]
            .parse()
            .with_context(|| format!("line {}: '{}' is not a number", line_no + 1, fields[1]))?;
        let from_reference = fields[2].eq_ignore_ascii_case("true");
        points.push(AbsorptionPoint {
            frequency,
            amplitude,
            from_reference,
        });
    }

    Ok(AbsorptionLines { points })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRACE: &str = "\
FREQ GHZ  AMPL  NOISE  GAMMA  PHASE
0  100.0  1.0  0.0  0.52  0.0
1  100.5  1.0  0.0  0.48  0.0
2  101.0  1.0  0.0  0.51  0.0
* end of record
3  101.5  1.0  0.0  0.99  0.0
";

    #[test]
    fn trace_skips_header_and_stops_at_trailer() {
        let series = parse_trace(TRACE).unwrap();
        assert_eq!(series.frequency, vec![100.0, 100.5, 101.0]);
        assert_eq!(series.amplitude, vec![0.52, 0.48, 0.51]);
    }

    #[test]
    fn trace_rejects_short_lines() {
        assert!(parse_trace("header\n1 2 3\n").is_err());
    }

    #[test]
    fn trace_rejects_bad_numbers() {
        assert!(parse_trace("header\n0 abc 1.0 0.0 0.5 0.0\n").is_err());
    }

    #[test]
    fn absorption_lines_parse_flags_case_insensitively() {
        let text = "FREQ\tGAMMA\tSRC\n100.5\t0.9\tTRUE\n* trailer line\n101.0\t0.8\tfalse\nno tabs here\n";
        let lines = parse_absorption_lines(text).unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines.points[0].frequency, 100.5);
        assert!(lines.points[0].from_reference);
        assert!(!lines.points[1].from_reference);
    }

    #[test]
    fn absorption_lines_empty_input_is_ok() {
        let lines = parse_absorption_lines("FREQ\tGAMMA\tSRC\n").unwrap();
        assert!(lines.is_empty());
    }
}
