//! End-to-end pipeline tests: instrument text in, labeled CSV rows out.

use specmark::{
    assemble, mark_data, parse_absorption_lines, parse_trace, LabeledRow, MarkConfig,
    NegativeSampling, Series,
};

/// Build an instrument-format trace: header, five whitespace columns with
/// frequency second and amplitude fifth, `*` trailer.
fn trace_text(samples: &[(f64, f64)]) -> String {
    let mut out = String::from("  N  FREQ  INTEN  NOISE  GAMMA  FLAG\n");
    for (i, (freq, gamma)) in samples.iter().enumerate() {
        out.push_str(&format!("{i} {freq} 1.0 0.02 {gamma} 0\n"));
    }
    out.push_str("* END OF RECORD\n");
    out
}

fn absorption_text(lines: &[(f64, f64)]) -> String {
    let mut out = String::from("FREQ\tGAMMA\tSRC\n");
    for (freq, gamma) in lines {
        out.push_str(&format!("{freq}\t{gamma}\ttrue\n"));
    }
    out
}

/// A flat trace with two absorption bumps, lines at the bump centers.
fn fixture() -> (Series, Vec<f64>) {
    let samples: Vec<(f64, f64)> = (0..60)
        .map(|i| {
            let freq = 200.0 + i as f64;
            let gamma = match i {
                14..=16 => 0.9,
                44..=46 => 0.7,
                _ => 0.1,
            };
            (freq, gamma)
        })
        .collect();
    let series = parse_trace(&trace_text(&samples)).unwrap();
    let lines = parse_absorption_lines(&absorption_text(&[(215.0, 0.9), (245.0, 0.7)])).unwrap();
    (series, lines.frequencies())
}

#[test]
fn text_to_labeled_rows() {
    let (series, frequencies) = fixture();
    let config = MarkConfig {
        window_width: 6,
        ..MarkConfig::default()
    };

    let dataset = mark_data(&series, &frequencies, &config).unwrap();
    assert_eq!(dataset.positive.len(), 2);
    assert!(dataset.is_balanced());

    // Positive windows sit on the bumps; their centers carry the bump level.
    assert_eq!(dataset.positive[0].center, 15);
    assert_eq!(dataset.positive[1].center, 45);
    assert!(dataset.positive[0].amplitudes.contains(&0.9));
    assert!(dataset.positive[1].amplitudes.contains(&0.7));
    // Negative windows never touch the bumps.
    for neg in &dataset.negative {
        assert!(neg.amplitudes.iter().all(|&a| a == 0.1));
    }

    let rows = assemble(&dataset);
    assert_eq!(rows.len(), 6 * dataset.len());
    assert_eq!(rows.iter().filter(|r| r.label).count(), 6 * 2);
}

#[test]
fn rows_round_trip_through_csv() {
    let (series, frequencies) = fixture();
    let config = MarkConfig {
        window_width: 6,
        random_seed: Some(11),
        negative_sampling: NegativeSampling::Shuffled,
        ..MarkConfig::default()
    };
    let rows = assemble(&mark_data(&series, &frequencies, &config).unwrap());

    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in &rows {
        writer.serialize(row).unwrap();
    }
    let bytes = writer.into_inner().unwrap();

    let mut reader = csv::Reader::from_reader(bytes.as_slice());
    let back: Vec<LabeledRow> = reader.deserialize().map(|r| r.unwrap()).collect();
    assert_eq!(back, rows);
}

#[test]
fn resampling_config_runs_inside_the_pipeline() {
    // Trace on an irregular grid; the pipeline resamples to 1.0 MHz first.
    let samples: Vec<(f64, f64)> = [0.0, 0.7, 1.9, 3.2, 4.8, 6.1, 7.5, 9.0, 10.4, 12.0]
        .iter()
        .map(|&f| (300.0 + f, 0.1 + f * 0.01))
        .collect();
    let series = parse_trace(&trace_text(&samples)).unwrap();
    let config = MarkConfig {
        window_width: 4,
        resample_step: Some(1.0),
        ..MarkConfig::default()
    };

    let dataset = mark_data(&series, &[306.0], &config).unwrap();
    let freqs = dataset.positive[0].frequencies.as_ref().unwrap();
    // Uniform grid: consecutive window frequencies are exactly one step apart.
    for pair in freqs.windows(2) {
        assert!((pair[1] - pair[0] - 1.0).abs() < 1e-9);
    }
}

#[test]
fn seeded_runs_are_reproducible_end_to_end() {
    let (series, frequencies) = fixture();
    let config = MarkConfig {
        window_width: 6,
        negative_sampling: NegativeSampling::Shuffled,
        random_seed: Some(5),
        ..MarkConfig::default()
    };
    let a = assemble(&mark_data(&series, &frequencies, &config).unwrap());
    let b = assemble(&mark_data(&series, &frequencies, &config).unwrap());
    assert_eq!(a, b);
}
