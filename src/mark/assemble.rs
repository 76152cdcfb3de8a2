use crate::data::model::{LabeledDataset, LabeledRow};

// ---------------------------------------------------------------------------
// Label assembler
// ---------------------------------------------------------------------------

/// Flatten a dataset into its tabular form: one row per (window, offset)
/// pair, positives first. The row count is
/// `window_width * (positive + negative)`; an empty dataset flattens to an
/// empty table, which callers treat as "nothing to persist".
pub fn assemble(dataset: &LabeledDataset) -> Vec<LabeledRow> {
    dataset
        .windows()
        .flat_map(|window| {
            window.amplitudes.iter().enumerate().map(|(i, &amplitude)| {
                LabeledRow {
                    frequency: window.frequencies.as_ref().map(|f| f[i]),
                    amplitude,
                    label: window.label,
                }
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Window;

    fn window(amplitudes: Vec<f64>, label: bool) -> Window {
        Window {
            frequencies: Some(amplitudes.iter().map(|a| a * 10.0).collect()),
            amplitudes,
            label,
            center: 0,
        }
    }

    #[test]
    fn empty_dataset_flattens_to_empty_table() {
        let dataset = LabeledDataset {
            positive: vec![],
            negative: vec![],
            window_width: 4,
        };
        assert!(assemble(&dataset).is_empty());
    }

    #[test]
    fn row_count_and_order() {
        let dataset = LabeledDataset {
            positive: vec![window(vec![1.0, 2.0], true)],
            negative: vec![window(vec![3.0, 4.0], false)],
            window_width: 2,
        };
        let rows = assemble(&dataset);
        assert_eq!(rows.len(), 4);
        assert!(rows[0].label && rows[1].label);
        assert!(!rows[2].label && !rows[3].label);
        assert_eq!(rows[1].amplitude, 2.0);
        assert_eq!(rows[1].frequency, Some(20.0));
        assert_eq!(rows[2].amplitude, 3.0);
    }

    #[test]
    fn missing_frequency_axis_yields_none() {
        let dataset = LabeledDataset {
            positive: vec![Window {
                amplitudes: vec![1.0],
                frequencies: None,
                label: true,
                center: 0,
            }],
            negative: vec![],
            window_width: 1,
        };
        let rows = assemble(&dataset);
        assert_eq!(rows[0].frequency, None);
    }
}
