//! Input validation and key alignment
//!
//! Checks run in a fixed order and stop at the first failure:
//! 1. required columns present in predictions, then in ground truth
//! 2. every ground-truth molecule present in predictions
//! 3. no duplicated molecule in predictions
//!
//! The surviving rows are inner-joined on the molecule key and sorted by it.

use crate::io::{parse_numeric, Table};
use admet_eval_common::{AdmetError, Result};
use ndarray::Array1;
use std::collections::{BTreeSet, HashMap, HashSet};

/// How many offending molecule names to quote in an error message.
const MAX_EXAMPLES: usize = 5;

/// Predictions and ground truth joined on the molecule key.
#[derive(Debug)]
pub struct AlignedTable<'a> {
    predictions: &'a Table,
    ground_truth: &'a Table,
    /// `(prediction row, ground-truth row)`, sorted by molecule key
    rows: Vec<(usize, usize)>,
    keys: Vec<&'a str>,
}

/// Transform-ready (predicted, true) arrays for one endpoint.
#[derive(Clone, Debug, PartialEq)]
pub struct EndpointPairs {
    /// Endpoint name
    pub endpoint: String,
    /// Predicted values, missing pairs removed
    pub pred: Array1<f64>,
    /// True values, missing pairs removed
    pub truth: Array1<f64>,
    /// Aligned rows dropped because either side was missing
    pub dropped: usize,
}

impl EndpointPairs {
    /// Number of usable pairs.
    pub fn len(&self) -> usize {
        self.truth.len()
    }

    /// Whether no pairs survived.
    pub fn is_empty(&self) -> bool {
        self.truth.is_empty()
    }
}

/// Fail if any of `required` is absent from `table`, naming every missing column.
pub fn check_required_columns(table: &Table, required: &[&str]) -> Result<()> {
    let missing: Vec<String> = required
        .iter()
        .filter(|c| !table.has_column(c))
        .map(|c| (*c).to_string())
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(AdmetError::MissingColumns {
            dataset: table.name().to_string(),
            missing,
        })
    }
}

impl<'a> AlignedTable<'a> {
    /// Validate both tables and join them on `key_column`.
    pub fn new(
        predictions: &'a Table,
        ground_truth: &'a Table,
        key_column: &str,
        endpoints: &[String],
    ) -> Result<Self> {
        let required: Vec<&str> = std::iter::once(key_column)
            .chain(endpoints.iter().map(String::as_str))
            .collect();
        check_required_columns(predictions, &required)?;
        check_required_columns(ground_truth, &required)?;

        let pred_key = column_of(predictions, key_column)?;
        let truth_key = column_of(ground_truth, key_column)?;

        let mut pred_rows: HashMap<&'a str, usize> = HashMap::with_capacity(predictions.n_rows());
        let mut duplicated: BTreeSet<&'a str> = BTreeSet::new();
        for (row, key) in predictions.column(pred_key).enumerate() {
            if pred_rows.insert(key, row).is_some() {
                duplicated.insert(key);
            }
        }

        let mut seen_missing = HashSet::new();
        let missing: Vec<&str> = ground_truth
            .column(truth_key)
            .filter(|key| !pred_rows.contains_key(key) && seen_missing.insert(*key))
            .collect();
        if !missing.is_empty() {
            return Err(AdmetError::MissingMolecules {
                count: missing.len(),
                examples: examples(missing),
            });
        }

        if !duplicated.is_empty() {
            return Err(AdmetError::DuplicateMolecules {
                count: duplicated.len(),
                examples: examples(duplicated),
            });
        }

        let mut joined: Vec<(&'a str, usize, usize)> = ground_truth
            .column(truth_key)
            .enumerate()
            .filter_map(|(truth_row, key)| pred_rows.get(key).map(|&p| (key, p, truth_row)))
            .collect();
        joined.sort_by(|a, b| a.0.cmp(b.0));

        log::debug!(
            "aligned {} ground-truth rows against {} predictions",
            joined.len(),
            predictions.n_rows()
        );

        Ok(Self {
            predictions,
            ground_truth,
            keys: joined.iter().map(|j| j.0).collect(),
            rows: joined.iter().map(|j| (j.1, j.2)).collect(),
        })
    }

    /// Number of joined rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the join is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Molecule keys in join order.
    pub fn keys(&self) -> &[&'a str] {
        &self.keys
    }

    /// Coerce `endpoint` to numeric on both sides and drop incomplete pairs.
    ///
    /// Fails if every aligned prediction is missing, or if no complete pair remains.
    pub fn endpoint_pairs(&self, endpoint: &str) -> Result<EndpointPairs> {
        let pred_col = column_of(self.predictions, endpoint)?;
        let truth_col = column_of(self.ground_truth, endpoint)?;

        let values: Vec<(Option<f64>, Option<f64>)> = self
            .rows
            .iter()
            .map(|&(p, t)| {
                (
                    self.predictions.cell(p, pred_col).and_then(parse_numeric),
                    self.ground_truth.cell(t, truth_col).and_then(parse_numeric),
                )
            })
            .collect();

        if values.iter().all(|(p, _)| p.is_none()) {
            return Err(AdmetError::AllPredictionsMissing {
                endpoint: endpoint.to_string(),
            });
        }

        let (pred, truth): (Vec<f64>, Vec<f64>) = values
            .iter()
            .filter_map(|&(p, t)| Some((p?, t?)))
            .unzip();
        if truth.is_empty() {
            return Err(AdmetError::NoValidPairs {
                endpoint: endpoint.to_string(),
            });
        }

        Ok(EndpointPairs {
            endpoint: endpoint.to_string(),
            dropped: values.len() - truth.len(),
            pred: Array1::from(pred),
            truth: Array1::from(truth),
        })
    }
}

fn column_of(table: &Table, name: &str) -> Result<usize> {
    table
        .column_index(name)
        .ok_or_else(|| AdmetError::MissingColumns {
            dataset: table.name().to_string(),
            missing: vec![name.to_string()],
        })
}

fn examples<'s>(keys: impl IntoIterator<Item = &'s str>) -> Vec<String> {
    keys.into_iter()
        .take(MAX_EXAMPLES)
        .map(str::to_string)
        .collect()
}
