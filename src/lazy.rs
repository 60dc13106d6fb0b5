use crate::dataset::Dataset;
use arrow::array::BooleanArray;
use arrow::compute;
use arrow::error::Result as ArrowResult;
use arrow::record_batch::RecordBatch;
use std::fmt;
use std::sync::Arc;

type FilterFn = dyn Fn(&RecordBatch) -> ArrowResult<BooleanArray> + Send + Sync;

#[derive(Clone)]
pub struct FilterPredicate(Arc<FilterFn>);

impl FilterPredicate {
    pub fn new<F>(pred: F) -> Self
    where
        F: Fn(&RecordBatch) -> ArrowResult<BooleanArray> + Send + Sync + 'static,
    {
        Self(Arc::new(pred))
    }

    pub fn apply(&self, batch: &RecordBatch) -> ArrowResult<BooleanArray> {
        (self.0)(batch)
    }
}

impl fmt::Debug for FilterPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FilterPredicate(<function>)")
    }
}

/// Filters queued against a dataset, applied batch by batch on `collect`.
///
/// Row order is preserved. A row survives only if every predicate marks it
/// `true`; null mask entries drop the row.
pub struct LazyDataset {
    source: Dataset,
    filters: Vec<FilterPredicate>,
}

impl LazyDataset {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            source: dataset,
            filters: Vec::new(),
        }
    }

    /// Filter rows based on a predicate
    /// The predicate is a function that takes a RecordBatch and returns a boolean array
    pub fn filter<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&RecordBatch) -> ArrowResult<BooleanArray> + Send + Sync + 'static,
    {
        self.filters.push(FilterPredicate::new(predicate));
        self
    }

    pub fn pending_filters(&self) -> usize {
        self.filters.len()
    }

    pub fn collect(self) -> ArrowResult<Dataset> {
        if self.filters.is_empty() {
            return Ok(self.source);
        }

        let schema = self.source.schema();
        let batches = self
            .source
            .batches()
            .iter()
            .map(|batch| self.execute_filters(batch))
            .collect::<ArrowResult<Vec<_>>>()?;

        Ok(Dataset::new(schema, batches))
    }

    fn execute_filters(&self, batch: &RecordBatch) -> ArrowResult<RecordBatch> {
        let mut current = batch.clone();
        for predicate in &self.filters {
            let mask = predicate.apply(&current)?;
            current = compute::filter_record_batch(&current, &mask)?;
        }
        Ok(current)
    }
}
