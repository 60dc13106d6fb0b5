use crate::error::{ExplorerError, Result};
use crate::transformations::ColumnTransform;
use arrow::array::{
    new_empty_array, Array, ArrayRef, Float64Array, Int64Array, StringArray,
    TimestampSecondArray,
};
use arrow::compute;
use arrow::csv::{reader::Format, ReaderBuilder};
use arrow::datatypes::{DataType, Field, FieldRef, Schema, SchemaRef, TimeUnit};
use arrow::error::Result as ArrowResult;
use arrow::record_batch::RecordBatch;
use chrono::DateTime;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, ContentArrangement, Table};

use std::fs::File;
use std::io::Seek;
use std::path::Path;
use std::sync::Arc;

/// An in-memory table made of Arrow record batches sharing one schema.
#[derive(Debug, Clone)]
pub struct Dataset {
    batches: Vec<RecordBatch>,
    schema: SchemaRef,
}

impl Dataset {
    /// Create a new dataset builder
    pub fn builder() -> DatasetBuilder {
        DatasetBuilder::default()
    }

    pub fn new(schema: SchemaRef, batches: Vec<RecordBatch>) -> Self {
        Self { batches, schema }
    }

    pub fn batches(&self) -> &[RecordBatch] {
        &self.batches
    }

    pub fn schema(&self) -> SchemaRef {
        self.schema.clone()
    }

    pub fn num_rows(&self) -> usize {
        self.batches.iter().map(|b| b.num_rows()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.num_rows() == 0
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.schema.index_of(name).is_ok()
    }

    fn index_of(&self, name: &str) -> Result<usize> {
        self.schema
            .index_of(name)
            .map_err(|_| ExplorerError::MissingColumn(name.to_string()))
    }

    /// The whole column as a single array, concatenated across batches.
    pub fn column(&self, name: &str) -> Result<ArrayRef> {
        let index = self.index_of(name)?;
        if self.batches.is_empty() {
            return Ok(new_empty_array(self.schema.field(index).data_type()));
        }

        let arrays: Vec<&dyn Array> = self
            .batches
            .iter()
            .map(|batch| batch.column(index).as_ref())
            .collect();

        Ok(compute::concat(&arrays)?)
    }

    pub fn strings(&self, name: &str) -> Result<StringArray> {
        self.typed_column(name, "Utf8")
    }

    pub fn int64s(&self, name: &str) -> Result<Int64Array> {
        self.typed_column(name, "Int64")
    }

    pub fn float64s(&self, name: &str) -> Result<Float64Array> {
        self.typed_column(name, "Float64")
    }

    pub fn timestamps(&self, name: &str) -> Result<TimestampSecondArray> {
        self.typed_column(name, "Timestamp(Second)")
    }

    fn typed_column<T>(&self, name: &str, expected: &'static str) -> Result<T>
    where
        T: Array + Clone + 'static,
    {
        let column = self.column(name)?;
        column
            .as_any()
            .downcast_ref::<T>()
            .cloned()
            .ok_or_else(|| ExplorerError::ColumnType {
                column: name.to_string(),
                expected,
                actual: column.data_type().clone(),
            })
    }

    /// Replace a column with its transformed version in every batch.
    pub fn transform_column(
        &mut self,
        column_name: &str,
        transformer: &dyn ColumnTransform,
    ) -> Result<()> {
        let column_index = self.index_of(column_name)?;
        let (data_type, arrays) = self.apply(column_index, transformer)?;

        let field = self
            .schema
            .field(column_index)
            .clone()
            .with_data_type(data_type);
        self.put_column(Some(column_index), field, arrays)
    }

    /// Add (or overwrite) `target` with the transformed values of `source`.
    pub fn derive_column(
        &mut self,
        source: &str,
        target: &str,
        transformer: &dyn ColumnTransform,
    ) -> Result<()> {
        let source_index = self.index_of(source)?;
        let (data_type, arrays) = self.apply(source_index, transformer)?;

        let target_index = self.schema.index_of(target).ok();
        self.put_column(target_index, Field::new(target, data_type, true), arrays)
    }

    fn apply(
        &self,
        column_index: usize,
        transformer: &dyn ColumnTransform,
    ) -> Result<(DataType, Vec<ArrayRef>)> {
        let arrays = self
            .batches
            .iter()
            .map(|batch| {
                transformer
                    .transform(batch.column(column_index).as_ref())
                    .map(ArrayRef::from)
            })
            .collect::<ArrowResult<Vec<_>>>()?;

        // With no batches the output type still has to be known for the schema.
        let data_type = match arrays.first() {
            Some(array) => array.data_type().clone(),
            None => {
                let empty = new_empty_array(self.schema.field(column_index).data_type());
                transformer.transform(empty.as_ref())?.data_type().clone()
            }
        };

        Ok((data_type, arrays))
    }

    fn put_column(
        &mut self,
        index: Option<usize>,
        field: Field,
        arrays: Vec<ArrayRef>,
    ) -> Result<()> {
        let mut fields: Vec<FieldRef> = self.schema.fields().iter().cloned().collect();
        match index {
            Some(i) => fields[i] = Arc::new(field),
            None => fields.push(Arc::new(field)),
        }
        let schema = Arc::new(Schema::new(fields));

        let batches = self
            .batches
            .iter()
            .zip(arrays)
            .map(|(batch, array)| {
                let mut columns = batch.columns().to_vec();
                match index {
                    Some(i) => columns[i] = array,
                    None => columns.push(array),
                }
                RecordBatch::try_new(schema.clone(), columns)
            })
            .collect::<ArrowResult<Vec<_>>>()?;

        self.schema = schema;
        self.batches = batches;
        Ok(())
    }

    /// Rows `offset..offset + len`, clamped to the table.
    pub fn slice(&self, offset: usize, len: usize) -> Dataset {
        let mut batches = Vec::new();
        let mut skip = offset;
        let mut remaining = len;

        for batch in &self.batches {
            if remaining == 0 {
                break;
            }
            let rows = batch.num_rows();
            if skip >= rows {
                skip -= rows;
                continue;
            }
            let take = (rows - skip).min(remaining);
            batches.push(batch.slice(skip, take));
            remaining -= take;
            skip = 0;
        }

        Dataset::new(self.schema.clone(), batches)
    }

    /// Render every row as a table. The leading `#` column numbers rows
    /// starting at `first_row`.
    pub fn display(&self, first_row: usize) -> String {
        let mut table = Table::new();

        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_width(200);

        let mut header_cells = vec![Cell::new("#")];
        header_cells.extend(
            self.schema
                .fields()
                .iter()
                .map(|field| Cell::new(field.name())),
        );
        table.set_header(header_cells);

        let mut row_number = first_row;
        for batch in &self.batches {
            for row_idx in 0..batch.num_rows() {
                let mut row_cells = vec![Cell::new(row_number)];
                row_cells.extend(
                    batch
                        .columns()
                        .iter()
                        .map(|column| Cell::new(format_cell(column.as_ref(), row_idx))),
                );
                table.add_row(row_cells);
                row_number += 1;
            }
        }

        table.to_string()
    }
}

fn format_cell(column: &dyn Array, row: usize) -> String {
    if column.is_null(row) {
        return "NaN".to_string();
    }

    let any = column.as_any();
    let value = match column.data_type() {
        DataType::Utf8 => any
            .downcast_ref::<StringArray>()
            .map(|array| array.value(row).to_string()),
        DataType::Int64 => any
            .downcast_ref::<Int64Array>()
            .map(|array| array.value(row).to_string()),
        DataType::Float64 => any
            .downcast_ref::<Float64Array>()
            .map(|array| array.value(row).to_string()),
        DataType::Timestamp(TimeUnit::Second, None) => any
            .downcast_ref::<TimestampSecondArray>()
            .and_then(|array| DateTime::from_timestamp(array.value(row), 0))
            .map(|dt| dt.naive_utc().format("%Y-%m-%d %H:%M:%S").to_string()),
        _ => None,
    };

    value.unwrap_or_else(|| format!("Unsupported type: {:?}", column.data_type()))
}

/// Builder pattern for Dataset creation
pub struct DatasetBuilder {
    numeric_columns: Vec<String>,
    infer_rows: usize,
}

impl Default for DatasetBuilder {
    fn default() -> Self {
        Self {
            numeric_columns: Vec::new(),
            infer_rows: 100,
        }
    }
}

impl DatasetBuilder {
    /// Columns read as nullable `Float64`. Every other column is read as text.
    pub fn with_numeric_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.numeric_columns = columns.into_iter().map(Into::into).collect();
        self
    }

    pub fn from_csv(self, path: &Path) -> Result<Dataset> {
        let io_error = |source| ExplorerError::Io {
            path: path.to_path_buf(),
            source,
        };

        let mut file = File::open(path).map_err(io_error)?;
        let format = Format::default().with_header(true).with_delimiter(b',');

        // Only the header names are taken from inference; types are fixed here.
        let (inferred_schema, _) = format.infer_schema(&mut file, Some(self.infer_rows))?;
        let fields: Vec<Field> = inferred_schema
            .fields()
            .iter()
            .map(|field| {
                let data_type = if self.numeric_columns.contains(field.name()) {
                    DataType::Float64
                } else {
                    DataType::Utf8
                };
                Field::new(field.name(), data_type, true)
            })
            .collect();
        let schema = Arc::new(Schema::new(fields));

        file.rewind().map_err(io_error)?;
        let reader = ReaderBuilder::new(schema.clone())
            .with_format(format)
            .build(file)?;

        let batches: Vec<RecordBatch> = reader.into_iter().collect::<ArrowResult<Vec<_>>>()?;

        Ok(Dataset { batches, schema })
    }
}
