//! Builds per-well arrays from data keyed by well name.
//!
//! Two shapes of input are accepted: a mapping from well name to
//! [`WellRecord`] ([`from_map`]) and a row-oriented table of loosely typed
//! cells ([`from_table`]). Both produce [`WellData`], three arrays in well
//! index order that can be applied to [`PlateOptions`].
//!
//! Well names follow [`WellName`] parsing: case-insensitive row letters and
//! optionally zero-padded columns. Wells that parse but lie outside the plate
//! are dropped.
//!
//! ```
//! # use indexmap::IndexMap;
//! # use platemap::adapter::{from_map, WellRecord};
//! # use platemap::well::PlateShape;
//! let mut records = IndexMap::new();
//! records.insert("A1", WellRecord::new().with_value(5.0));
//! records.insert("h12", WellRecord::new().with_color("green"));
//!
//! let data = from_map(&records, PlateShape::default()).unwrap();
//! assert_eq!(data.values()[0], Some(5.0));
//! assert_eq!(data.colors()[95].as_ref().and_then(|c| c.as_literal()), Some("green"));
//! ```

use indexmap::IndexMap;
use log::debug;
use serde::Deserialize;

use platemap_core::well::{PlateShape, WellError, WellName};

use crate::{
    data::{ColorValue, OverlayText, format_value},
    error::PlateError,
    options::PlateOptions,
};

/// Data for a single well. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct WellRecord {
    value: Option<f64>,
    color: Option<ColorValue>,
    text: Option<String>,
}

impl WellRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(mut self, value: f64) -> Self {
        self.value = Some(value);
        self
    }

    pub fn with_color(mut self, color: impl Into<ColorValue>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn value(&self) -> Option<f64> {
        self.value
    }

    pub fn color(&self) -> Option<&ColorValue> {
        self.color.as_ref()
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

/// Values, colors and overlay texts in well index order, each `n_wells`
/// long.
#[derive(Debug, Clone, PartialEq)]
pub struct WellData {
    values: Vec<Option<f64>>,
    colors: Vec<Option<ColorValue>>,
    texts: Vec<Option<String>>,
}

impl WellData {
    fn empty(shape: PlateShape) -> Self {
        let n_wells = shape.n_wells();
        Self {
            values: vec![None; n_wells],
            colors: vec![None; n_wells],
            texts: vec![None; n_wells],
        }
    }

    /// Stores `record` at `well`, unless the well lies outside `shape`.
    fn insert(&mut self, shape: PlateShape, well: WellName, record: WellRecord) {
        let Some(index) = shape.name_to_index(&well) else {
            debug!(well:% = well, shape:% = shape; "Dropping well outside the plate");
            return;
        };
        self.values[index] = record.value;
        self.colors[index] = record.color;
        self.texts[index] = record.text;
    }

    pub fn values(&self) -> &[Option<f64>] {
        &self.values
    }

    pub fn colors(&self) -> &[Option<ColorValue>] {
        &self.colors
    }

    pub fn texts(&self) -> &[Option<String>] {
        &self.texts
    }

    /// Copies the arrays into `options`.
    ///
    /// Values are always set. Colors are set only if at least one well has a
    /// color, so value-only data keeps the derived colorscale. Overlay text
    /// is set only if at least one well has text.
    pub fn apply_to(self, options: PlateOptions) -> PlateOptions {
        let mut options = options.with_values(self.values);
        if self.colors.iter().any(Option::is_some) {
            options = options.with_colors(self.colors);
        }
        if self.texts.iter().any(Option::is_some) {
            options = options.with_overlay_text(OverlayText::Texts(self.texts));
        }
        options
    }

    /// Shorthand for applying the data to fresh options of `shape`.
    pub fn into_options(self, shape: PlateShape) -> PlateOptions {
        self.apply_to(PlateOptions::new(shape))
    }
}

/// Builds well arrays from `(well name, record)` pairs.
///
/// Later entries for the same well replace earlier ones.
///
/// # Errors
///
/// Returns [`PlateError::Well`] if a name is malformed.
pub fn from_map<'a, I, K>(entries: I, shape: PlateShape) -> Result<WellData, PlateError>
where
    I: IntoIterator<Item = (K, &'a WellRecord)>,
    K: AsRef<str>,
{
    let mut data = WellData::empty(shape);
    for (name, record) in entries {
        let well: WellName = name.as_ref().parse()?;
        data.insert(shape, well, record.clone());
    }
    Ok(data)
}

/// A loosely typed table cell.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Number(f64),
    Text(String),
    Null,
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// One table row, keyed by column name.
pub type Record = IndexMap<String, Cell>;

/// Column names used by [`from_table`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableColumns {
    well: String,
    value: String,
    color: String,
    text: String,
}

impl TableColumns {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_well(mut self, column: impl Into<String>) -> Self {
        self.well = column.into();
        self
    }

    pub fn with_value(mut self, column: impl Into<String>) -> Self {
        self.value = column.into();
        self
    }

    pub fn with_color(mut self, column: impl Into<String>) -> Self {
        self.color = column.into();
        self
    }

    pub fn with_text(mut self, column: impl Into<String>) -> Self {
        self.text = column.into();
        self
    }

    pub fn well(&self) -> &str {
        &self.well
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Default for TableColumns {
    fn default() -> Self {
        Self {
            well: "well".to_string(),
            value: "value".to_string(),
            color: "color".to_string(),
            text: "text".to_string(),
        }
    }
}

/// Builds well arrays from table rows.
///
/// Numeric strings in the value column are parsed, other strings are
/// treated as missing. Numbers in the text column are formatted like hover
/// values. Missing columns are treated as nulls.
///
/// # Errors
///
/// Returns [`PlateError::Well`] if a row has no well identifier or a
/// malformed one.
pub fn from_table(
    rows: &[Record],
    columns: &TableColumns,
    shape: PlateShape,
) -> Result<WellData, PlateError> {
    let mut data = WellData::empty(shape);
    for row in rows {
        let well = match row.get(columns.well()) {
            Some(Cell::Text(name)) => name.parse::<WellName>()?,
            Some(Cell::Number(n)) => return Err(WellError::InvalidName(n.to_string()).into()),
            Some(Cell::Null) | None => return Err(WellError::InvalidName(String::new()).into()),
        };

        let value = match row.get(columns.value()) {
            Some(Cell::Number(n)) => Some(*n),
            Some(Cell::Text(s)) => {
                let parsed = s.trim().parse::<f64>().ok();
                if parsed.is_none() {
                    debug!(well:% = well, value = s.as_str(); "Ignoring non-numeric value");
                }
                parsed
            }
            Some(Cell::Null) | None => None,
        };

        let color = match row.get(columns.color()) {
            Some(Cell::Number(n)) => Some(ColorValue::Number(*n)),
            Some(Cell::Text(s)) => Some(ColorValue::Literal(s.clone())),
            Some(Cell::Null) | None => None,
        };

        let text = match row.get(columns.text()) {
            Some(Cell::Number(n)) => Some(format_value(*n)),
            Some(Cell::Text(s)) => Some(s.clone()),
            Some(Cell::Null) | None => None,
        };

        data.insert(
            shape,
            well,
            WellRecord {
                value,
                color,
                text,
            },
        );
    }
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(cells: &[(&str, Cell)]) -> Record {
        cells
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_from_map_places_records() {
        let mut records = IndexMap::new();
        records.insert("A1", WellRecord::new().with_value(5.0));
        records.insert("H12", WellRecord::new().with_color("green"));

        let data = from_map(&records, PlateShape::default()).unwrap();
        assert_eq!(data.values().len(), 96);
        assert_eq!(data.values()[0], Some(5.0));
        assert_eq!(data.colors()[95], Some(ColorValue::from("green")));
        assert_eq!(data.colors()[0], None);
        assert_eq!(data.values()[95], None);
    }

    #[test]
    fn test_from_map_accepts_loose_names() {
        let records = [
            ("b07".to_string(), WellRecord::new().with_text("x")),
            (" C1 ".to_string(), WellRecord::new().with_value(1.5)),
        ];
        let data = from_map(records.iter().map(|(k, v)| (k, v)), PlateShape::default()).unwrap();
        assert_eq!(data.texts()[18], Some("x".to_string()));
        assert_eq!(data.values()[24], Some(1.5));
    }

    #[test]
    fn test_from_map_drops_outside_wells() {
        let shape = PlateShape::new(2, 3).unwrap();
        let records = [
            ("I1", WellRecord::new().with_value(1.0)),
            ("A4", WellRecord::new().with_value(2.0)),
            ("B3", WellRecord::new().with_value(3.0)),
        ];
        let data = from_map(records.iter().map(|(k, v)| (*k, v)), shape).unwrap();
        assert_eq!(
            data.values(),
            &[None, None, None, None, None, Some(3.0)]
        );
    }

    #[test]
    fn test_from_map_rejects_malformed_names() {
        let records = [("1A", WellRecord::new())];
        let err = from_map(records.iter().map(|(k, v)| (*k, v)), PlateShape::default())
            .unwrap_err();
        assert!(matches!(
            err,
            PlateError::Well(WellError::InvalidName(ref name)) if name == "1A"
        ));
    }

    #[test]
    fn test_apply_value_only_data_keeps_derived_colors() {
        let records = [("A2", WellRecord::new().with_value(4.0))];
        let options = from_map(records.iter().map(|(k, v)| (*k, v)), PlateShape::default())
            .unwrap()
            .into_options(PlateShape::default());

        assert_eq!(options.values().map(|v| v[1]), Some(Some(4.0)));
        assert!(options.colors().is_none());
        assert!(options.overlay_text().is_none());
    }

    #[test]
    fn test_apply_sets_colors_and_text_when_present() {
        let records = [(
            "A1",
            WellRecord::new().with_color("red").with_text("ctrl"),
        )];
        let options = from_map(records.iter().map(|(k, v)| (*k, v)), PlateShape::default())
            .unwrap()
            .apply_to(PlateOptions::default().with_scale(0.5));

        assert_eq!(options.scale(), 0.5);
        assert_eq!(
            options.colors().map(|c| c[0].clone()),
            Some(Some(ColorValue::from("red")))
        );
        match options.overlay_text() {
            Some(OverlayText::Texts(texts)) => assert_eq!(texts[0].as_deref(), Some("ctrl")),
            other => panic!("unexpected overlay text {other:?}"),
        }
    }

    #[test]
    fn test_from_table_default_columns() {
        let rows = vec![
            record(&[("well", "A1".into()), ("value", 2.0.into())]),
            record(&[("well", "a2".into()), ("value", " 7.25 ".into())]),
            record(&[("well", "A3".into()), ("value", "n/a".into())]),
            record(&[("well", "B1".into()), ("color", 0.5.into()), ("text", 3.0.into())]),
            record(&[("well", "B2".into()), ("color", Cell::Null)]),
        ];
        let shape = PlateShape::new(2, 3).unwrap();
        let data = from_table(&rows, &TableColumns::default(), shape).unwrap();

        assert_eq!(
            data.values(),
            &[Some(2.0), Some(7.25), None, None, None, None]
        );
        assert_eq!(data.colors()[3], Some(ColorValue::Number(0.5)));
        assert_eq!(data.colors()[4], None);
        assert_eq!(data.texts()[3], Some("3.0".to_string()));
    }

    #[test]
    fn test_from_table_custom_columns() {
        let columns = TableColumns::new()
            .with_well("Well Position")
            .with_value("OD600")
            .with_text("Sample");
        let rows = vec![record(&[
            ("Well Position", "C05".into()),
            ("OD600", 0.42.into()),
            ("Sample", "blank".into()),
            ("value", 99.0.into()),
        ])];
        let data = from_table(&rows, &columns, PlateShape::default()).unwrap();

        assert_eq!(data.values()[28], Some(0.42));
        assert_eq!(data.texts()[28], Some("blank".to_string()));
        assert_eq!(data.values().iter().flatten().count(), 1);
    }

    #[test]
    fn test_from_table_requires_well() {
        let shape = PlateShape::default();
        let missing = vec![record(&[("value", 1.0.into())])];
        assert!(matches!(
            from_table(&missing, &TableColumns::default(), shape),
            Err(PlateError::Well(WellError::InvalidName(_)))
        ));

        let numeric = vec![record(&[("well", 12.0.into())])];
        assert!(matches!(
            from_table(&numeric, &TableColumns::default(), shape),
            Err(PlateError::Well(WellError::InvalidName(_)))
        ));
    }

    #[test]
    fn test_records_deserialize_from_toml() {
        let source = r#"
            [A1]
            value = 5.0

            [H12]
            color = "green"
            text = "ctrl"

            [B2]
            color = 0.5
        "#;
        let records: IndexMap<String, WellRecord> = toml::from_str(source).unwrap();
        let data = from_map(&records, PlateShape::default()).unwrap();

        assert_eq!(data.values()[0], Some(5.0));
        assert_eq!(data.colors()[95], Some(ColorValue::from("green")));
        assert_eq!(data.texts()[95], Some("ctrl".to_string()));
        assert_eq!(data.colors()[13], Some(ColorValue::Number(0.5)));
    }
}
