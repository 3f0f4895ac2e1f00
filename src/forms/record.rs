//! Record form of postprocessor state.

use super::{FieldAccess, PostMapping, Shape};
use crate::state::{mapping_from_value, PostState};
use postproc_core::{Field, StateError, StateResult, Value, UNITS_IMPERIAL, UNITS_METRIC};
use serde::{de, Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// Output units, written as the G-code word that selects them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Units {
    /// Millimetres (`G21`)
    #[default]
    #[serde(rename = "G21")]
    Metric,
    /// Inches (`G20`)
    #[serde(rename = "G20")]
    Imperial,
}

impl Units {
    /// G-code word for these units
    pub fn code(&self) -> &'static str {
        match self {
            Units::Metric => UNITS_METRIC,
            Units::Imperial => UNITS_IMPERIAL,
        }
    }

    /// Parse a G-code word
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            UNITS_METRIC => Some(Units::Metric),
            UNITS_IMPERIAL => Some(Units::Imperial),
            _ => None,
        }
    }
}

/// Structured form of postprocessor state.
///
/// Every known field is always present. Missing keys in serialized input take
/// their schema default. Field meanings are documented on [`Field`].
///
/// Deserializing applies the same kind checks and unknown-key handling as the
/// default [`StateLoader`](crate::StateLoader) with a record representation.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostRecord {
    pub output_filename: String,
    pub machine_name: String,
    pub units: Units,
    pub output_comments: bool,
    pub output_header: bool,
    pub output_line_numbers: bool,
    pub line_number_start: i64,
    pub line_increment: i64,
    pub show_editor: bool,
    pub modal: bool,
    pub output_tool_change: bool,
    pub enable_coolant: bool,
    pub use_tlo: bool,
    pub axis_precision: i64,
    pub feed_precision: i64,
    pub spindle_decimals: i64,
    pub chipbreaking_amount: f64,
    pub comment_symbol: String,
    pub end_of_line: String,
    pub preamble: String,
    pub postamble: String,
    pub pre_operation: String,
    pub post_operation: String,
    pub tool_change: String,
}

impl Default for PostRecord {
    fn default() -> Self {
        Self {
            output_filename: String::new(),
            machine_name: "unknown machine".to_string(),
            units: Units::Metric,
            output_comments: true,
            output_header: true,
            output_line_numbers: false,
            line_number_start: 100,
            line_increment: 10,
            show_editor: true,
            modal: false,
            output_tool_change: true,
            enable_coolant: false,
            use_tlo: true,
            axis_precision: 3,
            feed_precision: 3,
            spindle_decimals: 0,
            chipbreaking_amount: 0.25,
            comment_symbol: "(".to_string(),
            end_of_line: "\n".to_string(),
            preamble: "G17 G54 G40 G49 G80 G90\n".to_string(),
            postamble: "M05\nG17 G54 G90 G80 G40\nM2\n".to_string(),
            pre_operation: String::new(),
            post_operation: String::new(),
            tool_change: String::new(),
        }
    }
}

impl PostRecord {
    /// Current value of `field`
    pub fn value(&self, field: Field) -> Value {
        match field {
            Field::OutputFilename => Value::from(self.output_filename.as_str()),
            Field::MachineName => Value::from(self.machine_name.as_str()),
            Field::Units => Value::from(self.units.code()),
            Field::OutputComments => Value::Bool(self.output_comments),
            Field::OutputHeader => Value::Bool(self.output_header),
            Field::OutputLineNumbers => Value::Bool(self.output_line_numbers),
            Field::LineNumberStart => Value::Int(self.line_number_start),
            Field::LineIncrement => Value::Int(self.line_increment),
            Field::ShowEditor => Value::Bool(self.show_editor),
            Field::Modal => Value::Bool(self.modal),
            Field::OutputToolChange => Value::Bool(self.output_tool_change),
            Field::EnableCoolant => Value::Bool(self.enable_coolant),
            Field::UseTlo => Value::Bool(self.use_tlo),
            Field::AxisPrecision => Value::Int(self.axis_precision),
            Field::FeedPrecision => Value::Int(self.feed_precision),
            Field::SpindleDecimals => Value::Int(self.spindle_decimals),
            Field::ChipbreakingAmount => Value::Float(self.chipbreaking_amount),
            Field::CommentSymbol => Value::from(self.comment_symbol.as_str()),
            Field::EndOfLine => Value::from(self.end_of_line.as_str()),
            Field::Preamble => Value::from(self.preamble.as_str()),
            Field::Postamble => Value::from(self.postamble.as_str()),
            Field::PreOperation => Value::from(self.pre_operation.as_str()),
            Field::PostOperation => Value::from(self.post_operation.as_str()),
            Field::ToolChange => Value::from(self.tool_change.as_str()),
        }
    }

    /// Fully populated mapping with the same field values.
    pub fn to_mapping(&self) -> PostMapping {
        let entries: HashMap<String, Value> = Field::ALL
            .iter()
            .map(|f| (f.name().to_string(), self.value(*f)))
            .collect();
        PostMapping::from_checked(entries)
    }
}

impl<'de> Deserialize<'de> for PostRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = serde_json::Value::deserialize(deserializer)?;
        let mapping = mapping_from_value(Value::from(raw), false).map_err(de::Error::custom)?;
        Ok(PostState::Mapping(mapping).into_record())
    }
}

fn mismatch(field: Field, value: &Value) -> StateError {
    StateError::TypeMismatch {
        field: field.name(),
        expected: field.kind().to_string(),
        actual: value.type_name().to_string(),
    }
}

fn boolean(field: Field, value: Value) -> StateResult<bool> {
    value.as_bool().ok_or_else(|| mismatch(field, &value))
}

fn integer(field: Field, value: Value) -> StateResult<i64> {
    value.as_int().ok_or_else(|| mismatch(field, &value))
}

fn float(field: Field, value: Value) -> StateResult<f64> {
    value.as_float().ok_or_else(|| mismatch(field, &value))
}

fn text(field: Field, value: Value) -> StateResult<String> {
    match value {
        Value::String(s) => Ok(s),
        other => Err(mismatch(field, &other)),
    }
}

impl FieldAccess for PostRecord {
    fn shape(&self) -> Shape {
        Shape::Record
    }

    fn read(&self, field: Field) -> Option<Value> {
        Some(self.value(field))
    }

    fn write(&mut self, field: Field, value: Value) -> StateResult<()> {
        field.check(&value)?;
        match field {
            Field::OutputFilename => self.output_filename = text(field, value)?,
            Field::MachineName => self.machine_name = text(field, value)?,
            Field::Units => {
                let code = text(field, value)?;
                self.units = Units::from_code(&code)
                    .ok_or_else(|| mismatch(field, &Value::String(code.clone())))?;
            }
            Field::OutputComments => self.output_comments = boolean(field, value)?,
            Field::OutputHeader => self.output_header = boolean(field, value)?,
            Field::OutputLineNumbers => self.output_line_numbers = boolean(field, value)?,
            Field::LineNumberStart => self.line_number_start = integer(field, value)?,
            Field::LineIncrement => self.line_increment = integer(field, value)?,
            Field::ShowEditor => self.show_editor = boolean(field, value)?,
            Field::Modal => self.modal = boolean(field, value)?,
            Field::OutputToolChange => self.output_tool_change = boolean(field, value)?,
            Field::EnableCoolant => self.enable_coolant = boolean(field, value)?,
            Field::UseTlo => self.use_tlo = boolean(field, value)?,
            Field::AxisPrecision => self.axis_precision = integer(field, value)?,
            Field::FeedPrecision => self.feed_precision = integer(field, value)?,
            Field::SpindleDecimals => self.spindle_decimals = integer(field, value)?,
            Field::ChipbreakingAmount => self.chipbreaking_amount = float(field, value)?,
            Field::CommentSymbol => self.comment_symbol = text(field, value)?,
            Field::EndOfLine => self.end_of_line = text(field, value)?,
            Field::Preamble => self.preamble = text(field, value)?,
            Field::Postamble => self.postamble = text(field, value)?,
            Field::PreOperation => self.pre_operation = text(field, value)?,
            Field::PostOperation => self.post_operation = text(field, value)?,
            Field::ToolChange => self.tool_change = text(field, value)?,
        }
        Ok(())
    }

    fn is_set(&self, _field: Field) -> bool {
        true
    }

    fn clear(&mut self, field: Field) {
        let d = PostRecord::default();
        match field {
            Field::OutputFilename => self.output_filename = d.output_filename,
            Field::MachineName => self.machine_name = d.machine_name,
            Field::Units => self.units = d.units,
            Field::OutputComments => self.output_comments = d.output_comments,
            Field::OutputHeader => self.output_header = d.output_header,
            Field::OutputLineNumbers => self.output_line_numbers = d.output_line_numbers,
            Field::LineNumberStart => self.line_number_start = d.line_number_start,
            Field::LineIncrement => self.line_increment = d.line_increment,
            Field::ShowEditor => self.show_editor = d.show_editor,
            Field::Modal => self.modal = d.modal,
            Field::OutputToolChange => self.output_tool_change = d.output_tool_change,
            Field::EnableCoolant => self.enable_coolant = d.enable_coolant,
            Field::UseTlo => self.use_tlo = d.use_tlo,
            Field::AxisPrecision => self.axis_precision = d.axis_precision,
            Field::FeedPrecision => self.feed_precision = d.feed_precision,
            Field::SpindleDecimals => self.spindle_decimals = d.spindle_decimals,
            Field::ChipbreakingAmount => self.chipbreaking_amount = d.chipbreaking_amount,
            Field::CommentSymbol => self.comment_symbol = d.comment_symbol,
            Field::EndOfLine => self.end_of_line = d.end_of_line,
            Field::Preamble => self.preamble = d.preamble,
            Field::Postamble => self.postamble = d.postamble,
            Field::PreOperation => self.pre_operation = d.pre_operation,
            Field::PostOperation => self.post_operation = d.post_operation,
            Field::ToolChange => self.tool_change = d.tool_change,
        }
    }
}
