//! Known field set for postprocessor state
//!
//! Every option a postprocessor can read is listed here exactly once, with its
//! wire name, declared kind and default. Both state forms resolve names
//! through this table, so a field means the same thing in either form.
//!
//! ## Field table
//!
//! | Name | Kind | Default |
//! |------|------|---------|
//! | output_filename | Text | `""` |
//! | machine_name | Text | `"unknown machine"` |
//! | units | Choice(G21, G20) | `"G21"` |
//! | output_comments | Bool | `true` |
//! | output_header | Bool | `true` |
//! | output_line_numbers | Bool | `false` |
//! | line_number_start | Int | `100` |
//! | line_increment | Int | `10` |
//! | show_editor | Bool | `true` |
//! | modal | Bool | `false` |
//! | output_tool_change | Bool | `true` |
//! | enable_coolant | Bool | `false` |
//! | use_tlo | Bool | `true` |
//! | axis_precision | Int | `3` |
//! | feed_precision | Int | `3` |
//! | spindle_decimals | Int | `0` |
//! | chipbreaking_amount | Float | `0.25` |
//! | comment_symbol | Text | `"("` |
//! | end_of_line | Text | `"\n"` |
//! | preamble | Text | `"G17 G54 G40 G49 G80 G90\n"` |
//! | postamble | Text | `"M05\nG17 G54 G90 G80 G40\nM2\n"` |
//! | pre_operation | Text | `""` |
//! | post_operation | Text | `""` |
//! | tool_change | Text | `""` |

use crate::error::{StateError, StateResult};
use crate::value::Value;
use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;
use std::fmt;
use std::str::FromStr;

/// G-code word selecting metric units
pub const UNITS_METRIC: &str = "G21";
/// G-code word selecting imperial units
pub const UNITS_IMPERIAL: &str = "G20";

/// A postprocessor option recognized by both state forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    /// Path of the generated program
    OutputFilename,
    /// Human-readable machine name written to the header
    MachineName,
    /// `G21` (metric) or `G20` (imperial)
    Units,
    /// Emit operation comments
    OutputComments,
    /// Emit the program header block
    OutputHeader,
    /// Prefix lines with `N` numbers
    OutputLineNumbers,
    /// First line number
    LineNumberStart,
    /// Step between line numbers
    LineIncrement,
    /// Open the result in the editor dialog
    ShowEditor,
    /// Suppress repeated commands
    Modal,
    /// Emit tool change commands
    OutputToolChange,
    /// Emit coolant commands
    EnableCoolant,
    /// Emit tool length offset after tool change
    UseTlo,
    /// Decimal places for axis words
    AxisPrecision,
    /// Decimal places for feed words
    FeedPrecision,
    /// Decimal places for spindle speeds
    SpindleDecimals,
    /// Retract distance for chipbreaking drill cycles
    ChipbreakingAmount,
    /// Character opening a comment
    CommentSymbol,
    /// Line terminator
    EndOfLine,
    /// Text emitted before the first operation
    Preamble,
    /// Text emitted after the last operation
    Postamble,
    /// Text emitted before each operation
    PreOperation,
    /// Text emitted after each operation
    PostOperation,
    /// Text emitted on each tool change
    ToolChange,
}

/// Declared kind of a field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    /// `Value::Bool`
    Bool,
    /// `Value::Int`
    Int,
    /// `Value::Float`
    Float,
    /// `Value::String`, any content
    Text,
    /// `Value::String` restricted to the listed options
    Choice(&'static [&'static str]),
}

impl FieldKind {
    /// Whether `value` may be stored under a field of this kind.
    ///
    /// No coercion: an `Int` is not a valid `Float`, and `Null` is never valid.
    /// `Float` fields take finite values only, so a stored float always
    /// compares equal to itself and survives a trip through JSON.
    pub fn accepts(&self, value: &Value) -> bool {
        match (self, value) {
            (FieldKind::Bool, Value::Bool(_)) => true,
            (FieldKind::Int, Value::Int(_)) => true,
            (FieldKind::Float, Value::Float(f)) => f.is_finite(),
            (FieldKind::Text, Value::String(_)) => true,
            (FieldKind::Choice(options), Value::String(s)) => options.contains(&s.as_str()),
            _ => false,
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Bool => write!(f, "Bool"),
            FieldKind::Int => write!(f, "Int"),
            FieldKind::Float => write!(f, "Float"),
            FieldKind::Text => write!(f, "String"),
            FieldKind::Choice(options) => write!(f, "one of [{}]", options.join(", ")),
        }
    }
}

/// Default of a field, in a form that can live in a static table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DefaultValue {
    /// Boolean default
    Bool(bool),
    /// Integer default
    Int(i64),
    /// Float default
    Float(f64),
    /// Text default
    Text(&'static str),
}

impl DefaultValue {
    /// Materialize as a `Value`
    pub fn to_value(&self) -> Value {
        match self {
            DefaultValue::Bool(b) => Value::Bool(*b),
            DefaultValue::Int(i) => Value::Int(*i),
            DefaultValue::Float(f) => Value::Float(*f),
            DefaultValue::Text(s) => Value::String((*s).to_string()),
        }
    }
}

/// Schema entry for one field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    /// The field this entry describes
    pub field: Field,
    /// Wire name used as the mapping key
    pub name: &'static str,
    /// Declared kind
    pub kind: FieldKind,
    /// Value observed when the field is unset
    pub default: DefaultValue,
}

const UNIT_CHOICES: &[&str] = &[UNITS_METRIC, UNITS_IMPERIAL];

macro_rules! spec {
    ($field:ident, $name:literal, $kind:expr, $default:expr) => {
        FieldSpec {
            field: Field::$field,
            name: $name,
            kind: $kind,
            default: $default,
        }
    };
}

// Indexed by `Field as usize`; order must match the enum declaration.
static SPECS: [FieldSpec; Field::COUNT] = [
    spec!(OutputFilename, "output_filename", FieldKind::Text, DefaultValue::Text("")),
    spec!(MachineName, "machine_name", FieldKind::Text, DefaultValue::Text("unknown machine")),
    spec!(Units, "units", FieldKind::Choice(UNIT_CHOICES), DefaultValue::Text(UNITS_METRIC)),
    spec!(OutputComments, "output_comments", FieldKind::Bool, DefaultValue::Bool(true)),
    spec!(OutputHeader, "output_header", FieldKind::Bool, DefaultValue::Bool(true)),
    spec!(OutputLineNumbers, "output_line_numbers", FieldKind::Bool, DefaultValue::Bool(false)),
    spec!(LineNumberStart, "line_number_start", FieldKind::Int, DefaultValue::Int(100)),
    spec!(LineIncrement, "line_increment", FieldKind::Int, DefaultValue::Int(10)),
    spec!(ShowEditor, "show_editor", FieldKind::Bool, DefaultValue::Bool(true)),
    spec!(Modal, "modal", FieldKind::Bool, DefaultValue::Bool(false)),
    spec!(OutputToolChange, "output_tool_change", FieldKind::Bool, DefaultValue::Bool(true)),
    spec!(EnableCoolant, "enable_coolant", FieldKind::Bool, DefaultValue::Bool(false)),
    spec!(UseTlo, "use_tlo", FieldKind::Bool, DefaultValue::Bool(true)),
    spec!(AxisPrecision, "axis_precision", FieldKind::Int, DefaultValue::Int(3)),
    spec!(FeedPrecision, "feed_precision", FieldKind::Int, DefaultValue::Int(3)),
    spec!(SpindleDecimals, "spindle_decimals", FieldKind::Int, DefaultValue::Int(0)),
    spec!(ChipbreakingAmount, "chipbreaking_amount", FieldKind::Float, DefaultValue::Float(0.25)),
    spec!(CommentSymbol, "comment_symbol", FieldKind::Text, DefaultValue::Text("(")),
    spec!(EndOfLine, "end_of_line", FieldKind::Text, DefaultValue::Text("\n")),
    spec!(
        Preamble,
        "preamble",
        FieldKind::Text,
        DefaultValue::Text("G17 G54 G40 G49 G80 G90\n")
    ),
    spec!(
        Postamble,
        "postamble",
        FieldKind::Text,
        DefaultValue::Text("M05\nG17 G54 G90 G80 G40\nM2\n")
    ),
    spec!(PreOperation, "pre_operation", FieldKind::Text, DefaultValue::Text("")),
    spec!(PostOperation, "post_operation", FieldKind::Text, DefaultValue::Text("")),
    spec!(ToolChange, "tool_change", FieldKind::Text, DefaultValue::Text("")),
];

static BY_NAME: Lazy<FxHashMap<&'static str, Field>> =
    Lazy::new(|| SPECS.iter().map(|spec| (spec.name, spec.field)).collect());

impl Field {
    /// Number of known fields
    pub const COUNT: usize = 24;

    /// Every known field, in schema order
    pub const ALL: [Field; Field::COUNT] = [
        Field::OutputFilename,
        Field::MachineName,
        Field::Units,
        Field::OutputComments,
        Field::OutputHeader,
        Field::OutputLineNumbers,
        Field::LineNumberStart,
        Field::LineIncrement,
        Field::ShowEditor,
        Field::Modal,
        Field::OutputToolChange,
        Field::EnableCoolant,
        Field::UseTlo,
        Field::AxisPrecision,
        Field::FeedPrecision,
        Field::SpindleDecimals,
        Field::ChipbreakingAmount,
        Field::CommentSymbol,
        Field::EndOfLine,
        Field::Preamble,
        Field::Postamble,
        Field::PreOperation,
        Field::PostOperation,
        Field::ToolChange,
    ];

    /// Resolve a field by its wire name.
    ///
    /// Names are matched exactly; a typo fails with `UnknownField` rather
    /// than reading as unset.
    pub fn from_name(name: &str) -> StateResult<Field> {
        BY_NAME
            .get(name)
            .copied()
            .ok_or_else(|| StateError::unknown_field(name))
    }

    /// Schema entry for this field
    pub fn spec(self) -> &'static FieldSpec {
        &SPECS[self as usize]
    }

    /// Wire name
    pub fn name(self) -> &'static str {
        self.spec().name
    }

    /// Declared kind
    pub fn kind(self) -> FieldKind {
        self.spec().kind
    }

    /// Documented default, identical in both state forms
    pub fn default_value(self) -> Value {
        self.spec().default.to_value()
    }

    /// Check that `value` may be stored under this field.
    pub fn check(self, value: &Value) -> StateResult<()> {
        let kind = self.kind();
        if kind.accepts(value) {
            return Ok(());
        }
        let actual = match (kind, value) {
            (FieldKind::Choice(_), Value::String(s)) => format!("{:?}", s),
            (FieldKind::Float, Value::Float(f)) => f.to_string(),
            _ => value.type_name().to_string(),
        };
        Err(StateError::TypeMismatch {
            field: self.name(),
            expected: kind.to_string(),
            actual,
        })
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = StateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::from_name(s)
    }
}
