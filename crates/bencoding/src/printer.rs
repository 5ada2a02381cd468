//! Human-readable rendering of a [`Value`] tree.
//!
//! The output looks like JSON: integers as decimals, byte strings in double
//! quotes, lists in `[...]` and dictionaries in `{...}`. Inside a byte string
//! every `"` becomes `\"`; nothing else is escaped. Bytes that are not valid
//! UTF-8 are shown as U+FFFD.
//!
//! Two layouts exist:
//!
//! - compact, everything on one line: `{"a": [1, 2], "b": "x"}`
//! - indented, one child per line, nesting by one indent unit per level:
//!
//! ```text
//! {
//!     "a": [
//!         1,
//!         2
//!     ],
//!     "b": "x"
//! }
//! ```
//!
//! An empty indent unit produces the compact layout.

use std::fmt;

use crate::dictionary::Dictionary;
use crate::list::List;
use crate::value::{ByteString, Value};

/// Indent unit used by the CLI and by `{:#}` formatting.
pub const DEFAULT_INDENT: &str = "    ";

/// Render `value` with one `indent` per nesting level.
///
/// ```
/// use bencoding::{pretty_print, List, Value};
///
/// let list: List = [1i64, 2].into_iter().collect();
/// assert_eq!(pretty_print(&Value::from(list), "  "), "[\n  1,\n  2\n]");
/// ```
pub fn pretty_print(value: &Value, indent: &str) -> String {
    let mut printer = Printer {
        out: String::new(),
        unit: indent,
    };
    if indent.is_empty() {
        printer.compact(value);
    } else {
        printer.indented(value, 0);
    }
    printer.out
}

/// Render `value` on a single line.
pub fn pretty_print_compact(value: &Value) -> String {
    pretty_print(value, "")
}

/// `{}` gives the compact layout, `{:#}` the layout with [`DEFAULT_INDENT`].
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let indent = if f.alternate() { DEFAULT_INDENT } else { "" };
        f.write_str(&pretty_print(self, indent))
    }
}

struct Printer<'a> {
    out: String,
    unit: &'a str,
}

impl Printer<'_> {
    fn compact(&mut self, value: &Value) {
        match value {
            Value::Integer(i) => self.integer(i.value()),
            Value::ByteString(s) => self.byte_string(s),
            Value::List(list) => {
                self.out.push('[');
                for (i, item) in list.iter().enumerate() {
                    if i > 0 {
                        self.out.push_str(", ");
                    }
                    self.compact(item);
                }
                self.out.push(']');
            }
            Value::Dictionary(dict) => {
                self.out.push('{');
                for (i, (key, item)) in dict.occupied().enumerate() {
                    if i > 0 {
                        self.out.push_str(", ");
                    }
                    self.byte_string(key);
                    self.out.push_str(": ");
                    self.compact(item);
                }
                self.out.push('}');
            }
        }
    }

    /// `depth` is the nesting level of `value`; the caller has already written
    /// the indentation in front of it.
    fn indented(&mut self, value: &Value, depth: usize) {
        match value {
            Value::Integer(i) => self.integer(i.value()),
            Value::ByteString(s) => self.byte_string(s),
            Value::List(list) => self.indented_list(list, depth),
            Value::Dictionary(dict) => self.indented_dictionary(dict, depth),
        }
    }

    fn indented_list(&mut self, list: &List, depth: usize) {
        self.out.push_str("[\n");
        for (i, item) in list.iter().enumerate() {
            if i > 0 {
                self.out.push_str(",\n");
            }
            self.push_indent(depth + 1);
            self.indented(item, depth + 1);
        }
        if !list.is_empty() {
            self.out.push('\n');
        }
        self.push_indent(depth);
        self.out.push(']');
    }

    fn indented_dictionary(&mut self, dict: &Dictionary, depth: usize) {
        self.out.push_str("{\n");
        let mut wrote_any = false;
        for (key, item) in dict.occupied() {
            if wrote_any {
                self.out.push_str(",\n");
            }
            self.push_indent(depth + 1);
            self.byte_string(key);
            self.out.push_str(": ");
            self.indented(item, depth + 1);
            wrote_any = true;
        }
        if wrote_any {
            self.out.push('\n');
        }
        self.push_indent(depth);
        self.out.push('}');
    }

    fn integer(&mut self, value: i64) {
        self.out.push_str(&value.to_string());
    }

    fn byte_string(&mut self, s: &ByteString) {
        self.out.push('"');
        self.out
            .push_str(&String::from_utf8_lossy(s.value()).replace('"', "\\\""));
        self.out.push('"');
    }

    fn push_indent(&mut self, depth: usize) {
        for _ in 0..depth {
            self.out.push_str(self.unit);
        }
    }
}
