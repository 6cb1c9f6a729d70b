//! Printing executable documents as GraphQL text.

use crate::ast::*;

/// Formatting options.
#[derive(Debug, Clone)]
pub struct FormatOptions {
    /// Number of spaces for indentation.
    pub indent_size: usize,
    /// Use tabs instead of spaces.
    pub use_tabs: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            indent_size: 2,
            use_tabs: false,
        }
    }
}

/// Document printer.
///
/// Operation definitions are separated by a blank line and the document ends
/// with a newline. An anonymous query without variables prints as a bare
/// selection set. Empty selection sets print nothing.
pub struct Formatter {
    options: FormatOptions,
    output: String,
    indent: usize,
}

impl Formatter {
    /// Creates a new formatter.
    pub fn new(options: FormatOptions) -> Self {
        Self {
            options,
            output: String::new(),
            indent: 0,
        }
    }

    /// Formats a document.
    pub fn format(&mut self, document: &Document) -> String {
        self.output.clear();
        self.indent = 0;

        for (i, op) in document.definitions.iter().enumerate() {
            if i > 0 {
                self.output.push_str("\n\n");
            }
            self.format_operation(op);
        }
        if !document.definitions.is_empty() {
            self.output.push('\n');
        }

        self.output.clone()
    }

    /// Formats a single selection at the top indentation level.
    pub fn format_selection(&mut self, selection: &Selection) -> String {
        self.output.clear();
        self.indent = 0;
        self.write_selection(selection);
        self.output.clone()
    }

    fn format_operation(&mut self, op: &OperationDefinition) {
        let anonymous = op.name.is_none() && op.variables.is_empty();
        if op.operation == OperationType::Query && anonymous {
            self.format_selection_set(&op.selection_set);
            return;
        }

        self.output.push_str(op.operation.as_str());
        if let Some(name) = &op.name {
            self.output.push(' ');
            self.output.push_str(name.as_str());
        }
        if !op.variables.is_empty() {
            if op.name.is_none() {
                self.output.push(' ');
            }
            self.output.push('(');
            for (i, var) in op.variables.iter().enumerate() {
                if i > 0 {
                    self.output.push_str(", ");
                }
                self.output.push('$');
                self.output.push_str(var.variable.as_str());
                self.output.push_str(": ");
                self.format_type(&var.ty);
            }
            self.output.push(')');
        }
        if !op.selection_set.is_empty() {
            self.output.push(' ');
            self.format_selection_set(&op.selection_set);
        }
    }

    fn format_selection_set(&mut self, selection_set: &SelectionSet) {
        if selection_set.is_empty() {
            return;
        }

        self.output.push_str("{\n");
        self.indent += 1;
        for selection in &selection_set.selections {
            self.push_indent();
            self.write_selection(selection);
            self.output.push('\n');
        }
        self.indent -= 1;
        self.push_indent();
        self.output.push('}');
    }

    fn write_selection(&mut self, selection: &Selection) {
        match selection {
            Selection::Field(field) => self.format_field(field),
            Selection::InlineFragment(fragment) => self.format_inline_fragment(fragment),
        }
    }

    fn format_field(&mut self, field: &Field) {
        if let Some(alias) = &field.alias {
            self.output.push_str(alias.as_str());
            self.output.push_str(": ");
        }
        self.output.push_str(field.name.as_str());
        self.format_arguments(&field.arguments);

        if let Some(selection_set) = field.selection_set.as_ref().filter(|s| !s.is_empty()) {
            self.output.push(' ');
            self.format_selection_set(selection_set);
        }
    }

    fn format_inline_fragment(&mut self, fragment: &InlineFragment) {
        self.output.push_str("...");
        if let Some(type_condition) = &fragment.type_condition {
            self.output.push_str(" on ");
            self.output.push_str(type_condition.as_str());
        }
        if !fragment.selection_set.is_empty() {
            self.output.push(' ');
            self.format_selection_set(&fragment.selection_set);
        }
    }

    fn format_arguments(&mut self, arguments: &[Argument]) {
        if arguments.is_empty() {
            return;
        }

        self.output.push('(');
        for (i, arg) in arguments.iter().enumerate() {
            if i > 0 {
                self.output.push_str(", ");
            }
            self.output.push_str(arg.name.as_str());
            self.output.push_str(": ");
            self.format_value(&arg.value);
        }
        self.output.push(')');
    }

    fn format_type(&mut self, ty: &Type) {
        match ty {
            Type::Named(name) => {
                self.output.push_str(name.as_str());
            }
            Type::List(inner) => {
                self.output.push('[');
                self.format_type(inner);
                self.output.push(']');
            }
            Type::NonNull(inner) => {
                self.format_type(inner);
                self.output.push('!');
            }
        }
    }

    fn format_value(&mut self, value: &Value) {
        match value {
            Value::Variable(name) => {
                self.output.push('$');
                self.output.push_str(name.as_str());
            }
        }
    }

    fn push_indent(&mut self) {
        if self.options.use_tabs {
            for _ in 0..self.indent {
                self.output.push('\t');
            }
        } else {
            for _ in 0..(self.indent * self.options.indent_size) {
                self.output.push(' ');
            }
        }
    }
}

/// Formats a document with default options.
pub fn format(document: &Document) -> String {
    let mut formatter = Formatter::new(FormatOptions::default());
    formatter.format(document)
}

/// Formats a document with custom options.
pub fn format_with_options(document: &Document, options: FormatOptions) -> String {
    let mut formatter = Formatter::new(options);
    formatter.format(document)
}

/// Formats one selection with default options.
pub fn format_selection(selection: &Selection) -> String {
    let mut formatter = Formatter::new(FormatOptions::default());
    formatter.format_selection(selection)
}
