//! Declarative field schema for remote-control commands.
//!
//! A schema is parsed from the line-oriented declaration format that also
//! serves as the command's help text:
//!
//! ```text
//! args+/list.str: The command line to run in the new window
//! type/choices.window.tab.os-window: The type of window to open
//! copy_env/list.str=copy_local_env: List of strings representing the local env vars
//! ```
//!
//! Each line is `name/type: description`. A `+` after the name marks the
//! positional-arguments field, and `=hook` after the type names an
//! encode-time hook. A line ending in `\` continues on the next line.

use serde_json::Value;

use crate::errors::SchemaError;

/// Wire type of a declared field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeTag {
    Str,
    Bool,
    Float,
    Choices(Vec<String>),
    ListStr,
}

impl TypeTag {
    /// Parse the type portion of a declaration (`str`, `bool`, `float`,
    /// `list.str`, `choices.a.b.c`).
    pub fn parse(field: &str, spec: &str) -> Result<Self, SchemaError> {
        match spec {
            "str" => Ok(TypeTag::Str),
            "bool" => Ok(TypeTag::Bool),
            "float" => Ok(TypeTag::Float),
            "list.str" => Ok(TypeTag::ListStr),
            _ => {
                let values = if spec == "choices" {
                    Some("")
                } else {
                    spec.strip_prefix("choices.")
                };
                let Some(values) = values else {
                    return Err(SchemaError::UnknownType {
                        field: field.to_string(),
                        type_spec: spec.to_string(),
                    });
                };
                let choices: Vec<String> = values
                    .split('.')
                    .filter(|v| !v.is_empty())
                    .map(String::from)
                    .collect();
                if choices.is_empty() {
                    return Err(SchemaError::EmptyChoices {
                        field: field.to_string(),
                    });
                }
                Ok(TypeTag::Choices(choices))
            }
        }
    }

    /// Whether the field carries a list of values rather than a single one.
    pub fn is_repeated(&self) -> bool {
        matches!(self, TypeTag::ListStr)
    }

    /// Whether a wire value has the shape this type expects.
    ///
    /// `null` is never accepted; callers treat it as an absent field.
    pub fn accepts(&self, value: &Value) -> bool {
        match (self, value) {
            (TypeTag::Str, Value::String(_)) => true,
            (TypeTag::Bool, Value::Bool(_)) => true,
            (TypeTag::Float, Value::Number(_)) => true,
            (TypeTag::Choices(choices), Value::String(s)) => choices.iter().any(|c| c == s),
            (TypeTag::ListStr, Value::Array(items)) => items.iter().all(Value::is_string),
            _ => false,
        }
    }

    /// Short label used in help output.
    pub fn label(&self) -> String {
        match self {
            TypeTag::Str => "str".to_string(),
            TypeTag::Bool => "bool".to_string(),
            TypeTag::Float => "float".to_string(),
            TypeTag::ListStr => "list.str".to_string(),
            TypeTag::Choices(choices) => format!("choices: {}", choices.join(", ")),
        }
    }
}

/// One declared field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDecl {
    pub name: String,
    pub type_tag: TypeTag,
    pub repeated: bool,
    /// Carries the command's positional arguments (`args+`).
    pub positional: bool,
    /// Name of the hook applied when encoding (`=copy_local_env`).
    pub encode_hook: Option<String>,
    pub description: String,
}

impl FieldDecl {
    /// The allowed values for an enumeration field.
    pub fn choices(&self) -> Option<&[String]> {
        match &self.type_tag {
            TypeTag::Choices(choices) => Some(choices),
            _ => None,
        }
    }

    /// Command-line flag name: underscores become dashes.
    pub fn flag_name(&self) -> String {
        self.name.replace('_', "-")
    }
}

/// An immutable, order-preserving list of field declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    fields: Vec<FieldDecl>,
}

impl Schema {
    /// Parse a schema from its declaration text.
    ///
    /// Blank lines are skipped and leading indentation is ignored.
    pub fn parse(text: &str) -> Result<Self, SchemaError> {
        let mut fields: Vec<FieldDecl> = Vec::new();

        for (line_no, line) in logical_lines(text) {
            let decl = parse_line(line_no, &line)?;
            if fields.iter().any(|f| f.name == decl.name) {
                return Err(SchemaError::DuplicateField { name: decl.name });
            }
            fields.push(decl);
        }

        Ok(Self { fields })
    }

    pub fn fields(&self) -> &[FieldDecl] {
        &self.fields
    }

    /// Look up a field by exact name.
    pub fn get(&self, name: &str) -> Option<&FieldDecl> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// The field that carries positional arguments, if any.
    pub fn positional(&self) -> Option<&FieldDecl> {
        self.fields.iter().find(|f| f.positional)
    }

    /// Render the declarations as human-readable help text.
    pub fn help_text(&self) -> String {
        let width = self.fields.iter().map(|f| f.name.len()).max().unwrap_or(0);
        let mut out = String::new();
        for field in &self.fields {
            out.push_str(&format!(
                "{:<width$}  [{}]  {}\n",
                field.name,
                field.type_tag.label(),
                field.description,
                width = width
            ));
        }
        out
    }
}

/// Join `\`-continued lines, returning each logical line with the number of
/// the physical line it started on (1-based).
fn logical_lines(text: &str) -> Vec<(usize, String)> {
    let mut lines = Vec::new();
    let mut pending: Option<(usize, String)> = None;

    for (idx, raw) in text.lines().enumerate() {
        let trimmed = raw.trim();
        let (start, mut acc) = match pending.take() {
            Some((start, acc)) => (start, acc),
            None if trimmed.is_empty() => continue,
            None => (idx + 1, String::new()),
        };

        if let Some(head) = trimmed.strip_suffix('\\') {
            acc.push_str(head);
            pending = Some((start, acc));
        } else {
            acc.push_str(trimmed);
            lines.push((start, acc));
        }
    }

    if let Some(last) = pending {
        lines.push(last);
    }
    lines
}

fn parse_line(line_no: usize, line: &str) -> Result<FieldDecl, SchemaError> {
    let malformed = || SchemaError::MalformedLine {
        line: line_no,
        text: line.to_string(),
    };

    let (head, description) = line.split_once(':').ok_or_else(malformed)?;
    let (name_part, type_part) = head.trim().split_once('/').ok_or_else(malformed)?;

    let (name, positional) = match name_part.strip_suffix('+') {
        Some(name) => (name, true),
        None => (name_part, false),
    };
    if name.is_empty() || name.contains(char::is_whitespace) {
        return Err(malformed());
    }

    let (type_spec, encode_hook) = match type_part.split_once('=') {
        Some((spec, hook)) if !hook.is_empty() => (spec, Some(hook.to_string())),
        Some(_) => return Err(malformed()),
        None => (type_part, None),
    };

    let type_tag = TypeTag::parse(name, type_spec)?;
    if positional && type_tag != TypeTag::ListStr {
        return Err(SchemaError::InvalidPositional {
            field: name.to_string(),
        });
    }

    Ok(FieldDecl {
        name: name.to_string(),
        repeated: type_tag.is_repeated(),
        type_tag,
        positional,
        encode_hook,
        description: description.trim().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_basic_types() {
        let schema = Schema::parse(
            "title/str: Window title\n\
             hold/bool: Keep open\n\
             alpha/float: Logo alpha\n\
             env/list.str: Env vars\n",
        )
        .unwrap();

        assert_eq!(schema.fields().len(), 4);
        assert_eq!(schema.get("title").unwrap().type_tag, TypeTag::Str);
        assert_eq!(schema.get("hold").unwrap().type_tag, TypeTag::Bool);
        assert_eq!(schema.get("alpha").unwrap().type_tag, TypeTag::Float);
        let env = schema.get("env").unwrap();
        assert_eq!(env.type_tag, TypeTag::ListStr);
        assert!(env.repeated);
        assert_eq!(env.description, "Env vars");
    }

    #[test]
    fn test_parse_choices() {
        let schema = Schema::parse("type/choices.window.tab.os-window: The type").unwrap();
        let field = schema.get("type").unwrap();
        assert_eq!(
            field.choices().unwrap(),
            &["window".to_string(), "tab".to_string(), "os-window".to_string()]
        );
        assert!(!field.repeated);
    }

    #[test]
    fn test_parse_positional_and_hook() {
        let schema = Schema::parse(
            "args+/list.str: Command line\n\
             copy_env/list.str=copy_local_env: Local env",
        )
        .unwrap();
        assert_eq!(schema.positional().unwrap().name, "args");
        let copy_env = schema.get("copy_env").unwrap();
        assert_eq!(copy_env.encode_hook.as_deref(), Some("copy_local_env"));
        assert!(!copy_env.positional);
    }

    #[test]
    fn test_parse_continuation_line() {
        let text = r#"
            stdin_source/choices.none.@selection.\
                @screen.@alternate: Where to get stdin
            marker/str: Marker spec
        "#;
        let schema = Schema::parse(text).unwrap();
        let stdin = schema.get("stdin_source").unwrap();
        assert_eq!(stdin.choices().unwrap().len(), 4);
        assert!(stdin.choices().unwrap().contains(&"@alternate".to_string()));
        assert!(schema.contains("marker"));
    }

    #[test]
    fn test_description_may_contain_colons() {
        let schema = Schema::parse(r#"marker/str: Marker, for example: "text 1 ERROR""#).unwrap();
        assert_eq!(
            schema.get("marker").unwrap().description,
            r#"Marker, for example: "text 1 ERROR""#
        );
    }

    #[test]
    fn test_parse_unknown_type() {
        let err = Schema::parse("x/int: Nope").unwrap_err();
        assert!(matches!(err, SchemaError::UnknownType { .. }));
    }

    #[test]
    fn test_parse_empty_choices() {
        let err = Schema::parse("x/choices: Nope").unwrap_err();
        assert!(matches!(err, SchemaError::EmptyChoices { .. }));
    }

    #[test]
    fn test_parse_malformed_line_reports_line_number() {
        let err = Schema::parse("a/str: ok\n\nno slash here").unwrap_err();
        assert_eq!(
            err,
            SchemaError::MalformedLine {
                line: 3,
                text: "no slash here".to_string()
            }
        );
    }

    #[test]
    fn test_parse_duplicate_field() {
        let err = Schema::parse("a/str: one\na/bool: two").unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateField { name } if name == "a"));
    }

    #[test]
    fn test_positional_must_be_list() {
        let err = Schema::parse("args+/str: nope").unwrap_err();
        assert!(matches!(err, SchemaError::InvalidPositional { .. }));
    }

    #[test]
    fn test_lookup_is_by_exact_name() {
        let schema = Schema::parse("window_title/str: Title").unwrap();
        assert!(schema.get("window_title").is_some());
        assert!(schema.get("window-title").is_none());
        assert!(schema.get("Window_Title").is_none());
    }

    #[test]
    fn test_accepts() {
        assert!(TypeTag::Str.accepts(&json!("x")));
        assert!(!TypeTag::Str.accepts(&json!(1)));
        assert!(!TypeTag::Str.accepts(&Value::Null));
        assert!(TypeTag::Bool.accepts(&json!(false)));
        assert!(TypeTag::Float.accepts(&json!(-1)));
        assert!(TypeTag::Float.accepts(&json!(0.5)));
        assert!(TypeTag::ListStr.accepts(&json!([])));
        assert!(TypeTag::ListStr.accepts(&json!(["a", "b"])));
        assert!(!TypeTag::ListStr.accepts(&json!(["a", 1])));

        let choices = TypeTag::Choices(vec!["window".to_string(), "tab".to_string()]);
        assert!(choices.accepts(&json!("tab")));
        assert!(!choices.accepts(&json!("overlay")));
    }

    #[test]
    fn test_flag_name() {
        let schema = Schema::parse("os_window_title/str: Title").unwrap();
        assert_eq!(schema.get("os_window_title").unwrap().flag_name(), "os-window-title");
    }

    #[test]
    fn test_help_text_lists_every_field() {
        let schema = Schema::parse("a/str: First\nbb/bool: Second").unwrap();
        let help = schema.help_text();
        assert!(help.contains("a   [str]  First"));
        assert!(help.contains("bb  [bool]  Second"));
    }
}
