use serde::{Deserialize, Deserializer, Serialize};

/// One record of a `/beers/search` or `/breweries/search` response.
///
/// Values are opaque: strings pass through untouched, other JSON scalars keep
/// their JSON text (`42`, `true`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(deserialize_with = "opaque_text")]
    pub id: String,
    #[serde(deserialize_with = "opaque_text")]
    pub name: String,
    #[serde(
        default,
        deserialize_with = "optional_opaque_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub brewery: Option<String>,
}

impl SearchResult {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            brewery: None,
        }
    }

    pub fn with_brewery(mut self, brewery: impl Into<String>) -> Self {
        self.brewery = Some(brewery.into());
        self
    }
}

fn scalar_text(value: serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

fn opaque_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => Err(
            serde::de::Error::custom("expected a string or scalar value"),
        ),
        other => Ok(scalar_text(other).unwrap_or_default()),
    }
}

fn optional_opaque_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => Err(
            serde::de::Error::custom("expected a string or scalar value"),
        ),
        other => Ok(scalar_text(other)),
    }
}

/// A rendered `<tr>` plus the id of the record it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    id: String,
    html: String,
}

impl Row {
    pub fn new(id: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            html: html.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn html(&self) -> &str {
        &self.html
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableBody {
    selector: String,
    rows: Vec<Row>,
}

impl TableBody {
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            rows: Vec::new(),
        }
    }

    pub fn selector(&self) -> &str {
        &self.selector
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    pub fn append(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// 先清空再依序附加，結果與回應順序一致
    pub fn replace_rows(&mut self, rows: Vec<Row>) {
        self.clear();
        for row in rows {
            self.append(row);
        }
    }

    pub fn to_html(&self) -> String {
        let mut html = String::from("<tbody>");
        for row in &self.rows {
            html.push_str(row.html());
        }
        html.push_str("</tbody>");
        html
    }
}

/// The text input a widget reads on every keystroke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchField {
    selector: String,
    value: String,
}

impl SearchField {
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            value: String::new(),
        }
    }

    pub fn selector(&self) -> &str {
        &self.selector
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    pub fn pop_char(&mut self) -> Option<char> {
        self.value.pop()
    }
}

/// What to do with a response that arrives after a newer one was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StalePolicy {
    /// Last response to arrive wins, even if it answers an older keystroke.
    Overwrite,
    #[default]
    #[serde(alias = "discard_stale")]
    Discard,
}

impl std::str::FromStr for StalePolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "overwrite" => Ok(StalePolicy::Overwrite),
            "discard" | "discard_stale" => Ok(StalePolicy::Discard),
            other => Err(format!("unknown stale policy '{}'", other)),
        }
    }
}

/// Where a widget lives on the page and which endpoint it queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetSpec {
    pub name: String,
    pub field_selector: String,
    pub table_selector: String,
    pub endpoint: String,
}
