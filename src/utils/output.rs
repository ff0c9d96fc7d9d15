use crate::domain::model::TableBody;
use crate::utils::error::{Result, SearchError};
use serde::Serialize;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Html,
    Json,
    Csv,
}

impl FromStr for OutputFormat {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "html" => Ok(OutputFormat::Html),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(SearchError::InvalidConfigValueError {
                field: "format".to_string(),
                value: other.to_string(),
                reason: "Valid formats: html, json, csv".to_string(),
            }),
        }
    }
}

#[derive(Serialize)]
struct RowRecord<'a> {
    id: &'a str,
    html: &'a str,
}

/// 將表格內容輸出成指定格式
pub fn render_table(table: &TableBody, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Html => Ok(table.to_html()),
        OutputFormat::Json => {
            let records: Vec<RowRecord<'_>> = table
                .rows()
                .iter()
                .map(|row| RowRecord {
                    id: row.id(),
                    html: row.html(),
                })
                .collect();
            Ok(serde_json::to_string_pretty(&records)?)
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            writer.write_record(["id", "html"])?;
            for row in table.rows() {
                writer.write_record([row.id(), row.html()])?;
            }
            let bytes = writer
                .into_inner()
                .map_err(|e| SearchError::IoError(e.into_error()))?;
            String::from_utf8(bytes).map_err(|e| SearchError::ConfigError {
                message: format!("CSV output is not UTF-8: {}", e),
            })
        }
    }
}
