use error_stack::report;
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CredentialParseError {
    #[error("Worksheet is empty")]
    EmptyWorksheet,
    #[error("Header row is missing the {0} column")]
    MissingColumn(&'static str),
    #[error("Worksheet has a header row but no data rows")]
    NoDataRows,
}

/// The active login stored on the credential sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialRecord {
    pub username: String,
    pub password: String,
}

impl CredentialRecord {
    /// Builds the active credentials from raw worksheet values: the header
    /// row names the columns, the last data row holds the record. Columns
    /// other than `Username` and `Password` are ignored.
    pub fn last_from_rows(rows: &[Vec<Value>]) -> error_stack::Result<Self, CredentialParseError> {
        let (header, data) = rows
            .split_first()
            .ok_or(report!(CredentialParseError::EmptyWorksheet))?;

        let username_column = column_index(header, "Username")
            .ok_or(report!(CredentialParseError::MissingColumn("Username")))?;
        let password_column = column_index(header, "Password")
            .ok_or(report!(CredentialParseError::MissingColumn("Password")))?;

        let last_row = data.last().ok_or(report!(CredentialParseError::NoDataRows))?;

        Ok(CredentialRecord {
            username: cell_text(last_row, username_column),
            password: cell_text(last_row, password_column),
        })
    }
}

fn column_index(header: &[Value], name: &str) -> Option<usize> {
    header.iter().position(|cell| cell.as_str() == Some(name))
}

fn cell_text(row: &[Value], index: usize) -> String {
    row.get(index)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_owned()
}
