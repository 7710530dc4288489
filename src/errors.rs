use std::fmt;

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SluglinkError {
    DatabaseConfig(String),
    DatabaseConnection(String),
    DatabaseOperation(String),
    Validation(String),
    Serialization(String),
    FileOperation(String),
    CorruptRecord(String),
    Config(String),
}

/// JSON error body returned by the API: `{"error": "..."}`
#[derive(Debug, Serialize)]
pub struct ErrorBody<'a> {
    pub error: &'a str,
}

impl SluglinkError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            SluglinkError::DatabaseConfig(_) => "E001",
            SluglinkError::DatabaseConnection(_) => "E002",
            SluglinkError::DatabaseOperation(_) => "E003",
            SluglinkError::Validation(_) => "E004",
            SluglinkError::Serialization(_) => "E005",
            SluglinkError::FileOperation(_) => "E006",
            SluglinkError::CorruptRecord(_) => "E007",
            SluglinkError::Config(_) => "E008",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            SluglinkError::DatabaseConfig(_) => "Database Configuration Error",
            SluglinkError::DatabaseConnection(_) => "Database Connection Error",
            SluglinkError::DatabaseOperation(_) => "Database Operation Error",
            SluglinkError::Validation(_) => "Validation Error",
            SluglinkError::Serialization(_) => "Serialization Error",
            SluglinkError::FileOperation(_) => "File Operation Error",
            SluglinkError::CorruptRecord(_) => "Corrupt Record",
            SluglinkError::Config(_) => "Configuration Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            SluglinkError::DatabaseConfig(msg)
            | SluglinkError::DatabaseConnection(msg)
            | SluglinkError::DatabaseOperation(msg)
            | SluglinkError::Validation(msg)
            | SluglinkError::Serialization(msg)
            | SluglinkError::FileOperation(msg)
            | SluglinkError::CorruptRecord(msg)
            | SluglinkError::Config(msg) => msg,
        }
    }

    /// HTTP status the API answers with for this error
    pub fn http_status(&self) -> StatusCode {
        match self {
            SluglinkError::Validation(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client errors carry their message to the caller; everything else is
    /// reported generically and only logged in full.
    pub fn is_client_error(&self) -> bool {
        self.http_status().is_client_error()
    }

    /// 格式化为彩色输出（用于启动失败时打印到终端）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for SluglinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for SluglinkError {}

impl ResponseError for SluglinkError {
    fn status_code(&self) -> StatusCode {
        self.http_status()
    }

    fn error_response(&self) -> HttpResponse {
        let error = if self.is_client_error() {
            self.message()
        } else {
            tracing::error!("{} [{}]", self.format_simple(), self.code());
            "internal server error"
        };

        HttpResponse::build(self.status_code())
            .insert_header(("Content-Type", "application/json; charset=utf-8"))
            .json(ErrorBody { error })
    }
}

// 便捷的构造函数
impl SluglinkError {
    pub fn database_config<T: Into<String>>(msg: T) -> Self {
        SluglinkError::DatabaseConfig(msg.into())
    }

    pub fn database_connection<T: Into<String>>(msg: T) -> Self {
        SluglinkError::DatabaseConnection(msg.into())
    }

    pub fn database_operation<T: Into<String>>(msg: T) -> Self {
        SluglinkError::DatabaseOperation(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        SluglinkError::Validation(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        SluglinkError::Serialization(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        SluglinkError::FileOperation(msg.into())
    }

    pub fn corrupt_record<T: Into<String>>(msg: T) -> Self {
        SluglinkError::CorruptRecord(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        SluglinkError::Config(msg.into())
    }
}

impl From<sea_orm::DbErr> for SluglinkError {
    fn from(err: sea_orm::DbErr) -> Self {
        SluglinkError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for SluglinkError {
    fn from(err: std::io::Error) -> Self {
        SluglinkError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for SluglinkError {
    fn from(err: serde_json::Error) -> Self {
        SluglinkError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SluglinkError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[test]
    fn test_codes_are_unique() {
        let errors = [
            SluglinkError::database_config("a"),
            SluglinkError::database_connection("a"),
            SluglinkError::database_operation("a"),
            SluglinkError::validation("a"),
            SluglinkError::serialization("a"),
            SluglinkError::file_operation("a"),
            SluglinkError::corrupt_record("a"),
            SluglinkError::config("a"),
        ];
        let mut codes: Vec<&str> = errors.iter().map(|e| e.code()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_http_status_mapping() {
        assert_eq!(
            SluglinkError::validation("bad").http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            SluglinkError::database_operation("boom").http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            SluglinkError::corrupt_record("bad row").http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_format_simple() {
        let err = SluglinkError::validation("slug required");
        assert_eq!(err.format_simple(), "Validation Error: slug required");
        assert_eq!(err.to_string(), err.format_simple());
    }

    #[test]
    fn test_from_serde_json_error() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let converted: SluglinkError = err.into();
        assert_eq!(converted.code(), "E005");
    }

    #[actix_rt::test]
    async fn test_validation_response_carries_message() {
        let resp = SluglinkError::validation("missing url or slug").error_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body = to_bytes(resp.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "missing url or slug");
    }

    #[actix_rt::test]
    async fn test_internal_response_hides_details() {
        let resp = SluglinkError::database_operation("password=hunter2").error_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(resp.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "internal server error");
    }
}
