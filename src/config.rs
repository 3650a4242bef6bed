//! Configuration management for the PDF Process Server

use serde::Deserialize;
use std::env;

/// Multipart field name carrying the PDF template.
///
/// This pairing ([`PDF_FIELD`] / [`DATA_FIELD`]) is the wire contract
/// shared by the upload endpoint and the client helper.
pub const PDF_FIELD: &str = "pdf";

/// Multipart field name carrying the additional text data.
pub const DATA_FIELD: &str = "data";

/// Filename advertised in the Content-Disposition response header.
pub const DOWNLOAD_FILENAME: &str = "processed.pdf";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub upload: UploadConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Field names and output filename for the upload endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadConfig {
    pub file_field: String,
    pub data_field: String,
    pub download_filename: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3001,
            },
            upload: UploadConfig::default(),
        }
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        UploadConfig {
            file_field: PDF_FIELD.to_string(),
            data_field: DATA_FIELD.to_string(),
            download_filename: DOWNLOAD_FILENAME.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            server: ServerConfig {
                host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("SERVER_PORT")
                    .unwrap_or_else(|_| "3001".to_string())
                    .parse()
                    .unwrap_or(3001),
            },
            upload: UploadConfig::default(),
        }
    }
}
