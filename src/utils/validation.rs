use crate::utils::error::{FacadeError, Result};
use std::net::SocketAddr;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<Url> {
    if url_str.is_empty() {
        return Err(FacadeError::validation(field_name, "URL cannot be empty"));
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(url),
            scheme => Err(FacadeError::validation(
                field_name,
                format!("Unsupported URL scheme: {}", scheme),
            )),
        },
        Err(e) => Err(FacadeError::validation(
            field_name,
            format!("Invalid URL format: {}", e),
        )),
    }
}

pub fn validate_socket_addr(field_name: &str, addr: &str) -> Result<SocketAddr> {
    addr.trim().parse::<SocketAddr>().map_err(|e| {
        FacadeError::validation(field_name, format!("Invalid socket address '{}': {}", addr, e))
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str, reason: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(FacadeError::validation(field_name, reason));
    }
    Ok(())
}

pub fn validate_positive(field_name: &str, value: i64, reason: &str) -> Result<()> {
    if value <= 0 {
        return Err(FacadeError::validation(field_name, reason));
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
    reason: &str,
) -> Result<()> {
    if value < min || value > max {
        return Err(FacadeError::validation(field_name, reason));
    }
    Ok(())
}
