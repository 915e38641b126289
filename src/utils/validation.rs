use crate::utils::error::{RegistryError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| RegistryError::MissingField {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RegistryError::InvalidField {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Salaries must be finite and non-negative before any tax is applied.
pub fn validate_salary(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(RegistryError::InvalidField {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Salary must be a finite, non-negative amount".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    // written so that NaN fails too
    if !(value >= min && value <= max) {
        return Err(RegistryError::InvalidField {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_bind_addr(field_name: &str, addr: &str) -> Result<()> {
    if addr.trim().is_empty() {
        return Err(RegistryError::InvalidField {
            field: field_name.to_string(),
            value: addr.to_string(),
            reason: "Bind address cannot be empty".to_string(),
        });
    }

    if addr.parse::<std::net::SocketAddr>().is_ok() {
        return Ok(());
    }

    // hostnames are resolved at bind time; only the shape is checked here
    match addr.rsplit_once(':') {
        Some((host, port)) if !host.trim().is_empty() && port.parse::<u16>().is_ok() => Ok(()),
        _ => Err(RegistryError::InvalidField {
            field: field_name.to_string(),
            value: addr.to_string(),
            reason: "Bind address must be in host:port form with a numeric port".to_string(),
        }),
    }
}

pub fn validate_context_path(field_name: &str, path: &str) -> Result<()> {
    if !path.is_empty() && !path.starts_with('/') {
        return Err(RegistryError::InvalidField {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Context path must start with '/'".to_string(),
        });
    }

    if path.contains(char::is_whitespace) {
        return Err(RegistryError::InvalidField {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Context path cannot contain whitespace".to_string(),
        });
    }

    // `:name` and `*rest` segments are route captures, which a nest prefix cannot hold
    if path.contains([':', '*']) {
        return Err(RegistryError::InvalidField {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Context path cannot contain ':' or '*' segments".to_string(),
        });
    }
    Ok(())
}
