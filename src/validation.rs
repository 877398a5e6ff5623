use validator::ValidationError;

/// Validates a display color in `#rrggbb` form
pub fn validate_hex_color(color: &str) -> Result<(), ValidationError> {
    let valid = color.len() == 7
        && color.starts_with('#')
        && color[1..].chars().all(|c| c.is_ascii_hexdigit());
    if !valid {
        let mut error = ValidationError::new("invalid_color");
        error.message = Some(format!("'{}' is not a #rrggbb color", color).into());
        return Err(error);
    }
    Ok(())
}

/// Validates that an amount is positive (greater than 0)
pub fn validate_positive_amount(amount: f64) -> Result<(), ValidationError> {
    if amount <= 0.0 {
        let mut error = ValidationError::new("invalid_amount");
        error.message = Some("Amount must be greater than 0".into());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_color() {
        assert!(validate_hex_color("#00ff88").is_ok());
        assert!(validate_hex_color("#00FF88").is_ok());
        assert!(validate_hex_color("00ff88").is_err());
        assert!(validate_hex_color("#00ff8").is_err());
        assert!(validate_hex_color("#00ff8g").is_err());
    }

    #[test]
    fn test_positive_amount() {
        assert!(validate_positive_amount(0.5).is_ok());
        assert!(validate_positive_amount(0.0).is_err());
        assert!(validate_positive_amount(-1.0).is_err());
    }
}
