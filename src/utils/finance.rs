//! Financial formatting and calculation helpers for dashboard payloads

/// Formats an amount as a currency string with thousands separators
///
/// Negative amounts are rendered with a leading minus before the symbol,
/// e.g. `-$1,234.56`.
pub fn format_currency(amount: f64) -> String {
    let abs = amount.abs();
    let formatted = format!("{abs:.2}");
    let (int_part, dec_part) = formatted.split_once('.').unwrap_or((&formatted, "00"));

    let mut grouped = String::new();
    for (i, c) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    if amount < 0.0 {
        format!("-${grouped}.{dec_part}")
    } else {
        format!("${grouped}.{dec_part}")
    }
}

/// Formats a number as a signed percentage string
///
/// Non-negative values get an explicit leading `+`.
pub fn format_percentage(percentage: f64) -> String {
    if percentage >= 0.0 {
        format!("+{percentage:.2}%")
    } else {
        format!("{percentage:.2}%")
    }
}

/// Formats a share quantity with only as many decimals as needed
///
/// Whole quantities drop the fractional part entirely, fractional shares keep
/// up to six decimals with trailing zeros stripped.
pub fn format_quantity(quantity: f64) -> String {
    if quantity == quantity.trunc() {
        return format!("{}", quantity as i64);
    }
    let precision = if quantity.abs() < 1.0 { 6 } else { 4 };
    let s = format!("{quantity:.precision$}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Calculates the return percentage of a position
///
/// Returns 0.0 when the cost basis is zero to avoid division by zero.
pub fn return_percentage(current_value: f64, cost_basis: f64) -> f64 {
    if cost_basis == 0.0 {
        return 0.0;
    }
    ((current_value - cost_basis) / cost_basis) * 100.0
}

/// Validates a username/password pair before sending it upstream
///
/// # Returns
/// `Ok(())` when the credentials look usable, `Err(message)` otherwise
pub fn validate_credentials(username: &str, password: &str) -> Result<(), String> {
    if username.trim().is_empty() {
        return Err("Username is required".to_string());
    }
    if password.trim().is_empty() {
        return Err("Password is required".to_string());
    }
    if username.contains('@') {
        if username.matches('@').count() != 1 {
            return Err("Invalid email format".to_string());
        }
        let (local, domain) = username.split_once('@').expect("checked above");
        if local.is_empty() || domain.is_empty() {
            return Err("Invalid email format".to_string());
        }
        if !domain.contains('.') {
            return Err("Invalid email domain".to_string());
        }
    }
    if password.len() < 6 {
        return Err("Password must be at least 6 characters".to_string());
    }
    Ok(())
}
