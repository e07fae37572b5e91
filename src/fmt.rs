/// Format a float as a rupee amount with thousands separators: ₹1,234.56
pub fn money(val: f64) -> String {
    let negative = val < 0.0;
    let abs = val.abs();
    let cents = format!("{:.2}", abs);
    let parts: Vec<&str> = cents.split('.').collect();
    let int_part = parts[0];
    let dec_part = parts[1];

    let mut with_commas = String::new();
    for (i, c) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            with_commas.push(',');
        }
        with_commas.push(c);
    }
    let with_commas: String = with_commas.chars().rev().collect();

    if negative {
        format!("-\u{20B9}{with_commas}.{dec_part}")
    } else {
        format!("\u{20B9}{with_commas}.{dec_part}")
    }
}

/// Percentage with one decimal and an explicit sign for non-negative
/// values: +12.0%, -4.5%
pub fn signed_pct(val: f64) -> String {
    if val >= 0.0 {
        format!("+{val:.1}%")
    } else {
        format!("{val:.1}%")
    }
}
