//! Identifier inflection for display and routing: humanized field labels,
//! classified type names, pluralized controller names.

/// Convert an under_scored identifier to a human-readable label.
/// e.g. "first_name" -> "First name". Dots are kept, so a dotted error key
/// like "phones.0.number" becomes "Phones.0.number".
pub fn humanize(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
    }
    for c in chars {
        out.push(if c == '_' { ' ' } else { c });
    }
    out
}

/// Convert CamelCase to under_score.
/// e.g. "AppointmentRequest" -> "appointment_request"
pub fn underscore(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Convert an under_scored identifier to UpperCamelCase.
/// e.g. "appointment_request" -> "AppointmentRequest"
pub fn upper_camel(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut capitalize_next = true;
    for c in s.chars() {
        if c == '_' {
            capitalize_next = true;
        } else if capitalize_next {
            out.extend(c.to_uppercase());
            capitalize_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Singular, classified form of a type or table name.
/// e.g. "appointments" -> "Appointment", "appointment_requests" -> "AppointmentRequest"
pub fn classify(s: &str) -> String {
    upper_camel(&singularize(&underscore(s)))
}

/// e.g. "Appointment" -> "Appointments", "Category" -> "Categories"
pub fn pluralize(s: &str) -> String {
    if let Some(stem) = s.strip_suffix('y') {
        if !stem.is_empty() && !ends_with_vowel(stem) {
            return format!("{}ies", stem);
        }
    }
    if s.ends_with('s') || s.ends_with('x') || s.ends_with('z') || s.ends_with("ch") || s.ends_with("sh") {
        return format!("{}es", s);
    }
    format!("{}s", s)
}

/// e.g. "appointments" -> "appointment", "categories" -> "category"
pub fn singularize(s: &str) -> String {
    if let Some(stem) = s.strip_suffix("ies") {
        if !stem.is_empty() {
            return format!("{}y", stem);
        }
    }
    for suffix in ["sses", "ches", "shes", "xes", "zes"] {
        if let Some(stem) = s.strip_suffix(suffix) {
            // keep the stem's own ending: "classes" -> "class", "boxes" -> "box"
            return format!("{}{}", stem, &suffix[..suffix.len() - 2]);
        }
    }
    if s.ends_with('s') && !s.ends_with("ss") {
        return s[..s.len() - 1].to_string();
    }
    s.to_string()
}

fn ends_with_vowel(s: &str) -> bool {
    matches!(s.chars().last(), Some('a' | 'e' | 'i' | 'o' | 'u'))
}
