//! String helpers for front ends that draw the asset-risk chart and sentence.

use chrono::Month;

/// Summary sentence with `{{name}}` placeholders.
pub const ASSET_RISK_TEMPLATE: &str = "Temperatures in {{year}}, in a scenario of {{scenario}}, \
will be {{statement}} than historical records by an average of {{tempChange}}°C across your \
asset portfolio.";

/// Three-letter English month name for month numbers 1-12.
///
/// ```
/// use climate_risk::month_tick_label;
///
/// assert_eq!(month_tick_label(1), Some("Jan"));
/// assert_eq!(month_tick_label(13), None);
/// ```
pub fn month_tick_label(month: u32) -> Option<&'static str> {
    let month = u8::try_from(month).ok()?;
    Month::try_from(month).ok().map(|m| &m.name()[..3])
}

/// Y-axis label for a temperature tick, e.g. `"1.5°C"`.
pub fn celsius_tick_label(value: f64) -> String {
    // Normalise -0 so it does not print as "-0".
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{}°C", value)
}

/// Replaces each `{{name}}` in `template` with the matching value.
///
/// Placeholders without a value are left as they are.
pub fn render_template<K, V>(template: &str, params: &[(K, V)]) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after_open = &rest[start + 2..];
        let Some(end) = after_open.find("}}") else {
            out.push_str(&rest[start..]);
            return out;
        };

        let key = after_open[..end].trim();
        match params.iter().find(|(k, _)| k.as_ref() == key) {
            Some((_, value)) => out.push_str(value.as_ref()),
            None => out.push_str(&rest[start..start + 2 + end + 2]),
        }
        rest = &after_open[end + 2..];
    }

    out.push_str(rest);
    out
}
