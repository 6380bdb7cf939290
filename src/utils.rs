use std::io;
use std::path::{Path, PathBuf};

const CACHE_DIR_NAME: &str = "climate_risk_cache";

pub fn get_cache_dir() -> io::Result<PathBuf> {
    dirs::cache_dir()
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "Could not determine system cache directory",
            )
        })
        .map(|p| p.join(CACHE_DIR_NAME))
}

pub async fn ensure_cache_dir_exists(path: &Path) -> io::Result<()> {
    match tokio::fs::metadata(path).await {
        Ok(metadata) => {
            if !metadata.is_dir() {
                return Err(io::Error::new(
                    io::ErrorKind::AlreadyExists,
                    format!(
                        "Cache path exists but is not a directory: {}",
                        path.display()
                    ),
                ));
            }
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::info!("Creating cache directory: {}", path.display());
            tokio::fs::create_dir_all(path).await
        }
        Err(e) => Err(e),
    }
}

/// Formats `value` with a fixed number of decimals.
///
/// Exact ties round away from zero (`0.25` becomes `"0.3"`, `-2.5` with no
/// decimals becomes `"-3"`); every other value rounds to nearest. A value
/// that rounds to zero is printed without a minus sign, so `-0.04` becomes
/// `"0.0"` rather than `"-0.0"`.
pub fn format_fixed(value: f64, decimals: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = value.abs();
    let unsigned = match rounded_tie(magnitude, decimals) {
        Some(rounded) => rounded,
        None => format!("{:.*}", decimals, magnitude),
    };

    if value < 0.0 && unsigned.chars().any(|c| c.is_ascii_digit() && c != '0') {
        format!("-{unsigned}")
    } else {
        unsigned
    }
}

/// If `magnitude` lies exactly halfway between two `decimals`-place values,
/// returns the larger one.
fn rounded_tie(magnitude: f64, decimals: usize) -> Option<String> {
    // Enough digits to print any f64 that could be a tie without rounding.
    let exact = format!("{:.*}", decimals * 4 + 64, magnitude);
    let point = exact.find('.')?;
    let (kept, rest) = exact.split_at(point + 1 + decimals);

    let mut rest = rest.chars();
    if rest.next() != Some('5') || !rest.all(|c| c == '0') {
        return None;
    }

    let mut digits: Vec<char> = kept.trim_end_matches('.').chars().collect();
    for c in digits.iter_mut().rev() {
        match *c {
            '.' => continue,
            '9' => *c = '0',
            d => {
                *c = (d as u8 + 1) as char;
                return Some(digits.into_iter().collect());
            }
        }
    }
    Some(std::iter::once('1').chain(digits).collect())
}
