use serde::{Deserialize, Serialize};

/// One search hit: a digital file inside an archival collection.
///
/// The last-modified date is kept in `yyyy-mm-dd` form, the same shape
/// the date-range filter parameters use.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DigitalFile {
    pub filepath: String,
    pub fileformat: String,
    pub size_bytes: u64,
    pub datemodified: String,
    pub collection: String,
}

impl DigitalFile {
    /// Human-readable size using base-2 units, rounded to whole numbers.
    pub fn size_display(&self) -> String {
        convert_size(self.size_bytes)
    }
}

fn convert_size(size: u64) -> String {
    const UNITS: &[&str] = &["bytes", "KB", "MB", "GB", "TB", "PB"];
    if size == 0 {
        return "0 bytes".to_string();
    }
    let mut value = size as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{} {}", value.round() as u64, UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file_of_size(size_bytes: u64) -> DigitalFile {
        DigitalFile {
            filepath: "objects/photo.jpg".to_string(),
            fileformat: "JPEG".to_string(),
            size_bytes,
            datemodified: "2019-06-01".to_string(),
            collection: "Photographs".to_string(),
        }
    }

    #[test]
    fn small_sizes_stay_in_bytes() {
        assert_eq!(file_of_size(0).size_display(), "0 bytes");
        assert_eq!(file_of_size(512).size_display(), "512 bytes");
    }

    #[test]
    fn sizes_round_to_whole_units() {
        assert_eq!(file_of_size(1024).size_display(), "1 KB");
        assert_eq!(file_of_size(1536).size_display(), "2 KB");
        assert_eq!(file_of_size(5 * 1024 * 1024).size_display(), "5 MB");
        assert_eq!(file_of_size(3 * 1024 * 1024 * 1024).size_display(), "3 GB");
    }
}
