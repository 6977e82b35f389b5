//! Shared test infrastructure: a small digital file corpus and the
//! pieces needed to assemble the app for request-level tests.

use scope::models::digital_file::DigitalFile;

pub fn file(path: &str, format: &str, size: u64, date: &str, collection: &str) -> DigitalFile {
    DigitalFile {
        filepath: path.to_string(),
        fileformat: format.to_string(),
        size_bytes: size,
        datemodified: date.to_string(),
        collection: collection.to_string(),
    }
}

pub fn sample_files() -> Vec<DigitalFile> {
    vec![
        file("objects/a_photo.jpg", "JPEG", 734003, "2019-01-08", "Photographs"),
        file("objects/b_plan.pdf", "PDF", 2097152, "2019-06-30", "Drawings"),
        file("objects/c_elevation.pdf", "PDF", 1572864, "2019-07-02", "Drawings"),
        file("objects/d_scan.tif", "TIFF", 48234496, "2020-02-17", "Photographs"),
        file("objects/e_interview.wav", "WAVE", 104857600, "2022-05-23", "Oral histories"),
    ]
}
