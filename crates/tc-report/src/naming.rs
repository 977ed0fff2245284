//! Timestamped names for generated report files.

use chrono::{Local, NaiveDateTime};

pub const REPORT_FILE_PREFIX: &str = "filled_";

/// `filled_YYYYmmdd_HHMMSS.pdf`.
pub fn report_file_name(at: NaiveDateTime) -> String {
    format!("{REPORT_FILE_PREFIX}{}.pdf", at.format("%Y%m%d_%H%M%S"))
}

pub fn report_file_name_now() -> String {
    report_file_name(Local::now().naive_local())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn name_embeds_timestamp() {
        let at = NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(14, 7, 9)
            .unwrap();
        assert_eq!(report_file_name(at), "filled_20240305_140709.pdf");
    }

    #[test]
    fn current_name_has_fixed_shape() {
        let name = report_file_name_now();
        assert!(name.starts_with(REPORT_FILE_PREFIX));
        assert!(name.ends_with(".pdf"));
        assert_eq!(name.len(), "filled_20240305_140709.pdf".len());
    }
}
