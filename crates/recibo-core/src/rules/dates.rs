//! Date canonicalization to `DD/MM/YYYY`.

/// Token order of a captured date.
///
/// Separators (spaces, slashes, dashes) vary per template and are handled
/// uniformly; the month token may be numeric or a Spanish/English name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    /// Day first: `07/10/2025`, `09-Sep-2025`, `10 octubre 2025`.
    DayMonthYear,
    /// Year first: `2025/10/07`, `2025-10-07`.
    YearMonthDay,
}

/// Reassemble a captured date as `DD/MM/YYYY`.
///
/// The capture is split on spaces, slashes and dashes. Month names are
/// resolved through a shared Spanish/English lookup (trailing dots ignored,
/// first three letters significant); an unrecognized name falls back to
/// `"01"`. Two-digit years are expanded. A capture that does not split into
/// exactly three tokens is returned trimmed as-is; the candidate patterns
/// already constrain the shape.
pub fn canonicalize_date(raw: &str, format: DateFormat) -> String {
    let tokens: Vec<&str> = raw
        .split(|c: char| c == '/' || c == '-' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .collect();

    if tokens.len() != 3 {
        return raw.trim().to_string();
    }

    let (day, month, year) = match format {
        DateFormat::DayMonthYear => (tokens[0], tokens[1], tokens[2]),
        DateFormat::YearMonthDay => (tokens[2], tokens[1], tokens[0]),
    };

    format!("{:0>2}/{}/{}", day, month_number(month), expand_year(year))
}

fn month_number(token: &str) -> String {
    let token = token.trim_matches('.');
    if token.chars().all(|c| c.is_ascii_digit()) {
        return format!("{:0>2}", token);
    }

    let key: String = token.to_lowercase().chars().take(3).collect();
    month_name_to_number(&key).to_string()
}

fn month_name_to_number(key: &str) -> &'static str {
    match key {
        "ene" | "jan" => "01",
        "feb" => "02",
        "mar" => "03",
        "abr" | "apr" => "04",
        "may" => "05",
        "jun" => "06",
        "jul" => "07",
        "ago" | "aug" => "08",
        "sep" => "09",
        "oct" => "10",
        "nov" => "11",
        "dic" | "dec" => "12",
        _ => "01",
    }
}

fn expand_year(year: &str) -> String {
    if year.len() == 2 && year.chars().all(|c| c.is_ascii_digit()) {
        // Two-digit year: 00-50 land in the 2000s, the rest in the 1900s.
        let two: u32 = year.parse().unwrap_or(0);
        if two <= 50 {
            return format!("20{year}");
        }
        return format!("19{year}");
    }
    year.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abbreviated_month_dashes() {
        assert_eq!(
            canonicalize_date("09-Sep-2025", DateFormat::DayMonthYear),
            "09/09/2025"
        );
        assert_eq!(
            canonicalize_date("10-oct-2025", DateFormat::DayMonthYear),
            "10/10/2025"
        );
    }

    #[test]
    fn test_abbreviated_month_spaces() {
        assert_eq!(
            canonicalize_date("12 Oct 2025", DateFormat::DayMonthYear),
            "12/10/2025"
        );
        assert_eq!(
            canonicalize_date("3 Ene 2024", DateFormat::DayMonthYear),
            "03/01/2024"
        );
    }

    #[test]
    fn test_dotted_abbreviation() {
        assert_eq!(
            canonicalize_date("07/oct./2025", DateFormat::DayMonthYear),
            "07/10/2025"
        );
    }

    #[test]
    fn test_full_spanish_month() {
        assert_eq!(
            canonicalize_date("10 octubre 2025", DateFormat::DayMonthYear),
            "10/10/2025"
        );
        assert_eq!(
            canonicalize_date("1 diciembre 2024", DateFormat::DayMonthYear),
            "01/12/2024"
        );
    }

    #[test]
    fn test_english_variants() {
        assert_eq!(
            canonicalize_date("15 Apr 2025", DateFormat::DayMonthYear),
            "15/04/2025"
        );
        assert_eq!(
            canonicalize_date("20 Aug 2025", DateFormat::DayMonthYear),
            "20/08/2025"
        );
    }

    #[test]
    fn test_unknown_month_defaults_to_january() {
        assert_eq!(
            canonicalize_date("10 xyz 2025", DateFormat::DayMonthYear),
            "10/01/2025"
        );
    }

    #[test]
    fn test_numeric_day_first() {
        assert_eq!(
            canonicalize_date("7/3/2025", DateFormat::DayMonthYear),
            "07/03/2025"
        );
        assert_eq!(
            canonicalize_date("07-10-2025", DateFormat::DayMonthYear),
            "07/10/2025"
        );
    }

    #[test]
    fn test_numeric_year_first() {
        assert_eq!(
            canonicalize_date("2025/10/07", DateFormat::YearMonthDay),
            "07/10/2025"
        );
        assert_eq!(
            canonicalize_date("2025-10-07", DateFormat::YearMonthDay),
            "07/10/2025"
        );
    }

    #[test]
    fn test_two_digit_year_expanded() {
        assert_eq!(
            canonicalize_date("15/03/24", DateFormat::DayMonthYear),
            "15/03/2024"
        );
        assert_eq!(
            canonicalize_date("15/03/99", DateFormat::DayMonthYear),
            "15/03/1999"
        );
    }

    #[test]
    fn test_unexpected_shape_passes_through() {
        assert_eq!(
            canonicalize_date("2025-10-07 13:00", DateFormat::YearMonthDay),
            "2025-10-07 13:00"
        );
    }
}
