#[cfg(test)]
mod tests {
    use taskmate::libs::formatter::{format_due_date, format_optional_date, parse_due_date, NO_DATE};
    use taskmate::libs::task::Priority;

    #[test]
    fn test_due_date_round_trip() {
        let millis = parse_due_date("2025-03-14").unwrap();
        assert!(millis > 0);
        assert_eq!(format_due_date(millis), "2025-03-14");

        // Surrounding whitespace is ignored.
        assert_eq!(parse_due_date(" 2025-03-14 ").unwrap(), millis);
    }

    #[test]
    fn test_later_dates_sort_later() {
        let earlier = parse_due_date("2024-12-31").unwrap();
        let later = parse_due_date("2025-01-01").unwrap();
        assert!(earlier < later);
    }

    #[test]
    fn test_unset_dates() {
        assert_eq!(format_due_date(0), NO_DATE);
        assert_eq!(format_optional_date(None), NO_DATE);
        assert_eq!(format_optional_date(Some(parse_due_date("2030-06-01").unwrap())), "2030-06-01");
    }

    #[test]
    fn test_invalid_dates() {
        assert!(parse_due_date("").is_err());
        assert!(parse_due_date("tomorrow").is_err());
        assert!(parse_due_date("2025-02-30").is_err());
        assert!(parse_due_date("14.03.2025").is_err());
    }

    #[test]
    fn test_epoch_date_never_parses_to_unset() {
        // Only lands on 0 in UTC; any other zone yields a real timestamp.
        match parse_due_date("1970-01-01") {
            Ok(millis) => assert_ne!(millis, 0),
            Err(e) => assert!(e.to_string().contains("1970-01-01")),
        }
        assert!(parse_due_date("1970-01-02").unwrap() != 0);
    }

    #[test]
    fn test_priority_parsing() {
        assert_eq!("high".parse::<Priority>().unwrap(), Priority::High);
        assert_eq!("MEDIUM".parse::<Priority>().unwrap(), Priority::Medium);
        assert_eq!(" Low ".parse::<Priority>().unwrap(), Priority::Low);
        assert!("urgent".parse::<Priority>().is_err());

        for priority in Priority::ALL {
            assert_eq!(priority.to_string().parse::<Priority>().unwrap(), priority);
        }
        assert_eq!(Priority::High.as_str(), "HIGH");
    }
}
