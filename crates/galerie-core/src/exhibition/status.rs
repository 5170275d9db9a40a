use chrono::NaiveDate;

use super::dates::parse_czech_date;
use super::model::{exhibitions, Exhibition, ExhibitionStatus};

/// An exhibition together with the stage computed for a given day.
#[derive(Debug, Clone)]
pub struct ActiveExhibition {
    pub exhibition: Exhibition,
    pub calculated_status: ExhibitionStatus,
}

/// Compute the live stage of an exhibition for the given calendar day.
///
/// Pure function of (record, day): callers pass today's date on every
/// query so the result is never stale across a midnight boundary.
/// Unconfirmed records and records without a parseable start date keep
/// their declared status.
pub fn calculated_status(exhibition: &Exhibition, today: NaiveDate) -> ExhibitionStatus {
    if !exhibition.confirmed {
        return exhibition.status;
    }
    let Some(date_from) = exhibition
        .date_from
        .as_deref()
        .and_then(|s| parse_czech_date(s).ok())
    else {
        return exhibition.status;
    };

    if today < date_from {
        return ExhibitionStatus::Upcoming;
    }
    if let Some(date_to) = exhibition
        .date_to
        .as_deref()
        .and_then(|s| parse_czech_date(s).ok())
    {
        if today > date_to {
            return ExhibitionStatus::Past;
        }
    }
    ExhibitionStatus::Current
}

/// Confirmed, not-yet-past exhibitions, current ones first, then by start
/// date. Recomputed on every call.
pub fn active_exhibitions(today: NaiveDate) -> Vec<ActiveExhibition> {
    active_from(exhibitions(), today)
}

/// Same filtering and ordering over an explicit list.
pub fn active_from(list: Vec<Exhibition>, today: NaiveDate) -> Vec<ActiveExhibition> {
    let mut active: Vec<ActiveExhibition> = list
        .into_iter()
        .filter(|ex| ex.confirmed)
        .map(|ex| {
            let calculated_status = calculated_status(&ex, today);
            ActiveExhibition {
                exhibition: ex,
                calculated_status,
            }
        })
        .filter(|a| a.calculated_status != ExhibitionStatus::Past)
        .collect();

    // Current exhibitions first, then ascending start date. Records
    // without a start date compare equal; the sort is stable.
    active.sort_by(|a, b| {
        let a_current = a.calculated_status == ExhibitionStatus::Current;
        let b_current = b.calculated_status == ExhibitionStatus::Current;
        b_current.cmp(&a_current).then_with(|| {
            let a_from = a.exhibition.date_from.as_deref().and_then(|s| parse_czech_date(s).ok());
            let b_from = b.exhibition.date_from.as_deref().and_then(|s| parse_czech_date(s).ok());
            match (a_from, b_from) {
                (Some(a), Some(b)) => a.cmp(&b),
                _ => std::cmp::Ordering::Equal,
            }
        })
    });
    active
}

/// Czech plural of "day": 1 den, 2-4 dny, otherwise dní.
fn czech_days(n: i64) -> &'static str {
    match n {
        1 => "den",
        2..=4 => "dny",
        _ => "dní",
    }
}

/// Days-remaining line for a running exhibition, or days-until for an
/// upcoming one. `None` when the record has no usable dates or the count
/// would not be positive.
pub fn days_info(exhibition: &Exhibition, today: NaiveDate) -> Option<String> {
    if !exhibition.confirmed {
        return None;
    }
    let date_from = exhibition
        .date_from
        .as_deref()
        .and_then(|s| parse_czech_date(s).ok())?;

    match calculated_status(exhibition, today) {
        ExhibitionStatus::Current => {
            let date_to = exhibition
                .date_to
                .as_deref()
                .and_then(|s| parse_czech_date(s).ok())?;
            let remaining = (date_to - today).num_days();
            (remaining > 0).then(|| format!("Zbývá {} {}", remaining, czech_days(remaining)))
        }
        ExhibitionStatus::Upcoming => {
            let until = (date_from - today).num_days();
            (until > 0).then(|| format!("Začíná za {} {}", until, czech_days(until)))
        }
        ExhibitionStatus::Past => None,
    }
}

/// Whether the vernissage line should be shown: always for confirmed
/// upcoming exhibitions, and for current ones only on the opening day.
pub fn vernissage_visible(exhibition: &Exhibition, today: NaiveDate) -> bool {
    if !exhibition.confirmed || exhibition.vernissage.is_none() {
        return false;
    }
    match calculated_status(exhibition, today) {
        ExhibitionStatus::Upcoming => true,
        ExhibitionStatus::Current => exhibition
            .date_from
            .as_deref()
            .and_then(|s| parse_czech_date(s).ok())
            .is_some_and(|from| from == today),
        ExhibitionStatus::Past => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn hukvaldy() -> Exhibition {
        exhibitions().remove(0)
    }

    #[test]
    fn test_status_buckets_by_date() {
        let ex = hukvaldy();
        assert_eq!(calculated_status(&ex, day(2026, 1, 1)), ExhibitionStatus::Upcoming);
        assert_eq!(calculated_status(&ex, day(2026, 2, 10)), ExhibitionStatus::Current);
        assert_eq!(calculated_status(&ex, day(2026, 3, 1)), ExhibitionStatus::Past);
    }

    #[test]
    fn test_status_boundary_days_inclusive() {
        let ex = hukvaldy();
        assert_eq!(calculated_status(&ex, day(2026, 2, 2)), ExhibitionStatus::Current);
        assert_eq!(calculated_status(&ex, day(2026, 2, 20)), ExhibitionStatus::Current);
        assert_eq!(calculated_status(&ex, day(2026, 2, 21)), ExhibitionStatus::Past);
    }

    #[test]
    fn test_unconfirmed_keeps_declared_status() {
        let mut ex = hukvaldy();
        ex.confirmed = false;
        ex.status = ExhibitionStatus::Upcoming;
        // Dates say "past", declared status wins
        assert_eq!(calculated_status(&ex, day(2030, 1, 1)), ExhibitionStatus::Upcoming);
    }

    #[test]
    fn test_malformed_date_falls_back_to_declared() {
        let mut ex = hukvaldy();
        ex.date_from = Some("únor 2026".to_string());
        ex.status = ExhibitionStatus::Upcoming;
        assert_eq!(calculated_status(&ex, day(2030, 1, 1)), ExhibitionStatus::Upcoming);
    }

    #[test]
    fn test_active_excludes_past() {
        let active = active_from(exhibitions(), day(2026, 3, 1));
        assert!(active
            .iter()
            .all(|a| a.calculated_status != ExhibitionStatus::Past));
    }

    #[test]
    fn test_active_excludes_unconfirmed() {
        let active = active_from(exhibitions(), day(2026, 1, 1));
        assert!(active.iter().all(|a| a.exhibition.confirmed));
    }

    #[test]
    fn test_current_sorts_before_upcoming_regardless_of_input_order() {
        let mut upcoming = hukvaldy();
        upcoming.id = 10;
        upcoming.date_from = Some("1. 6. 2026".to_string());
        upcoming.date_to = Some("30. 6. 2026".to_string());

        let mut current = hukvaldy();
        current.id = 11;
        current.date_from = Some("1. 2. 2026".to_string());
        current.date_to = Some("28. 2. 2026".to_string());

        let active = active_from(vec![upcoming, current], day(2026, 2, 10));
        assert_eq!(active[0].exhibition.id, 11);
        assert_eq!(active[0].calculated_status, ExhibitionStatus::Current);
        assert_eq!(active[1].exhibition.id, 10);
    }

    #[test]
    fn test_upcoming_sorted_by_start_date() {
        let mut later = hukvaldy();
        later.id = 20;
        later.date_from = Some("1. 8. 2026".to_string());
        later.date_to = None;

        let mut sooner = hukvaldy();
        sooner.id = 21;
        sooner.date_from = Some("1. 5. 2026".to_string());
        sooner.date_to = None;

        let active = active_from(vec![later, sooner], day(2026, 1, 1));
        assert_eq!(active[0].exhibition.id, 21);
        assert_eq!(active[1].exhibition.id, 20);
    }

    #[test]
    fn test_days_info_pluralization() {
        let ex = hukvaldy();
        // Current, end date 20. 2. 2026
        assert_eq!(
            days_info(&ex, day(2026, 2, 19)),
            Some("Zbývá 1 den".to_string())
        );
        assert_eq!(
            days_info(&ex, day(2026, 2, 17)),
            Some("Zbývá 3 dny".to_string())
        );
        assert_eq!(
            days_info(&ex, day(2026, 2, 10)),
            Some("Zbývá 10 dní".to_string())
        );
        // Upcoming
        assert_eq!(
            days_info(&ex, day(2026, 2, 1)),
            Some("Začíná za 1 den".to_string())
        );
        assert_eq!(
            days_info(&ex, day(2026, 1, 29)),
            Some("Začíná za 4 dny".to_string())
        );
        assert_eq!(
            days_info(&ex, day(2026, 1, 1)),
            Some("Začíná za 32 dní".to_string())
        );
    }

    #[test]
    fn test_days_info_none_on_last_day_and_past() {
        let ex = hukvaldy();
        assert_eq!(days_info(&ex, day(2026, 2, 20)), None);
        assert_eq!(days_info(&ex, day(2026, 3, 1)), None);
    }

    #[test]
    fn test_vernissage_visibility() {
        let ex = hukvaldy();
        assert!(vernissage_visible(&ex, day(2026, 1, 15)));
        // Opening day only, once running
        assert!(vernissage_visible(&ex, day(2026, 2, 2)));
        assert!(!vernissage_visible(&ex, day(2026, 2, 10)));
        assert!(!vernissage_visible(&ex, day(2026, 3, 1)));
    }
}
