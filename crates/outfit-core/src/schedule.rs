//! Schedule Helpers
//!
//! Scheduled dates are calendar days. The date portion of the stored string
//! is taken literally so `2025-12-25T00:00:00Z` stays on December 25 in
//! every time zone.

use std::cmp::Reverse;
use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::wire::OutfitSummary;

/// Calendar day of a date-only or ISO datetime string
pub fn calendar_day(value: &str) -> Option<NaiveDate> {
    let date = value.trim().split(['T', ' ']).next()?;
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}

/// Scheduled outfits keyed by day, each day in backend order
pub fn group_by_day(outfits: &[OutfitSummary]) -> BTreeMap<NaiveDate, Vec<&OutfitSummary>> {
    let mut days: BTreeMap<NaiveDate, Vec<&OutfitSummary>> = BTreeMap::new();
    for outfit in outfits {
        if let Some(day) = outfit.scheduled_date.as_deref().and_then(calendar_day) {
            days.entry(day).or_default().push(outfit);
        }
    }
    days
}

/// Earliest scheduled day first; unscheduled outfits last
pub fn sort_by_scheduled_day(outfits: &mut [OutfitSummary]) {
    outfits.sort_by_key(|outfit| {
        let day = outfit.scheduled_date.as_deref().and_then(calendar_day);
        (day.is_none(), day)
    });
}

/// Most recently updated first (falls back to creation time)
pub fn sort_by_recent(outfits: &mut [OutfitSummary]) {
    outfits.sort_by_key(|outfit| Reverse(outfit.updated_at.or(outfit.created_at)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OutfitId;
    use chrono::{TimeZone, Utc};

    fn summary(id: u64, scheduled: Option<&str>) -> OutfitSummary {
        OutfitSummary {
            id: OutfitId(id),
            name: format!("Outfit {id}"),
            occasion: None,
            season: None,
            scheduled_date: scheduled.map(str::to_string),
            preview_image_url: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_calendar_day_ignores_time_zone() {
        let christmas = NaiveDate::from_ymd_opt(2025, 12, 25);
        assert_eq!(calendar_day("2025-12-25T00:00:00Z"), christmas);
        assert_eq!(calendar_day("2025-12-25T23:30:00-08:00"), christmas);
        assert_eq!(calendar_day("2025-12-25"), christmas);
        assert_eq!(calendar_day("2025-12-25 09:00"), christmas);
        assert_eq!(calendar_day(""), None);
        assert_eq!(calendar_day("Christmas"), None);
    }

    #[test]
    fn test_group_by_day() {
        let outfits = vec![
            summary(1, Some("2025-12-25T00:00:00Z")),
            summary(2, Some("2025-12-24")),
            summary(3, None),
            summary(4, Some("2025-12-25")),
        ];
        let days = group_by_day(&outfits);

        assert_eq!(days.len(), 2);
        let christmas = &days[&NaiveDate::from_ymd_opt(2025, 12, 25).unwrap()];
        assert_eq!(christmas.iter().map(|o| o.id.0).collect::<Vec<_>>(), vec![1, 4]);
    }

    #[test]
    fn test_sorting() {
        let mut outfits = vec![
            summary(1, Some("2026-01-02")),
            summary(2, None),
            summary(3, Some("2025-12-31T22:00:00Z")),
        ];
        sort_by_scheduled_day(&mut outfits);
        assert_eq!(outfits.iter().map(|o| o.id.0).collect::<Vec<_>>(), vec![3, 1, 2]);

        outfits[0].updated_at = Some(Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap());
        outfits[2].updated_at = Some(Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap());
        sort_by_recent(&mut outfits);
        assert_eq!(outfits.iter().map(|o| o.id.0).collect::<Vec<_>>(), vec![2, 3, 1]);
    }
}
