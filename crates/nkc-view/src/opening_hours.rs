//! Opening hours arranged as a day-by-slot grid.
//!
//! Each day present in the input becomes one row in first-seen order. Rows
//! are padded with empty slots so every row has as many slots as the busiest
//! day, which keeps the rendered table rectangular. Each slot carries its
//! validity dates already formatted for display.

use nkc_core::entities::OpeningHours;
use nkc_core::enums::DayOfWeek;
use schemars::JsonSchema;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct OpeningHoursRow {
    pub day: DayOfWeek,
    /// Last non-empty entry name seen for the day, empty if none.
    pub name: String,
    /// Entries in input order; `None` marks a padding slot.
    pub items: Vec<Option<OpeningHoursSlot>>,
}

/// One entry of a row, with its validity range formatted day-first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct OpeningHoursSlot {
    #[serde(flatten)]
    pub hours: OpeningHours,
    pub valid_from_label: Option<String>,
    pub valid_to_label: Option<String>,
}

impl From<&OpeningHours> for OpeningHoursSlot {
    fn from(hours: &OpeningHours) -> Self {
        Self {
            valid_from_label: hours.valid_from_display(),
            valid_to_label: hours.valid_to_display(),
            hours: hours.clone(),
        }
    }
}

#[must_use]
pub fn normalize_opening_hours(entries: &[OpeningHours]) -> Vec<OpeningHoursRow> {
    let mut rows: Vec<OpeningHoursRow> = Vec::new();

    for entry in entries {
        let index = match rows.iter().position(|row| row.day == entry.day_of_week) {
            Some(index) => index,
            None => {
                rows.push(OpeningHoursRow {
                    day: entry.day_of_week,
                    name: String::new(),
                    items: Vec::new(),
                });
                rows.len() - 1
            }
        };

        let row = &mut rows[index];
        if let Some(label) = entry.label() {
            row.name = label.to_string();
        }
        row.items.push(Some(OpeningHoursSlot::from(entry)));
    }

    let width = rows.iter().map(|row| row.items.len()).max().unwrap_or(0);
    for row in &mut rows {
        row.items.resize(width, None);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use pretty_assertions::assert_eq;

    fn entry(day: DayOfWeek, name: Option<&str>, opens: u32) -> OpeningHours {
        let mut hours = OpeningHours::new(day);
        hours.name = name.map(String::from);
        hours.opens_at = NaiveTime::from_hms_opt(opens, 0, 0);
        hours
    }

    #[test]
    fn rows_are_padded_to_busiest_day() {
        let rows = normalize_opening_hours(&[
            entry(DayOfWeek::Monday, None, 9),
            entry(DayOfWeek::Monday, None, 14),
            entry(DayOfWeek::Tuesday, None, 9),
        ]);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].day, DayOfWeek::Monday);
        assert_eq!(rows[0].items.len(), 2);
        assert!(rows[0].items.iter().all(Option::is_some));
        assert_eq!(rows[1].day, DayOfWeek::Tuesday);
        assert_eq!(rows[1].items.len(), 2);
        assert!(rows[1].items[0].is_some());
        assert_eq!(rows[1].items[1], None);
    }

    #[test]
    fn rows_follow_first_appearance() {
        let rows = normalize_opening_hours(&[
            entry(DayOfWeek::Friday, None, 9),
            entry(DayOfWeek::Monday, None, 9),
            entry(DayOfWeek::Friday, None, 15),
        ]);
        let days: Vec<DayOfWeek> = rows.iter().map(|row| row.day).collect();
        assert_eq!(days, vec![DayOfWeek::Friday, DayOfWeek::Monday]);
        assert_eq!(
            rows[0].items[1].as_ref().and_then(|slot| slot.hours.opens_at),
            NaiveTime::from_hms_opt(15, 0, 0)
        );
    }

    #[test]
    fn last_non_empty_name_wins() {
        let rows = normalize_opening_hours(&[
            entry(DayOfWeek::Wednesday, Some("Büro"), 9),
            entry(DayOfWeek::Wednesday, Some("Sprechstunde"), 14),
            entry(DayOfWeek::Wednesday, Some(""), 16),
            entry(DayOfWeek::Thursday, None, 9),
        ]);
        assert_eq!(rows[0].name, "Sprechstunde");
        assert_eq!(rows[1].name, "");
    }

    #[test]
    fn slots_carry_display_dates() {
        let mut hours = entry(DayOfWeek::Monday, None, 9);
        hours.valid_from = Some("2024-05-01".into());
        hours.valid_to = Some("2024-09".into());

        let rows = normalize_opening_hours(&[hours, entry(DayOfWeek::Tuesday, None, 9)]);

        let slot = rows[0].items[0].as_ref().unwrap();
        assert_eq!(slot.valid_from_label.as_deref(), Some("01.05.2024"));
        assert_eq!(slot.valid_to_label.as_deref(), Some("09.2024"));

        let open_ended = rows[1].items[0].as_ref().unwrap();
        assert_eq!(open_ended.valid_from_label, None);
        assert_eq!(open_ended.valid_to_label, None);

        let value = serde_json::to_value(slot).unwrap();
        assert_eq!(value["day_of_week"], "monday");
        assert_eq!(value["valid_from"], "2024-05-01");
        assert_eq!(value["valid_from_label"], "01.05.2024");
    }

    #[test]
    fn no_entries_no_rows() {
        assert!(normalize_opening_hours(&[]).is_empty());
    }
}
