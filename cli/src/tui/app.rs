use chrono::{Days, NaiveDate};
use periodism_core::{summarize, PeriodSummary};
use tracing::debug;

/// Week browser state: the selected date and its labels.
pub struct App {
    pub today: NaiveDate,
    pub selected: NaiveDate,
    pub summary: Option<PeriodSummary>,
}

impl App {
    pub fn new(today: NaiveDate, selected: NaiveDate) -> App {
        App {
            today,
            selected,
            summary: summarize(Some(selected)),
        }
    }

    fn select(&mut self, date: NaiveDate) {
        debug!(%date, "week browser moved");
        self.selected = date;
        self.summary = summarize(Some(date));
    }

    pub fn next_week(&mut self) {
        if let Some(date) = self.selected.checked_add_days(Days::new(7)) {
            self.select(date);
        }
    }

    pub fn previous_week(&mut self) {
        if let Some(date) = self.selected.checked_sub_days(Days::new(7)) {
            self.select(date);
        }
    }

    pub fn go_today(&mut self) {
        self.select(self.today);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_navigation() {
        let today = ymd(2023, 11, 29);
        let mut app = App::new(today, today);
        assert_eq!(app.summary.as_ref().unwrap().week_display, "2023-11-27 ~ 12-03 (W48)");

        app.next_week();
        assert_eq!(app.selected, ymd(2023, 12, 6));
        assert_eq!(app.summary.as_ref().unwrap().week_display, "2023-12-04 ~ 12-10 (W49)");

        app.previous_week();
        app.previous_week();
        assert_eq!(app.selected, ymd(2023, 11, 22));
        assert_eq!(app.summary.as_ref().unwrap().season_display, "2023年第4季");

        app.go_today();
        assert_eq!(app.selected, today);
    }

    #[test]
    fn test_navigation_stops_at_range_end() {
        let mut app = App::new(ymd(2023, 11, 29), NaiveDate::MAX);
        app.next_week();
        assert_eq!(app.selected, NaiveDate::MAX);
    }
}
