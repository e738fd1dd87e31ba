use chrono::Local;
use std::fmt;

use super::date::CalDate;
use super::grid::{DayCell, MonthGrid};

/// The displayed (year, month). `month` is always in `0..12`.
///
/// Steps that would move the year past the `i32` range leave the cursor
/// where it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    year: i32,
    month: u32,
}

impl Cursor {
    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    fn prev_month(&mut self) {
        if self.month > 0 {
            self.month -= 1;
        } else if let Some(year) = self.year.checked_sub(1) {
            self.month = 11;
            self.year = year;
        }
    }

    fn next_month(&mut self) {
        if self.month < 11 {
            self.month += 1;
        } else if let Some(year) = self.year.checked_add(1) {
            self.month = 0;
            self.year = year;
        }
    }

    fn prev_year(&mut self) {
        if let Some(year) = self.year.checked_sub(1) {
            self.year = year;
        }
    }

    fn next_year(&mut self) {
        if let Some(year) = self.year.checked_add(1) {
            self.year = year;
        }
    }
}

impl From<CalDate> for Cursor {
    fn from(date: CalDate) -> Self {
        Cursor {
            year: date.year(),
            month: date.month(),
        }
    }
}

/// What activated a day cell. Both run through [`CalendarView::activate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    Pointer,
    Confirm,
}

impl fmt::Display for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Activation::Pointer => write!(f, "pointer"),
            Activation::Confirm => write!(f, "confirm key"),
        }
    }
}

/// Month calendar picker.
///
/// `today` is captured once on construction and never refreshed, so a view
/// kept open across midnight keeps marking the previous day.
#[derive(Debug, Clone)]
pub struct CalendarView {
    cursor: Cursor,
    today: CalDate,
    selected: Option<CalDate>,
    grid: MonthGrid,
}

impl Default for CalendarView {
    fn default() -> Self {
        CalendarView::new(Local::now().date_naive().into())
    }
}

impl CalendarView {
    pub fn new(today: CalDate) -> Self {
        let cursor = Cursor::from(today);

        CalendarView {
            cursor,
            today,
            selected: None,
            grid: MonthGrid::render(cursor.year, cursor.month, today, None),
        }
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn today(&self) -> CalDate {
        self.today
    }

    pub fn selected(&self) -> Option<CalDate> {
        self.selected
    }

    pub fn grid(&self) -> &MonthGrid {
        &self.grid
    }

    pub fn label(&self) -> &str {
        self.grid.label()
    }

    pub fn prev_month(&mut self) {
        self.cursor.prev_month();
        self.rebuild();
    }

    pub fn next_month(&mut self) {
        self.cursor.next_month();
        self.rebuild();
    }

    pub fn prev_year(&mut self) {
        self.cursor.prev_year();
        self.rebuild();
    }

    pub fn next_year(&mut self) {
        self.cursor.next_year();
        self.rebuild();
    }

    /// Selects `date`. Only the visible grid is patched; a previous selection
    /// in another month has no rendered marker to clear.
    pub fn activate(&mut self, date: CalDate, trigger: Activation) {
        log::debug!("Selecting {} via {}", date, trigger);

        if let Some(previous) = self.grid.selected_mut() {
            previous.set_selected(false);
        }

        self.selected = Some(date);

        if let Some(cell) = self.grid.cell_mut(&date) {
            cell.set_selected(true);
        }
    }

    /// Activates the day at a grid position, if it is a real day.
    pub fn activate_at(&mut self, column: usize, row: usize, trigger: Activation) -> Option<CalDate> {
        let date = self.grid.day_at(column, row).map(DayCell::date)?;
        self.activate(date, trigger);
        Some(date)
    }

    /// Activates a day of the displayed month.
    pub fn activate_day(&mut self, day: u32, trigger: Activation) -> Option<CalDate> {
        let date = self.grid.cell(day).map(DayCell::date)?;
        self.activate(date, trigger);
        Some(date)
    }

    fn rebuild(&mut self) {
        log::debug!("Showing {}-{:02}", self.cursor.year, self.cursor.month + 1);

        self.grid = MonthGrid::render(self.cursor.year, self.cursor.month, self.today, self.selected);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> CalDate {
        CalDate::new(year, month, day).unwrap()
    }

    fn at(year: i32, month: u32) -> CalendarView {
        CalendarView::new(date(year, month, 1))
    }

    #[test]
    fn starts_on_today_without_selection() {
        let view = CalendarView::new(date(2023, 9, 18));

        assert_eq!(view.cursor().year(), 2023);
        assert_eq!(view.cursor().month(), 9);
        assert_eq!(view.selected(), None);
        assert_eq!(view.label(), "October 2023");
        assert!(view.grid().cell(18).unwrap().is_today());
    }

    #[test]
    fn month_wraparound() {
        let mut view = at(2024, 11);
        view.next_month();
        assert_eq!((view.cursor().year(), view.cursor().month()), (2025, 0));
        assert_eq!(view.label(), "January 2025");

        let mut view = at(2024, 0);
        view.prev_month();
        assert_eq!((view.cursor().year(), view.cursor().month()), (2023, 11));
        assert_eq!(view.label(), "December 2023");
    }

    #[test]
    fn twelve_months_is_one_year() {
        for month in 0..12 {
            let mut view = at(2020, month);
            (0..12).for_each(|_| view.next_month());
            assert_eq!((view.cursor().year(), view.cursor().month()), (2021, month));

            (0..24).for_each(|_| view.prev_month());
            assert_eq!((view.cursor().year(), view.cursor().month()), (2019, month));
        }
    }

    #[test]
    fn year_steps_keep_month() {
        let mut view = at(2024, 1);
        view.prev_year();
        assert_eq!((view.cursor().year(), view.cursor().month()), (2023, 1));
        assert_eq!(view.grid().days().count(), 28);

        view.next_year();
        view.next_year();
        assert_eq!((view.cursor().year(), view.cursor().month()), (2025, 1));
    }

    #[test]
    fn cursor_is_unbounded() {
        let mut view = at(1, 0);
        view.prev_month();
        view.prev_year();
        assert_eq!((view.cursor().year(), view.cursor().month()), (-1, 11));
        assert_eq!(view.grid().days().count(), 31);
    }

    #[test]
    fn cursor_stops_at_the_year_range() {
        let mut view = at(i32::MAX, 11);
        view.next_month();
        assert_eq!((view.cursor().year(), view.cursor().month()), (i32::MAX, 11));
        view.next_year();
        assert_eq!((view.cursor().year(), view.cursor().month()), (i32::MAX, 11));
        view.prev_month();
        assert_eq!((view.cursor().year(), view.cursor().month()), (i32::MAX, 10));

        let mut view = at(i32::MIN, 0);
        view.prev_month();
        assert_eq!((view.cursor().year(), view.cursor().month()), (i32::MIN, 0));
        view.prev_year();
        assert_eq!((view.cursor().year(), view.cursor().month()), (i32::MIN, 0));
        view.next_month();
        assert_eq!((view.cursor().year(), view.cursor().month()), (i32::MIN, 1));
        assert_eq!(view.label(), format!("February {}", i32::MIN));
    }

    #[test]
    fn selecting_moves_the_single_marker() {
        let mut view = at(2023, 9);
        view.activate_day(15, Activation::Pointer);
        view.activate_day(20, Activation::Pointer);

        let selected: Vec<_> = view.grid().days().filter(|c| c.is_selected()).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].day(), 20);
        assert_eq!(view.selected(), Some(date(2023, 9, 20)));
    }

    #[test]
    fn selection_survives_navigation() {
        let mut view = at(2023, 9);
        view.activate_day(15, Activation::Confirm);

        view.next_month();
        assert!(view.grid().selected().is_none());

        view.prev_month();
        assert_eq!(view.grid().selected().map(DayCell::day), Some(15));
    }

    #[test]
    fn selecting_a_date_outside_the_grid_clears_the_visible_marker() {
        let mut view = at(2023, 9);
        view.activate_day(15, Activation::Pointer);
        view.activate(date(2023, 10, 2), Activation::Pointer);

        assert!(view.grid().selected().is_none());
        view.next_month();
        assert_eq!(view.grid().selected().map(DayCell::day), Some(2));
    }

    #[test]
    fn placeholders_cannot_be_activated() {
        // October 2024 starts on a Tuesday
        let mut view = at(2024, 9);
        assert_eq!(view.activate_at(0, 0, Activation::Pointer), None);
        assert_eq!(view.selected(), None);

        assert_eq!(
            view.activate_at(2, 0, Activation::Pointer),
            Some(date(2024, 9, 1))
        );
    }

    #[test]
    fn triggers_are_equivalent() {
        let mut by_pointer = at(2023, 9);
        let mut by_key = by_pointer.clone();

        by_pointer.activate_day(15, Activation::Pointer);
        by_key.activate_day(15, Activation::Confirm);

        assert_eq!(by_pointer.selected(), by_key.selected());
        assert_eq!(by_pointer.grid(), by_key.grid());
    }
}
