use std::slice::Chunks;

use super::date::{days_of_month, month_name, weekday_of, CalDate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    date: CalDate,
    is_today: bool,
    selected: bool,
}

impl DayCell {
    fn new(date: CalDate) -> Self {
        DayCell {
            date,
            is_today: false,
            selected: false,
        }
    }

    fn today(mut self, is_today: bool) -> Self {
        self.is_today = is_today;
        self
    }

    fn select(mut self, selected: bool) -> Self {
        self.set_selected(selected);
        self
    }

    pub(crate) fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    pub fn date(&self) -> CalDate {
        self.date
    }

    pub fn day(&self) -> u32 {
        self.date.day()
    }

    pub fn month(&self) -> u32 {
        self.date.month()
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn is_today(&self) -> bool {
        self.is_today
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }
}

/// One slot of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridEntry {
    /// Blank slot before day 1 so that day 1 lands under its weekday column.
    Placeholder,
    Day(DayCell),
}

impl GridEntry {
    pub fn as_day(&self) -> Option<&DayCell> {
        match self {
            GridEntry::Day(cell) => Some(cell),
            GridEntry::Placeholder => None,
        }
    }

    fn as_day_mut(&mut self) -> Option<&mut DayCell> {
        match self {
            GridEntry::Day(cell) => Some(cell),
            GridEntry::Placeholder => None,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, GridEntry::Placeholder)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    year: i32,
    month: u32,
    label: String,
    entries: Vec<GridEntry>,
}

impl MonthGrid {
    pub const COLUMNS: usize = 7;
    pub const ROWS: usize = 6;

    /// Builds the grid for a zero-based, already normalized `month`.
    pub fn render(year: i32, month: u32, today: CalDate, selected: Option<CalDate>) -> Self {
        debug_assert!(month < 12, "month {} is not normalized", month);

        let offset = weekday_of(year, month, 1) as usize;
        let num_days = days_of_month(year, month);

        let entries = std::iter::repeat(GridEntry::Placeholder)
            .take(offset)
            .chain((1..=num_days).map(|day| {
                let date = CalDate::new(year, month, day)
                    .expect("day is within the month by construction");

                GridEntry::Day(
                    DayCell::new(date)
                        .today(date == today)
                        .select(selected == Some(date)),
                )
            }))
            .collect();

        MonthGrid {
            year,
            month,
            label: format!("{} {}", month_name(month), year),
            entries,
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn entries(&self) -> &[GridEntry] {
        &self.entries
    }

    pub fn rows(&self) -> Chunks<'_, GridEntry> {
        self.entries.chunks(Self::COLUMNS)
    }

    pub fn placeholders(&self) -> usize {
        self.entries.iter().take_while(|e| e.is_placeholder()).count()
    }

    pub fn days(&self) -> impl Iterator<Item = &DayCell> + '_ {
        self.entries.iter().filter_map(GridEntry::as_day)
    }

    pub fn selected(&self) -> Option<&DayCell> {
        self.days().find(|cell| cell.is_selected())
    }

    pub fn today(&self) -> Option<&DayCell> {
        self.days().find(|cell| cell.is_today())
    }

    pub fn cell(&self, day: u32) -> Option<&DayCell> {
        let idx = self.placeholders() + day.checked_sub(1)? as usize;
        self.entries.get(idx).and_then(GridEntry::as_day)
    }

    /// Resolves a (column, row) position to a real day. Placeholders and
    /// positions past the last day yield `None`.
    pub fn day_at(&self, column: usize, row: usize) -> Option<&DayCell> {
        if column >= Self::COLUMNS {
            return None;
        }

        self.entries
            .get(row * Self::COLUMNS + column)
            .and_then(GridEntry::as_day)
    }

    pub(crate) fn selected_mut(&mut self) -> Option<&mut DayCell> {
        self.entries
            .iter_mut()
            .filter_map(GridEntry::as_day_mut)
            .find(|cell| cell.is_selected())
    }

    pub(crate) fn cell_mut(&mut self, date: &CalDate) -> Option<&mut DayCell> {
        if !date.is_in(self.year, self.month) {
            return None;
        }

        let idx = self.placeholders() + date.day() as usize - 1;
        self.entries.get_mut(idx).and_then(GridEntry::as_day_mut)
    }
}
