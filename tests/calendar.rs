use perch::calendar::{
    days_of_month, weekday_of, Activation, CalDate, CalendarView, DayCell, GridEntry,
};

fn date(year: i32, month: u32, day: u32) -> CalDate {
    CalDate::new(year, month, day).expect("valid test date")
}

fn cursor(view: &CalendarView) -> (i32, u32) {
    (view.cursor().year(), view.cursor().month())
}

#[test]
fn grid_shape_holds_across_a_long_traversal() {
    let mut view = CalendarView::new(date(1999, 6, 14));

    for _ in 0..(12 * 30) {
        let (year, month) = cursor(&view);
        let grid = view.grid();
        let placeholders = grid
            .entries()
            .iter()
            .take_while(|e| matches!(e, GridEntry::Placeholder))
            .count();

        assert_eq!(placeholders, weekday_of(year, month, 1) as usize);
        assert_eq!(grid.days().count(), days_of_month(year, month) as usize);
        assert!(grid.entries()[placeholders..]
            .iter()
            .all(|e| !matches!(e, GridEntry::Placeholder)));

        view.next_month();
    }

    assert_eq!(cursor(&view), (2029, 6));
}

#[test]
fn month_lengths() {
    assert_eq!(days_of_month(2024, 1), 29);
    assert_eq!(days_of_month(2023, 1), 28);
    assert_eq!(days_of_month(2023, 0), 31);
}

#[test]
fn twelve_steps_change_the_year() {
    let mut view = CalendarView::new(date(2023, 4, 1));
    (0..12).for_each(|_| view.next_month());
    assert_eq!(cursor(&view), (2024, 4));

    (0..12).for_each(|_| view.prev_month());
    (0..12).for_each(|_| view.prev_month());
    assert_eq!(cursor(&view), (2022, 4));
}

#[test]
fn year_boundaries() {
    let mut view = CalendarView::new(date(2024, 11, 24));
    view.next_month();
    assert_eq!(cursor(&view), (2025, 0));

    let mut view = CalendarView::new(date(2024, 0, 2));
    view.prev_month();
    assert_eq!(cursor(&view), (2023, 11));
}

#[test]
fn single_selection_marker() {
    let mut view = CalendarView::new(date(2023, 9, 1));
    view.activate_day(15, Activation::Pointer);

    let selected: Vec<&DayCell> = view.grid().days().filter(|c| c.is_selected()).collect();
    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].day(), 15);
}

#[test]
fn selection_persists_across_navigation() {
    let mut view = CalendarView::new(date(2023, 9, 1));
    view.activate_day(15, Activation::Pointer);

    view.next_month();
    assert_eq!(view.grid().days().filter(|c| c.is_selected()).count(), 0);

    view.prev_month();
    assert_eq!(view.grid().selected().map(DayCell::day), Some(15));

    view.next_year();
    view.prev_year();
    assert_eq!(view.grid().selected().map(DayCell::day), Some(15));
}

#[test]
fn today_is_always_marked() {
    let today = date(2024, 1, 29);
    let mut view = CalendarView::new(today);
    view.activate_day(29, Activation::Confirm);

    view.next_year();
    assert!(view.grid().today().is_none());
    view.prev_year();
    view.prev_month();
    view.next_month();

    let cell = view.grid().cell(29).expect("29 February 2024");
    assert!(cell.is_today());
    assert!(cell.is_selected());

    view.activate_day(1, Activation::Pointer);
    assert_eq!(view.grid().today().map(DayCell::date), Some(today));
}

#[test]
fn confirm_equals_pointer() {
    let mut by_pointer = CalendarView::new(date(2023, 9, 1));
    let mut by_key = CalendarView::new(date(2023, 9, 1));

    by_pointer.activate(date(2023, 9, 15), Activation::Pointer);
    by_key.activate(date(2023, 9, 15), Activation::Confirm);

    assert_eq!(by_pointer.selected(), by_key.selected());
    assert_eq!(by_pointer.grid(), by_key.grid());
}
