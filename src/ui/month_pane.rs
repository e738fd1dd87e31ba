use itertools::Itertools;
use std::fmt::{self, Display, Write};

use unsegen::base::style::StyleModifier;
use unsegen::base::*;
use unsegen::widget::*;

use crate::calendar::{DayCell, GridEntry, MonthGrid, WEEKDAY_NAMES};

use super::{Context, Theme};

struct DayCellView<'a> {
    cell: &'a DayCell,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> DayCellView<'a> {
    fn new(cell: &'a DayCell, theme: &'a Theme) -> Self {
        DayCellView {
            cell,
            focused: false,
            theme,
        }
    }

    fn focus(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn style(&self) -> StyleModifier {
        let theme = self.theme;
        if self.focused {
            theme.focus_day_style.format(theme.focus_day_text_style)
        } else if self.cell.is_selected() {
            theme.selected_day_style.format(theme.selected_day_text_style)
        } else if self.cell.is_today() {
            theme.today_day_style.format(theme.today_day_text_style)
        } else {
            theme.day_style.format(theme.day_text_style)
        }
    }
}

impl Display for DayCellView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arg_today = if self.cell.is_today() {
            self.theme.today_day_char.unwrap_or(' ')
        } else {
            ' '
        };

        let arg_mark = if self.cell.is_selected() {
            self.theme.selected_day_char.unwrap_or(' ')
        } else if self.focused {
            self.theme.focus_day_char.unwrap_or(' ')
        } else {
            ' '
        };

        write!(f, "{}{}{:>2}", arg_today, arg_mark, self.cell.day())
    }
}

/// Label, weekday header and the 6x7 grid of the displayed month.
pub struct MonthPane<'a> {
    context: &'a Context,
}

impl<'a> MonthPane<'a> {
    pub const CELL_WIDTH: usize = 4;
    pub const LABEL_ROWS: usize = 1;
    pub const HEADER_ROWS: usize = 1;

    pub fn new(context: &'a Context) -> Self {
        MonthPane { context }
    }
}

impl Widget for MonthPane<'_> {
    fn space_demand(&self) -> Demand2D {
        Demand2D {
            width: ColDemand::exact(MonthGrid::COLUMNS * Self::CELL_WIDTH),
            height: RowDemand::exact(Self::LABEL_ROWS + Self::HEADER_ROWS + MonthGrid::ROWS),
        }
    }

    fn draw(&self, mut window: Window, _hints: RenderingHints) {
        let theme = &self.context.theme;
        let grid = self.context.view().grid();

        let mut cursor = Cursor::new(&mut window).style_modifier(
            theme
                .month_label_style
                .format(theme.month_label_text_style),
        );
        let _ = write!(&mut cursor, "{}", grid.label());

        cursor.move_to(ColIndex::new(0), RowIndex::new(Self::LABEL_ROWS as i32));
        cursor.set_style_modifier(
            theme
                .month_header_style
                .format(theme.month_header_text_style),
        );
        for &head in WEEKDAY_NAMES.iter() {
            let _ = write!(&mut cursor, "{:>width$}", head, width = Self::CELL_WIDTH);
        }

        for (row_idx, row) in grid.rows().enumerate() {
            let y = (Self::LABEL_ROWS + Self::HEADER_ROWS + row_idx) as i32;
            for (col_idx, entry) in row.iter().enumerate() {
                let cell = match entry {
                    GridEntry::Day(cell) => cell,
                    GridEntry::Placeholder => continue,
                };

                let view = DayCellView::new(cell, theme).focus(cell.day() == self.context.focus());

                cursor.move_to(
                    ColIndex::new((col_idx * Self::CELL_WIDTH) as i32),
                    RowIndex::new(y),
                );
                cursor.set_style_modifier(view.style());
                let _ = write!(&mut cursor, "{}", view);
            }
        }
    }
}

/// The month as plain text, one line per grid row, for non-interactive use.
pub fn render_plain(grid: &MonthGrid, theme: &Theme) -> String {
    let header = WEEKDAY_NAMES
        .iter()
        .map(|head| format!("{:>width$}", head, width = MonthPane::CELL_WIDTH))
        .join("");

    let rows = grid.rows().map(|row| {
        row.iter()
            .map(|entry| match entry {
                GridEntry::Day(cell) => DayCellView::new(cell, theme).to_string(),
                GridEntry::Placeholder => " ".repeat(MonthPane::CELL_WIDTH),
            })
            .join("")
            .trim_end()
            .to_owned()
    });

    std::iter::once(grid.label().to_owned())
        .chain(std::iter::once(header))
        .chain(rows)
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{Activation, CalDate, CalendarView};

    #[test]
    fn cells_show_markers() {
        let theme = Theme::default();
        let today = CalDate::new(2023, 9, 18).unwrap();
        let mut view = CalendarView::new(today);
        view.activate(CalDate::new(2023, 9, 3).unwrap(), Activation::Pointer);
        let grid = view.grid();

        assert_eq!(DayCellView::new(grid.cell(18).unwrap(), &theme).to_string(), "* 18");
        assert_eq!(DayCellView::new(grid.cell(3).unwrap(), &theme).to_string(), " > 3");
        assert_eq!(DayCellView::new(grid.cell(25).unwrap(), &theme).to_string(), "  25");
        assert_eq!(
            DayCellView::new(grid.cell(25).unwrap(), &theme)
                .focus(true)
                .to_string(),
            "  25"
        );
    }

    #[test]
    fn plain_rendering() {
        let today = CalDate::new(2024, 1, 10).unwrap();
        let view = CalendarView::new(today);
        let text = render_plain(view.grid(), &Theme::default());
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines[0], "February 2024");
        assert_eq!(lines[1], " Sun Mon Tue Wed Thu Fri Sat");
        assert_eq!(lines[2], "                   1   2   3");
        assert_eq!(lines[3], "   4   5   6   7   8   9* 10");
        assert_eq!(lines.last(), Some(&"  25  26  27  28  29"));
        assert_eq!(lines.len(), 7);
    }
}
