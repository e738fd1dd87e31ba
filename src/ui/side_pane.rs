use std::fmt::Write;

use unsegen::base::style::StyleModifier;
use unsegen::base::*;
use unsegen::widget::*;

use crate::search::Alignment;

use super::Context;

/// Search bar, quick links and notes next to the calendar.
pub struct SidePane<'a> {
    context: &'a Context,
}

impl<'a> SidePane<'a> {
    const WIDTH: usize = 40;
    const FIELD_WIDTH: usize = 30;

    pub fn new(context: &'a Context) -> Self {
        SidePane { context }
    }

    /// The search field, aligned the way its text reads.
    fn search_line(&self) -> String {
        let direction = self.context.search_direction();
        let text = match self.context.search_text() {
            "" => self.context.search_placeholder(),
            typed => typed,
        };
        let field = match direction.alignment() {
            Alignment::Left => format!("{:<width$}", text, width = Self::FIELD_WIDTH),
            Alignment::Right => format!("{:>width$}", text, width = Self::FIELD_WIDTH),
        };

        format!("[{}] {}", direction.as_str(), field)
    }

    fn lines(&self) -> Vec<String> {
        let shelf = self.context.shelf();
        let marker = |focus: Option<usize>, i: usize| if focus == Some(i) { '>' } else { ' ' };

        let mut lines = vec![
            format!(
                "Search ({})",
                self.context.search().base().host_str().unwrap_or("-")
            ),
            self.search_line(),
            String::new(),
            format!("Links ({}/{})", shelf.len(), shelf.capacity()),
        ];

        let link_focus = self.context.link_focus();
        lines.extend(shelf.links().iter().enumerate().map(|(i, link)| {
            let mark = marker(link_focus, i);
            match link.domain() {
                Some(domain) if link.title.is_some() => {
                    format!("{} {} ({})", mark, link.label(), domain)
                }
                _ => format!("{} {}", mark, link.label()),
            }
        }));

        if shelf.can_add() {
            lines.push("  [+]".to_owned());
        }

        lines.push(String::new());
        lines.push("Notes".to_owned());
        let note_focus = self.context.note_focus();
        lines.extend(
            self.context
                .notes()
                .iter()
                .enumerate()
                .map(|(i, note)| format!("{} - {}", marker(note_focus, i), note.text())),
        );

        lines
    }
}

impl Widget for SidePane<'_> {
    fn space_demand(&self) -> Demand2D {
        Demand2D {
            width: ColDemand::at_least(Self::WIDTH),
            height: RowDemand::at_least(self.lines().len()),
        }
    }

    fn draw(&self, mut window: Window, _hints: RenderingHints) {
        let mut cursor = Cursor::new(&mut window)
            .wrapping_mode(WrappingMode::NoWrap)
            .style_modifier(StyleModifier::default());

        for (y, line) in self.lines().iter().enumerate() {
            cursor.move_to(ColIndex::new(0), RowIndex::new(y as i32));
            let _ = write!(&mut cursor, "{}", line);
        }
    }
}

/// Bottom line: today and the selected date.
pub struct StatusBar<'a> {
    context: &'a Context,
}

impl<'a> StatusBar<'a> {
    pub fn new(context: &'a Context) -> Self {
        StatusBar { context }
    }
}

impl Widget for StatusBar<'_> {
    fn space_demand(&self) -> Demand2D {
        Demand2D {
            width: ColDemand::at_least(1),
            height: RowDemand::exact(1),
        }
    }

    fn draw(&self, mut window: Window, _hints: RenderingHints) {
        let view = self.context.view();
        let mut cursor = Cursor::new(&mut window).wrapping_mode(WrappingMode::NoWrap);

        let _ = match view.selected() {
            Some(date) => write!(&mut cursor, " Today: {}  Selected: {}", view.today(), date),
            None => write!(&mut cursor, " Today: {}  Nothing selected", view.today()),
        };

        if let Some(error) = self.context.last_error() {
            let _ = write!(&mut cursor, "  ! {}", error);
        }
    }
}
