use unsegen::base::style::*;
use unsegen::widget::builtin::PromptLine;

use crate::calendar::{days_of_month, Activation, CalDate, CalendarView, MonthGrid};
use crate::cmds::Cmd;
use crate::config::Config;
use crate::error::{Error, ErrorKind};
use crate::notes::NoteList;
use crate::search::{detect_direction, Direction, SearchEngine};
use crate::shelf::{QuickLink, Shelf};

use super::month_pane::MonthPane;

#[derive(Clone, Debug)]
pub struct Theme {
    pub day_style: StyleModifier,
    pub day_text_style: TextFormatModifier,
    pub focus_day_style: StyleModifier,
    pub focus_day_text_style: TextFormatModifier,
    pub focus_day_char: Option<char>,
    pub selected_day_style: StyleModifier,
    pub selected_day_text_style: TextFormatModifier,
    pub selected_day_char: Option<char>,
    pub today_day_style: StyleModifier,
    pub today_day_text_style: TextFormatModifier,
    pub today_day_char: Option<char>,
    pub month_label_style: StyleModifier,
    pub month_label_text_style: TextFormatModifier,
    pub month_header_style: StyleModifier,
    pub month_header_text_style: TextFormatModifier,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            day_style: StyleModifier::default(),
            day_text_style: TextFormatModifier::default(),
            focus_day_style: StyleModifier::default().bg_color(Color::Blue),
            focus_day_text_style: TextFormatModifier::default(),
            focus_day_char: None,
            selected_day_style: StyleModifier::default().fg_color(Color::Green),
            selected_day_text_style: TextFormatModifier::default().bold(true),
            selected_day_char: Some('>'),
            today_day_style: StyleModifier::default().invert(true),
            today_day_text_style: TextFormatModifier::default().italic(true),
            today_day_char: Some('*'),
            month_label_style: StyleModifier::default(),
            month_label_text_style: TextFormatModifier::default().bold(true),
            month_header_style: StyleModifier::default().fg_color(Color::Yellow),
            month_header_text_style: TextFormatModifier::default(),
        }
    }
}

impl Theme {
    pub fn from_config(config: &Config) -> Self {
        Theme {
            today_day_char: config.today_char,
            selected_day_char: config.selected_char,
            focus_day_char: config.focus_char,
            ..Theme::default()
        }
    }
}

/// What keyboard input currently goes to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Search,
    LinkUrl,
    /// Second step of adding a link, carrying the url typed before.
    LinkTitle(String),
    Note,
}

impl Mode {
    fn prompt(&self) -> &'static str {
        match self {
            Mode::Normal => "",
            Mode::Search => "search: ",
            Mode::LinkUrl => "url: ",
            Mode::LinkTitle(_) => "title: ",
            Mode::Note => "note: ",
        }
    }
}

/// Everything the start page shows. Owned by the UI loop only.
pub struct Context {
    pub theme: Theme,
    mode: Mode,
    prompt: PromptLine,
    view: CalendarView,
    focus: u32,
    shelf: Shelf,
    link_focus: Option<usize>,
    notes: NoteList,
    note_focus: Option<usize>,
    search: SearchEngine,
    search_placeholder: String,
    search_direction: Direction,
    pending_open: Option<String>,
    last_error: Option<String>,
}

impl Context {
    pub fn new(config: &Config, view: CalendarView) -> Self {
        let mut shelf = Shelf::with_capacity(config.max_links);
        // added links go to the front, so add in reverse to keep config order
        for link in config.links.iter().rev() {
            if let Err(e) = shelf.add(&link.url, link.title.as_deref()) {
                log::warn!("Skipping quick link '{}': {}", link.url, e);
            }
        }

        let mut notes = NoteList::default();
        notes.extend(config.notes.iter().map(String::as_str));

        let focus = view.today().day();

        Context {
            theme: Theme::from_config(config),
            mode: Mode::Normal,
            prompt: PromptLine::with_prompt(String::new()),
            view,
            focus,
            shelf,
            link_focus: None,
            notes,
            note_focus: None,
            search: config.search_engine.clone(),
            search_direction: detect_direction("", &config.search_placeholder),
            search_placeholder: config.search_placeholder.clone(),
            pending_open: None,
            last_error: None,
        }
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn prompt(&self) -> &PromptLine {
        &self.prompt
    }

    pub fn input_sink_mut(&mut self) -> &mut PromptLine {
        &mut self.prompt
    }

    pub fn view(&self) -> &CalendarView {
        &self.view
    }

    pub fn focus(&self) -> u32 {
        self.focus
    }

    pub fn focused_date(&self) -> Option<CalDate> {
        self.view.grid().cell(self.focus).map(|cell| cell.date())
    }

    pub fn shelf(&self) -> &Shelf {
        &self.shelf
    }

    pub fn notes(&self) -> &NoteList {
        &self.notes
    }

    pub fn search(&self) -> &SearchEngine {
        &self.search
    }

    pub fn search_placeholder(&self) -> &str {
        &self.search_placeholder
    }

    /// Text typed into the search prompt so far, empty outside of it.
    pub fn search_text(&self) -> &str {
        if self.mode == Mode::Search {
            self.prompt.active_line()
        } else {
            ""
        }
    }

    pub fn search_direction(&self) -> Direction {
        self.search_direction
    }

    pub fn link_focus(&self) -> Option<usize> {
        self.link_focus
    }

    pub fn note_focus(&self) -> Option<usize> {
        self.note_focus
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Address the user asked to open, if any. Taking it clears it.
    pub fn take_pending_open(&mut self) -> Option<String> {
        self.pending_open.take()
    }

    /// Runs a command from the key map. Returns `false` for [`Cmd::Exit`].
    pub fn handle(&mut self, cmd: Cmd) -> bool {
        self.last_error = None;

        match cmd {
            Cmd::Noop => {}
            Cmd::PrevDay => self.move_focus(-1),
            Cmd::NextDay => self.move_focus(1),
            Cmd::PrevWeek => self.move_focus(-7),
            Cmd::NextWeek => self.move_focus(7),
            Cmd::PrevMonth => {
                self.view.prev_month();
                self.clamp_focus();
            }
            Cmd::NextMonth => {
                self.view.next_month();
                self.clamp_focus();
            }
            Cmd::PrevYear => {
                self.view.prev_year();
                self.clamp_focus();
            }
            Cmd::NextYear => {
                self.view.next_year();
                self.clamp_focus();
            }
            Cmd::Confirm => {
                self.view.activate_day(self.focus, Activation::Confirm);
            }
            Cmd::Search => self.enter(Mode::Search),
            Cmd::AddLink => {
                if self.shelf.can_add() {
                    self.enter(Mode::LinkUrl);
                } else {
                    self.report(Error::new(
                        ErrorKind::ShelfFull,
                        &format!("at most {} links", self.shelf.capacity()),
                    ));
                }
            }
            Cmd::NextLink => self.link_focus = cycle(self.link_focus, self.shelf.len()),
            Cmd::OpenLink => {
                let focused = self.link_focus.and_then(|i| self.shelf.links().get(i));
                match focused.map(QuickLink::href) {
                    Some(href) => self.pending_open = Some(href),
                    None => self.report(Error::new(ErrorKind::NoSuchEntry, "no link focused")),
                }
            }
            Cmd::RemoveLink => self.remove_link(),
            Cmd::AddNote => self.enter(Mode::Note),
            Cmd::NextNote => self.note_focus = cycle(self.note_focus, self.notes.len()),
            Cmd::RemoveNote => self.remove_note(),
            Cmd::Exit => return false,
        }

        true
    }

    /// Call after the prompt line changed.
    pub fn prompt_edited(&mut self) {
        if self.mode == Mode::Search {
            self.search_direction =
                detect_direction(self.prompt.active_line(), &self.search_placeholder);
        }
    }

    /// Finishes the active prompt line.
    pub fn submit_prompt(&mut self) {
        self.last_error = None;
        let line = self.prompt.finish_line().to_owned();

        match std::mem::replace(&mut self.mode, Mode::Normal) {
            Mode::Normal => {}
            Mode::Search => {
                match self.search.submit(&line) {
                    Some(url) => self.pending_open = Some(url.into()),
                    None => log::debug!("Ignoring blank search"),
                }
                self.search_direction = detect_direction("", &self.search_placeholder);
            }
            Mode::LinkUrl => {
                if !line.trim().is_empty() {
                    self.enter(Mode::LinkTitle(line));
                }
            }
            Mode::LinkTitle(url) => match self.shelf.add(&url, Some(&line)).map(QuickLink::label) {
                Ok(label) => {
                    log::info!("Added quick link {}", label);
                    self.link_focus = Some(0);
                }
                Err(e) => self.report(e),
            },
            Mode::Note => {
                if self.notes.add(&line).is_some() {
                    self.note_focus = Some(self.notes.len() - 1);
                }
            }
        }
    }

    /// Leaves the active prompt without applying it.
    pub fn cancel_prompt(&mut self) {
        self.prompt = PromptLine::with_prompt(String::new());
        self.mode = Mode::Normal;
        self.search_direction = detect_direction("", &self.search_placeholder);
    }

    fn enter(&mut self, mode: Mode) {
        self.prompt = PromptLine::with_prompt(mode.prompt().to_owned());
        self.mode = mode;
        self.prompt_edited();
    }

    fn report(&mut self, error: Error) {
        log::warn!("{}", error);
        self.last_error = Some(error.to_string());
    }

    fn remove_link(&mut self) {
        let index = match self.link_focus {
            Some(index) => index,
            None => return self.report(Error::new(ErrorKind::NoSuchEntry, "no link focused")),
        };

        match self.shelf.remove(index) {
            Ok(link) => {
                log::info!("Removed quick link {}", link.label());
                self.link_focus = refocus(index, self.shelf.len());
            }
            Err(e) => self.report(e),
        }
    }

    fn remove_note(&mut self) {
        let focused = self
            .note_focus
            .and_then(|i| self.notes.iter().nth(i).map(|note| (i, note.id())));
        let (index, id) = match focused {
            Some(focused) => focused,
            None => return self.report(Error::new(ErrorKind::NoSuchEntry, "no note focused")),
        };

        match self.notes.remove(id) {
            Ok(_) => self.note_focus = refocus(index, self.notes.len()),
            Err(e) => self.report(e),
        }
    }

    /// Pointer press at terminal cell (`x`, `y`), zero-based and relative to
    /// the month pane.
    pub fn click(&mut self, x: usize, y: usize) -> Option<CalDate> {
        let row = y.checked_sub(MonthPane::LABEL_ROWS + MonthPane::HEADER_ROWS)?;
        let column = x / MonthPane::CELL_WIDTH;
        if row >= MonthGrid::ROWS {
            return None;
        }

        let date = self.view.activate_at(column, row, Activation::Pointer)?;
        self.focus = date.day();
        Some(date)
    }

    fn days_shown(&self) -> u32 {
        let cursor = self.view.cursor();
        days_of_month(cursor.year(), cursor.month())
    }

    fn clamp_focus(&mut self) {
        self.focus = self.focus.min(self.days_shown());
    }

    /// Moves the focused day, turning the month when leaving it.
    fn move_focus(&mut self, delta: i64) {
        let target = self.focus as i64 + delta;
        let days = self.days_shown() as i64;

        if target < 1 {
            self.view.prev_month();
            self.focus = (self.days_shown() as i64 + target) as u32;
        } else if target > days {
            self.view.next_month();
            self.focus = (target - days) as u32;
        } else {
            self.focus = target as u32;
        }
    }
}

/// Next entry of a list of `len`, wrapping around.
fn cycle(focus: Option<usize>, len: usize) -> Option<usize> {
    match focus {
        _ if len == 0 => None,
        Some(i) => Some((i + 1) % len),
        None => Some(0),
    }
}

/// Focus after the entry at `removed` went away.
fn refocus(removed: usize, len: usize) -> Option<usize> {
    if len == 0 {
        None
    } else {
        Some(removed.min(len - 1))
    }
}
