use std::process::Command;

use termion::event::{Event as TermEvent, Key, MouseButton, MouseEvent};
use unsegen::base::Terminal;
use unsegen::input::{Behavior, EditBehavior, Input};
use unsegen::widget::*;

use crate::calendar::CalendarView;
use crate::config::Config;
use crate::events::{Dispatcher, Event};

use super::{Context, Mode, MonthPane, SidePane, StatusBar};

const OPEN_PROGRAM: &str = "xdg-open";

fn open_url(url: &str) {
    log::info!("Opening {}", url);

    if let Err(e) = Command::new(OPEN_PROGRAM).arg(url).spawn() {
        log::error!("Could not run {} for {}: {}", OPEN_PROGRAM, url, e);
    }
}

/// Applies the prompt line on enter.
struct PromptSubmit<'a>(&'a mut Context);

impl Behavior for PromptSubmit<'_> {
    fn input(self, input: Input) -> Option<Input> {
        match input.event {
            TermEvent::Key(Key::Char('\n')) => {
                self.0.submit_prompt();
                None
            }
            _ => Some(input),
        }
    }
}

pub struct App<'a> {
    config: &'a Config,
    context: Context,
}

impl<'a> App<'a> {
    pub fn new(config: &'a Config, view: CalendarView) -> App<'a> {
        let context = Context::new(config, view);
        App { config, context }
    }

    fn bottom_bar<'w>(&'w self) -> impl Widget + 'w {
        let mut layout = HLayout::new();
        if *self.context.mode() == Mode::Normal {
            layout = layout.widget(StatusBar::new(&self.context));
        } else {
            layout = layout.widget(self.context.prompt().as_widget());
        }

        layout
    }

    fn as_widget<'w>(&'w self) -> impl Widget + 'w
    where
        'a: 'w,
    {
        VLayout::new()
            .widget(
                HLayout::new()
                    .widget(MonthPane::new(&self.context))
                    .widget(SidePane::new(&self.context)),
            )
            .widget(self.bottom_bar())
    }

    fn draw(&self, term: &mut Terminal) {
        let root = term.create_root_window();
        self.as_widget().draw(root, RenderingHints::new());
        term.present();
    }

    /// Returns `false` once the user asked to quit.
    fn handle_input(&mut self, input: Input) -> bool {
        let run = if *self.context.mode() == Mode::Normal {
            self.handle_command(input)
        } else {
            self.handle_prompt(input);
            true
        };

        if let Some(url) = self.context.take_pending_open() {
            open_url(&url);
        }

        run
    }

    fn handle_prompt(&mut self, input: Input) {
        if input.matches(Key::Esc) {
            self.context.cancel_prompt();
            return;
        }

        input
            .chain(PromptSubmit(&mut self.context))
            .chain(
                EditBehavior::new(self.context.input_sink_mut())
                    .delete_forwards_on(Key::Delete)
                    .delete_backwards_on(Key::Backspace)
                    .left_on(Key::Left)
                    .right_on(Key::Right),
            )
            .finish();

        self.context.prompt_edited();
    }

    fn handle_command(&mut self, input: Input) -> bool {
        match input.event {
            TermEvent::Key(key) => match self.config.key_map.get(&key) {
                Some(cmd) => self.context.handle(*cmd),
                None => true,
            },
            TermEvent::Mouse(MouseEvent::Press(MouseButton::Left, x, y)) => {
                // terminal coordinates are one-based, the month pane sits at the origin
                if let Some(date) = self
                    .context
                    .click(x.saturating_sub(1) as usize, y.saturating_sub(1) as usize)
                {
                    log::debug!("Clicked {}", date);
                }
                true
            }
            _ => true,
        }
    }

    pub fn run(
        &mut self,
        dispatcher: Dispatcher,
        mut term: Terminal,
    ) -> Result<(), Box<dyn std::error::Error>> {
        self.draw(&mut term);

        while let Ok(event) = dispatcher.next() {
            let run = match event {
                Event::Input(input) => self.handle_input(input),
                Event::Signal(signal) => {
                    log::debug!("Redrawing after {:?}", signal);
                    true
                }
            };

            if !run {
                break;
            }

            self.draw(&mut term);
        }

        Ok(())
    }
}
