use nix::sys::signal::{SigSet, Signal};
use std::io;
use std::sync::mpsc;
use std::thread;

use unsegen::input::Input;

pub enum Event {
    Input(Input),
    Signal(Signal),
}

/// Funnels terminal input and awaited signals into the single UI loop.
pub struct Dispatcher {
    rx: mpsc::Receiver<Event>,
    _input_handle: thread::JoinHandle<()>,
    _signal_handle: thread::JoinHandle<()>,
}

impl Dispatcher {
    /// `signals` have to be blocked in every thread already, otherwise their
    /// default disposition wins over `sigwait`.
    pub fn new(signals: SigSet) -> Dispatcher {
        let (tx, rx) = mpsc::channel();
        let input_handle = {
            let tx = tx.clone();
            thread::spawn(move || {
                let stdin = io::stdin();
                let stdin = stdin.lock();
                for evt in Input::read_all(stdin) {
                    match evt {
                        Ok(input) => {
                            if tx.send(Event::Input(input)).is_err() {
                                return;
                            }
                        }
                        Err(e) => log::warn!("Error reading input: {}", e),
                    }
                }
            })
        };
        let signal_handle = {
            thread::spawn(move || loop {
                match signals.wait() {
                    Ok(signal) => {
                        if tx.send(Event::Signal(signal)).is_err() {
                            return;
                        }
                    }
                    Err(e) => {
                        log::error!("Waiting for signals failed: {}", e);
                        return;
                    }
                }
            })
        };
        Dispatcher {
            rx,
            _input_handle: input_handle,
            _signal_handle: signal_handle,
        }
    }

    pub fn next(&self) -> Result<Event, mpsc::RecvError> {
        self.rx.recv()
    }
}
