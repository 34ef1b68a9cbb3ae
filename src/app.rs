use crate::command::Command;
use crate::game::{Direction, Game, Input};
use crate::ui::GameView;
use crossterm::event::{poll, read, Event};
use rand::Rng;
use ratatui::{backend::Backend, Frame, Terminal};
use std::io;
use std::time::Instant;

/// The event loop: reads input from the terminal, applies it to the game in
/// the order it arrives, and advances the game whenever a tick is due.
///
/// Everything happens on one thread, so input is never applied in the middle
/// of a tick.
#[derive(Clone, Debug)]
pub(crate) struct App<R = rand::rngs::ThreadRng> {
    game: Game<R>,
    paused: bool,
    quitting: bool,
    next_tick: Option<Instant>,
}

impl<R: Rng> App<R> {
    pub(crate) fn new(game: Game<R>) -> App<R> {
        App {
            game,
            paused: false,
            quitting: false,
            next_tick: None,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        while !self.quitting {
            terminal.draw(|frame| self.draw(frame))?;
            self.process_input()?;
        }
        Ok(())
    }

    /// Wait for either an input event or for the next tick to come due,
    /// whichever happens first, and handle it.  The time until the next tick
    /// is taken from the game's current interval as of the end of the
    /// previous tick.
    fn process_input(&mut self) -> io::Result<()> {
        if self.ticking() {
            let now = Instant::now();
            let wait = self.deadline(now).saturating_duration_since(now);
            if wait.is_zero() || !poll(wait)? {
                self.tick();
            } else {
                self.handle_event(read()?);
            }
        } else {
            self.handle_event(read()?);
        }
        Ok(())
    }

    /// Return when the next tick is due.  If no tick is pending yet, one is
    /// scheduled for the game's current interval after `now`.
    fn deadline(&mut self, now: Instant) -> Instant {
        *self
            .next_tick
            .get_or_insert_with(|| now + self.game.interval())
    }

    fn tick(&mut self) {
        let outcome = self.game.advance();
        tracing::trace!(?outcome, "Tick");
        self.next_tick = None;
    }

    fn handle_event(&mut self, event: Event) {
        if event == Event::FocusLost {
            self.pause(true);
        } else if let Some(cmd) = event
            .as_key_press_event()
            .and_then(Command::from_key_event)
        {
            self.handle_command(cmd);
        }
    }

    fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::Quit => self.quitting = true,
            Command::Pause => self.pause(!self.paused),
            Command::Up => self.turn(Direction::North),
            Command::Down => self.turn(Direction::South),
            Command::Left => self.turn(Direction::West),
            Command::Right => self.turn(Direction::East),
            Command::Restart => {
                if self.game.apply(Input::Restart) {
                    self.paused = false;
                    self.next_tick = None;
                }
            }
        }
    }

    fn turn(&mut self, direction: Direction) {
        if self.game.terminated() {
            return;
        }
        self.pause(false);
        let _ = self.game.apply(Input::Turn(direction));
    }
}

impl<R> App<R> {
    fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(
            GameView {
                snapshot: self.game.snapshot(),
                paused: self.paused,
            },
            frame.area(),
        );
    }

    fn ticking(&self) -> bool {
        !self.paused && !self.game.terminated()
    }

    /// Pause or unpause the game.  A finished game can't be paused.
    fn pause(&mut self, paused: bool) {
        if self.game.terminated() || paused == self.paused {
            return;
        }
        self.paused = paused;
        self.next_tick = None;
    }
}
