use std::io::{stdout, Stdout, Write};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    cursor::{Hide, Show},
    event::{self, Event, KeyEvent},
    execute, terminal,
};
use log::info;
use rand::rngs::ThreadRng;

use crate::board::Board;
use crate::config::Difficulty;
use crate::input::{self, Command, NameEdit};
use crate::render;
use crate::scores::ScoreBook;
use crate::session::GameSession;
use crate::storage::KeyValueStore;

const NAME_MAX: usize = 24;

/// Whether the tick timer is firing. Game over stops it; restart
/// starts a fresh session and a fresh timer.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum LoopState {
    Running,
    Stopped,
}

struct App {
    session: GameSession,
    scores: ScoreBook,
    store: Box<dyn KeyValueStore>,
    difficulty: Difficulty,
    state: LoopState,
    // Some while the new-best name entry line owns the keyboard
    name_entry: Option<String>,
    rng: ThreadRng,
    out: Stdout,
    last_tick: Instant,
    should_quit: bool,
}

pub fn run(store: Box<dyn KeyValueStore>) -> Result<()> {
    let mut rng = rand::thread_rng();
    let scores = ScoreBook::load(store.as_ref());
    let session = GameSession::new(Board::default(), &mut rng);

    let mut app = App {
        session,
        scores,
        store,
        difficulty: Difficulty::default(),
        state: LoopState::Running,
        name_entry: None,
        rng,
        out: stdout(),
        last_tick: Instant::now(),
        should_quit: false,
    };

    terminal::enable_raw_mode()?;
    execute!(stdout(), Hide)?;

    let result = app.main_loop();

    terminal::disable_raw_mode()?;
    execute!(stdout(), Show)?;
    result?;

    println!(
        "\nThanks for playing! Final score: {}, best: {}",
        app.session.score, app.scores.best
    );
    Ok(())
}

impl App {
    fn main_loop(&mut self) -> Result<()> {
        info!("game started at {} speed", self.difficulty.label());
        render::draw_frame(&mut self.out, &self.session, &self.scores, self.difficulty)?;

        while !self.should_quit {
            // Input between ticks only ever touches the pending
            // direction; the tick below runs to completion unpreempted.
            if event::poll(Duration::from_millis(10))? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key(key)?;
                }
            }

            if self.state == LoopState::Running
                && self.last_tick.elapsed() >= self.difficulty.tick_period()
            {
                self.tick()?;
                self.last_tick = Instant::now();
            }
        }
        Ok(())
    }

    fn tick(&mut self) -> Result<()> {
        let outcome = self.session.tick(&mut self.rng);
        render::draw_frame(&mut self.out, &self.session, &self.scores, self.difficulty)?;
        if outcome.game_over {
            self.on_game_over()?;
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // the name entry line owns the keyboard until closed
        if self.name_entry.is_some() {
            if let Some(edit) = input::map_name_key(key) {
                self.apply_name_edit(edit)?;
            }
            return Ok(());
        }

        let cmd = match input::map_key(key) {
            Some(cmd) => cmd,
            None => return Ok(()),
        };

        match cmd {
            Command::Quit => self.should_quit = true,
            Command::Turn(direction) => {
                if self.state == LoopState::Running {
                    self.session.request_turn(direction);
                }
            }
            Command::SetDifficulty(difficulty) => {
                // swap the timer period in place, game state untouched
                if difficulty != self.difficulty {
                    info!("speed changed to {}", difficulty.label());
                    self.difficulty = difficulty;
                    self.last_tick = Instant::now();
                }
            }
            Command::Restart => {
                if self.state == LoopState::Stopped {
                    self.restart()?;
                }
            }
        }
        Ok(())
    }

    fn on_game_over(&mut self) -> Result<()> {
        self.state = LoopState::Stopped;
        info!("game over at score {}", self.session.score);

        if self.scores.is_new_best(self.session.score) {
            let score = self.session.score;
            self.scores.record_best(score, self.store.as_mut());
            self.name_entry = Some(String::new());
            render::draw_name_prompt(&mut self.out, &self.session, "")?;
        } else {
            render::draw_game_over(&mut self.out, &self.session)?;
        }
        Ok(())
    }

    fn apply_name_edit(&mut self, edit: NameEdit) -> Result<()> {
        match edit {
            NameEdit::Char(ch) => {
                if let Some(name) = self.name_entry.as_mut() {
                    if name.len() < NAME_MAX {
                        name.push(ch);
                    }
                }
            }
            NameEdit::Backspace => {
                if let Some(name) = self.name_entry.as_mut() {
                    name.pop();
                }
            }
            NameEdit::Commit => {
                if let Some(name) = self.name_entry.take() {
                    let name = name.trim();
                    if !name.is_empty() {
                        let score = self.session.score;
                        self.scores.record_entry(name, score, self.store.as_mut());
                        info!("leaderboard entry recorded for {}", name);
                    }
                }
                // redraw so the sidebar picks up the new entry
                render::draw_frame(&mut self.out, &self.session, &self.scores, self.difficulty)?;
                render::draw_game_over(&mut self.out, &self.session)?;
                return Ok(());
            }
            NameEdit::Cancel => {
                self.name_entry = None;
                render::draw_frame(&mut self.out, &self.session, &self.scores, self.difficulty)?;
                render::draw_game_over(&mut self.out, &self.session)?;
                return Ok(());
            }
        }

        if let Some(name) = self.name_entry.as_ref() {
            let name = name.clone();
            render::draw_name_prompt(&mut self.out, &self.session, &name)?;
        }
        Ok(())
    }

    fn restart(&mut self) -> Result<()> {
        self.session = GameSession::new(self.session.board, &mut self.rng);
        self.name_entry = None;
        self.state = LoopState::Running;
        self.last_tick = Instant::now();
        info!("new game at {} speed", self.difficulty.label());
        render::draw_frame(&mut self.out, &self.session, &self.scores, self.difficulty)?;
        Ok(())
    }
}
