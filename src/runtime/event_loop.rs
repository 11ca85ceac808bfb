use std::sync::mpsc;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::audio::AudioEngine;
use crate::config;
use crate::error::Result;
use crate::mpris::ControlCmd;
use crate::player::{Controller, Notice, PlaybackPrimitive, PlayerEvent, PlayerView};
use crate::playlist::Direction;
use crate::ui;

/// Whether the loop keeps going after handling an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// State tracked by the runtime event loop across iterations.
#[derive(Debug, Default)]
pub struct EventLoopState {
    /// Notice currently on screen, as last seen by the loop.
    shown_notice: Option<Notice>,
    /// When the shown notice should be dismissed.
    notice_deadline: Option<Instant>,
}

impl EventLoopState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start or stop the dismissal timer when the notice changes, and dismiss
    /// it once the timer runs out.
    pub fn expire_notice<P: PlaybackPrimitive>(
        &mut self,
        controller: &mut Controller<P>,
        timeout: Duration,
        now: Instant,
    ) {
        if controller.state().notice != self.shown_notice {
            self.shown_notice = controller.state().notice.clone();
            // A deadline past the end of `Instant` never fires.
            self.notice_deadline = self
                .shown_notice
                .as_ref()
                .and_then(|_| now.checked_add(timeout));
        }

        if self.notice_deadline.is_some_and(|deadline| now >= deadline) {
            self.notice_deadline = None;
            controller.dispatch(PlayerEvent::DismissNotice);
            self.shown_notice = controller.state().notice.clone();
        }
    }
}

/// Main terminal event loop: drains audio events, draws, then handles MPRIS
/// commands and keys. Returns `Ok(())` when shutdown is requested.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    controller: &mut Controller<AudioEngine>,
    control_rx: &mpsc::Receiver<ControlCmd>,
    state: &mut EventLoopState,
) -> Result<()> {
    let notice_timeout = Duration::from_millis(settings.ui.notice_timeout_ms);
    let fade_out = Duration::from_millis(settings.audio.quit_fade_out_ms);

    loop {
        let events = controller.primitive().poll_events();
        for event in events {
            controller.dispatch(event);
        }

        state.expire_notice(controller, notice_timeout, Instant::now());

        let view = PlayerView::project(controller.state(), controller.playlist());
        terminal.draw(|f| ui::draw(f, &view, controller.playlist(), &settings.ui))?;

        while let Ok(cmd) = control_rx.try_recv() {
            if handle_control_cmd(cmd, controller) == Flow::Quit {
                controller.primitive().quit_softly(fade_out);
                return Ok(());
            }
        }

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key_event(key, controller) == Flow::Quit {
                    controller.primitive().quit_softly(fade_out);
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Map an MPRIS request onto controller events.
pub fn handle_control_cmd<P: PlaybackPrimitive>(
    cmd: ControlCmd,
    controller: &mut Controller<P>,
) -> Flow {
    match cmd {
        ControlCmd::Quit => return Flow::Quit,
        ControlCmd::Play => controller.show_and_play(),
        ControlCmd::Pause => {
            if controller.state().playing {
                controller.toggle_playback();
            }
        }
        ControlCmd::PlayPause => {
            if controller.state().is_visible() {
                controller.toggle_playback();
            } else {
                controller.show_and_play();
            }
        }
        ControlCmd::Stop => controller.hide(),
        ControlCmd::Next => controller.advance(Direction::Next),
        ControlCmd::Prev => controller.advance(Direction::Previous),
    }
    Flow::Continue
}

/// Map a key press onto controller events.
pub fn handle_key_event<P: PlaybackPrimitive>(
    key: KeyEvent,
    controller: &mut Controller<P>,
) -> Flow {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return Flow::Quit,
        KeyCode::Char('q') => return Flow::Quit,
        KeyCode::Enter | KeyCode::Char('o') => controller.show_and_play(),
        KeyCode::Char(' ') | KeyCode::Char('p') => controller.toggle_playback(),
        KeyCode::Char('l') | KeyCode::Right => controller.advance(Direction::Next),
        KeyCode::Char('h') | KeyCode::Left => controller.advance(Direction::Previous),
        KeyCode::Char('x') | KeyCode::Esc => controller.hide(),
        KeyCode::Char('v') => controller.show(),
        _ => {}
    }
    Flow::Continue
}
