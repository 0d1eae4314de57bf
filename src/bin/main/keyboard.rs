use core::convert::Infallible;
use std::io::{self, BufRead};

use embassy_sync::{blocking_mutex::raw::CriticalSectionRawMutex, channel::Channel, signal::Signal};
use log::{debug, info, warn};
use quartz_core::input::{Button, InputProvider};

const KEY_QUEUE_LEN: usize = 16;

static KEYS: Channel<CriticalSectionRawMutex, Button, KEY_QUEUE_LEN> = Channel::new();
static QUIT: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// `1`-`4` or `a`/`s`/`d`/`f` press buttons 0-3.
pub fn button_for_key(key: char) -> Option<Button> {
    match key.to_ascii_lowercase() {
        '1' | 'a' => Some(Button::B0),
        '2' | 's' => Some(Button::B1),
        '3' | 'd' => Some(Button::B2),
        '4' | 'f' => Some(Button::B3),
        _ => None,
    }
}

/// Reads stdin lines on a plain thread and forwards keys to the executor.
pub fn spawn_reader() -> io::Result<()> {
    std::thread::Builder::new()
        .name("keyboard".into())
        .spawn(read_stdin)
        .map(|_| ())
}

fn read_stdin() {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                warn!("keyboard: stdin read failed: {:?}", err);
                break;
            }
        };

        for key in line.chars().filter(|key| !key.is_whitespace()) {
            if key.eq_ignore_ascii_case(&'q') {
                info!("keyboard: quit requested");
                QUIT.signal(());
                return;
            }
            match button_for_key(key) {
                Some(button) => {
                    if KEYS.try_send(button).is_err() {
                        warn!("keyboard: queue full; dropped {:?}", button);
                    }
                }
                None => debug!("keyboard: ignoring key {:?}", key),
            }
        }
    }

    info!("keyboard: stdin closed");
    QUIT.signal(());
}

pub async fn quit_requested() {
    QUIT.wait().await;
}

/// Resolves once a key is queued, without taking it.
pub async fn key_ready() {
    KEYS.ready_to_receive().await;
}

/// Drains keys queued by the reader thread.
pub struct KeyboardInput;

impl InputProvider for KeyboardInput {
    type Error = Infallible;

    fn poll_event(&mut self) -> Result<Option<Button>, Self::Error> {
        Ok(KEYS.try_receive().ok())
    }
}
