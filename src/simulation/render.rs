//! Plain-text transcript of rounds.
//!
//! Each comparison becomes one line of tab-separated values (0 for seats
//! that had nothing to show), followed by `WAR` / `BAD GAME` marker lines.

use log::info;

use crate::cards::Card;
use crate::games::war::{RoundMarker, RoundObserver};

/// Buffers round output, one game at a time.
#[derive(Clone, Debug, Default)]
pub struct RoundLog {
    buffer: String,
    echo: bool,
}

impl RoundLog {
    /// A log that keeps everything until [`take`](Self::take) is called.
    pub fn new() -> Self {
        Self::default()
    }

    /// A log that writes each finished game's transcript at `info` level.
    pub fn echoing() -> Self {
        Self {
            buffer: String::new(),
            echo: true,
        }
    }

    /// Return the buffered text and clear the buffer.
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.buffer)
    }

    fn line(&mut self, text: &str) {
        self.buffer.push_str(text);
        self.buffer.push('\n');
    }
}

impl RoundObserver for RoundLog {
    fn on_cards_played(&mut self, cards: &[Card]) {
        let values: Vec<String> = cards.iter().map(|c| c.value().to_string()).collect();
        self.line(&values.join("\t"));
    }

    fn on_marker(&mut self, marker: RoundMarker) {
        self.line(&marker.to_string());
    }

    fn on_game_over(&mut self) {
        if self.echo {
            let transcript = self.take();
            info!("{}", transcript.trim_end());
        }
    }
}
