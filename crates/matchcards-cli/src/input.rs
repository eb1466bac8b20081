use std::io::{self, BufRead};
use std::sync::mpsc::Sender;
use std::thread::{self, JoinHandle};

use tracing::debug;

/// Everything the play loop reacts to, delivered one at a time.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Zero-based card index.
    Select(usize),
    Tick,
    Quit,
    /// Unrecognised input, with a hint for the player.
    Invalid(String),
}

/// Translate one line typed by the player.
///
/// Cards are addressed by their 1-based number or as `row col`.
pub fn parse_command(line: &str, rows: usize, columns: usize) -> Event {
    let line = line.trim();
    if matches!(line.to_ascii_lowercase().as_str(), "q" | "quit" | "exit") {
        return Event::Quit;
    }

    let numbers: Result<Vec<usize>, _> = line.split_whitespace().map(str::parse).collect();
    match numbers.as_deref() {
        Ok([n]) if (1..=rows * columns).contains(n) => Event::Select(n - 1),
        Ok([row, col]) if (1..=rows).contains(row) && (1..=columns).contains(col) => {
            Event::Select((row - 1) * columns + (col - 1))
        }
        _ => Event::Invalid(format!(
            "Enter a card number 1-{}, a row and column, or q to quit",
            rows * columns
        )),
    }
}

/// Forward stdin lines as events until EOF or the receiver is gone.
///
/// EOF is treated as quitting.
pub fn spawn_line_reader(events: Sender<Event>, rows: usize, columns: usize) -> JoinHandle<()> {
    thread::spawn(move || {
        debug!("Input reader started");
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else {
                break;
            };
            if line.trim().is_empty() {
                continue;
            }
            if events.send(parse_command(&line, rows, columns)).is_err() {
                return;
            }
        }
        let _ = events.send(Event::Quit);
        debug!("Input reader stopped");
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quit() {
        assert_eq!(parse_command("q", 4, 4), Event::Quit);
        assert_eq!(parse_command(" QUIT ", 4, 4), Event::Quit);
        assert_eq!(parse_command("exit", 4, 4), Event::Quit);
    }

    #[test]
    fn test_parse_card_number() {
        assert_eq!(parse_command("1", 4, 4), Event::Select(0));
        assert_eq!(parse_command("16", 4, 4), Event::Select(15));
    }

    #[test]
    fn test_parse_row_column() {
        assert_eq!(parse_command("1 1", 3, 4), Event::Select(0));
        assert_eq!(parse_command("2 3", 3, 4), Event::Select(6));
        assert_eq!(parse_command("3 4", 3, 4), Event::Select(11));
    }

    #[test]
    fn test_parse_out_of_range() {
        assert!(matches!(parse_command("0", 4, 4), Event::Invalid(_)));
        assert!(matches!(parse_command("17", 4, 4), Event::Invalid(_)));
        assert!(matches!(parse_command("4 1", 3, 4), Event::Invalid(_)));
        assert!(matches!(parse_command("1 5", 3, 4), Event::Invalid(_)));
    }

    #[test]
    fn test_parse_garbage() {
        assert!(matches!(parse_command("fire", 4, 4), Event::Invalid(_)));
        assert!(matches!(parse_command("1 2 3", 4, 4), Event::Invalid(_)));
        assert!(matches!(parse_command("-1", 4, 4), Event::Invalid(_)));
    }
}
