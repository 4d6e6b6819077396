use async_trait::async_trait;
use std::io::{self, Write};
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::time::{Instant, interval_at, sleep};

/// Remaining seconds at which the console announces the countdown.
const COUNTDOWN_MARKS: [u64; 4] = [5, 3, 2, 1];
const TICK: Duration = Duration::from_secs(1);

/// Result of waiting for one word under a deadline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimedInput {
    /// Trimmed, lower-cased token.
    Word(String),
    Timeout,
    /// Input stream ended.
    Closed,
}

/// Everything the game needs from the terminal.
#[async_trait]
pub trait UserInterface: Send {
    /// Next line of input, or `None` once input is closed.
    async fn read_line(&mut self) -> io::Result<Option<String>>;

    /// Next word, unless `limit` elapses first. Anything typed after the
    /// deadline does not count for this turn.
    async fn read_word(&mut self, limit: Duration) -> io::Result<TimedInput>;

    fn write(&mut self, text: &str);

    fn write_line(&mut self, text: &str);

    fn clear(&mut self) {}
}

pub fn normalize_word(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Line-based terminal front end. Reads from stdin and writes to stdout
/// unless built over other streams with `with_io`.
pub struct ConsoleUi<R = BufReader<Stdin>, W = io::Stdout> {
    lines: Lines<R>,
    out: W,
}

impl ConsoleUi {
    pub fn new() -> Self {
        Self::with_io(BufReader::new(tokio::io::stdin()), io::stdout())
    }
}

impl Default for ConsoleUi {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: AsyncBufRead + Unpin, W: Write> ConsoleUi<R, W> {
    pub fn with_io(reader: R, out: W) -> Self {
        Self {
            lines: reader.lines(),
            out,
        }
    }
}

fn print(out: &mut impl Write, text: &str, newline: bool) {
    // Nothing sensible to do if the terminal is gone
    let _ = if newline {
        writeln!(out, "{}", text)
    } else {
        write!(out, "{}", text)
    };
    let _ = out.flush();
}

#[async_trait]
impl<R, W> UserInterface for ConsoleUi<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: Write + Send,
{
    async fn read_line(&mut self) -> io::Result<Option<String>> {
        self.lines.next_line().await
    }

    async fn read_word(&mut self, limit: Duration) -> io::Result<TimedInput> {
        let Self { lines, out } = self;
        print(out, "> ", false);

        let deadline = sleep(limit);
        tokio::pin!(deadline);
        let mut ticker = interval_at(Instant::now() + TICK, TICK);
        let mut seconds_left = limit.as_secs();

        loop {
            tokio::select! {
                line = lines.next_line() => {
                    return Ok(match line? {
                        Some(line) => TimedInput::Word(normalize_word(&line)),
                        None => TimedInput::Closed,
                    });
                }
                _ = &mut deadline => {
                    print(out, "", true);
                    return Ok(TimedInput::Timeout);
                }
                _ = ticker.tick() => {
                    seconds_left = seconds_left.saturating_sub(1);
                    if COUNTDOWN_MARKS.contains(&seconds_left) {
                        print(out, &format!("\n⏳ {}", seconds_left), false);
                        print(out, "\n> ", false);
                    }
                }
            }
        }
    }

    fn write(&mut self, text: &str) {
        print(&mut self.out, text, false);
    }

    fn write_line(&mut self, text: &str) {
        print(&mut self.out, text, true);
    }

    fn clear(&mut self) {
        print(&mut self.out, "\x1B[2J\x1B[1;1H", false);
    }
}
