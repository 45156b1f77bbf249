use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;
use tracing::debug;

use wiki_api::{WikiError, WikiResult};

use crate::client::WikiClient;
use crate::screen::{Screen, SearchTicket, ViewState};
use crate::search::{search, Found};
use crate::ui;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Action {
    Quit,
    Search(SearchTicket),
    Redraw,
    Hint(&'static str),
    Nothing,
}

/// Map one input line to a screen transition.
///
/// `:quit` exits from anywhere. In the picker a number chooses a candidate
/// and `:cancel` leaves; in the article view `:back` leaves; in the search
/// view any other text is a query.
fn handle_line(screen: &mut Screen, line: &str) -> Action {
    let input = line.trim();
    if matches!(input, ":quit" | ":q") {
        return Action::Quit;
    }
    match screen.state() {
        ViewState::Searching { .. } => match screen.submit(line) {
            Some(ticket) => Action::Search(ticket),
            None => Action::Nothing,
        },
        ViewState::AwaitingSelection { .. } => {
            if matches!(input, ":cancel" | ":c") {
                screen.cancel();
                return Action::Redraw;
            }
            let picked = input
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| screen.select(i));
            match picked {
                Some(ticket) => Action::Search(ticket),
                None => Action::Hint("enter a number from the list or :cancel"),
            }
        }
        ViewState::Reading { .. } => {
            if matches!(input, ":back" | ":b") {
                screen.back();
                Action::Redraw
            } else {
                Action::Hint("enter :back to search again")
            }
        }
    }
}

type SearchReport = (u64, WikiResult<Found>);

/// Sends the result of one search back to the session. Sent on drop, so a
/// search task that unwinds still reports (as a failure) and the session
/// never waits on it forever.
struct Report {
    seq: u64,
    tx: mpsc::UnboundedSender<SearchReport>,
    result: Option<WikiResult<Found>>,
}

impl Drop for Report {
    fn drop(&mut self) {
        let result = self
            .result
            .take()
            .unwrap_or_else(|| Err(WikiError::Network("search task aborted".into())));
        let _ = self.tx.send((self.seq, result));
    }
}

async fn redraw<W: AsyncWrite + Unpin>(out: &mut W, screen: &Screen, colors: bool) -> Result<()> {
    let view = ui::render(screen.state());
    out.write_all(b"\n").await?;
    out.write_all(ui::draw(&view, colors).as_bytes()).await?;
    out.flush().await?;
    Ok(())
}

/// Drive the search screen from line input until `:quit` or end of input.
///
/// Searches run as spawned tasks and report `(seq, result)` back; the screen
/// drops results for anything but the latest search. At end of input the
/// session waits for outstanding searches before returning.
pub async fn run_session<R, W>(
    input: R,
    mut out: W,
    client: WikiClient,
    accent: String,
    colors: bool,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let (tx, mut rx) = mpsc::unbounded_channel::<SearchReport>();
    let mut lines = input.lines();
    let mut screen = Screen::new();
    let mut input_open = true;
    let mut pending = 0usize;

    redraw(&mut out, &screen, colors).await?;

    while input_open || pending > 0 {
        tokio::select! {
            line = lines.next_line(), if input_open => {
                let Some(line) = line.context("reading input")? else {
                    debug!(target: "wikid::session", pending, "input closed");
                    input_open = false;
                    continue;
                };
                match handle_line(&mut screen, &line) {
                    Action::Quit => break,
                    Action::Search(ticket) => {
                        pending += 1;
                        let client = client.clone();
                        let accent = accent.clone();
                        let mut report = Report { seq: ticket.seq, tx: tx.clone(), result: None };
                        tokio::spawn(async move {
                            report.result = Some(search(&client, &ticket.query, &accent).await);
                        });
                        redraw(&mut out, &screen, colors).await?;
                    }
                    Action::Redraw => redraw(&mut out, &screen, colors).await?,
                    Action::Hint(hint) => {
                        out.write_all(format!("{hint}\n").as_bytes()).await?;
                        redraw(&mut out, &screen, colors).await?;
                    }
                    Action::Nothing => {}
                }
            }
            Some((seq, result)) = rx.recv(), if pending > 0 => {
                pending -= 1;
                if screen.complete(seq, result) {
                    redraw(&mut out, &screen, colors).await?;
                }
            }
        }
    }
    Ok(())
}
