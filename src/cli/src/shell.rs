//! Terminal shell driving the Crux Core
//!
//! One task owns the core and applies every event and effect output in the
//! order it arrives. HTTP requests and timers run as separate tasks and
//! report back over a channel, so a slow device never blocks input.

use anyhow::{anyhow, Context, Result};
use crux_core::{Core, Request};
use crux_http::protocol::{HttpRequest, HttpResult};
use esp_led_remote_core::{
    App, Effect, Event, Model, StorageOperation, StorageOutput, TimerOperation, TimerOutput,
};
use log::{debug, warn};
use std::{collections::HashMap, io::Write, sync::Arc, time::Duration};
use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt},
    sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender},
    task::JoinHandle,
};

use crate::{
    command::UserCommand, http_client::HttpExecutor, storage::KeyValueStore, view::render_view,
};

/// Effect output produced off the core task
pub enum ShellMessage {
    Http(Request<HttpRequest>, HttpResult),
    TimerElapsed(u32),
}

struct PendingTimer {
    request: Request<TimerOperation>,
    task: JoinHandle<()>,
}

pub struct Shell<H, S, W> {
    core: Core<App>,
    http: Arc<H>,
    store: S,
    output: W,
    http_in_flight: usize,
    timers: HashMap<u32, PendingTimer>,
    tx: UnboundedSender<ShellMessage>,
    rx: UnboundedReceiver<ShellMessage>,
}

impl<H, S, W> Shell<H, S, W>
where
    H: HttpExecutor + Send + Sync + 'static,
    S: KeyValueStore,
    W: Write,
{
    pub fn new(http: H, store: S, output: W) -> Self {
        let (tx, rx) = unbounded_channel();

        Self {
            core: Core::new(),
            http: Arc::new(http),
            store,
            output,
            http_in_flight: 0,
            timers: HashMap::new(),
            tx,
            rx,
        }
    }

    /// Current view model
    pub fn view(&self) -> Model {
        self.core.view()
    }

    /// No request or timer is pending
    pub fn is_idle(&self) -> bool {
        self.http_in_flight == 0 && self.timers.is_empty()
    }

    /// Read commands from `input` until `quit` or end of input.
    ///
    /// At end of input the shell keeps running until pending requests and
    /// timers have finished, so piped command lists see their results.
    pub async fn run<R>(&mut self, input: R) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        self.dispatch(Event::Initialize)?;

        let mut lines = input.lines();
        let mut input_open = true;

        loop {
            if !input_open && self.is_idle() {
                break;
            }

            tokio::select! {
                line = lines.next_line(), if input_open => {
                    match line.context("failed to read command")? {
                        Some(line) => {
                            if !self.handle_line(&line)? {
                                break;
                            }
                        }
                        None => input_open = false,
                    }
                }
                Some(message) = self.rx.recv() => self.handle_message(message)?,
            }
        }

        Ok(())
    }

    /// Handle one input line, returns `false` on quit
    pub fn handle_line(&mut self, line: &str) -> Result<bool> {
        let command = match line.parse::<UserCommand>() {
            Ok(command) => command,
            Err(e) => {
                writeln!(self.output, "{e}").context("failed to write output")?;
                return Ok(true);
            }
        };

        match command {
            UserCommand::Connect(address) => {
                let address = address.unwrap_or_else(|| self.view().address_input);
                self.dispatch(Event::Connect { address })?;
            }
            UserCommand::Address(address) => self.dispatch(Event::AddressChanged { address })?,
            UserCommand::Toggle => self.dispatch(Event::ToggleLed)?,
            UserCommand::Status => self.dispatch(Event::FetchLedStatus)?,
            UserCommand::Show => self.render()?,
            UserCommand::Help => {
                writeln!(self.output, "{}", UserCommand::HELP).context("failed to write output")?
            }
            UserCommand::Quit => return Ok(false),
        }

        Ok(true)
    }

    /// Send an event to the core and process the resulting effects
    pub fn dispatch(&mut self, event: Event) -> Result<()> {
        debug!("event: {event:?}");
        let effects = self.core.process_event(event);
        self.process_effects(effects)
    }

    /// Wait for all pending requests and timers and apply their outputs
    pub async fn settle(&mut self) -> Result<()> {
        while !self.is_idle() {
            let message = self
                .rx
                .recv()
                .await
                .context("failed to receive effect output")?;
            self.handle_message(message)?;
        }
        Ok(())
    }

    fn handle_message(&mut self, message: ShellMessage) -> Result<()> {
        let effects = match message {
            ShellMessage::Http(mut request, result) => {
                self.http_in_flight = self.http_in_flight.saturating_sub(1);
                self.core
                    .resolve(&mut request, result)
                    .map_err(|e| anyhow!("failed to resolve HTTP request: {e:?}"))?
            }
            ShellMessage::TimerElapsed(id) => {
                let Some(mut timer) = self.timers.remove(&id) else {
                    debug!("timer {id} elapsed after cancel");
                    return Ok(());
                };
                self.core
                    .resolve(&mut timer.request, TimerOutput::Elapsed { id })
                    .map_err(|e| anyhow!("failed to resolve timer request: {e:?}"))?
            }
        };

        self.process_effects(effects)
    }

    fn process_effects(&mut self, effects: Vec<Effect>) -> Result<()> {
        let mut queue = std::collections::VecDeque::from(effects);

        while let Some(effect) = queue.pop_front() {
            match effect {
                Effect::Render(_) => self.render()?,
                Effect::Http(request) => self.spawn_http(request),
                Effect::Storage(mut request) => {
                    let output = self.storage(&request.operation);
                    let effects = self
                        .core
                        .resolve(&mut request, output)
                        .map_err(|e| anyhow!("failed to resolve storage request: {e:?}"))?;
                    queue.extend(effects);
                }
                Effect::Timer(mut request) => match request.operation.clone() {
                    TimerOperation::Start { id, millis } => self.spawn_timer(request, id, millis),
                    TimerOperation::Cancel { id } => {
                        // both the pending start and the cancel itself answer Cancelled
                        if let Some(mut timer) = self.timers.remove(&id) {
                            timer.task.abort();
                            let effects = self
                                .core
                                .resolve(&mut timer.request, TimerOutput::Cancelled { id })
                                .map_err(|e| anyhow!("failed to resolve timer request: {e:?}"))?;
                            queue.extend(effects);
                        }
                        let effects = self
                            .core
                            .resolve(&mut request, TimerOutput::Cancelled { id })
                            .map_err(|e| anyhow!("failed to resolve timer request: {e:?}"))?;
                        queue.extend(effects);
                    }
                },
            }
        }

        Ok(())
    }

    fn spawn_http(&mut self, request: Request<HttpRequest>) {
        let http = Arc::clone(&self.http);
        let tx = self.tx.clone();
        self.http_in_flight += 1;

        tokio::spawn(async move {
            let result = http.execute(request.operation.clone()).await;
            if tx.send(ShellMessage::Http(request, result)).is_err() {
                warn!("shell stopped before HTTP response arrived");
            }
        });
    }

    fn spawn_timer(&mut self, request: Request<TimerOperation>, id: u32, millis: u64) {
        let tx = self.tx.clone();

        let task = tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(millis)).await;
            if tx.send(ShellMessage::TimerElapsed(id)).is_err() {
                warn!("shell stopped before timer {id} elapsed");
            }
        });

        if let Some(previous) = self.timers.insert(id, PendingTimer { request, task }) {
            previous.task.abort();
        }
    }

    fn storage(&self, operation: &StorageOperation) -> StorageOutput {
        let result = match operation {
            StorageOperation::Read { key } => self.store.read(key).map(StorageOutput::Value),
            StorageOperation::Write { key, value } => {
                self.store.write(key, value).map(|()| StorageOutput::Written)
            }
        };

        result.unwrap_or_else(|e| StorageOutput::Error {
            message: format!("{e:#}"),
        })
    }

    fn render(&mut self) -> Result<()> {
        let view = render_view(&self.core.view());
        writeln!(self.output, "{view}\n").context("failed to write output")?;
        self.output.flush().context("failed to flush output")
    }
}
