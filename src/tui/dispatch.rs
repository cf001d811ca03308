//! # Dispatch Loop
//!
//! Owns every piece of UI state: the [`Screen`], the [`FocusRing`] and the
//! current write target. Only this task mutates them, so none of it is
//! locked.
//!
//! Each cycle renders once, then waits for the next thing to happen. A
//! token's handling (an Enter fetch included) is itself raced against the
//! shutdown and fatal channels, so Ctrl+C is honoured mid-fetch:
//!
//! ```text
//!   render ──▶ select! ┬─ shutdown (relay saw Ctrl+C) ──▶ Ok(())
//!     ▲                ├─ fatal error ──────────────────▶ Err(e)
//!     │                └─ token ──▶ handle_token ─┐
//!     └───────────────────────────────────────────┘
//! ```
//!
//! Token routing, first match wins:
//!
//! | Token           | Effect                                             |
//! |-----------------|----------------------------------------------------|
//! | Quit            | stop                                               |
//! | Tab             | focus next component                               |
//! | Enter           | fetch records into output, or dump the UI log      |
//! | FlushLog        | clear the UI log                                   |
//! | ToggleLogView   | switch what Enter shows                            |
//! | anything else   | deliver to the focused component                   |

use std::sync::Arc;
use std::time::Duration;

use log::{debug, info, warn};
use ratatui::Frame;
use ratatui::Terminal;
use ratatui::backend::Backend;
use tokio::sync::{mpsc, watch};

use crate::core::config::Theme;
use crate::core::{DashError, UiLog};
use crate::store::{RecordStore, StoreError, record_label};
use crate::tui::component::{Component, ComponentId};
use crate::tui::components::{Label, RowList, TextField};
use crate::tui::focus::FocusRing;
use crate::tui::layout::DashboardLayout;
use crate::tui::screen::Screen;
use crate::tui::token::Token;

/// Upper bound on one Enter fetch.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

const HELP: &str = "<Ctrl + c> to quit | <Tab> next box | <Enter> fetch | <Ctrl + l> toggle log view | <Ctrl + f> flush log";

const LOG_VIEW_HINT: &str = " | Enter shows log";

/// What the loop should do after a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Ids of the dashboard's components in the screen arena.
#[derive(Debug, Clone, Copy)]
pub struct Panels {
    pub header: ComponentId,
    pub search: ComponentId,
    pub company: ComponentId,
    pub table_filter: ComponentId,
    pub records: ComponentId,
    pub output: ComponentId,
}

pub struct Dashboard {
    screen: Screen,
    focus: FocusRing,
    target: Option<ComponentId>,
    panels: Panels,
    store: Arc<dyn RecordStore>,
    log: UiLog,
    theme: Theme,
    /// Enter dumps the UI log instead of fetching.
    pub show_log: bool,
    /// Record every received token in the UI log.
    pub debug_log: bool,
    pub fetch_timeout: Duration,
}

impl Dashboard {
    /// Build all components, register them in paint order and focus the
    /// first entry of the Tab order.
    pub fn new(layout: DashboardLayout, store: Arc<dyn RecordStore>, log: UiLog, theme: Theme) -> Self {
        let mut screen = Screen::new();

        let header = screen.register(Component::label(layout.header, Label::new(HELP)));
        let search = screen.register(Component::text_field(
            layout.search,
            TextField::new("Search Integrations", ":type to search"),
        ));
        let company = screen.register(Component::text_field(
            layout.company,
            TextField::new("Filter Company", ":type company ID to filter results"),
        ));
        let table_filter = screen.register(Component::text_field(
            layout.table_filter,
            TextField::new("Filter Table", ":type partial table name to filter"),
        ));
        let records = screen.register(Component::row_list(layout.records, RowList::new("Select Table")));
        let mut output_field = TextField::new("", "try searching...");
        output_field.hide_unselected_placeholder = false;
        let output = screen.register(Component::text_field(layout.output, output_field));

        let panels = Panels {
            header,
            search,
            company,
            table_filter,
            records,
            output,
        };

        let mut focus = FocusRing::new([search, company, table_filter, records, output], log.clone());
        let target = focus.next(&mut screen);

        Self {
            screen,
            focus,
            target,
            panels,
            store,
            log,
            theme,
            show_log: false,
            debug_log: true,
            fetch_timeout: FETCH_TIMEOUT,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn panels(&self) -> Panels {
        self.panels
    }

    /// The component that receives forwarded tokens.
    pub fn target(&self) -> Option<ComponentId> {
        self.target
    }

    pub fn text_field(&self, id: ComponentId) -> Option<&TextField> {
        self.screen.get(id).and_then(Component::as_text_field)
    }

    pub fn output(&self) -> &str {
        self.text_field(self.panels.output)
            .map(TextField::text)
            .unwrap_or_default()
    }

    pub fn records(&self) -> Option<&RowList> {
        self.screen.get(self.panels.records).and_then(Component::as_row_list)
    }

    pub fn render(&self, frame: &mut Frame) {
        self.screen.render(frame, &self.theme);
    }

    /// Route one token. Never fails: action errors land in the output field.
    pub async fn handle_token(&mut self, token: Token) -> Flow {
        if self.debug_log {
            self.log.write("tui", format!("received input: {token}"));
        }

        match token {
            Token::Quit => return Flow::Quit,
            Token::Tab => {
                self.target = self.focus.next(&mut self.screen);
            }
            Token::Enter => self.enter().await,
            Token::FlushLog => {
                self.log.flush();
            }
            Token::ToggleLogView => {
                self.show_log = !self.show_log;
                self.refresh_header();
            }
            other => {
                if let Some(component) = self.target.and_then(|id| self.screen.get_mut(id)) {
                    component.input(other);
                }
            }
        }
        Flow::Continue
    }

    async fn enter(&mut self) {
        if self.show_log {
            let dump = self.log.dump();
            self.overwrite_output(dump);
            return;
        }

        match self.fetch().await {
            Ok(text) => self.overwrite_output(text),
            Err(e) => {
                warn!("Fetch from {} failed: {}", self.store.name(), e);
                self.log.write("tui", format!("fetch failed: {e}"));
                self.overwrite_output(e.to_string());
            }
        }
    }

    /// Load every record, list them and return the first one pretty-printed.
    async fn fetch(&mut self) -> Result<String, StoreError> {
        let store = Arc::clone(&self.store);
        let records = match tokio::time::timeout(self.fetch_timeout, store.all_records()).await {
            Ok(result) => result?,
            Err(_) => {
                warn!("Fetch from {} timed out after {:?}", store.name(), self.fetch_timeout);
                return Err(StoreError::Network(format!(
                    "timed out after {:?}",
                    self.fetch_timeout
                )));
            }
        };
        info!("Fetched {} records from {}", records.len(), store.name());

        if let Some(list) = self
            .screen
            .get_mut(self.panels.records)
            .and_then(Component::as_row_list_mut)
        {
            list.flush();
            for (i, record) in records.iter().enumerate() {
                list.add_row(record_label(record, i));
            }
        }

        let first = records
            .first()
            .ok_or_else(|| StoreError::Empty(store.name().to_string()))?;
        Ok(serde_json::to_string_pretty(first)?)
    }

    fn overwrite_output(&mut self, text: String) {
        if let Some(field) = self
            .screen
            .get_mut(self.panels.output)
            .and_then(Component::as_text_field_mut)
        {
            field.overwrite(text);
        }
    }

    fn refresh_header(&mut self) {
        let show_log = self.show_log;
        if let Some(label) = self
            .screen
            .get_mut(self.panels.header)
            .and_then(Component::as_label_mut)
        {
            label.overwrite(HELP);
            if show_log {
                label.push_str(LOG_VIEW_HINT);
            }
        }
    }

    /// Run until quit or a fatal error. One render per consumed token.
    pub async fn run<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        mut tokens: mpsc::Receiver<Token>,
        mut fatal: mpsc::Receiver<DashError>,
        mut shutdown: watch::Receiver<bool>,
    ) -> Result<(), DashError> {
        info!("Dispatch loop started");
        loop {
            terminal
                .draw(|frame| self.render(frame))
                .map_err(|e| DashError::Render(e.to_string()))?;

            tokio::select! {
                biased;
                Ok(()) = shutdown.changed() => {
                    info!("Quit requested by input relay");
                    return Ok(());
                }
                Some(err) = fatal.recv() => {
                    warn!("Fatal error from input relay: {}", err);
                    return Err(err);
                }
                token = tokens.recv() => match token {
                    Some(token) => {
                        debug!("Dispatching {}", token);
                        let flow = tokio::select! {
                            biased;
                            Ok(()) = shutdown.changed() => {
                                info!("Quit requested while handling {}", token);
                                return Ok(());
                            }
                            Some(err) = fatal.recv() => {
                                warn!("Fatal error while handling {}: {}", token, err);
                                return Err(err);
                            }
                            flow = self.handle_token(token) => flow,
                        };
                        if flow == Flow::Quit {
                            info!("Quit token received");
                            return Ok(());
                        }
                    }
                    None => return Err(DashError::RelayClosed),
                },
            }
        }
    }
}
