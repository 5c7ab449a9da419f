//! Viewport demo: a bordered, wrapping, highlightable view of a text file.
//!
//! Run from this directory with `cargo run`. Set `RUST_LOG=debug` to have
//! layout decisions written to `viewport-demo.log`.
//!
//! Keys: `w` toggles wrapping, `s` toggles selection, `q`/`esc`/`ctrl+c`
//! quits. Everything else goes to the viewport.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bubbletea_rs::{quit, Cmd, KeyMsg, Model as BubbleTeaModel, Msg, Program, WindowSizeMsg};
use bubbletea_viewport::key::Binding;
use bubbletea_viewport::viewport::Model as Viewport;
use crossterm::event::{KeyCode, KeyModifiers};
use lipgloss_extras::prelude::*;
use tracing_appender::non_blocking::WorkerGuard;

const LOG_FILE: &str = "viewport-demo.log";
const HIGHLIGHT: &str = "surf";
// header lines plus the top and bottom border
const CHROME_ROWS: usize = 5 + 2;
const BORDER_COLS: usize = 2;

struct App {
    viewport: Viewport<String>,
    ready: bool,
}

impl App {
    fn header(&self) -> String {
        let title = Style::new()
            .bold(true)
            .render("A Supercharged Viewport");
        let keymap = &self.viewport.keymap;
        let bindings: [&Binding; 10] = [
            &keymap.page_down,
            &keymap.page_up,
            &keymap.half_page_up,
            &keymap.half_page_down,
            &keymap.up,
            &keymap.down,
            &keymap.left,
            &keymap.right,
            &keymap.top,
            &keymap.bottom,
        ];
        let help = bindings
            .iter()
            .map(|b| format!("{} {}", b.help().key, b.help().desc))
            .collect::<Vec<_>>()
            .join("  ");
        [
            title,
            format!(
                "- Wrapping enabled: {} (w to toggle)",
                self.viewport.wrap_text()
            ),
            format!(
                "- Selection enabled: {} (s to toggle)",
                self.viewport.selection_enabled()
            ),
            format!("- Text to highlight: '{HIGHLIGHT}'"),
            help,
        ]
        .join("\n")
    }

    fn resize(&mut self, width: usize, height: usize) {
        self.viewport.set_size(
            width.saturating_sub(BORDER_COLS),
            height.saturating_sub(CHROME_ROWS),
        );
        self.ready = true;
        tracing::debug!(width, height, "resized");
    }
}

impl BubbleTeaModel for App {
    fn init() -> (Self, Option<Cmd>) {
        let mut viewport = Viewport::new(0, 0);
        viewport.set_items(load_lines());
        viewport.set_highlight(HIGHLIGHT);
        viewport.set_wrap_text(true);
        (
            Self {
                viewport,
                ready: false,
            },
            None,
        )
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(size) = msg.downcast_ref::<WindowSizeMsg>() {
            self.resize(usize::from(size.width), usize::from(size.height));
            return None;
        }

        if let Some(key) = msg.downcast_ref::<KeyMsg>() {
            match (key.key, key.modifiers) {
                (KeyCode::Char('c'), KeyModifiers::CONTROL)
                | (KeyCode::Char('q'), _)
                | (KeyCode::Esc, _) => return Some(quit()),
                (KeyCode::Char('w'), KeyModifiers::NONE) => {
                    let wrap = !self.viewport.wrap_text();
                    self.viewport.set_wrap_text(wrap);
                    tracing::info!(wrap, "toggled wrapping");
                    return None;
                }
                (KeyCode::Char('s'), KeyModifiers::NONE) => {
                    let selection = !self.viewport.selection_enabled();
                    self.viewport.set_selection_enabled(selection);
                    tracing::info!(selection, "toggled selection");
                    return None;
                }
                _ => {}
            }
        }

        self.viewport.update(msg)
    }

    fn view(&self) -> String {
        if !self.ready {
            return "\n  Initializing...".to_string();
        }
        let body = Style::new()
            .border_style(lipgloss::normal_border())
            .render(&self.viewport.view());
        format!("{}\n{}", self.header(), body)
    }
}

fn example_path() -> PathBuf {
    std::env::var_os("VIEWPORT_DEMO_FILE")
        .map(PathBuf::from)
        .unwrap_or_else(|| Path::new(env!("CARGO_MANIFEST_DIR")).join("example.txt"))
}

fn load_lines() -> Vec<String> {
    let path = example_path();
    match std::fs::read_to_string(&path) {
        Ok(text) => {
            let lines: Vec<String> = text.lines().map(str::to_string).collect();
            tracing::debug!(file = %path.display(), lines = lines.len(), "loaded example text");
            lines
        }
        Err(err) => {
            tracing::warn!(file = %path.display(), %err, "could not load example text");
            vec![format!("could not load {}: {err}", path.display())]
        }
    }
}

fn init_logging() -> Result<WorkerGuard> {
    let log_dir = Path::new(".");
    let log_path = log_dir.join(LOG_FILE);
    if log_path.exists() {
        std::fs::remove_file(&log_path)
            .with_context(|| format!("removing stale {}", log_path.display()))?;
    }
    let appender = tracing_appender::rolling::never(log_dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|err| anyhow::anyhow!("installing subscriber: {err}"))?;
    Ok(guard)
}

#[tokio::main]
async fn main() -> Result<()> {
    let _guard = init_logging()?;
    tracing::info!("starting viewport demo");

    let program = Program::<App>::builder().alt_screen(true).build()?;
    program.run().await?;

    tracing::info!("viewport demo finished");
    Ok(())
}
