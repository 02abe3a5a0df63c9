pub mod browse;
pub mod config;
pub mod countdown;
pub mod list;
pub mod next;
pub mod submit;

use anyhow::Result;
use chrono::Utc;
use eventboard_core::board::Board;
use eventboard_core::config::BoardConfig;
use eventboard_core::sheet::SheetClient;

use crate::render::TerminalView;

/// Settings and endpoint client shared by the commands.
pub struct Context {
    pub config: BoardConfig,
    pub source: SheetClient,
}

impl Context {
    pub fn new(config: BoardConfig) -> Result<Self> {
        let source = SheetClient::from_config(&config)?;
        Ok(Context { config, source })
    }

    /// Fetch the board and render its first page.
    pub async fn load_board(&self, view: &mut TerminalView) -> Result<Board> {
        Ok(Board::load(&self.source, self.config.paginator()?, view, Utc::now()).await)
    }

    /// Fetch the board without rendering anything but the spinner.
    pub async fn fetch_board(&self, view: &mut TerminalView) -> Result<Board> {
        Ok(Board::fetch(&self.source, self.config.paginator()?, view).await)
    }
}
