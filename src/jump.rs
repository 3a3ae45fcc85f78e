//! "Jump to page" input and keyboard handling around the page window.

use log::debug;

use crate::{
    error::PaginationError,
    navigation::{step, Key},
};

pub const DEFAULT_JUMP_THRESHOLD: u32 = 10;

/// Whether the jump input is offered at all for a list of `total_pages`.
pub fn is_offered(enabled: bool, total_pages: u32, threshold: u32) -> bool {
    enabled && total_pages > threshold
}

/// Resolves what the user typed into a page in `1..=total_pages`.
pub fn parse_jump(input: &str, total_pages: u32) -> Result<u32, PaginationError> {
    let trimmed = input.trim();
    let page = trimmed
        .parse::<u32>()
        .map_err(|_| PaginationError::InvalidJumpInput(trimmed.to_string()))?;
    if page < 1 || page > total_pages {
        return Err(PaginationError::InvalidRange { page, total_pages });
    }
    Ok(page)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum JumpState {
    #[default]
    Hidden,
    Editing {
        input: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JumpEvent {
    Open,
    Edit(String),
    Submit,
    Cancel,
    Blur,
    Key(Key),
}

#[derive(Debug, Clone, Default)]
pub struct JumpToPage {
    state: JumpState,
}

impl JumpToPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &JumpState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, JumpState::Editing { .. })
    }

    /// The "Go" button is live only for input that names a reachable page.
    pub fn can_submit(&self, total_pages: u32) -> bool {
        match &self.state {
            JumpState::Editing { input } => parse_jump(input, total_pages).is_ok(),
            JumpState::Hidden => false,
        }
    }

    /// Feeds one UI event through the toggle.
    ///
    /// `Ok(Some(page))` asks the caller to navigate. A rejected submit keeps
    /// the input open with its text so the user can correct it.
    pub fn handle(
        &mut self,
        event: JumpEvent,
        current_page: u32,
        total_pages: u32,
    ) -> Result<Option<u32>, PaginationError> {
        let editing = self.is_open();
        match event {
            JumpEvent::Open if !editing => {
                self.state = JumpState::Editing {
                    input: String::new(),
                };
                Ok(None)
            }
            JumpEvent::Edit(text) => {
                if let JumpState::Editing { input } = &mut self.state {
                    *input = text;
                }
                Ok(None)
            }
            JumpEvent::Submit | JumpEvent::Key(Key::Enter) if editing => self.submit(total_pages),
            JumpEvent::Cancel | JumpEvent::Blur | JumpEvent::Key(Key::Escape) if editing => {
                self.state = JumpState::Hidden;
                Ok(None)
            }
            JumpEvent::Key(key) if !editing => Ok(step(key, current_page, total_pages)),
            // arrows belong to the text field while it has focus
            _ => Ok(None),
        }
    }

    fn submit(&mut self, total_pages: u32) -> Result<Option<u32>, PaginationError> {
        let JumpState::Editing { input } = &self.state else {
            return Ok(None);
        };
        let page = parse_jump(input, total_pages)?;
        debug!("Jumping to page {} of {}", page, total_pages);
        self.state = JumpState::Hidden;
        Ok(Some(page))
    }
}
