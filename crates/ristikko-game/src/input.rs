/// A logical input event, independent of the channel that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum InputEvent {
    /// A typed character. It is validated against the letter alphabet on use.
    Char(char),
    /// Remove the selected letter and step back.
    Delete,
}

/// The hidden text field channel used by mobile soft keyboards.
///
/// Soft keyboards do not reliably report key presses, so the app keeps an invisible
/// single-line text field focused and inspects its content after every change:
///
/// - the field holds [`SENTINEL`](Self::SENTINEL) (a single space) while idle;
/// - an empty field means the user pressed backspace, which is a [`InputEvent::Delete`];
/// - any other content yields the last non-whitespace character as
///   [`InputEvent::Char`]; whitespace-only content yields nothing.
///
/// After every inspection the field is reset to the sentinel.
///
/// # Example
///
/// ```
/// use ristikko_game::{InputEvent, VirtualInput};
///
/// let mut input = VirtualInput::new();
/// input.buffer_mut().push('k');
/// assert_eq!(input.take_event(), Some(InputEvent::Char('k')));
/// assert_eq!(input.buffer(), VirtualInput::SENTINEL);
///
/// input.buffer_mut().clear();
/// assert_eq!(input.take_event(), Some(InputEvent::Delete));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualInput {
    buffer: String,
}

impl Default for VirtualInput {
    fn default() -> Self {
        Self::new()
    }
}

impl VirtualInput {
    /// Idle content of the field.
    pub const SENTINEL: &'static str = " ";

    /// Creates a channel holding the sentinel.
    #[must_use]
    pub fn new() -> Self {
        Self {
            buffer: Self::SENTINEL.to_owned(),
        }
    }

    /// Returns the current field content.
    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Returns the field content for the text widget to edit.
    pub fn buffer_mut(&mut self) -> &mut String {
        &mut self.buffer
    }

    /// Interprets the field content and resets it to the sentinel.
    pub fn take_event(&mut self) -> Option<InputEvent> {
        let event = Self::classify(&self.buffer);
        if self.buffer != Self::SENTINEL {
            Self::SENTINEL.clone_into(&mut self.buffer);
        }
        event
    }

    fn classify(content: &str) -> Option<InputEvent> {
        if content == Self::SENTINEL {
            return None;
        }
        if content.is_empty() {
            return Some(InputEvent::Delete);
        }
        content.trim().chars().next_back().map(InputEvent::Char)
    }
}
