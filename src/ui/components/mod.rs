//! Terminal versions of the form primitives: card, dialog, labelled input, button.

pub mod button;
pub mod card;
pub mod dialog;
pub mod input;

pub use button::Button;
pub use card::render_card;
pub use dialog::{centered_rect, render_dialog};
pub use input::TextInput;
