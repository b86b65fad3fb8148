//! Form and input adapters
//!
//! In-process stand-ins for a page's login form: text inputs whose values
//! can be changed from anywhere, and a form element fed through a channel.

pub mod channel_form;
pub mod text_input;

pub use channel_form::{ChannelForm, FormHandle};
pub use text_input::TextInput;
