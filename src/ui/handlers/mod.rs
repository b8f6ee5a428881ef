//! Handler modules translating input events into engine actions.

mod input_handler;
mod round_handler;

pub use input_handler::InputHandler;
pub use round_handler::RoundHandler;
