//! Shared building blocks of the converter screen.
pub mod amount_input;
pub mod conversion_result;
pub mod pico;
pub mod symbol_select;
