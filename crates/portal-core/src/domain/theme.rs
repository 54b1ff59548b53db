//! Portal colour scheme handed to the rendering layer.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorScheme {
    pub text: &'static str,
    pub bg_lt: &'static str,
    pub bg_dk: &'static str,
    pub secondary_highlight: &'static str,
    pub call_to_action: &'static str,
    pub primary: &'static str,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            text: "#00100c",
            bg_lt: "#fff8db",
            bg_dk: "#612809",
            secondary_highlight: "#556643",
            call_to_action: "#cc2500",
            primary: "#ea6900",
        }
    }
}
