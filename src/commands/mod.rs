// Command handlers for the market CLI

pub mod open;
pub mod version;
