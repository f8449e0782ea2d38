mod preferences;
mod session;
mod terminal;
