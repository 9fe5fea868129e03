mod discovery;
mod enums;
mod preferences;
mod profile;
mod user;
