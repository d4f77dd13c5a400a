
mod property_escape;
