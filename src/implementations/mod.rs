mod as_ref;
mod debug;
mod display;
mod from_bytes;
mod from_int;
mod from_str;
