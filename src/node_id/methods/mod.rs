mod as_bytes;
mod as_bytes_mut;
mod discover;
mod from_bytes;
mod into_bytes;
mod is_local;
mod is_multicast;
mod random;
