mod as_mut;
mod as_ref;
mod deref;
mod deref_mut;
mod from;
