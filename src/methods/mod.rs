mod as_bytes;
mod as_mut_bytes;
mod clock_seq;
mod compare;
mod describe;
mod duration_to_ticks;
mod from_bytes;
mod from_parts_v1;
mod from_parts_v3;
mod from_parts_v4;
mod gen_v4;
mod is_nil;
mod max;
mod nil;
mod pack;
mod unpack;
mod new_v1;
mod new_v3;
mod new_v4;
mod set_variant;
mod set_version;
mod system_time_to_ticks;
mod variant;
mod version;
mod with_variant;
mod with_version;
