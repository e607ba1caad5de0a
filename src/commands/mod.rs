pub mod dav_commands;
