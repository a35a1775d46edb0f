pub mod cmd_help;
pub mod cmd_smithing;
pub mod cmd_stop;
