//! CLI subcommands for pantry-server.

pub mod create_superuser;
