mod authors_command;
pub(crate) use authors_command::AuthorsCommand;

mod check_command;
pub(crate) use check_command::CheckCommand;

pub(crate) mod cli_manager;

mod command;

pub(crate) mod common;

mod encode_command;
pub(crate) use encode_command::EncodeCommand;

mod problems_command;
pub(crate) use problems_command::ProblemsCommand;

mod solve_command;
pub(crate) use solve_command::SolveCommand;

mod writable_string;
