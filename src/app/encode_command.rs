use super::{cli_manager, command::Command, common};
use anyhow::{Context, Result};
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use exargo::{
    aa::Semantics,
    encodings::propositional_characterisation,
    io::AspartixReader,
};
use log::info;
use std::{fs::File, io::BufWriter};

const CMD_NAME: &str = "encode";

const ARG_OUT: &str = "ARG_OUT";
const ARG_SEM: &str = "ARG_SEM";

pub(crate) struct EncodeCommand;

impl EncodeCommand {
    pub(crate) fn new() -> Self {
        EncodeCommand
    }
}

impl<'a> Command<'a> for EncodeCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Encodes the propositional characterisation of an AF labelling semantics")
            .setting(AppSettings::DisableVersion)
            .arg(common::input_args())
            .arg(cli_manager::logging_level_cli_arg())
            .arg(
                Arg::with_name(ARG_SEM)
                    .short("s")
                    .long("semantics")
                    .empty_values(false)
                    .multiple(false)
                    .possible_values(&[
                        "CF", "ADM", "GR", "CO", "PR", "ST", "SST", "STG", "CF2", "ID",
                    ])
                    .help("the semantics to encode")
                    .required(true),
            )
            .arg(
                Arg::with_name(ARG_OUT)
                    .short("o")
                    .long("output")
                    .empty_values(false)
                    .multiple(false)
                    .help("the output file for the encoding")
                    .required(false),
            )
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let file = arg_matches.value_of(common::ARG_INPUT).unwrap();
        let af = common::read_file_path(file, &mut AspartixReader::default())?;
        let semantics = Semantics::try_from(arg_matches.value_of(ARG_SEM).unwrap())?;
        let formula = propositional_characterisation(&af, semantics)?;
        info!(
            "the propositional characterisation has {} variables and {} clauses",
            formula.n_vars(),
            formula.n_clauses(),
        );
        if let Some(output_file) = arg_matches.value_of(ARG_OUT) {
            let mut writer = BufWriter::new(
                File::create(output_file)
                    .with_context(|| format!(r#"while creating file "{}""#, output_file))?,
            );
            formula.write_dimacs(&mut writer)
        } else {
            formula.write_dimacs(&mut std::io::stdout())
        }
    }
}
