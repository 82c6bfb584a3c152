use super::{cli_manager, command::Command, common};
use anyhow::{anyhow, Context, Result};
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use exargo::{
    aa::{read_problem_string, AAFramework, Argument, Query, Semantics},
    io::{AspartixReader, AspartixWriter, InstanceReader, ResponseWriter},
    reasoners::{InferenceMode, Reasoner},
};
use log::warn;

const CMD_NAME: &str = "solve";

const ARG_CERTIFICATE: &str = "CERTIFICATE";

pub(crate) struct SolveCommand;

impl SolveCommand {
    pub(crate) fn new() -> Self {
        SolveCommand
    }
}

impl<'a> Command<'a> for SolveCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Solves an argumentation framework problem")
            .setting(AppSettings::DisableVersion)
            .arg(common::input_args())
            .args(&common::problem_args())
            .arg(
                Arg::with_name(ARG_CERTIFICATE)
                    .long("with-certificate")
                    .takes_value(false)
                    .help("display a certificate along with the acceptance status")
                    .required(false),
            )
            .arg(cli_manager::logging_level_cli_arg())
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let file = arg_matches.value_of(common::ARG_INPUT).unwrap();
        let mut reader = AspartixReader::default();
        let af = common::read_file_path(file, &mut reader)?;
        let arg = arg_matches
            .value_of(common::ARG_ARG)
            .map(|a| reader.read_arg_from_str(&af, a))
            .transpose()
            .context("while parsing the argument passed to the command line")?;
        let (query, semantics) =
            read_problem_string(arg_matches.value_of(common::ARG_PROBLEM).unwrap())?;
        check_arg_definition(query, &arg)?;
        let with_certificate = arg_matches.is_present(ARG_CERTIFICATE);
        match query {
            Query::SE => compute_one_extension(&af, semantics),
            Query::EE => enumerate_extensions(&af, semantics),
            Query::DC => check_acceptance(
                &af,
                semantics,
                InferenceMode::Credulous,
                arg.unwrap(),
                with_certificate,
            ),
            Query::DS => check_acceptance(
                &af,
                semantics,
                InferenceMode::Skeptical,
                arg.unwrap(),
                with_certificate,
            ),
        }
    }
}

fn check_arg_definition(query: Query, arg: &Option<&Argument<String>>) -> Result<()> {
    match query {
        Query::SE | Query::EE => {
            if arg.is_some() {
                warn!(
                    "unexpected argument on the command line (useless for query {})",
                    query.as_ref()
                );
            }
            Ok(())
        }
        Query::DC | Query::DS => {
            if arg.is_none() {
                Err(anyhow!(
                    "missing argument on the command line (required for query {})",
                    query.as_ref()
                ))
            } else {
                Ok(())
            }
        }
    }
}

fn compute_one_extension(af: &AAFramework<String>, semantics: Semantics) -> Result<()> {
    let mut reasoner = Reasoner::new(semantics);
    let writer = AspartixWriter::default();
    let mut out = std::io::stdout();
    let result = match reasoner.extensions(af).iter().next() {
        Some(ext) => writer.write_single_extension(&mut out, &ext.arguments(af)),
        None => writer.write_no_extension(&mut out),
    };
    result
}

fn enumerate_extensions(af: &AAFramework<String>, semantics: Semantics) -> Result<()> {
    let mut reasoner = Reasoner::new(semantics);
    let writer = AspartixWriter::default();
    let mut out = std::io::stdout();
    writer.write_extension_set(&mut out, af, reasoner.extensions(af))
}

fn check_acceptance(
    af: &AAFramework<String>,
    semantics: Semantics,
    mode: InferenceMode,
    arg: &Argument<String>,
    with_certificate: bool,
) -> Result<()> {
    let mut reasoner = Reasoner::new(semantics);
    let writer = AspartixWriter::default();
    let mut out = std::io::stdout();
    if !with_certificate {
        let acceptance_status = reasoner.query(af, arg.label(), mode)?;
        return writer.write_acceptance_status(&mut out, acceptance_status);
    }
    let (acceptance_status, certificate) = match mode {
        InferenceMode::Credulous => {
            reasoner.is_credulously_accepted_with_certificate(af, arg.label())?
        }
        InferenceMode::Skeptical => {
            reasoner.is_skeptically_accepted_with_certificate(af, arg.label())?
        }
    };
    writer.write_acceptance_status(&mut out, acceptance_status)?;
    if let Some(extension) = certificate {
        writer.write_single_extension(&mut out, &extension.arguments(af))?;
    }
    Ok(())
}
