use super::{warning_result::WarningResult, InstanceReader, WarningHandler};
use crate::aa::{AAFramework, Argument};
use anyhow::{anyhow, Context, Result};
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use std::io::{BufRead, BufReader, Read};

const LABEL_AND_SPACE_PATTERN: &str = r"\s*[_[:alpha:]][_[:alpha:]\d]*\s*";

lazy_static! {
    static ref ARG_STATEMENT_PATTERN: Regex = Regex::new(r"^\s*arg\([^)]+\).\s*$").unwrap();
    static ref ARG_STATEMENT_LABEL_PATTERN: Regex =
        Regex::new(&format!(r"^\s*arg\(({})\).\s*$", LABEL_AND_SPACE_PATTERN)).unwrap();
    static ref ATT_STATEMENT_PATTERN: Regex = Regex::new(r"^\s*att\([^,]+,[^)]+\).\s*$").unwrap();
    static ref ATT_STATEMENT_LABELS_PATTERN: Regex = Regex::new(&format!(
        r"^\s*att\(({}),({})\).\s*$",
        LABEL_AND_SPACE_PATTERN, LABEL_AND_SPACE_PATTERN,
    ))
    .unwrap();
}

fn captured_label(c: &Captures, i: usize) -> WarningResult<String, String> {
    let raw = c.get(i).unwrap().as_str();
    let trimmed = raw.trim();
    if trimmed.len() == raw.len() {
        WarningResult::Ok(trimmed.to_string())
    } else {
        WarningResult::Warned(
            trimmed.to_string(),
            vec!["argument labels beginning or ending by spaces may be ambiguous".to_string()],
        )
    }
}

fn read_arg_statement(l: &str) -> Result<Option<WarningResult<String, String>>> {
    if ARG_STATEMENT_PATTERN.is_match(l) {
        match ARG_STATEMENT_LABEL_PATTERN.captures(l) {
            Some(c) => Ok(Some(captured_label(&c, 1))),
            None => Err(anyhow!("invalid argument label in {}", l.trim())),
        }
    } else {
        Ok(None)
    }
}

fn read_att_statement(l: &str) -> Result<Option<WarningResult<(String, String), String>>> {
    if ATT_STATEMENT_PATTERN.is_match(l) {
        match ATT_STATEMENT_LABELS_PATTERN.captures(l) {
            Some(c) => Ok(Some(captured_label(&c, 1).zip(captured_label(&c, 2)))),
            None => Err(anyhow!("invalid argument labels in {}", l.trim())),
        }
    } else {
        Ok(None)
    }
}

/// A reader for the Aspartix format.
///
/// This object is used to read an [`AAFramework`] encoded using the Aspartix input format, as defined on [the Aspartix website](https://www.dbai.tuwien.ac.at/research/argumentation/aspartix/dung.html).
/// The [LabelType](crate::aa::LabelType) of the returned argument frameworks is [String].
///
/// # Aspartix format
///
/// Arguments are declared by `arg` statements and attacks by `att` statements, one statement per line.
/// All the `arg` statements must come before the first `att` statement.
/// The following content defines an Argumentation Framework with three arguments labelled `a`, `b` and `c` and three attacks (`a` and `b` attack each other and `c` attacks `b`).
///
/// ```text
/// arg(a).
/// arg(b).
/// arg(c).
/// att(a,b).
/// att(b,a).
/// att(c,b).
/// ```
///
/// # Example
///
/// ```
/// # use exargo::aa::AAFramework;
/// # use exargo::io::{AspartixReader, InstanceReader};
/// fn read_af_from_str(s: &str) -> AAFramework<String> {
///     let reader = AspartixReader::default();
///     reader.read(&mut s.as_bytes()).expect("invalid Aspartix AF")
/// }
/// # read_af_from_str("arg(a).");
/// ```
#[derive(Default)]
pub struct AspartixReader {
    warning_handlers: Vec<WarningHandler>,
}

impl InstanceReader<String> for AspartixReader {
    fn read(&self, reader: &mut dyn Read) -> Result<AAFramework<String>> {
        let mut af = AAFramework::default();
        let mut seen_attack = false;
        let br = BufReader::new(reader);
        for (i, line) in br.lines().enumerate() {
            let context = || format!("while reading line with index {}", i);
            let notify = |warnings: Vec<String>| {
                warnings.iter().for_each(|w| {
                    self.warning_handlers
                        .iter()
                        .for_each(|h| (h)(1 + i, w.clone()))
                })
            };
            let l = line.with_context(context)?;
            if l.trim().is_empty() {
                continue;
            }
            if let Some(label) = read_arg_statement(&l).with_context(context)? {
                if seen_attack {
                    return Err(anyhow!("found an argument declaration after an attack"))
                        .with_context(context);
                }
                af.new_argument(label.consume_warnings(notify));
                continue;
            }
            if let Some(labels) = read_att_statement(&l).with_context(context)? {
                seen_attack = true;
                let (from, to) = labels.consume_warnings(notify);
                af.new_attack(&from, &to).with_context(context)?;
                continue;
            }
            return Err(anyhow!("syntax error in line \"{}\"", l)).with_context(context);
        }
        Ok(af)
    }

    fn read_arg_from_str<'a>(
        &self,
        af: &'a AAFramework<String>,
        arg: &str,
    ) -> Result<&'a Argument<String>> {
        af.argument_set().get_argument(&arg.to_string())
    }

    fn add_warning_handler(&mut self, h: WarningHandler) {
        self.warning_handlers.push(h);
    }
}
