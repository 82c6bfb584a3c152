use super::ResponseWriter;
use crate::aa::{AAFramework, Argument, ExtensionSet, LabelType};
use anyhow::{Context, Result};
use std::io::Write;

/// A writer for the Aspartix format.
///
/// This object is used to write an [`AAFramework`] using the Aspartix input format, as defined on [the Aspartix website](https://www.dbai.tuwien.ac.at/research/argumentation/aspartix/dung.html).
/// It also writes the answers to the acceptance problems: single extensions are written as comma separated labels between square brackets, and sets of extensions as comma separated extensions between square brackets.
///
/// # Example
///
/// The following example retrieves an AF and writes it to the standard output using the Aspartix format.
///
/// ```
/// # use exargo::aa::AAFramework;
/// # use exargo::aa::ArgumentSet;
/// # use exargo::io::AspartixWriter;
/// # use exargo::aa::LabelType;
/// # use anyhow::Result;
/// fn write_af_to_stdout<T: LabelType>(af: &AAFramework<T>) -> Result<()> {
///     let writer = AspartixWriter::default();
///     writer.write_framework(&af, &mut std::io::stdout())
/// }
/// # write_af_to_stdout(&AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&[] as &[String])));
/// ```
#[derive(Default)]
pub struct AspartixWriter {}

impl AspartixWriter {
    /// Writes a framework using the Aspartix format to the provided writer.
    ///
    /// Removed arguments and attacks are not written.
    ///
    /// # Arguments
    ///
    /// * `framework` - the framework
    /// * `writer` - the writer
    pub fn write_framework<T: LabelType>(
        &self,
        framework: &AAFramework<T>,
        writer: &mut dyn Write,
    ) -> Result<()> {
        for arg in framework.argument_set().iter() {
            writeln!(writer, "arg({}).", arg)?;
        }
        for attack in framework.iter_attacks() {
            writeln!(writer, "att({},{}).", attack.attacker(), attack.attacked())?;
        }
        writer.flush()?;
        Ok(())
    }
}

fn write_labels<T: LabelType>(
    writer: &mut dyn Write,
    args: &[&Argument<T>],
) -> std::io::Result<()> {
    write!(writer, "[")?;
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            write!(writer, ",")?;
        }
        write!(writer, "{}", arg)?;
    }
    write!(writer, "]")
}

impl ResponseWriter<String> for AspartixWriter {
    fn write_no_extension(&self, writer: &mut dyn Write) -> Result<()> {
        let context = "while writing problem has no extension";
        writeln!(writer, "NO").context(context)?;
        writer.flush().context(context)
    }

    fn write_single_extension(
        &self,
        writer: &mut dyn Write,
        extension: &[&Argument<String>],
    ) -> Result<()> {
        let context = "while writing an extension";
        write_labels(writer, extension).context(context)?;
        writeln!(writer).context(context)?;
        writer.flush().context(context)
    }

    fn write_extension_set(
        &self,
        writer: &mut dyn Write,
        af: &AAFramework<String>,
        extensions: &ExtensionSet,
    ) -> Result<()> {
        let context = "while writing a set of extensions";
        write!(writer, "[").context(context)?;
        for (i, extension) in extensions.iter().enumerate() {
            if i > 0 {
                write!(writer, ",").context(context)?;
            }
            write_labels(writer, &extension.arguments(af)).context(context)?;
        }
        writeln!(writer, "]").context(context)?;
        writer.flush().context(context)
    }

    fn write_acceptance_status(
        &self,
        writer: &mut dyn Write,
        acceptance_status: bool,
    ) -> Result<()> {
        let context = "while writing an acceptance status";
        writeln!(writer, "{}", if acceptance_status { "YES" } else { "NO" })
            .context(context)?;
        writer.flush().context(context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aa::{ArgumentSet, Extension};
    use std::io::BufWriter;

    fn new_af(labels: &[&str]) -> AAFramework<String> {
        let labels = labels
            .iter()
            .map(|l| l.to_string())
            .collect::<Vec<String>>();
        AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&labels))
    }

    #[test]
    fn test_write_af() {
        let mut framework = new_af(&["a", "b", "c"]);
        framework
            .new_attack(&"a".to_string(), &"a".to_string())
            .unwrap();
        framework
            .new_attack(&"b".to_string(), &"c".to_string())
            .unwrap();
        let mut buffer = BufWriter::new(Vec::new());
        let writer = AspartixWriter::default();
        writer.write_framework(&framework, &mut buffer).unwrap();
        assert_eq!(
            "arg(a).\narg(b).\narg(c).\natt(a,a).\natt(b,c).\n",
            String::from_utf8(buffer.into_inner().unwrap()).unwrap()
        )
    }

    #[test]
    fn test_write_af_skips_removed_arguments() {
        let mut framework = new_af(&["a", "b", "c"]);
        framework
            .new_attack(&"a".to_string(), &"b".to_string())
            .unwrap();
        framework
            .new_attack(&"b".to_string(), &"c".to_string())
            .unwrap();
        framework.remove_argument(&"a".to_string());
        let mut buffer = BufWriter::new(Vec::new());
        let writer = AspartixWriter::default();
        writer.write_framework(&framework, &mut buffer).unwrap();
        assert_eq!(
            "arg(b).\narg(c).\natt(b,c).\n",
            String::from_utf8(buffer.into_inner().unwrap()).unwrap()
        )
    }

    #[test]
    fn test_write_single_extension() {
        let framework = new_af(&["a", "b", "c"]);
        let args = framework
            .argument_set()
            .iter()
            .collect::<Vec<&Argument<String>>>();
        let writer = AspartixWriter::default();
        let mut buffer = BufWriter::new(Vec::new());
        writer.write_single_extension(&mut buffer, &args).unwrap();
        assert_eq!(
            "[a,b,c]\n",
            String::from_utf8(buffer.into_inner().unwrap()).unwrap()
        );
    }

    #[test]
    fn test_write_empty_extension() {
        let writer = AspartixWriter::default();
        let mut buffer = BufWriter::new(Vec::new());
        writer
            .write_single_extension(&mut buffer, &[] as &[&Argument<String>])
            .unwrap();
        assert_eq!(
            "[]\n",
            String::from_utf8(buffer.into_inner().unwrap()).unwrap()
        );
    }

    #[test]
    fn test_write_extension_set() {
        let framework = new_af(&["a", "b", "c"]);
        let extensions = [
            Extension::from_iter([0, 1]),
            Extension::from_iter([2]),
        ]
        .into_iter()
        .collect::<ExtensionSet>();
        let writer = AspartixWriter::default();
        let mut buffer = BufWriter::new(Vec::new());
        writer
            .write_extension_set(&mut buffer, &framework, &extensions)
            .unwrap();
        assert_eq!(
            "[[a,b],[c]]\n",
            String::from_utf8(buffer.into_inner().unwrap()).unwrap()
        );
    }

    #[test]
    fn test_write_empty_extension_set() {
        let framework = new_af(&["a"]);
        let writer = AspartixWriter::default();
        let mut buffer = BufWriter::new(Vec::new());
        writer
            .write_extension_set(&mut buffer, &framework, &ExtensionSet::default())
            .unwrap();
        assert_eq!(
            "[]\n",
            String::from_utf8(buffer.into_inner().unwrap()).unwrap()
        );
    }

    #[test]
    fn test_write_no_extension() {
        let writer = AspartixWriter::default();
        let mut buffer = BufWriter::new(Vec::new());
        writer.write_no_extension(&mut buffer).unwrap();
        assert_eq!(
            "NO\n",
            String::from_utf8(buffer.into_inner().unwrap()).unwrap()
        );
    }

    #[test]
    fn test_write_acceptance_status() {
        let writer = AspartixWriter::default();
        let mut buffer = BufWriter::new(Vec::new());
        writer.write_acceptance_status(&mut buffer, true).unwrap();
        writer.write_acceptance_status(&mut buffer, false).unwrap();
        assert_eq!(
            "YES\nNO\n",
            String::from_utf8(buffer.into_inner().unwrap()).unwrap()
        );
    }
}
