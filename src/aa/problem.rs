use anyhow::{anyhow, Context, Result};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, EnumIter};

/// The semantics associated with a problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumIter)]
pub enum Semantics {
    /// The conflict-freeness semantics
    CF,
    /// The admissibility semantics
    ADM,
    /// The grounded semantics
    GR,
    /// The complete semantics
    CO,
    /// The preferred semantics
    PR,
    /// The stable semantics
    ST,
    /// The semi-stable semantics
    SST,
    /// The stage semantics
    STG,
    /// The CF2 semantics
    CF2,
    /// The ideal semantics
    ID,
}

impl TryFrom<&str> for Semantics {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_ascii_lowercase().as_str() {
            "cf" => Ok(Semantics::CF),
            "adm" => Ok(Semantics::ADM),
            "gr" => Ok(Semantics::GR),
            "co" => Ok(Semantics::CO),
            "pr" => Ok(Semantics::PR),
            "st" => Ok(Semantics::ST),
            "sst" => Ok(Semantics::SST),
            "stg" => Ok(Semantics::STG),
            "cf2" => Ok(Semantics::CF2),
            "id" => Ok(Semantics::ID),
            _ => Err(anyhow!(r#"undefined semantics "{}""#, value)),
        }
    }
}

/// The query to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumIter)]
pub enum Query {
    /// Compute a single extension
    SE,
    /// Enumerate all the extensions
    EE,
    /// Check credulous acceptance
    DC,
    /// Check skeptical acceptance
    DS,
}

impl Query {
    /// Iterates over the problem strings handled by the solver.
    ///
    /// The strings follow the two-letter-query ICCMA pattern (eg. `SE-GR`, `DC-CF2`).
    pub fn iter_problem_strings() -> impl Iterator<Item = String> {
        Query::iter()
            .flat_map(|q| Semantics::iter().map(move |s| format!("{}-{}", q.as_ref(), s.as_ref())))
    }
}

impl TryFrom<&str> for Query {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_ascii_lowercase().as_str() {
            "se" => Ok(Query::SE),
            "ee" => Ok(Query::EE),
            "dc" => Ok(Query::DC),
            "ds" => Ok(Query::DS),
            _ => Err(anyhow!(r#"undefined query "{}""#, value)),
        }
    }
}

/// Reads a string depicting a problem with an XX-YY pattern.
///
/// This functions reads a problem string following the format in ICCMA competitions.
/// The string is split at the first hyphen found in it.
/// The substring before this hyphen is considered as the query, while the substring after it is considered as the semantics.
///
/// In case there is no hyphen, an error is returned.
/// In case there is more then one, then all the hyphens except the first are considered as part of the semantics.
pub fn read_problem_string(problem: &str) -> Result<(Query, Semantics)> {
    let context = || format!(r#"while parsing problem string "{}""#, problem);
    match problem.find('-') {
        Some(n) => {
            let query = Query::try_from(&problem[0..n]).with_context(context)?;
            let semantics = Semantics::try_from(&problem[1 + n..]).with_context(context)?;
            Ok((query, semantics))
        }
        None => Err(anyhow!("no hyphen in problem string")).with_context(context),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_problem_ok() {
        assert_eq!(
            (Query::SE, Semantics::ST),
            read_problem_string("SE-ST").unwrap()
        );
        assert_eq!(
            (Query::SE, Semantics::ST),
            read_problem_string("se-st").unwrap()
        );
        assert_eq!(
            (Query::EE, Semantics::CF2),
            read_problem_string("EE-CF2").unwrap()
        );
    }

    #[test]
    fn test_read_problem_unknown_query() {
        assert!(read_problem_string("foo-ST").is_err());
    }

    #[test]
    fn test_read_problem_unknown_semantics() {
        assert!(read_problem_string("SE-foo").is_err());
    }

    #[test]
    fn test_read_problem_no_hyphen() {
        assert!(read_problem_string("SEST").is_err());
    }

    #[test]
    fn test_semantics_from_str() {
        for (s, expected) in [
            ("CF", Semantics::CF),
            ("ADM", Semantics::ADM),
            ("GR", Semantics::GR),
            ("CO", Semantics::CO),
            ("PR", Semantics::PR),
            ("ST", Semantics::ST),
            ("SST", Semantics::SST),
            ("STG", Semantics::STG),
            ("CF2", Semantics::CF2),
            ("ID", Semantics::ID),
        ] {
            assert_eq!(expected, Semantics::try_from(s).unwrap());
            assert_eq!(s, expected.as_ref());
        }
    }

    #[test]
    fn test_iter_problem_strings() {
        let problems = Query::iter_problem_strings().collect::<Vec<String>>();
        assert_eq!(40, problems.len());
        assert!(problems.contains(&"SE-GR".to_string()));
        assert!(problems.contains(&"EE-PR".to_string()));
        assert!(problems.contains(&"DS-CF2".to_string()));
    }
}
