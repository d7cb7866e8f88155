//! RUT check command

use clap::Args;
use std::io::Write;

use crate::error::{QuotebookError, QuotebookResult};
use crate::models::{classify_person_type, Rut};

#[derive(Args, Debug, Clone)]
pub struct RutArgs {
    /// RUT to check, e.g. 76.086.428-5
    pub value: String,
}

/// Validate a RUT and print its person type
///
/// An unparseable RUT or a wrong verifier is reported as an error after
/// printing what was found.
pub fn handle_rut_command<W: Write>(args: RutArgs, out: &mut W) -> QuotebookResult<()> {
    let rut = Rut::parse(&args.value)
        .map_err(|e| QuotebookError::Validation(format!("Invalid RUT '{}': {}", args.value, e)))?;

    let io_err = |e: std::io::Error| QuotebookError::Io(e.to_string());
    writeln!(out, "RUT:         {}", rut).map_err(io_err)?;
    writeln!(out, "Person type: {}", classify_person_type(&rut)).map_err(io_err)?;

    if rut.is_valid() {
        writeln!(out, "Verifier:    ok").map_err(io_err)?;
        Ok(())
    } else {
        writeln!(out, "Verifier:    expected {}", rut.expected_verifier()).map_err(io_err)?;
        Err(QuotebookError::Validation(format!(
            "RUT {} has verifier {}, expected {}",
            rut,
            rut.verifier(),
            rut.expected_verifier()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(value: &str) -> (QuotebookResult<()>, String) {
        let mut out = Vec::new();
        let result = handle_rut_command(RutArgs { value: value.into() }, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_valid_company() {
        let (result, output) = run("76086428-5");
        assert!(result.is_ok());
        assert!(output.contains("76.086.428-5"));
        assert!(output.contains("Person type: empresa"));
        assert!(output.contains("Verifier:    ok"));
    }

    #[test]
    fn test_valid_natural() {
        let (result, output) = run("12.345.678-5");
        assert!(result.is_ok());
        assert!(output.contains("Person type: natural"));
    }

    #[test]
    fn test_wrong_verifier() {
        let (result, output) = run("12.345.678-9");
        assert!(result.unwrap_err().is_validation());
        assert!(output.contains("expected 5"));
    }

    #[test]
    fn test_unparseable() {
        let (result, output) = run("abc");
        assert!(result.unwrap_err().is_validation());
        assert!(output.is_empty());
    }
}
