//! Contractor list command

use clap::Args;
use std::io::Write;

use super::{parse_choice, table_sections, write_list, ListOptions, ListView};
use crate::config::Settings;
use crate::display::{format_contractor_list, format_contractor_stats};
use crate::error::QuotebookResult;
use crate::models::{ContractorStatus, PersonType};
use crate::query::{specialty_options, ContractorFilter, ContractorQuery, ContractorSortField, QueryProfile};
use crate::storage::DataSource;

/// Contractor list arguments
#[derive(Args, Debug, Clone, Default)]
pub struct ContractorArgs {
    /// Status: Activo, Inactivo, Suspendido or all
    #[arg(long)]
    pub status: Option<String>,

    /// Person type: natural, empresa or all
    #[arg(long = "type")]
    pub person_type: Option<String>,

    /// Exact specialty
    #[arg(long)]
    pub specialty: Option<String>,

    #[command(flatten)]
    pub list: ListOptions,
}

impl ContractorArgs {
    pub fn filter(&self) -> QuotebookResult<ContractorFilter> {
        Ok(ContractorFilter {
            search: self.list.search_term(),
            status: parse_choice::<ContractorStatus>(self.status.as_deref())?,
            person_type: parse_choice::<PersonType>(self.person_type.as_deref())?,
            specialty: parse_choice::<String>(self.specialty.as_deref())?,
            created: self.list.created(),
        })
    }
}

/// List contractors
pub fn handle_contractors_command<W: Write>(
    source: &DataSource,
    settings: &Settings,
    args: ContractorArgs,
    out: &mut W,
) -> QuotebookResult<()> {
    let contractors = source.contractors()?;
    let filter = args.filter()?;
    let sort = args.list.sort_spec::<ContractorSortField>()?;
    let outcome = ContractorQuery::query(&contractors, &filter, sort);

    let view = ListView {
        name: "contractors",
        items: &outcome.items,
        stats: &outcome.stats,
        has_active_filters: outcome.has_active_filters,
    };
    write_list(out, view, args.list.format, |view| {
        table_sections(
            format_contractor_stats(view.stats),
            format_contractor_list(view.items, settings),
            &[("Specialties", specialty_options(&contractors))],
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use crate::config::QuotebookPaths;
    use crate::models::Contractor;
    use std::fs;
    use tempfile::TempDir;

    fn source() -> (TempDir, DataSource) {
        let temp_dir = TempDir::new().unwrap();
        let paths = QuotebookPaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();

        let mut andes = Contractor::new("CTR-001", "Constructora Andes", "76.086.428-5", PersonType::Company);
        andes.specialty = "Obra gruesa".into();
        let mut perez = Contractor::new("CTR-002", "Juan Pérez", "12.345.678-5", PersonType::Natural);
        perez.specialty = "Electricidad".into();
        perez.status = ContractorStatus::Inactive;
        fs::write(
            paths.contractors_file(),
            serde_json::to_string(&vec![andes, perez]).unwrap(),
        )
        .unwrap();

        (temp_dir, DataSource::new(paths))
    }

    #[test]
    fn test_table_output() {
        let (_temp_dir, source) = source();
        let args = ContractorArgs {
            person_type: Some("empresa".into()),
            ..ContractorArgs::default()
        };

        let mut out = Vec::new();
        handle_contractors_command(&source, &Settings::default(), args, &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();

        assert!(output.contains("Constructora Andes"));
        assert!(!output.contains("Juan Pérez"));
        assert!(output.contains("Specialties: Electricidad, Obra gruesa"));
        assert!(output.contains("(filters active)"));
    }

    #[test]
    fn test_json_output() {
        let (_temp_dir, source) = source();
        let mut args = ContractorArgs::default();
        args.list.format = OutputFormat::Json;
        args.list.sort = Some("code".into());
        args.list.desc = true;

        let mut out = Vec::new();
        handle_contractors_command(&source, &Settings::default(), args, &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(value["count"], 2);
        assert_eq!(value["items"][0]["code"], "CTR-002");
        assert_eq!(value["stats"]["byStatus"]["Inactivo"], 1);
        assert_eq!(value["stats"]["byType"]["empresa"], 1);
    }

    #[test]
    fn test_invalid_status() {
        let (_temp_dir, source) = source();
        let args = ContractorArgs {
            status: Some("retirado".into()),
            ..ContractorArgs::default()
        };
        let mut out = Vec::new();
        let err = handle_contractors_command(&source, &Settings::default(), args, &mut out).unwrap_err();
        assert!(err.to_string().contains("retirado"));
    }
}
