//! End-to-end tests for the species-id command

use crate::helpers::{write_species_list, MIXED_SPECIES_LIST};
use species_tools::algorithm::species_id::{self, SpeciesIdArgs};
use species_tools::config::Spacer;
use species_tools::report::species_lists::{
    ASSIGNED_FILE, DUPLICATED_FILE, MALFORMED_FILE, UNASSIGNABLE_FILE,
};
use std::fs;
use std::path::Path;

fn args_for(input: &Path, output_dir: &Path) -> SpeciesIdArgs {
    SpeciesIdArgs {
        input: input.to_path_buf(),
        allow_duplicates: false,
        spacer: Spacer::default(),
        output_dir: output_dir.to_path_buf(),
        prefix: None,
    }
}

#[test]
fn test_run_writes_all_outputs() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_species_list(dir.path(), "species.ls", MIXED_SPECIES_LIST);
    let out = dir.path().join("results").join("ids");

    species_id::run(args_for(&input, &out)).unwrap();

    assert_eq!(
        fs::read_to_string(out.join(ASSIGNED_FILE)).unwrap(),
        "Drosophila melanogaster\tDmel\n\
         Drosophila melanogaster\tDmea\n\
         Tridacna squamosa\tTsqu\n\
         Drosophila (Sophophora) simulans\tDsim\n"
    );
    assert_eq!(
        fs::read_to_string(out.join(DUPLICATED_FILE)).unwrap(),
        "Drosophila melanogaster\n"
    );
    assert_eq!(fs::read_to_string(out.join(UNASSIGNABLE_FILE)).unwrap(), "X\n");
    assert_eq!(
        fs::read_to_string(out.join(MALFORMED_FILE)).unwrap(),
        "7\tPan tr\tepithet token 'tr' has fewer than 3 characters\n"
    );
}

#[test]
fn test_run_allow_duplicates_with_prefix() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_species_list(
        dir.path(),
        "species.ls",
        "Drosophila_melanogaster\nDrosophila_melanogaster\n",
    );
    let args = SpeciesIdArgs {
        allow_duplicates: true,
        spacer: Spacer('_'),
        prefix: Some("flies_".to_string()),
        ..args_for(&input, dir.path())
    };

    species_id::run(args).unwrap();

    assert_eq!(
        fs::read_to_string(dir.path().join("flies_species_ids_OUT.tsv")).unwrap(),
        "Drosophila melanogaster\tDmel\nDrosophila melanogaster\tDmel\n"
    );
    assert!(!dir.path().join("flies_duplicated_species_OUT.ls").exists());
    assert!(!dir.path().join("flies_problematic_species_OUT.ls").exists());
}

#[test]
fn test_run_missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.ls");
    let err = species_id::run(args_for(&missing, dir.path())).unwrap_err();
    assert!(err.to_string().contains("missing.ls"));
}

#[test]
fn test_run_empty_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_species_list(dir.path(), "empty.ls", "\n\n");
    assert!(species_id::run(args_for(&input, dir.path())).is_err());
    assert!(!dir.path().join(ASSIGNED_FILE).exists());
}

#[test]
fn test_run_reports_invalid_utf8_line_as_malformed() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("latin1.ls");
    fs::write(&input, b"Homo sapiens\nEliurus \xe9konomus\nPan troglodytes\n").unwrap();

    species_id::run(args_for(&input, dir.path())).unwrap();

    assert_eq!(
        fs::read_to_string(dir.path().join(ASSIGNED_FILE)).unwrap(),
        "Homo sapiens\tHsap\nPan troglodytes\tPtro\n"
    );
    let malformed = fs::read_to_string(dir.path().join(MALFORMED_FILE)).unwrap();
    assert!(malformed.starts_with("2\tEliurus \u{FFFD}konomus\t"));
    assert!(malformed.contains("not valid UTF-8"));
}

#[test]
fn test_run_tab_in_name_keeps_two_columns() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_species_list(dir.path(), "species.ls", "Homo\tx,sapiens\n");
    let args = SpeciesIdArgs {
        spacer: Spacer(','),
        ..args_for(&input, dir.path())
    };

    species_id::run(args).unwrap();

    let assigned = fs::read_to_string(dir.path().join(ASSIGNED_FILE)).unwrap();
    assert_eq!(assigned, "Homo\\tx sapiens\tHsap\n");
    assert_eq!(assigned.trim_end().split('\t').count(), 2);
}
