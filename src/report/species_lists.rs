use std::borrow::Cow;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::algorithm::species_id::{AssignedSpecies, BatchResult, MalformedEntry};

// =============================================================================
// Output file names
// =============================================================================

/// `name<TAB>id` for every species that received an identifier
pub const ASSIGNED_FILE: &str = "species_ids_OUT.tsv";
/// Species whose primary id collided, one per line
pub const DUPLICATED_FILE: &str = "duplicated_species_OUT.ls";
/// Single-word names, one per line
pub const UNASSIGNABLE_FILE: &str = "problematic_species_OUT.ls";
/// `line<TAB>name<TAB>reason` for names that could not produce an id
pub const MALFORMED_FILE: &str = "malformed_species_OUT.tsv";

/// Where the output files of one run go.
#[derive(Debug, Clone)]
pub struct OutputLayout {
    pub dir: PathBuf,
    /// Prepended to every file name
    pub prefix: Option<String>,
}

impl OutputLayout {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            prefix: None,
        }
    }

    pub fn with_prefix(mut self, prefix: Option<String>) -> Self {
        self.prefix = prefix;
        self
    }

    pub fn path_for(&self, file_name: &str) -> PathBuf {
        match &self.prefix {
            Some(prefix) => self.dir.join(format!("{}{}", prefix, file_name)),
            None => self.dir.join(file_name),
        }
    }
}

/// Files written by [`write_batch`], `None` when the bucket was empty and the
/// file was not created.
#[derive(Debug, Clone, Default)]
pub struct WrittenFiles {
    pub assigned: PathBuf,
    pub duplicated: Option<PathBuf>,
    pub unassignable: Option<PathBuf>,
    pub malformed: Option<PathBuf>,
}

// =============================================================================
// Writers
// =============================================================================

/// Escapes the characters that would break a TSV row. A tab spacer keeps
/// names free of tabs, but other spacers pass them through as token content.
fn tsv_field(value: &str) -> Cow<'_, str> {
    if value.contains(['\t', '\r', '\n']) {
        Cow::Owned(
            value
                .replace('\t', "\\t")
                .replace('\r', "\\r")
                .replace('\n', "\\n"),
        )
    } else {
        Cow::Borrowed(value)
    }
}

pub fn write_assigned<W: Write>(writer: &mut W, assigned: &[AssignedSpecies]) -> io::Result<()> {
    for species in assigned {
        writeln!(writer, "{}\t{}", tsv_field(&species.name), species.id)?;
    }
    Ok(())
}

pub fn write_name_list<'a, W, I>(writer: &mut W, names: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a str>,
{
    for name in names {
        writeln!(writer, "{}", name)?;
    }
    Ok(())
}

pub fn write_malformed<W: Write>(writer: &mut W, malformed: &[MalformedEntry]) -> io::Result<()> {
    for entry in malformed {
        writeln!(
            writer,
            "{}\t{}\t{}",
            entry.line_number,
            tsv_field(&entry.name),
            tsv_field(&entry.reason.to_string())
        )?;
    }
    Ok(())
}

fn write_file<F>(path: &Path, body: F) -> io::Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> io::Result<()>,
{
    let mut writer = BufWriter::new(File::create(path)?);
    body(&mut writer)?;
    writer.flush()
}

/// Persists every bucket of `result` under `layout`.
///
/// The assigned table is always written, even if empty; the other lists only
/// when they have entries.
pub fn write_batch(result: &BatchResult, layout: &OutputLayout) -> io::Result<WrittenFiles> {
    let mut written = WrittenFiles {
        assigned: layout.path_for(ASSIGNED_FILE),
        ..Default::default()
    };
    write_file(&written.assigned, |w| write_assigned(w, &result.assigned))?;

    if !result.duplicated.is_empty() {
        let path = layout.path_for(DUPLICATED_FILE);
        write_file(&path, |w| write_name_list(w, result.duplicated_names()))?;
        written.duplicated = Some(path);
    }

    if !result.unassignable.is_empty() {
        let path = layout.path_for(UNASSIGNABLE_FILE);
        write_file(&path, |w| {
            write_name_list(w, result.unassignable.iter().map(String::as_str))
        })?;
        written.unassignable = Some(path);
    }

    if !result.malformed.is_empty() {
        let path = layout.path_for(MALFORMED_FILE);
        write_file(&path, |w| write_malformed(w, &result.malformed))?;
        written.malformed = Some(path);
    }

    Ok(written)
}
