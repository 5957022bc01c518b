//! File classification by role and data type.

use crate::feed::{DataType, FileRecord, FileRole};

/// Returns every file with the given role and data type, in input order.
pub fn classify(files: &[FileRecord], role: FileRole, data_type: DataType) -> Vec<&FileRecord> {
    files
        .iter()
        .filter(|file| file.role == role && file.data_type == data_type)
        .collect()
}

/// Concatenates buckets in order, skipping records already taken.
fn concat<'a>(buckets: impl IntoIterator<Item = Vec<&'a FileRecord>>) -> Vec<&'a FileRecord> {
    let mut out: Vec<&FileRecord> = Vec::new();
    for file in buckets.into_iter().flatten() {
        if !out.iter().any(|taken| std::ptr::eq(*taken, file)) {
            out.push(file);
        }
    }
    out
}

/// The fixed file groups shown on a cruise page.
#[derive(Debug, Default)]
pub struct FileGroups<'a> {
    /// Processed NetCDF dataset plus ancillary profiler and chipod files.
    pub dataset: Vec<&'a FileRecord>,
    /// Cruise reports and other documentation.
    pub reports: Vec<&'a FileRecord>,
    pub unprocessed: Vec<&'a FileRecord>,
    pub intermediate: Vec<&'a FileRecord>,
    pub raw: Vec<&'a FileRecord>,
}

impl<'a> FileGroups<'a> {
    pub fn from_files(files: &'a [FileRecord]) -> Self {
        Self {
            dataset: concat([
                classify(files, FileRole::Dataset, DataType::Hrp),
                classify(files, FileRole::Ancillary, DataType::Hrp),
                classify(files, FileRole::Ancillary, DataType::Chipod),
            ]),
            reports: classify(files, FileRole::Dataset, DataType::Documentation),
            unprocessed: classify(files, FileRole::Unprocessed, DataType::Hrp),
            intermediate: classify(files, FileRole::Intermediate, DataType::Hrp),
            raw: concat([
                classify(files, FileRole::Raw, DataType::Hrp),
                classify(files, FileRole::Raw, DataType::Chipod),
            ]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, role: FileRole, data_type: DataType) -> FileRecord {
        FileRecord {
            file_name: name.to_string(),
            file_hash: format!("hash-{}", name),
            role,
            data_type,
            file_path: format!("/data/{}", name),
        }
    }

    fn names(files: &[&FileRecord]) -> Vec<String> {
        files.iter().map(|f| f.file_name.clone()).collect()
    }

    fn sample_files() -> Vec<FileRecord> {
        vec![
            file("chipod_anc.nc", FileRole::Ancillary, DataType::Chipod),
            file("hrp_1.nc", FileRole::Dataset, DataType::Hrp),
            file("report.pdf", FileRole::Dataset, DataType::Documentation),
            file("hrp_anc.nc", FileRole::Ancillary, DataType::Hrp),
            file("raw_chipod.tar", FileRole::Raw, DataType::Chipod),
            file("hrp_2.nc", FileRole::Dataset, DataType::Hrp),
            file("raw_hrp.tar", FileRole::Raw, DataType::Hrp),
            file("stray.bin", FileRole::Other, DataType::Hrp),
            file("odd.doc", FileRole::Raw, DataType::Documentation),
        ]
    }

    #[test]
    fn test_classify_is_closed_under_predicate_and_ordered() {
        let files = sample_files();
        let matched = classify(&files, FileRole::Dataset, DataType::Hrp);

        assert!(matched
            .iter()
            .all(|f| f.role == FileRole::Dataset && f.data_type == DataType::Hrp));
        assert_eq!(
            matched.len(),
            files
                .iter()
                .filter(|f| f.role == FileRole::Dataset && f.data_type == DataType::Hrp)
                .count()
        );
        assert_eq!(names(&matched), vec!["hrp_1.nc", "hrp_2.nc"]);
    }

    #[test]
    fn test_groups_concatenate_in_fixed_order() {
        let files = sample_files();
        let groups = FileGroups::from_files(&files);

        assert_eq!(
            names(&groups.dataset),
            vec!["hrp_1.nc", "hrp_2.nc", "hrp_anc.nc", "chipod_anc.nc"]
        );
        assert_eq!(names(&groups.reports), vec!["report.pdf"]);
        assert_eq!(names(&groups.raw), vec!["raw_hrp.tar", "raw_chipod.tar"]);
        assert!(groups.unprocessed.is_empty());
        assert!(groups.intermediate.is_empty());
    }

    #[test]
    fn test_unrecognized_combinations_are_dropped() {
        let files = sample_files();
        let groups = FileGroups::from_files(&files);
        let shown: Vec<&FileRecord> = groups
            .dataset
            .iter()
            .chain(&groups.reports)
            .chain(&groups.unprocessed)
            .chain(&groups.intermediate)
            .chain(&groups.raw)
            .copied()
            .collect();

        assert!(!shown.iter().any(|f| f.file_name == "stray.bin"));
        assert!(!shown.iter().any(|f| f.file_name == "odd.doc"));
        assert_eq!(shown.len(), 7);
    }

    #[test]
    fn test_concat_never_repeats_a_record() {
        let files = sample_files();
        let hrp = classify(&files, FileRole::Dataset, DataType::Hrp);
        let merged = concat([hrp.clone(), hrp]);

        assert_eq!(names(&merged), vec!["hrp_1.nc", "hrp_2.nc"]);
    }

    #[test]
    fn test_empty_file_list_yields_empty_groups() {
        let groups = FileGroups::from_files(&[]);
        assert!(groups.dataset.is_empty());
        assert!(groups.reports.is_empty());
        assert!(groups.unprocessed.is_empty());
        assert!(groups.intermediate.is_empty());
        assert!(groups.raw.is_empty());
    }
}
