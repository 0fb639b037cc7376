use crate::CounterRecord;
use std::collections::BTreeMap;

pub type ArchGroups = BTreeMap<String, Vec<CounterRecord>>;
pub type RepositoryGroups = BTreeMap<String, ArchGroups>;
pub type PackageGroups = BTreeMap<String, RepositoryGroups>;
pub type ProjectGroups = BTreeMap<String, PackageGroups>;

/// Counter records grouped into the four-level hierarchy
/// project -> package -> repository -> arch.
///
/// Every level is a BTreeMap, so iteration (and therefore the serialized
/// output) is in ascending lexical order of the keys. Records at a leaf
/// keep their input order; duplicates stay distinct entries.
#[derive(Debug, Default)]
pub struct StatsTree {
    pub(crate) projects: ProjectGroups,
}

impl StatsTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Group a flat row set. No record is dropped or merged.
    pub fn from_records(records: impl IntoIterator<Item = CounterRecord>) -> Self {
        let mut tree = Self::new();
        for record in records {
            tree.insert(record);
        }
        tree
    }

    pub fn insert(&mut self, record: CounterRecord) {
        self.projects
            .entry(record.project.clone())
            .or_default()
            .entry(record.package.clone())
            .or_default()
            .entry(record.repository.clone())
            .or_default()
            .entry(record.arch.clone())
            .or_default()
            .push(record);
    }

    /// Total number of records in the tree; equals the input row count.
    pub fn record_count(&self) -> usize {
        self.projects
            .values()
            .flat_map(|packages| packages.values())
            .flat_map(|repos| repos.values())
            .flat_map(|arches| arches.values())
            .map(|records| records.len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn projects(&self) -> &ProjectGroups {
        &self.projects
    }
}
