use crate::error::{Error, Result};
use crate::models::{EntityId, Record};

use super::Merge;

/// Insertion-ordered records of one kind plus the id counter for new ones.
///
/// Ids come from a counter that only moves forward, so removing a record can
/// never cause a later create to reuse its id.
#[derive(Debug, Clone)]
pub struct Collection<T> {
    items: Vec<T>,
    next_id: EntityId,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }
}

impl<T: Record> Collection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn next_id(&self) -> EntityId {
        self.next_id
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Assigns the next id and appends. Always succeeds.
    pub fn insert(&mut self, mut record: T) -> T {
        let id = self.next_id;
        self.next_id += 1;
        record.assign_id(id);
        self.items.push(record.clone());
        record
    }

    /// Appends a record that already carries an id.
    pub fn restore(&mut self, record: T) {
        self.next_id = self.next_id.max(record.id() + 1);
        match self.position(record.id()) {
            Some(index) => self.items[index] = record,
            None => self.items.push(record),
        }
    }

    pub fn get(&self, id: EntityId) -> Result<&T> {
        self.items
            .iter()
            .find(|record| record.id() == id)
            .ok_or_else(|| Error::not_found(T::KIND, id))
    }

    pub fn update<P: Merge<T>>(&mut self, id: EntityId, patch: P) -> Result<T> {
        self.mutate(id, |record| patch.merge_into(record))
    }

    /// Runs `f` on the record; the id is restored afterwards so it can't change.
    pub fn mutate<F>(&mut self, id: EntityId, f: F) -> Result<T>
    where
        F: FnOnce(&mut T),
    {
        let index = self
            .position(id)
            .ok_or_else(|| Error::not_found(T::KIND, id))?;
        let record = &mut self.items[index];
        f(record);
        record.assign_id(id);
        Ok(record.clone())
    }

    pub fn list<F>(&self, predicate: F) -> Vec<T>
    where
        F: Fn(&T) -> bool,
    {
        self.items.iter().filter(|record| predicate(record)).cloned().collect()
    }

    pub fn remove(&mut self, id: EntityId) -> Result<T> {
        let index = self
            .position(id)
            .ok_or_else(|| Error::not_found(T::KIND, id))?;
        Ok(self.items.remove(index))
    }

    fn position(&self, id: EntityId) -> Option<usize> {
        self.items.iter().position(|record| record.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::job_dto::{CreateJobPayload, JobPatch};
    use crate::models::job::{Job, JobStatus};

    fn job(title: &str) -> Job {
        CreateJobPayload {
            title: title.into(),
            department: "Engineering".into(),
            location: "Remote".into(),
            description: format!("{} role", title),
            ..Default::default()
        }
        .into_job()
    }

    #[test]
    fn insert_assigns_length_plus_one_on_contiguous_ids() {
        let mut jobs = Collection::new();
        for n in 0..3 {
            let stored = jobs.insert(job(&format!("Job {}", n)));
            assert_eq!(stored.id, jobs.len() as u64);
        }
    }

    #[test]
    fn ids_are_not_reused_after_removal() {
        let mut jobs = Collection::new();
        jobs.insert(job("A"));
        let b = jobs.insert(job("B"));
        jobs.remove(b.id).unwrap();
        let c = jobs.insert(job("C"));
        assert_eq!(c.id, 3);
    }

    #[test]
    fn update_merges_supplied_fields_only() {
        let mut jobs = Collection::new();
        let stored = jobs.insert(job("Backend"));
        let updated = jobs
            .update(
                stored.id,
                JobPatch {
                    status: Some(JobStatus::Closed),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.status, JobStatus::Closed);
        assert_eq!(updated.title, "Backend");
        assert_eq!(jobs.get(stored.id).unwrap(), &updated);
    }

    #[test]
    fn update_on_missing_id_leaves_store_unchanged() {
        let mut jobs = Collection::new();
        jobs.insert(job("Backend"));
        let before = jobs.as_slice().to_vec();
        let err = jobs.update(42, JobPatch::archive()).unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
        assert_eq!(jobs.as_slice(), before.as_slice());
    }

    #[test]
    fn restore_moves_counter_past_existing_ids() {
        let mut jobs = Collection::new();
        let mut seeded = job("Seeded");
        seeded.id = 10;
        jobs.restore(seeded);
        assert_eq!(jobs.next_id(), 11);
        assert_eq!(jobs.insert(job("Next")).id, 11);
    }

    #[test]
    fn list_preserves_insertion_order() {
        let mut jobs = Collection::new();
        for title in ["C", "A", "B"] {
            jobs.insert(job(title));
        }
        let titles: Vec<_> = jobs.list(|_| true).into_iter().map(|j| j.title).collect();
        assert_eq!(titles, ["C", "A", "B"]);
    }
}
