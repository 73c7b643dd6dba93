//! Typed report storage wrapper.

use anyhow::Result;
use braincache_models::Report;
use braincache_storage::ReportStorage as RawStorage;

#[derive(Clone)]
pub struct ReportStorage {
    inner: RawStorage,
}

impl ReportStorage {
    pub fn new(inner: RawStorage) -> Self {
        Self { inner }
    }

    /// Create or update a report record.
    pub fn put(&self, report: &Report) -> Result<()> {
        let data = serde_json::to_vec(report)?;
        self.inner.put_raw(&report.id, &data)
    }

    pub fn get(&self, id: &str) -> Result<Option<Report>> {
        let Some(data) = self.inner.get_raw(id)? else {
            return Ok(None);
        };
        Ok(Some(serde_json::from_slice(&data)?))
    }

    /// Every report, newest first. Visibility filtering happens in the
    /// service layer, which knows who owns the reported content.
    pub fn list_all(&self) -> Result<Vec<Report>> {
        let mut reports = Vec::new();
        for (_, data) in self.inner.list_raw()? {
            reports.push(serde_json::from_slice::<Report>(&data)?);
        }
        reports.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(reports)
    }
}
