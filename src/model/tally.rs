use crate::model::Table;

/// Status counts for the proposal audit, kept in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProposalTally {
    counts: Vec<(String, u64)>,
}

impl ProposalTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one more proposal with the given declared status
    pub fn record(&mut self, status: &str) {
        match self.counts.iter_mut().find(|(seen, _)| seen == status) {
            Some((_, count)) => *count += 1,
            None => self.counts.push((status.to_string(), 1)),
        }
    }

    pub fn count(&self, status: &str) -> u64 {
        self.counts
            .iter()
            .find(|(seen, _)| seen == status)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().map(|(_, count)| count).sum()
    }

    pub fn entries(&self) -> &[(String, u64)] {
        &self.counts
    }

    /// Renders `(Status, Count)` rows followed by a `(Total, sum)` row
    pub fn to_table(&self) -> Table {
        let mut table = Table::new(["Status", "Count"]);
        for (status, count) in &self.counts {
            // Width always matches the two-column header
            let _ = table.push(vec![status.clone(), count.to_string()]);
        }
        let _ = table.push(vec!["Total".to_string(), self.total().to_string()]);
        table
    }
}
