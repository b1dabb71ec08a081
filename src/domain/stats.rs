use crate::domain::model::{ReviewDocument, ReviewStatus};
use serde::Serialize;

/// Progress counters shown on the review app dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewStats {
    pub total_groups: usize,
    pub pending_review: usize,
    pub approved: usize,
    pub rejected: usize,
    pub total_products: i64,
    pub grouped_products: u64,
    /// Percentage of `total_products` that ended up in a group.
    pub grouping_rate: f64,
}

impl ReviewStats {
    pub fn from_document(document: &ReviewDocument) -> Self {
        let groups = &document.groups;
        let count = |status: ReviewStatus| {
            groups
                .iter()
                .filter(|g| g.review_status == status)
                .count()
        };

        let grouped_products: u64 = groups.iter().map(|g| g.variant_total()).sum();
        let total_products = document.metadata.total_products_count();
        let grouping_rate = if total_products > 0 {
            grouped_products as f64 / total_products as f64 * 100.0
        } else {
            0.0
        };

        Self {
            total_groups: groups.len(),
            pending_review: count(ReviewStatus::Pending),
            approved: count(ReviewStatus::Approved),
            rejected: count(ReviewStatus::Rejected),
            total_products,
            grouped_products,
            grouping_rate,
        }
    }

    pub fn reviewed(&self) -> usize {
        self.approved + self.rejected
    }
}
