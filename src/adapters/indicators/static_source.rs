//! Static Indicator Source - serves a table that is already in memory.
//!
//! Used by tests and by embedders that build the table themselves.

use async_trait::async_trait;

use crate::domain::impact::ReferenceTable;
use crate::ports::{IndicatorSource, IndicatorSourceError};

/// Indicator source returning a fixed table.
#[derive(Debug, Clone)]
pub struct StaticIndicatorSource {
    table: ReferenceTable,
}

impl StaticIndicatorSource {
    pub fn new(table: ReferenceTable) -> Self {
        Self { table }
    }
}

#[async_trait]
impl IndicatorSource for StaticIndicatorSource {
    async fn load_table(&self) -> Result<ReferenceTable, IndicatorSourceError> {
        Ok(self.table.clone())
    }

    fn describe(&self) -> String {
        "static".to_string()
    }
}
