use crate::errors::ResumeError;
use crate::layout::{DocumentPlan, Row};
use crate::render::DocumentBuilder;

/// Keeps every row it is given. `finish` yields the plan as pretty JSON.
#[derive(Debug, Default)]
pub struct RecordingBuilder {
    rows: Vec<Row>,
}

impl RecordingBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn into_plan(self) -> DocumentPlan {
        DocumentPlan { rows: self.rows }
    }
}

impl DocumentBuilder for RecordingBuilder {
    fn add_row(&mut self, row: &Row) -> Result<(), ResumeError> {
        self.rows.push(row.clone());
        Ok(())
    }

    fn finish(self) -> Result<Vec<u8>, ResumeError> {
        serde_json::to_vec_pretty(&self.into_plan())
            .map_err(|e| ResumeError::Render(format!("Failed to serialize layout plan: {e}")))
    }
}
